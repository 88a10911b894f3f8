mod components;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};
use std::sync::OnceLock;

use crate::app::{App, Popup};
use crate::theme::Theme;

// Load theme colors from system (Omarchy/Hyprland) once at startup
static THEME: OnceLock<Theme> = OnceLock::new();

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

fn accent() -> Color {
    theme().accent
}
fn inactive() -> Color {
    theme().inactive
}
fn warning() -> Color {
    theme().warning
}
fn text() -> Color {
    theme().text
}
fn text_dim() -> Color {
    theme().text_dim
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info line
            Constraint::Length(3), // Password input box
            Constraint::Length(6), // Strength box
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_info_line(f, app, chunks[0]);
    draw_input_box(f, app, chunks[1]);
    draw_strength_box(f, app, chunks[2]);
    draw_footer(f, chunks[4]);

    if app.popup == Popup::Help {
        draw_help_popup(f);
    }
}

fn draw_info_line(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(ref status) = app.status_message {
        Line::from(Span::styled(status, Style::default().fg(warning())))
    } else {
        Line::from(Span::styled(
            "Type a password to check its strength",
            Style::default().fg(text_dim()),
        ))
    };

    let info = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(info, area);
}

fn draw_input_box(f: &mut Frame, app: &App, area: Rect) {
    let value = app.input_value();
    let shown = if app.revealed {
        value.to_string()
    } else {
        components::mask(value)
    };

    let title = if app.revealed {
        " Password (revealed) "
    } else {
        " Password "
    };

    let input = Paragraph::new(Line::from(vec![
        Span::styled(shown, Style::default().fg(text())),
        Span::styled("_", Style::default().fg(accent())),
    ]))
    .block(
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(accent()).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent())),
    );

    f.render_widget(input, area);
}

fn draw_strength_box(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Strength ", Style::default().fg(inactive())))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(inactive()));

    if !app.attached() {
        // The indicator never attached; nothing to show (the warning already
        // went to the log)
        let placeholder = Paragraph::new("Strength feedback unavailable")
            .style(Style::default().fg(text_dim()))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Label
            Constraint::Length(1), // Guesses
        ])
        .split(inner);

    let meter = app.meter_value();
    let label = app.strength_label();

    let gauge_color = label
        .and_then(|l| l.color)
        .map(|c| theme().score_color(c))
        .unwrap_or_else(inactive);

    let gauge_label = match meter {
        Some(v) => format!("{}/5", v),
        None => String::new(),
    };

    let gauge = Gauge::default()
        .ratio(components::meter_ratio(meter))
        .gauge_style(Style::default().fg(gauge_color))
        .label(Span::styled(gauge_label, Style::default().fg(text())));
    f.render_widget(gauge, rows[0]);

    if let Some(label) = label {
        let styled = Span::styled(
            label.text.clone(),
            Style::default().fg(
                label
                    .color
                    .map(|c| theme().score_color(c))
                    .unwrap_or_else(text_dim),
            ),
        );
        f.render_widget(Paragraph::new(Line::from(styled)), rows[1]);
    }

    if let Some(estimate) = app.last_estimate {
        let guesses = Paragraph::new(Line::from(Span::styled(
            format!("≈ {} guesses to crack", components::format_guesses(estimate.guesses)),
            Style::default().fg(text_dim()),
        )));
        f.render_widget(guesses, rows[2]);
    }
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let hints: [(&str, &str); 4] = [
        ("Tab", "Reveal"),
        ("Ctrl+U", "Clear"),
        ("F1", "Help"),
        ("Esc", "Quit"),
    ];

    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(accent())),
                Span::styled(format!(" {} │ ", action), Style::default().fg(text_dim())),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_help_popup(f: &mut Frame) {
    let popup_area = centered_rect(60, 60, f.area());

    f.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            "═══ Keys ═══",
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  Type      ", Style::default().fg(accent())),
            Span::raw("Any printable key goes into the password"),
        ]),
        Line::from(vec![
            Span::styled("  Backspace ", Style::default().fg(accent())),
            Span::raw("Delete the last character"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+U    ", Style::default().fg(accent())),
            Span::raw("Clear the input"),
        ]),
        Line::from(vec![
            Span::styled("  Tab       ", Style::default().fg(accent())),
            Span::raw("Toggle reveal/mask"),
        ]),
        Line::from(vec![
            Span::styled("  Esc       ", Style::default().fg(accent())),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Scoring ═══",
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        )),
        Line::from("  Strength is estimated with zxcvbn: 0-4, shown as a"),
        Line::from("  1-5 meter. Red = weak, orange = so-so, green = strong."),
        Line::from("  Nothing you type leaves the terminal."),
        Line::from(""),
        Line::from(Span::styled(
            "═══ CLI ═══",
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  tsuyosa --stdin   ", Style::default().fg(accent())),
            Span::raw("Score a password from stdin as JSON"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(text_dim())),
            Span::styled("Esc", Style::default().fg(accent())),
            Span::styled(" to close", Style::default().fg(text_dim())),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" tsuyosa Help ", Style::default().fg(accent())))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
