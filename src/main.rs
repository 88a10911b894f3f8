mod app;
mod config;
mod form;
mod strength;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, BufRead};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Popup};
use strength::{color_for, label_for, StrengthEstimator, ZxcvbnEstimator};

#[derive(Parser, Debug)]
#[command(name = "tsuyosa")]
#[command(version = "0.1.0")]
#[command(about = "A terminal-friendly password strength checker")]
struct Args {
    /// Score a password once and print JSON (argv is visible to other
    /// processes; prefer --stdin)
    #[arg(short, long, value_name = "PASSWORD")]
    score: Option<String>,

    /// Read the password to score from the first line of stdin
    #[arg(long)]
    stdin: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Handle CLI-only commands
    if args.stdin {
        return score_from_stdin();
    }

    if let Some(password) = args.score {
        return print_score(&password);
    }

    // Run TUI
    run_tui()
}

/// Score one password and emit machine-readable JSON
fn print_score(password: &str) -> Result<()> {
    let estimate = ZxcvbnEstimator.estimate(password);

    let output = serde_json::json!({
        "score": estimate.score,
        "label": label_for(estimate.score),
        "color": color_for(estimate.score).as_str(),
        "guesses": estimate.guesses,
    });

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn score_from_stdin() -> Result<()> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']);
    print_score(password)
}

fn run_tui() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new()?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc if app.popup == Popup::None => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        _ => {
                            if let Err(e) = app.handle_key(key) {
                                app.status_message = Some(format!("Error: {}", e));
                            }
                        }
                    }
                }
            }
        }

        app.tick();
    }
}
