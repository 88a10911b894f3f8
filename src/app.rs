use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::config::AppConfig;
use crate::form::{Form, Label};
use crate::strength::{Estimate, StrengthIndicator, ZxcvbnEstimator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

pub struct App {
    pub popup: Popup,

    // Page state: the form elements and the indicator wired to them
    pub form: Form,
    pub indicator: Option<StrengthIndicator>,
    estimator: ZxcvbnEstimator,

    // Auxiliary data from the last non-empty scoring
    pub last_estimate: Option<Estimate>,

    // Show the typed password instead of mask bullets
    pub revealed: bool,

    // Status message (shown in info line, auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,

    pub config: AppConfig,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = AppConfig::load().unwrap_or_default();
        Ok(Self::with_config(config))
    }

    /// Build the form from config and try to attach the indicator. A failed
    /// attach logs one warning and leaves the indicator off for the whole
    /// session; the UI degrades to a plain input.
    pub fn with_config(config: AppConfig) -> Self {
        let mut form = Form::new();
        if let Some(id) = config.input_candidates.first() {
            form.add_input(id.clone());
        }
        form.add_meter(config.meter_id.clone());
        form.add_label(config.label_id.clone());

        let indicator = match StrengthIndicator::attach(&form, &config.indicator()) {
            Ok(indicator) => Some(indicator),
            Err(e) => {
                tracing::warn!("Password strength indicator is not working.");
                tracing::debug!("attach failed: {}", e);
                None
            }
        };

        Self {
            popup: Popup::None,
            form,
            indicator,
            estimator: ZxcvbnEstimator,
            last_estimate: None,
            revealed: config.reveal_input,
            status_message: None,
            status_message_time: None,
            config,
        }
    }

    /// Set a status message (auto-clears after 3 seconds)
    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    pub fn attached(&self) -> bool {
        self.indicator.is_some()
    }

    /// Current value of the observed input, empty when the form has none.
    pub fn input_value(&self) -> &str {
        self.resolved_input_id()
            .and_then(|id| self.form.input(id))
            .map(|i| i.value.as_str())
            .unwrap_or("")
    }

    pub fn meter_value(&self) -> Option<u8> {
        self.form.meter(&self.config.meter_id).and_then(|m| m.value)
    }

    pub fn strength_label(&self) -> Option<&Label> {
        self.form.label(&self.config.label_id)
    }

    fn resolved_input_id(&self) -> Option<&str> {
        self.indicator
            .as_ref()
            .map(|i| i.input_id())
            .or_else(|| self.config.input_candidates.first().map(|s| s.as_str()))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.popup == Popup::Help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::F(1)) {
                self.popup = Popup::None;
            }
            return Ok(());
        }

        match key.code {
            // Clear the whole input
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_input(|value| value.clear());
                self.set_status("Cleared");
            }

            // Every printable key is part of the password, so the toggles
            // live on non-printing keys
            KeyCode::Tab => {
                self.revealed = !self.revealed;
                self.set_status(if self.revealed {
                    "Password revealed"
                } else {
                    "Password hidden"
                });
            }
            KeyCode::F(1) => self.popup = Popup::Help,

            KeyCode::Backspace => {
                self.edit_input(|value| {
                    value.pop();
                });
            }
            KeyCode::Char(c) => {
                self.edit_input(|value| value.push(c));
            }

            _ => {}
        }
        Ok(())
    }

    /// Apply an edit to the input element, then re-render strength feedback.
    fn edit_input(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(id) = self.resolved_input_id().map(str::to_string) else {
            return;
        };
        if let Some(input) = self.form.input_mut(&id) {
            edit(&mut input.value);
        }
        self.refresh_indicator();
    }

    /// One input-change notification: runs synchronously to completion.
    fn refresh_indicator(&mut self) {
        if let Some(indicator) = &self.indicator {
            self.last_estimate = indicator.refresh(&mut self.form, &self.estimator);
        }
    }

    pub fn tick(&mut self) {
        // Clear status message after 3 seconds
        if let Some(time) = self.status_message_time {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::ScoreColor;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn attaches_with_default_config() {
        let app = App::with_config(AppConfig::default());
        assert!(app.attached());
        assert_eq!(app.meter_value(), None);
        assert_eq!(app.strength_label().unwrap().text, "");
    }

    #[test]
    fn does_not_attach_without_input_candidates() {
        let config = AppConfig {
            input_candidates: vec![],
            ..AppConfig::default()
        };
        let app = App::with_config(config);
        assert!(!app.attached());
    }

    #[test]
    fn typing_updates_meter_and_label() {
        let mut app = App::with_config(AppConfig::default());

        app.handle_key(key(KeyCode::Char('a'))).unwrap();

        assert_eq!(app.input_value(), "a");
        // zxcvbn scores a single letter 0
        assert_eq!(app.meter_value(), Some(1));
        let label = app.strength_label().unwrap();
        assert_eq!(label.text, "Password Strength: Very Weak");
        assert_eq!(label.color, Some(ScoreColor::Red));
        assert!(app.last_estimate.is_some());
    }

    #[test]
    fn backspace_to_empty_resets_feedback() {
        let mut app = App::with_config(AppConfig::default());

        app.handle_key(key(KeyCode::Char('a'))).unwrap();
        app.handle_key(key(KeyCode::Backspace)).unwrap();

        assert_eq!(app.input_value(), "");
        assert_eq!(app.meter_value(), None);
        assert_eq!(app.strength_label().unwrap().text, "");
        assert!(app.last_estimate.is_none());
    }

    #[test]
    fn ctrl_u_clears_input() {
        let mut app = App::with_config(AppConfig::default());

        for c in "hunter2".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.input_value(), "hunter2");

        app.handle_key(ctrl('u')).unwrap();
        assert_eq!(app.input_value(), "");
        assert_eq!(app.meter_value(), None);
    }

    #[test]
    fn tab_toggles_reveal() {
        let mut app = App::with_config(AppConfig::default());
        assert!(!app.revealed);
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert!(app.revealed);
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert!(!app.revealed);
    }

    #[test]
    fn typing_is_inert_when_unattached() {
        let config = AppConfig {
            input_candidates: vec![],
            ..AppConfig::default()
        };
        let mut app = App::with_config(config);

        app.handle_key(key(KeyCode::Char('a'))).unwrap();

        assert_eq!(app.input_value(), "");
        assert_eq!(app.meter_value(), None);
    }

    #[test]
    fn help_popup_opens_and_closes() {
        let mut app = App::with_config(AppConfig::default());
        app.handle_key(key(KeyCode::F(1))).unwrap();
        assert_eq!(app.popup, Popup::Help);

        // Keys are swallowed while the popup is open
        app.handle_key(key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.input_value(), "");

        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.popup, Popup::None);
    }
}
