//! Named UI elements the strength indicator reads and writes.
//!
//! The host page is modeled as a flat registry: text inputs, meters and
//! labels, each addressed by a string id. The indicator resolves its three
//! elements by id at attach time and owns exclusive access afterwards.

use crate::strength::ScoreColor;

/// A text input element. Value may be empty.
#[derive(Debug, Clone)]
pub struct TextInput {
    pub id: String,
    pub value: String,
}

/// A bounded numeric display. `None` means unset/neutral.
#[derive(Debug, Clone)]
pub struct Meter {
    pub id: String,
    pub value: Option<u8>,
}

/// A text element with an optional color cue.
#[derive(Debug, Clone)]
pub struct Label {
    pub id: String,
    pub text: String,
    pub color: Option<ScoreColor>,
}

/// Flat element registry. Lookup by id, first match wins.
#[derive(Debug, Clone, Default)]
pub struct Form {
    inputs: Vec<TextInput>,
    meters: Vec<Meter>,
    labels: Vec<Label>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_input(&mut self, id: impl Into<String>) {
        self.inputs.push(TextInput {
            id: id.into(),
            value: String::new(),
        });
    }

    pub fn add_meter(&mut self, id: impl Into<String>) {
        self.meters.push(Meter {
            id: id.into(),
            value: None,
        });
    }

    pub fn add_label(&mut self, id: impl Into<String>) {
        self.labels.push(Label {
            id: id.into(),
            text: String::new(),
            color: None,
        });
    }

    pub fn input(&self, id: &str) -> Option<&TextInput> {
        self.inputs.iter().find(|e| e.id == id)
    }

    pub fn input_mut(&mut self, id: &str) -> Option<&mut TextInput> {
        self.inputs.iter_mut().find(|e| e.id == id)
    }

    pub fn meter(&self, id: &str) -> Option<&Meter> {
        self.meters.iter().find(|e| e.id == id)
    }

    pub fn meter_mut(&mut self, id: &str) -> Option<&mut Meter> {
        self.meters.iter_mut().find(|e| e.id == id)
    }

    pub fn label(&self, id: &str) -> Option<&Label> {
        self.labels.iter().find(|e| e.id == id)
    }

    pub fn label_mut(&mut self, id: &str) -> Option<&mut Label> {
        self.labels.iter_mut().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let mut form = Form::new();
        form.add_input("password");
        form.add_meter("strength-meter");
        form.add_label("strength-text");

        assert!(form.input("password").is_some());
        assert!(form.input("new-password").is_none());
        assert!(form.meter("strength-meter").is_some());
        assert!(form.label("strength-text").is_some());
    }

    #[test]
    fn elements_start_unset() {
        let mut form = Form::new();
        form.add_input("password");
        form.add_meter("strength-meter");
        form.add_label("strength-text");

        assert_eq!(form.input("password").unwrap().value, "");
        assert_eq!(form.meter("strength-meter").unwrap().value, None);
        let label = form.label("strength-text").unwrap();
        assert_eq!(label.text, "");
        assert_eq!(label.color, None);
    }

    #[test]
    fn mutation_through_lookup() {
        let mut form = Form::new();
        form.add_input("password");
        form.input_mut("password").unwrap().value.push_str("hunter2");
        assert_eq!(form.input("password").unwrap().value, "hunter2");
    }
}
