//! The strength indicator: wires a password input to a meter and a label.

use thiserror::Error;

use super::{color_for, label_for, Estimate, StrengthEstimator};
use crate::form::Form;

/// Element ids the indicator attaches to. The input is resolved by trying
/// each candidate in order; the original page had two differently-named
/// password fields, so the list is configuration rather than a hardcoded pair.
#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    pub input_candidates: Vec<String>,
    pub meter_id: String,
    pub label_id: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachError {
    #[error("no password input found (tried {tried:?})")]
    MissingInput { tried: Vec<String> },
    #[error("meter element {0:?} not found")]
    MissingMeter(String),
    #[error("label element {0:?} not found")]
    MissingLabel(String),
}

/// Attached indicator holding the resolved element ids. Attachment is
/// one-shot: there is no path back to unattached, and a failed attach is
/// terminal for the page load.
#[derive(Debug, Clone)]
pub struct StrengthIndicator {
    input_id: String,
    meter_id: String,
    label_id: String,
}

impl StrengthIndicator {
    /// Resolve all three elements or fail. The caller is responsible for
    /// surfacing the single diagnostic warning on failure.
    pub fn attach(form: &Form, config: &IndicatorConfig) -> Result<Self, AttachError> {
        let input_id = config
            .input_candidates
            .iter()
            .find(|id| form.input(id).is_some())
            .cloned()
            .ok_or_else(|| AttachError::MissingInput {
                tried: config.input_candidates.clone(),
            })?;

        if form.meter(&config.meter_id).is_none() {
            return Err(AttachError::MissingMeter(config.meter_id.clone()));
        }
        if form.label(&config.label_id).is_none() {
            return Err(AttachError::MissingLabel(config.label_id.clone()));
        }

        Ok(Self {
            input_id,
            meter_id: config.meter_id.clone(),
            label_id: config.label_id.clone(),
        })
    }

    /// Id of the input the indicator resolved at attach time.
    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    /// Recompute and render strength feedback from the input's current value.
    ///
    /// Empty input clears the label and unsets the meter; otherwise the meter
    /// shows `score + 1` and the label carries the score text and color.
    /// Returns the estimate so the host can display auxiliary data.
    pub fn refresh(
        &self,
        form: &mut Form,
        estimator: &dyn StrengthEstimator,
    ) -> Option<Estimate> {
        let value = form.input(&self.input_id).map(|i| i.value.clone())?;

        if value.is_empty() {
            if let Some(meter) = form.meter_mut(&self.meter_id) {
                meter.value = None;
            }
            if let Some(label) = form.label_mut(&self.label_id) {
                label.text.clear();
                label.color = None;
            }
            return None;
        }

        let estimate = estimator.estimate(&value);
        if let Some(meter) = form.meter_mut(&self.meter_id) {
            meter.value = Some(estimate.score + 1);
        }
        if let Some(label) = form.label_mut(&self.label_id) {
            label.text = format!("Password Strength: {}", label_for(estimate.score));
            label.color = Some(color_for(estimate.score));
        }
        Some(estimate)
    }
}
