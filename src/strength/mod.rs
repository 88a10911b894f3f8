//! Password strength scoring types and lookup tables.

mod estimator;
mod indicator;

pub use estimator::ZxcvbnEstimator;
pub use indicator::{AttachError, IndicatorConfig, StrengthIndicator};

/// Highest score the estimator can produce.
pub const MAX_SCORE: u8 = 4;

/// Score-to-label table, 0 = weakest.
const LABELS: [&str; 5] = ["Very Weak", "Weak", "So-so", "Strong", "Very Strong"];

/// Result of scoring a password. `guesses` is auxiliary data; only
/// `score` drives the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    /// Strength score in [0, 4].
    pub score: u8,
    /// Estimated guesses needed to crack the password.
    pub guesses: u64,
}

/// The external scoring collaborator. Opaque: any mapping from string to
/// score in [0, 4] satisfies the contract.
pub trait StrengthEstimator {
    fn estimate(&self, password: &str) -> Estimate;
}

/// Color cue for a score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreColor {
    Red,
    Orange,
    Green,
}

impl ScoreColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreColor::Red => "red",
            ScoreColor::Orange => "orange",
            ScoreColor::Green => "green",
        }
    }
}

/// Human-readable label for a score. Scores above 4 clamp to the top band.
pub fn label_for(score: u8) -> &'static str {
    LABELS[score.min(MAX_SCORE) as usize]
}

/// Color policy: 0-1 red, 2 orange, 3-4 green.
pub fn color_for(score: u8) -> ScoreColor {
    match score {
        0 | 1 => ScoreColor::Red,
        2 => ScoreColor::Orange,
        _ => ScoreColor::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_policy_bands() {
        assert_eq!(color_for(0), ScoreColor::Red);
        assert_eq!(color_for(1), ScoreColor::Red);
        assert_eq!(color_for(2), ScoreColor::Orange);
        assert_eq!(color_for(3), ScoreColor::Green);
        assert_eq!(color_for(4), ScoreColor::Green);
    }

    #[test]
    fn label_table() {
        assert_eq!(label_for(0), "Very Weak");
        assert_eq!(label_for(1), "Weak");
        assert_eq!(label_for(2), "So-so");
        assert_eq!(label_for(3), "Strong");
        assert_eq!(label_for(4), "Very Strong");
    }

    #[test]
    fn out_of_range_scores_clamp() {
        assert_eq!(label_for(9), "Very Strong");
        assert_eq!(color_for(9), ScoreColor::Green);
    }

    #[test]
    fn color_names() {
        assert_eq!(ScoreColor::Red.as_str(), "red");
        assert_eq!(ScoreColor::Orange.as_str(), "orange");
        assert_eq!(ScoreColor::Green.as_str(), "green");
    }
}
