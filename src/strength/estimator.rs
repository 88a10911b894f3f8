//! Production estimator backed by the zxcvbn crate.

use zxcvbn::{zxcvbn, Score};

use super::{Estimate, StrengthEstimator};

/// Scores passwords with zxcvbn. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnEstimator;

impl StrengthEstimator for ZxcvbnEstimator {
    fn estimate(&self, password: &str) -> Estimate {
        let entropy = zxcvbn(password, &[]);
        let score = match entropy.score() {
            Score::Zero => 0,
            Score::One => 1,
            Score::Two => 2,
            Score::Three => 3,
            _ => 4,
        };
        Estimate {
            score,
            guesses: entropy.guesses(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_password_scores_low() {
        let est = ZxcvbnEstimator.estimate("a");
        assert_eq!(est.score, 0);
    }

    #[test]
    fn scores_stay_in_range() {
        for pw in ["a", "password", "Tr0ub4dor&3", "correcthorsebatterystaple"] {
            let est = ZxcvbnEstimator.estimate(pw);
            assert!(est.score <= 4, "score {} out of range for {:?}", est.score, pw);
            assert!(est.guesses >= 1);
        }
    }
}
