//! FeedbackLearner — reliability-weight updates from human feedback.
//!
//! Update rule (binary cross-entropy gradient, fixed-step):
//!
//! ```text
//! h = 1 if correct else 0
//! P = clamp(recorded prediction, 0.001, 0.999)
//! g = -h/P + (1-h)/(1-P)
//! adjustment = η · g · (+step if correct else -step)
//! w ← clamp(w - adjustment, 0.1, 2.0)
//! ```
//!
//! The fixed step, not just the gradient, bounds the drift: one feedback
//! event can never move a weight by more than `η·step·max|g|`. Note the
//! sign the rule actually produces — `g` is negative for correct
//! feedback and positive for incorrect, so the adjustment is negative in
//! both cases and each feedback event nudges the implicated weight
//! upward, by `η·step/P` when correct and `η·step/(1−P)` when incorrect.
//! A confidently wrong prediction therefore moves its helper's weight
//! more than a confidently right one, until the 2.0 ceiling absorbs it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use exovet_core::config::FederationConfig;

/// One helper's weight transition from a feedback event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightStep {
    /// The helper whose weight moved.
    pub helper_id: String,
    /// Weight before the update.
    pub previous: f64,
    /// Weight after the update, clamped to the configured bounds.
    pub updated: f64,
    /// The cross-entropy loss gradient `g`.
    pub gradient: f64,
}

/// Computes weight updates from correctness feedback.
pub struct FeedbackLearner {
    config: FederationConfig,
}

impl FeedbackLearner {
    /// Create a learner with the given config.
    pub fn new(config: &FederationConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Compute the updated weight for one helper's recorded prediction.
    pub fn step(
        &self,
        helper_id: &str,
        current_weight: f64,
        prediction: f64,
        is_correct: bool,
    ) -> WeightStep {
        let h = if is_correct { 1.0 } else { 0.0 };
        let p = prediction.clamp(self.config.prediction_floor, self.config.prediction_ceiling);
        let gradient = -h / p + (1.0 - h) / (1.0 - p);

        let step = if is_correct {
            self.config.correct_step
        } else {
            -self.config.incorrect_step
        };
        let adjustment = self.config.learning_rate * gradient * step;
        let updated =
            (current_weight - adjustment).clamp(self.config.min_weight, self.config.max_weight);

        debug!(
            helper_id,
            previous = format!("{current_weight:.4}"),
            updated = format!("{updated:.4}"),
            gradient = format!("{gradient:.4}"),
            is_correct,
            "weight updated from feedback"
        );

        WeightStep {
            helper_id: helper_id.to_string(),
            previous: current_weight,
            updated,
            gradient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn learner() -> FeedbackLearner {
        FeedbackLearner::new(&FederationConfig::default())
    }

    #[test]
    fn correct_feedback_on_confident_prediction_raises_weight() {
        // g = -1/0.9, adjustment = 0.1 · (-1/0.9) · 0.01, so the weight
        // rises by exactly 0.001/0.9.
        let step = learner().step("a", 1.0, 0.9, true);
        let expected = 1.0 + 0.001 / 0.9;
        assert!(step.updated > step.previous);
        assert!((step.updated - expected).abs() < 1e-12, "got {}", step.updated);
        assert!(step.gradient < 0.0);
    }

    #[test]
    fn incorrect_feedback_moves_weight_more_when_confident() {
        // g = 1/(1-0.9) = 10, adjustment = 0.1 · 10 · (-0.01) = -0.01.
        let confident = learner().step("a", 1.0, 0.9, false);
        assert!((confident.updated - 1.01).abs() < 1e-12);
        // g = 1/(1-0.1) ≈ 1.11, a much smaller move.
        let hedged = learner().step("a", 1.0, 0.1, false);
        assert!(hedged.updated - 1.0 < confident.updated - 1.0);
        assert!(hedged.updated > 1.0);
    }

    #[test]
    fn extreme_predictions_are_clamped_before_gradient() {
        // P = 1.0 clamps to 0.999; the gradient stays finite.
        let step = learner().step("a", 1.0, 1.0, false);
        assert!(step.gradient.is_finite());
        assert!((step.gradient - 1000.0).abs() < 1e-6);
        // adjustment = 0.1 · 1000 · (-0.01) = -1.0; 1.0 + 1.0 hits the cap.
        assert!((step.updated - 2.0).abs() < 1e-12);
    }

    #[test]
    fn weight_never_leaves_bounds() {
        let l = learner();
        for &w in &[0.1, 0.5, 1.0, 1.99, 2.0] {
            for &p in &[0.0, 0.1, 0.5, 0.9, 1.0] {
                for &correct in &[true, false] {
                    let step = l.step("a", w, p, correct);
                    assert!((0.1..=2.0).contains(&step.updated));
                }
            }
        }
    }

    #[test]
    fn custom_learning_rate_scales_the_move() {
        let mut config = FederationConfig::default();
        config.learning_rate = 0.2;
        let step = FeedbackLearner::new(&config).step("a", 1.0, 0.9, true);
        assert!((step.updated - (1.0 + 0.002 / 0.9)).abs() < 1e-12);
    }
}
