//! Analysis artifacts: per-helper results, the aggregated verdict, and
//! the append-only analysis record.
//!
//! An `AnalysisRecord` is immutable after creation except for a single
//! feedback attachment. Its `weight_snapshot` pins the weights used for
//! that analysis, so later weight updates never retroactively alter a
//! historical verdict.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::candidate::Candidate;

/// A predictor's output for one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    /// Probability the candidate is a real exoplanet, in [0, 1].
    pub prediction: f64,
    /// Natural-language explanation of the estimate.
    pub explanation: String,
}

impl Estimate {
    /// Create an estimate, clamping the prediction into [0, 1].
    pub fn new(prediction: f64, explanation: impl Into<String>) -> Self {
        Self {
            prediction: prediction.clamp(0.0, 1.0),
            explanation: explanation.into(),
        }
    }
}

/// One helper's contribution to an analysis. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperResult {
    /// The helper that produced this result.
    pub helper_id: String,
    /// The helper's prediction in [0, 1].
    pub prediction: f64,
    /// The helper's explanation.
    pub explanation: String,
}

/// Human-readable classification of a verdict, derived from the
/// aggregated prediction and confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Strong exoplanet candidate.
    StrongCandidate,
    /// Likely exoplanet.
    Likely,
    /// Possible exoplanet; requires validation.
    NeedsValidation,
    /// Weak signal; likely false positive.
    WeakSignal,
    /// Not an exoplanet.
    NotPlanet,
}

impl Classification {
    /// Derive a classification from aggregated prediction and confidence.
    pub fn from_scores(prediction: f64, confidence: f64) -> Self {
        if prediction > 0.8 && confidence > 0.7 {
            Self::StrongCandidate
        } else if prediction > 0.6 && confidence > 0.5 {
            Self::Likely
        } else if prediction > 0.4 {
            Self::NeedsValidation
        } else if prediction > 0.2 {
            Self::WeakSignal
        } else {
            Self::NotPlanet
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::StrongCandidate => "Strong Exoplanet Candidate",
            Self::Likely => "Likely Exoplanet",
            Self::NeedsValidation => "Possible Exoplanet - Requires Validation",
            Self::WeakSignal => "Weak Signal - Likely False Positive",
            Self::NotPlanet => "Not an Exoplanet",
        };
        write!(f, "{text}")
    }
}

/// The consensus verdict for one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Weighted-mean prediction in [0, 1].
    pub prediction: f64,
    /// Agreement-derived confidence in [0, 1], independent of weights.
    pub confidence: f64,
    /// How tightly predictions cluster, in [0, 1]; 1.0 means unanimity.
    pub consensus_strength: f64,
    /// Explanation of the highest-weighted helper.
    pub primary_explanation: String,
    /// Threshold classification of prediction + confidence.
    pub classification: Classification,
}

/// Human correctness judgment attached to an analysis. Single-shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Whether the verdict was judged correct.
    pub is_correct: bool,
    /// Optional ground truth ("is it actually a planet").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_truth: Option<bool>,
    /// When the feedback was recorded.
    pub timestamp: DateTime<Utc>,
}

/// The artifact of one aggregation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Engine-assigned unique id, used later to submit feedback.
    pub id: String,
    /// The candidate as analyzed.
    pub input: Candidate,
    /// When the analysis ran.
    pub timestamp: DateTime<Utc>,
    /// Per-helper results in registration order, one per helper that
    /// produced an estimate.
    pub helper_results: Vec<HelperResult>,
    /// Weights in effect at analysis time, keyed by helper id. Covers
    /// exactly the helpers present in `helper_results`.
    pub weight_snapshot: BTreeMap<String, f64>,
    /// The consensus verdict.
    pub verdict: Verdict,
    /// Feedback, if a human has judged this analysis. Set at most once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_clamps_prediction() {
        assert!((Estimate::new(1.4, "x").prediction - 1.0).abs() < f64::EPSILON);
        assert!(Estimate::new(-0.2, "x").prediction.abs() < f64::EPSILON);
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(
            Classification::from_scores(0.85, 0.9),
            Classification::StrongCandidate
        );
        assert_eq!(Classification::from_scores(0.7, 0.6), Classification::Likely);
        // High prediction with low confidence drops to validation.
        assert_eq!(
            Classification::from_scores(0.85, 0.3),
            Classification::NeedsValidation
        );
        assert_eq!(
            Classification::from_scores(0.3, 0.9),
            Classification::WeakSignal
        );
        assert_eq!(Classification::from_scores(0.1, 0.9), Classification::NotPlanet);
    }
}
