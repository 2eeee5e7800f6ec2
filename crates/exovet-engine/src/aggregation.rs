//! Consensus aggregation over per-helper estimates.
//!
//! Aggregated prediction: `P = Σ(wᵢ·pᵢ) / Σ(wᵢ)`, falling back to the
//! maximally uncertain 0.5 when `Σwᵢ = 0`.
//!
//! Confidence: `clamp(1 − 2·var(pᵢ), 0, 1)` over the *unweighted*
//! predictions. Confidence deliberately ignores the weights so it
//! reflects raw disagreement, not reliability.
//!
//! Consensus strength: `clamp(1 − stddev(pᵢ)/0.5, 0, 1)` — a stddev of
//! 0.5 is the maximal possible spread on a [0,1] scale, so unanimity
//! yields exactly 1.0.
//!
//! Explanations are ranked by normalized weight, descending; ties keep
//! registration order. The top-ranked explanation becomes the primary.

use serde::{Deserialize, Serialize};
use tracing::debug;

use exovet_core::constants::MAX_SPREAD_STDDEV;
use exovet_core::models::analysis::{Classification, HelperResult, Verdict};

/// Explanation shown when every predictor failed and no estimate exists.
const NO_ESTIMATE_EXPLANATION: &str = "No helper produced an estimate for this candidate.";

/// Weighted mean of predictions. Zero total weight degrades to 0.5.
pub fn weighted_mean(predictions: &[f64], weights: &[f64]) -> f64 {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0.5;
    }
    let weighted: f64 = predictions
        .iter()
        .zip(weights)
        .map(|(p, w)| p * w)
        .sum();
    weighted / total
}

/// Unweighted population variance. Empty input yields 0.
pub fn variance(predictions: &[f64]) -> f64 {
    if predictions.is_empty() {
        return 0.0;
    }
    let n = predictions.len() as f64;
    let mean = predictions.iter().sum::<f64>() / n;
    predictions.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / n
}

/// Agreement-derived confidence: `clamp(1 − 2·variance, 0, 1)`.
pub fn confidence(predictions: &[f64]) -> f64 {
    (1.0 - 2.0 * variance(predictions)).clamp(0.0, 1.0)
}

/// Normalized inverse spread: `clamp(1 − stddev/0.5, 0, 1)`.
pub fn consensus_strength(predictions: &[f64]) -> f64 {
    let stddev = variance(predictions).sqrt();
    (1.0 - stddev / MAX_SPREAD_STDDEV).clamp(0.0, 1.0)
}

/// Normalize weights to sum to 1. Zero total yields a uniform split.
pub fn normalized_weights(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        let uniform = 1.0 / weights.len().max(1) as f64;
        return vec![uniform; weights.len()];
    }
    weights.iter().map(|w| w / total).collect()
}

/// An explanation with its normalized-weight contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedExplanation {
    /// Which helper said it.
    pub helper_id: String,
    /// The explanation text.
    pub explanation: String,
    /// Normalized weight in [0, 1]; all contributions sum to 1.
    pub contribution: f64,
}

/// Rank explanations by normalized weight, descending. The sort is
/// stable, so equal weights keep registration order.
pub fn rank_explanations(results: &[HelperResult], weights: &[f64]) -> Vec<RankedExplanation> {
    let normalized = normalized_weights(weights);
    let mut ranked: Vec<RankedExplanation> = results
        .iter()
        .zip(&normalized)
        .map(|(r, nw)| RankedExplanation {
            helper_id: r.helper_id.clone(),
            explanation: r.explanation.clone(),
            contribution: *nw,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.contribution
            .partial_cmp(&a.contribution)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Combine per-helper results into a verdict.
///
/// `results` and `weights` are parallel, in registration order, covering
/// only the helpers whose predictor succeeded. An empty slice (every
/// predictor failed) degrades to the neutral verdict rather than erroring.
pub fn combine(results: &[HelperResult], weights: &[f64]) -> Verdict {
    debug_assert_eq!(results.len(), weights.len());

    if results.is_empty() {
        return Verdict {
            prediction: 0.5,
            confidence: 0.0,
            consensus_strength: 0.0,
            primary_explanation: NO_ESTIMATE_EXPLANATION.to_string(),
            classification: Classification::from_scores(0.5, 0.0),
        };
    }

    let predictions: Vec<f64> = results.iter().map(|r| r.prediction).collect();
    let prediction = weighted_mean(&predictions, weights);
    let confidence = confidence(&predictions);
    let consensus = consensus_strength(&predictions);
    let ranked = rank_explanations(results, weights);
    // Non-empty results guarantee a top-ranked entry.
    let primary = ranked
        .first()
        .map(|r| r.explanation.clone())
        .unwrap_or_else(|| NO_ESTIMATE_EXPLANATION.to_string());

    debug!(
        prediction = format!("{prediction:.4}"),
        confidence = format!("{confidence:.4}"),
        consensus = format!("{consensus:.4}"),
        helpers = results.len(),
        "combined estimates"
    );

    Verdict {
        prediction,
        confidence,
        consensus_strength: consensus,
        primary_explanation: primary,
        classification: Classification::from_scores(prediction, confidence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result(id: &str, prediction: f64) -> HelperResult {
        HelperResult {
            helper_id: id.to_string(),
            prediction,
            explanation: format!("{id} says {prediction}"),
        }
    }

    #[test]
    fn two_helper_reference_values() {
        // 0.8 and 0.4 at equal weight: mean 0.6, variance 0.04,
        // confidence 0.92, stddev 0.2, consensus 0.6.
        let results = [result("a", 0.8), result("b", 0.4)];
        let verdict = combine(&results, &[1.0, 1.0]);
        assert!((verdict.prediction - 0.6).abs() < 1e-12);
        assert!((verdict.confidence - 0.92).abs() < 1e-12);
        assert!((verdict.consensus_strength - 0.6).abs() < 1e-12);
    }

    #[test]
    fn unanimous_predictions_give_full_consensus() {
        let results = [result("a", 0.7), result("b", 0.7), result("c", 0.7)];
        let verdict = combine(&results, &[1.3, 0.5, 0.9]);
        assert!((verdict.prediction - 0.7).abs() < 1e-12);
        assert!((verdict.consensus_strength - 1.0).abs() < 1e-12);
        assert!((verdict.confidence - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_result_is_its_own_consensus() {
        let results = [result("solo", 0.9)];
        let verdict = combine(&results, &[1.0]);
        assert!((verdict.prediction - 0.9).abs() < 1e-12);
        assert!((verdict.consensus_strength - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_total_weight_degrades_to_neutral() {
        assert!((weighted_mean(&[0.9, 0.1], &[0.0, 0.0]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_results_degrade_to_neutral_verdict() {
        let verdict = combine(&[], &[]);
        assert!((verdict.prediction - 0.5).abs() < 1e-12);
        assert!(verdict.confidence.abs() < 1e-12);
        assert!(verdict.consensus_strength.abs() < 1e-12);
        assert_eq!(verdict.primary_explanation, NO_ESTIMATE_EXPLANATION);
    }

    #[test]
    fn heavier_weight_wins_primary_explanation() {
        let results = [result("light", 0.5), result("heavy", 0.5)];
        let ranked = rank_explanations(&results, &[0.4, 1.6]);
        assert_eq!(ranked[0].helper_id, "heavy");
        let verdict = combine(&results, &[0.4, 1.6]);
        assert!(verdict.primary_explanation.starts_with("heavy"));
    }

    #[test]
    fn weight_ties_keep_registration_order() {
        let results = [result("first", 0.3), result("second", 0.8)];
        let ranked = rank_explanations(&results, &[1.0, 1.0]);
        assert_eq!(ranked[0].helper_id, "first");
    }

    proptest! {
        #[test]
        fn aggregated_prediction_stays_within_prediction_range(
            predictions in proptest::collection::vec(0.0f64..=1.0, 1..10),
            weights in proptest::collection::vec(0.1f64..=2.0, 10),
        ) {
            let weights = &weights[..predictions.len()];
            let mean = weighted_mean(&predictions, weights);
            let min = predictions.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = predictions.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(mean >= min - 1e-12 && mean <= max + 1e-12);
        }

        #[test]
        fn normalized_weights_sum_to_one(
            weights in proptest::collection::vec(0.1f64..=2.0, 1..10),
        ) {
            let normalized = normalized_weights(&weights);
            let total: f64 = normalized.iter().sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
        }

        #[test]
        fn consensus_and_confidence_stay_in_unit_interval(
            predictions in proptest::collection::vec(0.0f64..=1.0, 1..10),
        ) {
            let c = confidence(&predictions);
            let s = consensus_strength(&predictions);
            prop_assert!((0.0..=1.0).contains(&c));
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
