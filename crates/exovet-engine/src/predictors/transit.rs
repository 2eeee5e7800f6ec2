//! Transit-photometry predictor.
//!
//! Scores a candidate from the depth of its flux dip relative to the
//! photometric noise, penalizing depths too large to be planetary
//! (eclipsing binaries) and transit durations implausibly long for the
//! orbital period.

use exovet_core::errors::VetResult;
use exovet_core::models::analysis::Estimate;
use exovet_core::models::candidate::Candidate;
use exovet_core::traits::Predictor;

use super::{bounded, HEDGED};

/// Default fractional photometric noise when the candidate omits it.
const DEFAULT_NOISE: f64 = 1e-4;
/// Depth SNR at which a transit is conventionally considered detected.
const DETECTION_SNR: f64 = 7.0;
/// Depths beyond this are more consistent with an eclipsing binary.
const MAX_PLANETARY_DEPTH: f64 = 0.03;
/// Transits longer than this fraction of the period are suspect.
const MAX_DURATION_FRACTION: f64 = 0.2;

/// Predictor for transit-photometry specialists.
pub struct TransitPredictor;

impl Predictor for TransitPredictor {
    fn predict(&self, candidate: &Candidate) -> VetResult<Estimate> {
        let Some(depth) = candidate.get("depth").filter(|d| *d > 0.0) else {
            return Ok(Estimate::new(
                HEDGED,
                "No transit depth measured; cannot assess a transit signal.",
            ));
        };

        let noise = candidate.get("noise").unwrap_or(DEFAULT_NOISE).max(1e-9);
        let snr = depth / noise;
        // SNR at the detection threshold maps to 0.5 and saturates above.
        let mut score = snr / (snr + DETECTION_SNR);
        let mut notes = format!("Transit depth {depth:.6} at SNR {snr:.1}.");

        if depth > MAX_PLANETARY_DEPTH {
            score *= 0.4;
            notes.push_str(" Depth is large for a planet; possible eclipsing binary.");
        }

        if let (Some(duration), Some(period)) =
            (candidate.get("duration"), candidate.get("period"))
        {
            if period > 0.0 {
                let fraction = duration / (period * 24.0);
                if fraction > MAX_DURATION_FRACTION {
                    score *= 0.6;
                    notes.push_str(&format!(
                        " Duration is {:.0}% of the period, too long for a planetary transit.",
                        fraction * 100.0
                    ));
                }
            }
        }

        Ok(Estimate::new(bounded(score), notes))
    }
}
