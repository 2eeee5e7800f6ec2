//! Radial-velocity predictor.
//!
//! Close-in planets around well-characterized stars produce the largest
//! stellar reflex velocities, so the score rises as the Kepler-III
//! orbital distance shrinks. An explicitly measured `rv_amplitude`
//! (m/s) overrides the geometric heuristic.

use exovet_core::errors::VetResult;
use exovet_core::models::analysis::Estimate;
use exovet_core::models::candidate::Candidate;
use exovet_core::traits::Predictor;

use super::{bounded, physics, HEDGED};

/// RV semi-amplitude (m/s) that saturates the amplitude heuristic.
const STRONG_AMPLITUDE_MS: f64 = 50.0;

/// Predictor for radial-velocity specialists.
pub struct RadialVelocityPredictor;

impl Predictor for RadialVelocityPredictor {
    fn predict(&self, candidate: &Candidate) -> VetResult<Estimate> {
        if let Some(amplitude) = candidate.get("rv_amplitude").filter(|k| *k > 0.0) {
            let score = amplitude / (amplitude + STRONG_AMPLITUDE_MS * 0.2);
            let shift = physics::doppler_shift_ratio(amplitude);
            return Ok(Estimate::new(
                bounded(score),
                format!(
                    "Measured RV semi-amplitude {amplitude:.1} m/s \
                     (Δλ/λ = {shift:.2e}) indicates a companion."
                ),
            ));
        }

        match (candidate.get("period"), candidate.get("stellar_mass")) {
            (Some(period), Some(mass)) if period > 0.0 && mass > 0.0 => {
                let a = physics::orbital_distance_au(mass, period);
                // Reflex velocity falls off with separation; a = 1 AU
                // is already a demanding RV target.
                let proximity = 1.0 / (1.0 + a);
                let score = 0.25 + 0.6 * proximity;
                Ok(Estimate::new(
                    bounded(score),
                    format!(
                        "Orbit at {a:.2} AU ({period:.1} d around {mass:.2} M☉); \
                         reflex velocity favors {}.",
                        if a < 0.5 { "detection" } else { "only a weak signal" }
                    ),
                ))
            }
            (Some(period), None) if period > 0.0 => {
                // Short periods are detectable even without the mass.
                let score = 0.3 + 0.4 / (1.0 + period / 100.0);
                Ok(Estimate::new(
                    bounded(score),
                    format!("Period {period:.1} d known but stellar mass missing; rough RV outlook."),
                ))
            }
            _ => Ok(Estimate::new(
                HEDGED,
                "No period or stellar mass available; radial velocity cannot discriminate.",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_orbit_scores_higher_than_wide() {
        let close = Candidate::new()
            .with_feature("period", 3.5)
            .with_feature("stellar_mass", 1.0);
        let wide = Candidate::new()
            .with_feature("period", 4000.0)
            .with_feature("stellar_mass", 1.0);
        let close_score = RadialVelocityPredictor.predict(&close).unwrap().prediction;
        let wide_score = RadialVelocityPredictor.predict(&wide).unwrap().prediction;
        assert!(close_score > wide_score);
    }

    #[test]
    fn measured_amplitude_takes_precedence() {
        let candidate = Candidate::new().with_feature("rv_amplitude", 100.0);
        let estimate = RadialVelocityPredictor.predict(&candidate).unwrap();
        assert!(estimate.prediction > 0.8);
        assert!(estimate.explanation.contains("semi-amplitude"));
    }

    #[test]
    fn empty_candidate_hedges() {
        let estimate = RadialVelocityPredictor.predict(&Candidate::new()).unwrap();
        assert!((estimate.prediction - HEDGED).abs() < f64::EPSILON);
    }
}
