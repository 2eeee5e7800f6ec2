//! General-purpose predictor and the fallback for unrecognized
//! specialties.
//!
//! Blends plausibility checks over whatever features are present: depth
//! in the planetary band, a sensible orbital period, and an equilibrium
//! temperature near the habitable range when it can be computed. With no
//! usable features it hedges at 0.5.

use exovet_core::errors::VetResult;
use exovet_core::models::analysis::Estimate;
use exovet_core::models::candidate::Candidate;
use exovet_core::traits::Predictor;

use super::{bounded, physics, HEDGED};

/// Predictor for general-purpose helpers.
pub struct GeneralPredictor;

impl Predictor for GeneralPredictor {
    fn predict(&self, candidate: &Candidate) -> VetResult<Estimate> {
        let mut scores: Vec<f64> = Vec::new();
        let mut notes: Vec<String> = Vec::new();

        if let Some(depth) = candidate.get("depth").filter(|d| *d > 0.0) {
            let plausible = (1e-6..=0.03).contains(&depth);
            scores.push(if plausible { 0.75 } else { 0.3 });
            notes.push(if plausible {
                format!("depth {depth:.6} in the planetary band")
            } else {
                format!("depth {depth:.6} outside the planetary band")
            });
        }

        if let Some(period) = candidate.get("period").filter(|p| *p > 0.0) {
            let plausible = (0.3..=10_000.0).contains(&period);
            scores.push(if plausible { 0.65 } else { 0.35 });
            notes.push(format!("period {period:.1} d"));
        }

        if let (Some(mass), Some(radius), Some(temperature), Some(period)) = (
            candidate.get("stellar_mass"),
            candidate.get("stellar_radius"),
            candidate.get("temperature"),
            candidate.get("period"),
        ) {
            if mass > 0.0 && radius > 0.0 && temperature > 0.0 && period > 0.0 {
                let a = physics::orbital_distance_au(mass, period);
                let luminosity = physics::stellar_luminosity_solar(radius, temperature);
                let (inner, outer) = physics::habitable_zone_au(luminosity);
                let t_eq = physics::equilibrium_temperature_k(luminosity, a);
                if (inner..=outer).contains(&a) {
                    scores.push(0.8);
                    notes.push(format!(
                        "orbit {a:.2} AU inside the habitable zone (T_eq {t_eq:.0} K)"
                    ));
                } else {
                    scores.push(0.55);
                    notes.push(format!("orbit {a:.2} AU outside the habitable zone"));
                }
            }
        }

        if scores.is_empty() {
            return Ok(Estimate::new(
                HEDGED,
                "No usable features; defaulting to an uncommitted estimate.",
            ));
        }

        let score = scores.iter().sum::<f64>() / scores.len() as f64;
        Ok(Estimate::new(
            bounded(score),
            format!("Blended assessment: {}.", notes.join("; ")),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidate_hedges() {
        let estimate = GeneralPredictor.predict(&Candidate::new()).unwrap();
        assert!((estimate.prediction - HEDGED).abs() < f64::EPSILON);
    }

    #[test]
    fn earthlike_candidate_scores_above_neutral() {
        // Roughly Kepler-452b.
        let candidate = Candidate::named("Kepler-452")
            .with_feature("period", 384.8)
            .with_feature("depth", 0.00028)
            .with_feature("duration", 10.4)
            .with_feature("stellar_mass", 1.04)
            .with_feature("stellar_radius", 1.11)
            .with_feature("temperature", 5757.0);
        let estimate = GeneralPredictor.predict(&candidate).unwrap();
        assert!(estimate.prediction > 0.6, "got {}", estimate.prediction);
        assert!(estimate.explanation.contains("habitable zone"));
    }

    #[test]
    fn implausible_features_score_below_neutral() {
        let candidate = Candidate::new()
            .with_feature("depth", 0.4)
            .with_feature("period", 50_000.0);
        let estimate = GeneralPredictor.predict(&candidate).unwrap();
        assert!(estimate.prediction < 0.5, "got {}", estimate.prediction);
    }
}
