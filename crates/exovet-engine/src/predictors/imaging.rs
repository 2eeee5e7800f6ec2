//! Direct-imaging predictor.
//!
//! Direct imaging resolves planets on wide orbits around nearby, bright
//! stars. The score rises with the Kepler-III separation and gets a
//! contrast bonus when the star is luminous enough to characterize.

use exovet_core::errors::VetResult;
use exovet_core::models::analysis::Estimate;
use exovet_core::models::candidate::Candidate;
use exovet_core::traits::Predictor;

use super::{bounded, physics, HEDGED};

/// Separation (AU) at which the geometric score reaches 0.5.
const RESOLVABLE_AU: f64 = 5.0;

/// Predictor for direct-imaging specialists.
pub struct ImagingPredictor;

impl Predictor for ImagingPredictor {
    fn predict(&self, candidate: &Candidate) -> VetResult<Estimate> {
        let separation = match (candidate.get("period"), candidate.get("stellar_mass")) {
            (Some(period), Some(mass)) if period > 0.0 && mass > 0.0 => {
                Some(physics::orbital_distance_au(mass, period))
            }
            _ => None,
        };

        let Some(a) = separation else {
            return Ok(Estimate::new(
                HEDGED * 0.9,
                "Separation unknown; imaging slightly disfavors an unresolved candidate.",
            ));
        };

        let mut score = a / (a + RESOLVABLE_AU);
        let mut notes = format!("Projected separation {a:.2} AU.");

        if let (Some(radius), Some(temperature)) = (
            candidate.get("stellar_radius"),
            candidate.get("temperature"),
        ) {
            if radius > 0.0 && temperature > 0.0 {
                let luminosity = physics::stellar_luminosity_solar(radius, temperature);
                if luminosity > 0.5 {
                    score += 0.1;
                    notes.push_str(&format!(
                        " Host luminosity {luminosity:.2} L☉ gives workable contrast."
                    ));
                } else {
                    notes.push_str(&format!(
                        " Faint host ({luminosity:.2} L☉) limits contrast."
                    ));
                }
            }
        }

        Ok(Estimate::new(bounded(score), notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_orbits_favored() {
        let wide = Candidate::new()
            .with_feature("period", 40_000.0)
            .with_feature("stellar_mass", 1.0);
        let tight = Candidate::new()
            .with_feature("period", 3.0)
            .with_feature("stellar_mass", 1.0);
        let wide_score = ImagingPredictor.predict(&wide).unwrap().prediction;
        let tight_score = ImagingPredictor.predict(&tight).unwrap().prediction;
        assert!(wide_score > tight_score);
    }

    #[test]
    fn missing_orbit_hedges_low() {
        let estimate = ImagingPredictor.predict(&Candidate::new()).unwrap();
        assert!(estimate.prediction < 0.5);
    }
}
