//! Builtin specialty predictors.
//!
//! One predictor per specialty, each a deterministic heuristic over the
//! candidate's feature map. All builtins tolerate missing features by
//! degrading toward a hedged estimate with an explanation naming what
//! was missing; they never return an error. Callers that need failure
//! semantics plug in their own `Predictor` implementation.

pub mod general;
pub mod imaging;
pub mod physics;
pub mod radial_velocity;
pub mod transit;

pub use general::GeneralPredictor;
pub use imaging::ImagingPredictor;
pub use radial_velocity::RadialVelocityPredictor;
pub use transit::TransitPredictor;

use exovet_core::models::helper::Specialty;
use exovet_core::traits::Predictor;

/// Prediction returned when a predictor has nothing to go on.
pub(crate) const HEDGED: f64 = 0.5;

/// Resolve a specialty to its builtin predictor.
pub fn for_specialty(specialty: Specialty) -> Box<dyn Predictor> {
    match specialty {
        Specialty::Transit => Box::new(TransitPredictor),
        Specialty::RadialVelocity => Box::new(RadialVelocityPredictor),
        Specialty::Imaging => Box::new(ImagingPredictor),
        Specialty::General => Box::new(GeneralPredictor),
    }
}

/// Keep heuristic scores strictly inside (0, 1) so no single builtin can
/// claim certainty.
pub(crate) fn bounded(score: f64) -> f64 {
    score.clamp(0.02, 0.98)
}
