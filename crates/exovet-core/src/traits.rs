//! Trait seams between the engine and its collaborators.

use crate::errors::VetResult;
use crate::models::analysis::Estimate;
use crate::models::candidate::Candidate;

/// A prediction source attached to one helper.
///
/// The engine does not know how a specialty computes its estimate; it
/// only requires this contract. An `Err` from `predict` excludes the
/// helper from the current aggregation (logged skip) rather than failing
/// the analysis.
pub trait Predictor: Send + Sync {
    /// Estimate the probability that `candidate` is a real exoplanet,
    /// with a natural-language explanation.
    fn predict(&self, candidate: &Candidate) -> VetResult<Estimate>;
}
