//! Error taxonomy for the vetting core.
//!
//! Lookup misses and conflicts surface directly to the caller; nothing
//! here is retried. Predictor failures are the one recoverable class:
//! the aggregation step excludes the failing helper and logs the skip
//! instead of propagating `PredictorFailed`.

/// Result alias used across the workspace.
pub type VetResult<T> = Result<T, VetError>;

/// Errors produced by the vetting core.
#[derive(Debug, thiserror::Error)]
pub enum VetError {
    /// A helper with this id is already registered.
    #[error("helper already registered: {id}")]
    DuplicateHelper { id: String },

    /// No helper with this id exists.
    #[error("unknown helper: {id}")]
    UnknownHelper { id: String },

    /// No analysis with this id exists.
    #[error("unknown analysis: {id}")]
    UnknownAnalysis { id: String },

    /// Aggregation was requested with an empty registry.
    #[error("no helpers registered; cannot aggregate")]
    NoHelpers,

    /// Feedback was already applied to this analysis; it is single-shot.
    #[error("feedback already applied to analysis: {id}")]
    FeedbackAlreadyApplied { id: String },

    /// A predictor failed for one helper. Recovered inside aggregation,
    /// never returned from `analyze`.
    #[error("predictor failed for helper {helper_id}: {reason}")]
    PredictorFailed { helper_id: String, reason: String },

    /// Configuration could not be parsed or validated.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
