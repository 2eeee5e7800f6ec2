//! # exovet-core
//!
//! Foundation crate for the exovet candidate-vetting system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FederationConfig;
pub use errors::{VetError, VetResult};
pub use models::analysis::{AnalysisRecord, Classification, Estimate, HelperResult, Verdict};
pub use models::candidate::Candidate;
pub use models::helper::{Helper, PerformanceSample, ReliabilityWeight, Specialty};
pub use models::status::{HelperStatistics, SystemStatus};
pub use traits::Predictor;
