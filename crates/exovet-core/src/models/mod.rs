//! Data model for the vetting system.

pub mod analysis;
pub mod candidate;
pub mod helper;
pub mod status;

pub use analysis::{AnalysisRecord, Classification, Estimate, FeedbackRecord, HelperResult, Verdict};
pub use candidate::Candidate;
pub use helper::{Helper, PerformanceSample, ReliabilityWeight, Specialty};
pub use status::{HelperStatistics, SystemStatus};
