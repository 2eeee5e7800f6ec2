//! # exovet-engine
//!
//! Consensus-and-adaptation core for exoplanet candidate vetting.
//!
//! A set of registered helpers, each backed by a specialty predictor,
//! estimates whether a candidate signal is a real exoplanet. The engine
//! combines the estimates into one weighted verdict, records the analysis,
//! and adapts each helper's reliability weight from human correctness
//! feedback so future verdicts lean on the helpers that have earned it.

pub mod aggregation;
pub mod engine;
pub mod history;
pub mod learning;
pub mod predictors;
pub mod registry;

pub use engine::FederationEngine;
pub use learning::WeightStep;
pub use registry::HelperRegistry;
