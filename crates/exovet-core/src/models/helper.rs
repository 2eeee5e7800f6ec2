//! Helper identity, specialty, and reliability state.
//!
//! # Examples
//!
//! ```
//! use exovet_core::models::helper::{Helper, ReliabilityWeight, Specialty};
//!
//! let helper = Helper::new("kepler_photometry", Specialty::Transit);
//! assert!((helper.weight.value() - 1.0).abs() < f64::EPSILON);
//! assert!(helper.performance_history.is_empty());
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{INITIAL_WEIGHT, MAX_WEIGHT, MIN_WEIGHT};

/// Detection-method specialty of a helper.
///
/// Unrecognized tags parse to `General`, so a misspelled specialty
/// degrades to the default behavior instead of failing registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    /// Transit photometry (dips in stellar brightness).
    Transit,
    /// Radial velocity (Doppler wobble of the host star).
    RadialVelocity,
    /// Direct imaging.
    Imaging,
    /// No particular method; blended heuristics.
    General,
}

impl FromStr for Specialty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "transit" => Self::Transit,
            "radial_velocity" => Self::RadialVelocity,
            "imaging" => Self::Imaging,
            // Anything else, including "general", falls back to General.
            _ => Self::General,
        })
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Transit => "transit",
            Self::RadialVelocity => "radial_velocity",
            Self::Imaging => "imaging",
            Self::General => "general",
        };
        write!(f, "{tag}")
    }
}

/// Reliability weight clamped to [0.1, 2.0].
/// Expresses how much a helper's prediction counts toward consensus.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ReliabilityWeight(f64);

impl ReliabilityWeight {
    /// Create a new weight, clamping to [0.1, 2.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(MIN_WEIGHT, MAX_WEIGHT))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ReliabilityWeight {
    fn default() -> Self {
        Self(INITIAL_WEIGHT)
    }
}

impl fmt::Display for ReliabilityWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for ReliabilityWeight {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<ReliabilityWeight> for f64 {
    fn from(w: ReliabilityWeight) -> Self {
        w.0
    }
}

/// One entry in a helper's performance history, appended on feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSample {
    /// The prediction the helper made for the judged analysis.
    pub predicted: f64,
    /// Whether the overall analysis was judged correct.
    pub correct: bool,
    /// When the feedback was recorded.
    pub timestamp: DateTime<Utc>,
}

/// A registered prediction source with adjustable reliability.
///
/// Created with weight 1.0 and empty history; the weight is mutated only
/// by the feedback learner and never leaves [0.1, 2.0].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Helper {
    /// Unique id chosen at registration.
    pub id: String,
    /// Declared specialty, resolved once at registration.
    pub specialty: Specialty,
    /// Current reliability weight.
    pub weight: ReliabilityWeight,
    /// Feedback outcomes, oldest first.
    pub performance_history: Vec<PerformanceSample>,
}

impl Helper {
    /// Create a helper with the default weight and empty history.
    pub fn new(id: impl Into<String>, specialty: Specialty) -> Self {
        Self::with_weight(id, specialty, ReliabilityWeight::default())
    }

    /// Create a helper with an explicit starting weight.
    pub fn with_weight(
        id: impl Into<String>,
        specialty: Specialty,
        weight: ReliabilityWeight,
    ) -> Self {
        Self {
            id: id.into(),
            specialty,
            weight,
            performance_history: Vec::new(),
        }
    }
}
