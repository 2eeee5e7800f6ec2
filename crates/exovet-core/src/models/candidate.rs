//! Candidate signal passed to predictors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A candidate astronomical signal.
///
/// The engine treats the feature map as opaque: it is handed to every
/// predictor unchanged. Any field may be absent; predictors must tolerate
/// missing features. Conventional feature names: `period` (days),
/// `depth` (fractional flux dip), `duration` (hours), `stellar_mass`
/// (solar masses), `stellar_radius` (solar radii), `temperature` (K),
/// `noise` (fractional photometric noise).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    /// Optional catalog designation, e.g. "Kepler-452".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    /// Named numeric features. BTreeMap keeps serialized output stable.
    pub features: BTreeMap<String, f64>,
}

impl Candidate {
    /// Create an empty candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a candidate with a catalog designation.
    pub fn named(designation: impl Into<String>) -> Self {
        Self {
            designation: Some(designation.into()),
            features: BTreeMap::new(),
        }
    }

    /// Builder-style feature insertion.
    pub fn with_feature(mut self, name: impl Into<String>, value: f64) -> Self {
        self.features.insert(name.into(), value);
        self
    }

    /// Look up a feature by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.features.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_features_read_as_none() {
        let candidate = Candidate::named("Kepler-452").with_feature("period", 384.8);
        assert_eq!(candidate.get("period"), Some(384.8));
        assert_eq!(candidate.get("depth"), None);
    }
}
