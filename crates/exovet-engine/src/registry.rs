//! HelperRegistry — owns the registered helpers and their predictors.
//!
//! Helpers are stored in registration order (order affects nothing
//! semantically but keeps explanation tie-breaking and status output
//! reproducible). The specialty tag is resolved to a concrete predictor
//! exactly once, at registration; helpers are never removed during a run.

use std::collections::HashMap;

use tracing::info;

use exovet_core::config::FederationConfig;
use exovet_core::constants;
use exovet_core::errors::{VetError, VetResult};
use exovet_core::models::helper::{Helper, PerformanceSample, ReliabilityWeight, Specialty};
use exovet_core::traits::Predictor;

use crate::predictors;

/// A helper together with the predictor that backs it.
pub struct HelperEntry {
    /// Identity, weight, and history.
    pub helper: Helper,
    /// Prediction source resolved at registration.
    pub predictor: Box<dyn Predictor>,
}

/// Registry of all helpers, in registration order.
pub struct HelperRegistry {
    entries: Vec<HelperEntry>,
    index: HashMap<String, usize>,
    initial_weight: f64,
    min_weight: f64,
    max_weight: f64,
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            initial_weight: constants::INITIAL_WEIGHT,
            min_weight: constants::MIN_WEIGHT,
            max_weight: constants::MAX_WEIGHT,
        }
    }
}

impl HelperRegistry {
    /// Create an empty registry with the default weight policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry taking its initial weight and bounds
    /// from the config.
    pub fn with_config(config: &FederationConfig) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            initial_weight: config.initial_weight,
            min_weight: config.min_weight,
            max_weight: config.max_weight,
        }
    }

    /// Register a helper under a specialty tag, resolving the tag to the
    /// builtin predictor for that specialty. Unrecognized tags fall back
    /// to the general predictor.
    pub fn add_helper(&mut self, id: impl Into<String>, specialty_tag: &str) -> VetResult<()> {
        let specialty: Specialty = specialty_tag
            .parse()
            .unwrap_or(Specialty::General);
        let predictor = predictors::for_specialty(specialty);
        self.add_helper_with_predictor(id, specialty, predictor)
    }

    /// Register a helper with a caller-supplied predictor.
    pub fn add_helper_with_predictor(
        &mut self,
        id: impl Into<String>,
        specialty: Specialty,
        predictor: Box<dyn Predictor>,
    ) -> VetResult<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(VetError::DuplicateHelper { id });
        }

        info!(helper_id = %id, specialty = %specialty, "helper registered");

        let weight = ReliabilityWeight::new(self.initial_weight);
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push(HelperEntry {
            helper: Helper::with_weight(id, specialty, weight),
            predictor,
        });
        Ok(())
    }

    /// All helpers in registration order.
    pub fn helpers(&self) -> impl Iterator<Item = &Helper> {
        self.entries.iter().map(|e| &e.helper)
    }

    /// All entries (helper + predictor) in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &HelperEntry> {
        self.entries.iter()
    }

    /// Current reliability weight of a helper.
    pub fn get_weight(&self, id: &str) -> VetResult<f64> {
        self.entry(id).map(|e| e.helper.weight.value())
    }

    /// Look up a helper by id.
    pub fn get_helper(&self, id: &str) -> VetResult<&Helper> {
        self.entry(id).map(|e| &e.helper)
    }

    /// Number of registered helpers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrite a helper's weight, clamped to the configured bounds.
    /// Only the feedback learner path calls this.
    pub(crate) fn set_weight(&mut self, id: &str, weight: f64) -> VetResult<()> {
        let clamped = weight.clamp(self.min_weight, self.max_weight);
        let entry = self.entry_mut(id)?;
        entry.helper.weight = ReliabilityWeight::new(clamped);
        Ok(())
    }

    /// Append a feedback sample to a helper's performance history.
    pub(crate) fn record_sample(&mut self, id: &str, sample: PerformanceSample) -> VetResult<()> {
        let entry = self.entry_mut(id)?;
        entry.helper.performance_history.push(sample);
        Ok(())
    }

    fn entry(&self, id: &str) -> VetResult<&HelperEntry> {
        self.index
            .get(id)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| VetError::UnknownHelper { id: id.to_string() })
    }

    fn entry_mut(&mut self, id: &str) -> VetResult<&mut HelperEntry> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.entries[i]),
            None => Err(VetError::UnknownHelper { id: id.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_creates_helper_with_default_weight() {
        let mut registry = HelperRegistry::new();
        registry.add_helper("kepler_photometry", "transit").unwrap();

        let helper = registry.get_helper("kepler_photometry").unwrap();
        assert_eq!(helper.specialty, Specialty::Transit);
        assert!((helper.weight.value() - 1.0).abs() < f64::EPSILON);
        assert!(helper.performance_history.is_empty());
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut registry = HelperRegistry::new();
        registry.add_helper("a", "transit").unwrap();
        let result = registry.add_helper("a", "imaging");
        assert!(matches!(result, Err(VetError::DuplicateHelper { .. })));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_helper_lookup_fails() {
        let registry = HelperRegistry::new();
        assert!(matches!(
            registry.get_weight("ghost"),
            Err(VetError::UnknownHelper { .. })
        ));
    }

    #[test]
    fn helpers_iterate_in_registration_order() {
        let mut registry = HelperRegistry::new();
        for id in ["c", "a", "b"] {
            registry.add_helper(id, "general").unwrap();
        }
        let ids: Vec<&str> = registry.helpers().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn unrecognized_tag_registers_as_general() {
        let mut registry = HelperRegistry::new();
        registry.add_helper("astrometry_ai", "astrometry").unwrap();
        let helper = registry.get_helper("astrometry_ai").unwrap();
        assert_eq!(helper.specialty, Specialty::General);
    }

    #[test]
    fn configured_initial_weight_is_applied_at_registration() {
        let config = FederationConfig {
            initial_weight: 0.5,
            ..FederationConfig::default()
        };
        let mut registry = HelperRegistry::with_config(&config);
        registry.add_helper("a", "transit").unwrap();
        assert!((registry.get_weight("a").unwrap() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn set_weight_respects_configured_bounds() {
        let config = FederationConfig {
            min_weight: 0.5,
            max_weight: 1.5,
            ..FederationConfig::default()
        };
        let mut registry = HelperRegistry::with_config(&config);
        registry.add_helper("a", "general").unwrap();

        registry.set_weight("a", 1.9).unwrap();
        assert!((registry.get_weight("a").unwrap() - 1.5).abs() < f64::EPSILON);
        registry.set_weight("a", 0.2).unwrap();
        assert!((registry.get_weight("a").unwrap() - 0.5).abs() < f64::EPSILON);
    }
}
