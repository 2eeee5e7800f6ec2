//! FederationEngine — orchestrates registry, aggregation, learning, and
//! history.
//!
//! The engine is the single logical owner of all helper and history
//! state; mutating operations take `&mut self`. A request-serving
//! facade that needs concurrency wraps the engine in its own lock, which
//! automatically gives every `analyze` a consistent snapshot of all
//! weights and serializes feedback read-modify-writes per helper.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use exovet_core::config::FederationConfig;
use exovet_core::errors::{VetError, VetResult};
use exovet_core::models::analysis::{AnalysisRecord, FeedbackRecord, HelperResult};
use exovet_core::models::candidate::Candidate;
use exovet_core::models::helper::{Helper, PerformanceSample, Specialty};
use exovet_core::models::status::{HelperStatistics, SystemStatus};
use exovet_core::traits::Predictor;

use crate::aggregation;
use crate::history::AnalysisHistory;
use crate::learning::{FeedbackLearner, WeightStep};
use crate::registry::HelperRegistry;

/// The consensus-and-adaptation engine.
pub struct FederationEngine {
    config: FederationConfig,
    registry: HelperRegistry,
    history: AnalysisHistory,
    learner: FeedbackLearner,
}

impl Default for FederationEngine {
    fn default() -> Self {
        // The default config always validates.
        Self::with_config_unchecked(FederationConfig::default())
    }
}

impl FederationEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a validated configuration.
    pub fn with_config(config: FederationConfig) -> VetResult<Self> {
        config.validate()?;
        Ok(Self::with_config_unchecked(config))
    }

    fn with_config_unchecked(config: FederationConfig) -> Self {
        let learner = FeedbackLearner::new(&config);
        let history = AnalysisHistory::new(config.consensus_window);
        let registry = HelperRegistry::with_config(&config);
        Self {
            config,
            registry,
            history,
            learner,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &FederationConfig {
        &self.config
    }

    /// Register a helper under a specialty tag. Unrecognized tags fall
    /// back to the general predictor.
    pub fn add_helper(&mut self, id: impl Into<String>, specialty_tag: &str) -> VetResult<()> {
        self.registry.add_helper(id, specialty_tag)
    }

    /// Register a helper backed by a caller-supplied predictor.
    pub fn add_helper_with_predictor(
        &mut self,
        id: impl Into<String>,
        specialty: Specialty,
        predictor: Box<dyn Predictor>,
    ) -> VetResult<()> {
        self.registry
            .add_helper_with_predictor(id, specialty, predictor)
    }

    /// All helpers in registration order.
    pub fn helpers(&self) -> impl Iterator<Item = &Helper> {
        self.registry.helpers()
    }

    /// Current reliability weight of a helper.
    pub fn get_weight(&self, helper_id: &str) -> VetResult<f64> {
        self.registry.get_weight(helper_id)
    }

    /// Analyze a candidate: collect an estimate from every registered
    /// helper, combine them under current weights, and record the result.
    ///
    /// A failing predictor excludes its helper from this aggregation
    /// (logged skip); the analysis itself fails only when no helpers are
    /// registered at all.
    #[instrument(skip(self, candidate), fields(designation = candidate.designation.as_deref()))]
    pub fn analyze(&mut self, candidate: Candidate) -> VetResult<AnalysisRecord> {
        if self.registry.is_empty() {
            return Err(VetError::NoHelpers);
        }

        let mut results: Vec<HelperResult> = Vec::with_capacity(self.registry.len());
        let mut weights: Vec<f64> = Vec::with_capacity(self.registry.len());

        for entry in self.registry.entries() {
            match entry.predictor.predict(&candidate) {
                Ok(estimate) => {
                    results.push(HelperResult {
                        helper_id: entry.helper.id.clone(),
                        prediction: estimate.prediction,
                        explanation: estimate.explanation,
                    });
                    weights.push(entry.helper.weight.value());
                }
                Err(e) => {
                    warn!(
                        helper_id = %entry.helper.id,
                        error = %e,
                        "predictor failed; excluding helper from this aggregation"
                    );
                }
            }
        }

        let verdict = aggregation::combine(&results, &weights);
        let weight_snapshot = results
            .iter()
            .zip(&weights)
            .map(|(r, w)| (r.helper_id.clone(), *w))
            .collect();

        let record = AnalysisRecord {
            id: Uuid::new_v4().to_string(),
            input: candidate,
            timestamp: Utc::now(),
            helper_results: results,
            weight_snapshot,
            verdict,
            feedback: None,
        };

        info!(
            analysis_id = %record.id,
            prediction = format!("{:.4}", record.verdict.prediction),
            confidence = format!("{:.4}", record.verdict.confidence),
            consensus = format!("{:.4}", record.verdict.consensus_strength),
            classification = %record.verdict.classification,
            helpers = record.helper_results.len(),
            "analysis complete"
        );

        self.history.append(record.clone());
        Ok(record)
    }

    /// Apply a human correctness judgment to a recorded analysis.
    ///
    /// Updates the reliability weight of every helper that contributed a
    /// result to that record, appends to their performance histories, and
    /// attaches the feedback as the record's terminal mutation. Feedback
    /// is single-shot per analysis.
    #[instrument(skip(self))]
    pub fn submit_feedback(
        &mut self,
        analysis_id: &str,
        is_correct: bool,
        ground_truth: Option<bool>,
    ) -> VetResult<Vec<WeightStep>> {
        let record = self.history.get(analysis_id)?;
        if record.feedback.is_some() {
            return Err(VetError::FeedbackAlreadyApplied {
                id: analysis_id.to_string(),
            });
        }

        let contributions: Vec<(String, f64)> = record
            .helper_results
            .iter()
            .map(|r| (r.helper_id.clone(), r.prediction))
            .collect();

        let now = Utc::now();
        let mut steps = Vec::with_capacity(contributions.len());
        for (helper_id, prediction) in contributions {
            let current = self.registry.get_weight(&helper_id)?;
            let step = self.learner.step(&helper_id, current, prediction, is_correct);
            self.registry.set_weight(&helper_id, step.updated)?;
            self.registry.record_sample(
                &helper_id,
                PerformanceSample {
                    predicted: prediction,
                    correct: is_correct,
                    timestamp: now,
                },
            )?;
            steps.push(step);
        }

        self.history.attach_feedback(
            analysis_id,
            FeedbackRecord {
                is_correct,
                ground_truth,
                timestamp: now,
            },
        )?;

        info!(
            analysis_id,
            is_correct,
            helpers_updated = steps.len(),
            "feedback applied"
        );

        Ok(steps)
    }

    /// Look up a recorded analysis by id.
    pub fn get_analysis(&self, analysis_id: &str) -> VetResult<&AnalysisRecord> {
        self.history.get(analysis_id)
    }

    /// The most recent analyses, newest first.
    pub fn recent_analyses(&self, limit: usize) -> Vec<&AnalysisRecord> {
        self.history.recent(limit)
    }

    /// Current system-wide status and per-helper statistics.
    pub fn status(&self) -> SystemStatus {
        let helper_statistics = self
            .registry
            .helpers()
            .map(|h| HelperStatistics {
                helper_id: h.id.clone(),
                specialty: h.specialty,
                reliability_weight: h.weight.value(),
                performance_history_length: h.performance_history.len(),
            })
            .collect();

        SystemStatus {
            total_analyses: self.history.total_analyses(),
            total_feedback: self.history.total_feedback(),
            system_accuracy: self.history.accuracy(),
            helper_count: self.registry.len(),
            helper_statistics,
            recent_consensus_scores: self.history.recent_consensus_scores(),
        }
    }
}
