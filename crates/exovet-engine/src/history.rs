//! AnalysisHistory — append-only record of past analyses.
//!
//! Records are looked up by analysis id (never by timestamp proximity,
//! which misbehaves under rapid submissions). Feedback is a single-shot
//! terminal mutation per record. The history also tracks the counters
//! behind system status: total analyses, feedback counts, and a sliding
//! window of recent consensus-strength scores.

use std::collections::{HashMap, VecDeque};

use exovet_core::errors::{VetError, VetResult};
use exovet_core::models::analysis::{AnalysisRecord, FeedbackRecord};

/// Append-only analysis log with id lookup and status counters.
pub struct AnalysisHistory {
    records: Vec<AnalysisRecord>,
    index: HashMap<String, usize>,
    recent_consensus: VecDeque<f64>,
    window: usize,
    feedback_count: usize,
    correct_count: usize,
}

impl AnalysisHistory {
    /// Create an empty history with the given consensus-score window.
    pub fn new(window: usize) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            recent_consensus: VecDeque::new(),
            window,
            feedback_count: 0,
            correct_count: 0,
        }
    }

    /// Append a freshly created record.
    pub fn append(&mut self, record: AnalysisRecord) {
        self.recent_consensus
            .push_back(record.verdict.consensus_strength);
        while self.recent_consensus.len() > self.window {
            self.recent_consensus.pop_front();
        }
        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
    }

    /// Look up a record by analysis id.
    pub fn get(&self, analysis_id: &str) -> VetResult<&AnalysisRecord> {
        self.index
            .get(analysis_id)
            .map(|&i| &self.records[i])
            .ok_or_else(|| VetError::UnknownAnalysis {
                id: analysis_id.to_string(),
            })
    }

    /// Attach feedback to a record. Fails if the record is unknown or
    /// already has feedback (the terminal mutation happens at most once).
    pub fn attach_feedback(
        &mut self,
        analysis_id: &str,
        feedback: FeedbackRecord,
    ) -> VetResult<&AnalysisRecord> {
        let i = *self
            .index
            .get(analysis_id)
            .ok_or_else(|| VetError::UnknownAnalysis {
                id: analysis_id.to_string(),
            })?;
        let record = &mut self.records[i];
        if record.feedback.is_some() {
            return Err(VetError::FeedbackAlreadyApplied {
                id: analysis_id.to_string(),
            });
        }
        if feedback.is_correct {
            self.correct_count += 1;
        }
        self.feedback_count += 1;
        record.feedback = Some(feedback);
        Ok(&self.records[i])
    }

    /// Total analyses recorded.
    pub fn total_analyses(&self) -> usize {
        self.records.len()
    }

    /// Total feedback judgments received.
    pub fn total_feedback(&self) -> usize {
        self.feedback_count
    }

    /// Fraction of feedback judged correct; `None` before any feedback.
    pub fn accuracy(&self) -> Option<f64> {
        if self.feedback_count == 0 {
            return None;
        }
        Some(self.correct_count as f64 / self.feedback_count as f64)
    }

    /// Consensus-strength scores of recent analyses, oldest first.
    pub fn recent_consensus_scores(&self) -> Vec<f64> {
        self.recent_consensus.iter().copied().collect()
    }

    /// The most recent records, newest first, capped at `limit`.
    pub fn recent(&self, limit: usize) -> Vec<&AnalysisRecord> {
        self.records.iter().rev().take(limit).collect()
    }
}
