//! System-wide status and per-helper statistics.

use serde::{Deserialize, Serialize};

use super::helper::Specialty;

/// Per-helper summary for status reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperStatistics {
    /// The helper's id.
    pub helper_id: String,
    /// The helper's declared specialty.
    pub specialty: Specialty,
    /// Current reliability weight.
    pub reliability_weight: f64,
    /// Number of feedback samples accumulated.
    pub performance_history_length: usize,
}

/// Snapshot of system-wide metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    /// Total analyses performed.
    pub total_analyses: usize,
    /// Total feedback judgments received.
    pub total_feedback: usize,
    /// Fraction of feedback judged correct; `None` before any feedback.
    pub system_accuracy: Option<f64>,
    /// Number of registered helpers.
    pub helper_count: usize,
    /// Per-helper statistics in registration order.
    pub helper_statistics: Vec<HelperStatistics>,
    /// Consensus-strength values of the most recent analyses,
    /// oldest first, capped at the configured window.
    pub recent_consensus_scores: Vec<f64>,
}
