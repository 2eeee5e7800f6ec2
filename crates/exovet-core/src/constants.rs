/// Exovet system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound for a helper's reliability weight.
pub const MIN_WEIGHT: f64 = 0.1;

/// Upper bound for a helper's reliability weight.
pub const MAX_WEIGHT: f64 = 2.0;

/// Reliability weight assigned to a freshly registered helper.
pub const INITIAL_WEIGHT: f64 = 1.0;

/// Default learning rate for feedback weight updates.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Fixed step size scaled by the loss gradient on feedback.
pub const FEEDBACK_STEP: f64 = 0.01;

/// Number of recent consensus-strength scores retained for status reports.
pub const CONSENSUS_WINDOW: usize = 50;

/// Predictions are clamped into [floor, ceiling] before the
/// cross-entropy gradient to avoid log singularities.
pub const PREDICTION_FLOOR: f64 = 0.001;
pub const PREDICTION_CEILING: f64 = 0.999;

/// Standard deviation representing maximal disagreement on a [0,1] scale.
/// Used to normalize consensus strength.
pub const MAX_SPREAD_STDDEV: f64 = 0.5;
