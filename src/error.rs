//! Error types for the scoring and comparison engine

use thiserror::Error;

/// Failures raised by the engine before any score or winner is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Criteria that cannot be scored against (e.g. a zero budget)
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// Scoring weights that cannot normalize a score
    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    /// Comparison requested over zero cars
    #[error("Cannot compare an empty set of cars")]
    EmptyComparisonSet,

    /// A car in the comparison set has no computed score
    #[error("No score computed for car '{0}'")]
    MissingScore(String),

    /// A string that does not name any known variant of an enumeration
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownEnumValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
