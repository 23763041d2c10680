//! Errors
//!
//! Custom error types used throughout the `fairlens` crate.
use thiserror::Error;

/// Errors that can occur while computing bias metrics or comparing reports.
#[derive(Debug, Error)]
pub enum FairlensError {
    /// Input arrays disagree on population size.
    #[error("Length mismatch for {0}: the population has {1} records but {2} were provided.")]
    ShapeMismatch(String, usize, usize),
    /// The population holds no records at all.
    #[error("The population is empty, no metrics can be computed.")]
    EmptyPopulation,
    /// The privileged label matched no records.
    #[error("The privileged label {0} matched no records.")]
    EmptyGroup(String),
    /// Baseline and runtime reports carry different metric sets.
    #[error("Cannot compare a {0} report against a {1} report.")]
    SchemaMismatch(String, String),
    /// A negative tolerance was passed for drift comparison.
    #[error("Invalid tolerance {0}, expected a non-negative number.")]
    InvalidTolerance(f64),
    /// Unable to serialize a report.
    #[error("Unable to serialize report: {0}")]
    UnableToSerialize(String),
    /// Unable to deserialize a report.
    #[error("Unable to deserialize report: {0}")]
    UnableToDeserialize(String),
}
