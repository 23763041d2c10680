//! Drift Detection
//!
//! Compares a baseline bias report against a later runtime report and
//! flags the metrics whose movement exceeds a tolerance.

pub mod comparison;

pub use comparison::{runtime_comparison, DriftReport, MetricDrift};
