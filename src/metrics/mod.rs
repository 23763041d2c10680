//! Metrics
//!
//! Per-group rate metrics and the cross-group comparisons built on them.
pub mod confusion;
pub mod group;
pub mod rate;
