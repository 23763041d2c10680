use crate::metrics::rate::Rate;
use serde::{Deserialize, Serialize};

/// Count and positive-rate summary for one subgroup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupMetrics {
    /// Number of records in the subgroup.
    pub count: usize,
    /// Number of those records classified positive.
    pub positive_count: usize,
    /// `positive_count` over `count`, undefined for an empty subgroup.
    pub positive_rate: Rate,
}

impl GroupMetrics {
    /// Summarize the binary labels of one subgroup of the population.
    ///
    /// * `labels` - Positive/negative label per record of the full population.
    /// * `indices` - The subgroup's index set from the partition.
    pub fn from_labels(labels: &[bool], indices: &[usize]) -> Self {
        let count = indices.len();
        let positive_count = indices.iter().filter(|&&i| labels[i]).count();
        GroupMetrics {
            count,
            positive_count,
            positive_rate: Rate::from_ratio(positive_count as f64, count as f64),
        }
    }
}

/// Ratio of the complement's positive rate over the privileged rate.
///
/// Undefined when either rate is undefined, or when the privileged rate
/// is zero.
pub fn disparate_impact(other: &GroupMetrics, privileged: &GroupMetrics) -> Rate {
    match (other.positive_rate.value(), privileged.positive_rate.value()) {
        (Some(o), Some(p)) => Rate::from_ratio(o, p),
        _ => Rate::Undefined,
    }
}

/// Difference between the complement's positive rate and the privileged
/// rate.
pub fn parity_difference(other: &GroupMetrics, privileged: &GroupMetrics) -> Rate {
    match (other.positive_rate.value(), privileged.positive_rate.value()) {
        (Some(o), Some(p)) => Rate::Defined(o - p),
        _ => Rate::Undefined,
    }
}
