use crate::metrics::rate::Rate;
use serde::{Deserialize, Serialize};

/// Outcome-vs-prediction agreement rates for one subgroup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfusionRates {
    /// Predicted positive among actual positives.
    pub true_positive_rate: Rate,
    /// Predicted positive among actual negatives.
    pub false_positive_rate: Rate,
}

impl ConfusionRates {
    /// Compare predicted labels against actual labels over one subgroup.
    ///
    /// Both label arrays cover the full population; `indices` restricts
    /// the tally to the subgroup. A subgroup with no actual positives
    /// (or no actual negatives) yields an undefined rate rather than a
    /// division by zero.
    pub fn from_labels(actual: &[bool], predicted: &[bool], indices: &[usize]) -> Self {
        let mut actual_positive = 0_usize;
        let mut actual_negative = 0_usize;
        let mut true_positive = 0_usize;
        let mut false_positive = 0_usize;
        for &i in indices {
            if actual[i] {
                actual_positive += 1;
                if predicted[i] {
                    true_positive += 1;
                }
            } else {
                actual_negative += 1;
                if predicted[i] {
                    false_positive += 1;
                }
            }
        }
        ConfusionRates {
            true_positive_rate: Rate::from_ratio(true_positive as f64, actual_positive as f64),
            false_positive_rate: Rate::from_ratio(false_positive as f64, actual_negative as f64),
        }
    }
}
