//! Bias Reports
//!
//! Immutable value objects assembled by the analyzers and consumed by
//! the drift comparator. Reports carry no behavior beyond metric
//! enumeration and JSON serialization for the caller's logging.
use crate::errors::FairlensError;
use crate::metrics::confusion::ConfusionRates;
use crate::metrics::group::{disparate_impact, parity_difference, GroupMetrics};
use crate::metrics::rate::Rate;
use crate::partition::GroupPartition;
use serde::{Deserialize, Serialize};

/// Which analyzer produced a report.
///
/// The kind fixes the metric set, so only reports of the same kind can
/// be compared for drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisKind {
    DataBias,
    ModelBias,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::DataBias => "data bias",
            AnalysisKind::ModelBias => "model bias",
        }
    }
}

/// Per-group outcome-vs-prediction agreement, carried only by model
/// bias reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelAgreement {
    pub privileged: ConfusionRates,
    pub other: ConfusionRates,
}

/// Point-estimate fairness metrics for one population snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub kind: AnalysisKind,
    pub privileged: GroupMetrics,
    pub other: GroupMetrics,
    /// Complement positive rate over privileged positive rate.
    pub disparate_impact_ratio: Rate,
    /// Complement positive rate minus privileged positive rate.
    pub statistical_parity_difference: Rate,
    pub agreement: Option<ModelAgreement>,
}

impl BiasReport {
    pub(crate) fn build(
        kind: AnalysisKind,
        partition: &GroupPartition,
        outcome_labels: &[bool],
        agreement: Option<ModelAgreement>,
    ) -> Self {
        let privileged = GroupMetrics::from_labels(outcome_labels, &partition.privileged);
        let other = GroupMetrics::from_labels(outcome_labels, &partition.other);
        BiasReport {
            kind,
            disparate_impact_ratio: disparate_impact(&other, &privileged),
            statistical_parity_difference: parity_difference(&other, &privileged),
            privileged,
            other,
            agreement,
        }
    }

    /// Named scalar metrics of this report, in a fixed order.
    ///
    /// Reports of the same kind enumerate the same names in the same
    /// order; this is what the drift comparator walks.
    pub fn named_metrics(&self) -> Vec<(&'static str, Rate)> {
        let mut metrics = vec![
            ("privileged_positive_rate", self.privileged.positive_rate),
            ("other_positive_rate", self.other.positive_rate),
            ("disparate_impact_ratio", self.disparate_impact_ratio),
            ("statistical_parity_difference", self.statistical_parity_difference),
        ];
        if let Some(agreement) = &self.agreement {
            metrics.push(("privileged_true_positive_rate", agreement.privileged.true_positive_rate));
            metrics.push(("privileged_false_positive_rate", agreement.privileged.false_positive_rate));
            metrics.push(("other_true_positive_rate", agreement.other.true_positive_rate));
            metrics.push(("other_false_positive_rate", agreement.other.false_positive_rate));
        }
        metrics
    }

    /// Dump the report as a json object.
    pub fn json_dump(&self) -> Result<String, FairlensError> {
        match serde_json::to_string(self) {
            Ok(json) => Ok(json),
            Err(e) => Err(FairlensError::UnableToSerialize(e.to_string())),
        }
    }

    /// Load a report from a json object.
    pub fn from_json(json_str: &str) -> Result<Self, FairlensError> {
        match serde_json::from_str::<BiasReport>(json_str) {
            Ok(report) => Ok(report),
            Err(e) => Err(FairlensError::UnableToDeserialize(e.to_string())),
        }
    }
}
