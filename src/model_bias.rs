//! Model Bias Analyzer
//!
//! Bias metrics for model evaluation. On top of the data bias pipeline,
//! predictions are binarized against their own threshold and each
//! subgroup gets outcome-vs-prediction agreement rates.
use crate::binarize::binarize;
use crate::data::NumericSequence;
use crate::errors::FairlensError;
use crate::metrics::confusion::ConfusionRates;
use crate::partition::GroupPartition;
use crate::report::{AnalysisKind, BiasReport, ModelAgreement};
use crate::utils::validate_same_length;
use log::warn;
use std::fmt::Display;

/// Compute model bias metrics for one population snapshot.
///
/// * `attribute` - Protected attribute value per record.
/// * `outcome` - Actual outcome value per record.
/// * `prediction` - Predicted score per record.
/// * `privileged` - Attribute value selecting the privileged subgroup.
/// * `outcome_threshold` - Outcomes at or above this value count as positive.
/// * `prediction_threshold` - Predictions at or above this value count as positive.
pub fn perform_analysis<L, S, P>(
    attribute: &[L],
    outcome: &S,
    prediction: &P,
    privileged: &L,
    outcome_threshold: f64,
    prediction_threshold: f64,
) -> Result<BiasReport, FairlensError>
where
    L: PartialEq + Display,
    S: NumericSequence + ?Sized,
    P: NumericSequence + ?Sized,
{
    validate_same_length("outcome", attribute.len(), outcome.len())?;
    validate_same_length("prediction", attribute.len(), prediction.len())?;
    let partition = GroupPartition::by_label(attribute, privileged)?;
    if let Some(diagnostic) = partition.empty_group_diagnostic(privileged) {
        warn!("{}", diagnostic);
    }
    let outcome_labels = binarize(&outcome.to_canonical(), outcome_threshold);
    let prediction_labels = binarize(&prediction.to_canonical(), prediction_threshold);
    let agreement = ModelAgreement {
        privileged: ConfusionRates::from_labels(&outcome_labels, &prediction_labels, &partition.privileged),
        other: ConfusionRates::from_labels(&outcome_labels, &prediction_labels, &partition.other),
    };
    Ok(BiasReport::build(
        AnalysisKind::ModelBias,
        &partition,
        &outcome_labels,
        Some(agreement),
    ))
}
