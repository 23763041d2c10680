//! Data Bias Analyzer
//!
//! Bias metrics computed directly on a labeled dataset, before any model
//! enters the picture. Answers whether the raw outcomes already favor
//! the privileged group.
use crate::binarize::binarize;
use crate::data::NumericSequence;
use crate::errors::FairlensError;
use crate::partition::GroupPartition;
use crate::report::{AnalysisKind, BiasReport};
use crate::utils::validate_same_length;
use log::warn;
use std::fmt::Display;

/// Compute data bias metrics for one population snapshot.
///
/// * `attribute` - Protected attribute value per record.
/// * `outcome` - Outcome value per record, in any supported numeric representation.
/// * `privileged` - Attribute value selecting the privileged subgroup.
/// * `outcome_threshold` - Outcomes at or above this value count as positive.
pub fn perform_analysis<L, S>(
    attribute: &[L],
    outcome: &S,
    privileged: &L,
    outcome_threshold: f64,
) -> Result<BiasReport, FairlensError>
where
    L: PartialEq + Display,
    S: NumericSequence + ?Sized,
{
    validate_same_length("outcome", attribute.len(), outcome.len())?;
    let partition = GroupPartition::by_label(attribute, privileged)?;
    if let Some(diagnostic) = partition.empty_group_diagnostic(privileged) {
        warn!("{}", diagnostic);
    }
    let outcome_labels = binarize(&outcome.to_canonical(), outcome_threshold);
    Ok(BiasReport::build(AnalysisKind::DataBias, &partition, &outcome_labels, None))
}
