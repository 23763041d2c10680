use crate::constants::DEFAULT_TOLERANCE;
use crate::errors::FairlensError;
use crate::metrics::rate::Rate;
use crate::report::BiasReport;
use crate::utils::validate_tolerance;
use hashbrown::HashMap;
use log::info;
use serde::{Deserialize, Serialize};

/// Movement of a single metric between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDrift {
    pub baseline: Rate,
    pub runtime: Rate,
    /// Runtime minus baseline, undefined when either side is undefined.
    pub delta: Rate,
    /// True when both sides are defined and |delta| is over tolerance.
    pub exceeded: bool,
}

/// Per-metric drift between two bias reports of the same kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    /// The tolerance the deltas were checked against.
    pub tolerance: f64,
    pub metrics: HashMap<String, MetricDrift>,
    pub any_exceeded: bool,
}

impl DriftReport {
    /// Dump the report as a json object.
    pub fn json_dump(&self) -> Result<String, FairlensError> {
        match serde_json::to_string(self) {
            Ok(json) => Ok(json),
            Err(e) => Err(FairlensError::UnableToSerialize(e.to_string())),
        }
    }
}

/// Compare a runtime bias report against its baseline.
///
/// Both reports must come from the same analyzer variant; a data bias
/// report cannot be checked against a model bias one. When `tolerance`
/// is `None` the default of [`DEFAULT_TOLERANCE`] is used. Undefined
/// metric values propagate into undefined deltas and never count as
/// exceeded.
pub fn runtime_comparison(
    baseline: &BiasReport,
    runtime: &BiasReport,
    tolerance: Option<f64>,
) -> Result<DriftReport, FairlensError> {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    validate_tolerance(tolerance)?;
    if baseline.kind != runtime.kind {
        return Err(FairlensError::SchemaMismatch(
            baseline.kind.as_str().to_string(),
            runtime.kind.as_str().to_string(),
        ));
    }

    let mut metrics = HashMap::new();
    let mut exceeded_names: Vec<&str> = Vec::new();
    for ((name, baseline_value), (_, runtime_value)) in baseline
        .named_metrics()
        .into_iter()
        .zip(runtime.named_metrics())
    {
        let delta = match (baseline_value.value(), runtime_value.value()) {
            (Some(b), Some(r)) => Rate::Defined(r - b),
            _ => Rate::Undefined,
        };
        let exceeded = matches!(delta.value(), Some(d) if d.abs() > tolerance);
        if exceeded {
            exceeded_names.push(name);
        }
        metrics.insert(
            name.to_string(),
            MetricDrift {
                baseline: baseline_value,
                runtime: runtime_value,
                delta,
                exceeded,
            },
        );
    }

    let any_exceeded = !exceeded_names.is_empty();
    if any_exceeded {
        info!(
            "Bias drift over tolerance {} for: {}",
            tolerance,
            exceeded_names.join(", ")
        );
    }
    Ok(DriftReport {
        tolerance,
        metrics,
        any_exceeded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_bias;
    use crate::model_bias;

    fn data_report(attribute: &[&str], outcome: &[f64]) -> BiasReport {
        data_bias::perform_analysis(&attribute.to_vec(), &outcome.to_vec(), &"M", 15.0).unwrap()
    }

    #[test]
    fn test_self_comparison_has_zero_drift() {
        let report = data_report(&["M", "M", "F", "F", "F"], &[20.0, 10.0, 20.0, 5.0, 25.0]);
        for tolerance in [0.0, 0.1, 1.0] {
            let drift = runtime_comparison(&report, &report, Some(tolerance)).unwrap();
            assert!(!drift.any_exceeded);
            for entry in drift.metrics.values() {
                assert_eq!(entry.delta, Rate::Defined(0.0));
                assert!(!entry.exceeded);
            }
        }
    }

    #[test]
    fn test_rate_shift_over_tolerance_is_flagged() {
        // Privileged positive rate moves 0.5 -> 0.8.
        let baseline = data_report(&["M", "M", "F", "F"], &[20.0, 10.0, 20.0, 20.0]);
        let runtime = data_report(
            &["M", "M", "M", "M", "M", "F", "F"],
            &[20.0, 20.0, 20.0, 20.0, 10.0, 20.0, 20.0],
        );
        let drift = runtime_comparison(&baseline, &runtime, Some(0.15)).unwrap();
        assert!(drift.any_exceeded);

        let entry = &drift.metrics["privileged_positive_rate"];
        assert_eq!(entry.baseline, Rate::Defined(0.5));
        assert_eq!(entry.runtime, Rate::Defined(0.8));
        assert!((entry.delta.value().unwrap() - 0.3).abs() < 1e-12);
        assert!(entry.exceeded);

        let steady = &drift.metrics["other_positive_rate"];
        assert_eq!(steady.delta, Rate::Defined(0.0));
        assert!(!steady.exceeded);
    }

    #[test]
    fn test_tolerance_monotonicity() {
        let baseline = data_report(&["M", "M", "F", "F"], &[20.0, 10.0, 20.0, 20.0]);
        let runtime = data_report(
            &["M", "M", "M", "M", "M", "F", "F"],
            &[20.0, 20.0, 20.0, 20.0, 10.0, 20.0, 20.0],
        );
        let mut previous = usize::MAX;
        for tolerance in [0.0, 0.1, 0.2, 0.5, 1.0, 2.0] {
            let drift = runtime_comparison(&baseline, &runtime, Some(tolerance)).unwrap();
            let exceeded_count = drift.metrics.values().filter(|m| m.exceeded).count();
            assert!(exceeded_count <= previous);
            previous = exceeded_count;
        }
    }

    #[test]
    fn test_undefined_metrics_never_exceed() {
        // No privileged records in the runtime snapshot.
        let baseline = data_report(&["M", "F"], &[20.0, 20.0]);
        let runtime = data_report(&["F", "F"], &[20.0, 20.0]);
        let drift = runtime_comparison(&baseline, &runtime, Some(0.0)).unwrap();

        let entry = &drift.metrics["privileged_positive_rate"];
        assert_eq!(entry.runtime, Rate::Undefined);
        assert_eq!(entry.delta, Rate::Undefined);
        assert!(!entry.exceeded);

        let steady = &drift.metrics["other_positive_rate"];
        assert!(steady.delta.is_defined());
    }

    #[test]
    fn test_mixed_report_kinds_are_rejected() {
        let data = data_report(&["M", "F"], &[20.0, 10.0]);
        let model = model_bias::perform_analysis(
            &vec!["M", "F"],
            &vec![20.0, 10.0],
            &vec![18.0, 12.0],
            &"M",
            15.0,
            15.0,
        )
        .unwrap();
        let err = runtime_comparison(&data, &model, None).unwrap_err();
        assert!(matches!(err, FairlensError::SchemaMismatch(_, _)));
    }

    #[test]
    fn test_negative_tolerance_is_rejected() {
        let report = data_report(&["M", "F"], &[20.0, 10.0]);
        let err = runtime_comparison(&report, &report, Some(-0.15)).unwrap_err();
        assert!(matches!(err, FairlensError::InvalidTolerance(_)));
    }

    #[test]
    fn test_default_tolerance_applies_when_not_supplied() {
        let report = data_report(&["M", "M", "F", "F", "F"], &[20.0, 10.0, 20.0, 5.0, 25.0]);
        let drift = runtime_comparison(&report, &report, None).unwrap();
        assert_eq!(drift.tolerance, crate::constants::DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_json_dump() {
        let report = data_report(&["M", "M", "F", "F", "F"], &[20.0, 10.0, 20.0, 5.0, 25.0]);
        let drift = runtime_comparison(&report, &report, None).unwrap();
        let json = drift.json_dump().unwrap();
        assert!(json.contains("any_exceeded"));
        assert!(json.contains("privileged_positive_rate"));
    }

    #[test]
    fn test_model_reports_compare_agreement_metrics() {
        let attribute = vec!["M", "M", "F", "F", "F"];
        let outcome = vec![20.0, 10.0, 20.0, 5.0, 25.0];
        let prediction = vec![18.0, 16.0, 14.0, 2.0, 30.0];
        let report = model_bias::perform_analysis(&attribute, &outcome, &prediction, &"M", 15.0, 15.0).unwrap();
        let drift = runtime_comparison(&report, &report, Some(0.15)).unwrap();
        assert_eq!(drift.metrics.len(), 8);
        assert!(drift.metrics.contains_key("privileged_true_positive_rate"));
        assert!(!drift.any_exceeded);
    }
}
