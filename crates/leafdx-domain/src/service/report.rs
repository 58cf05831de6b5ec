//! Report building: prediction + catalog lookup

use leafdx_types::PredictionResult;

use crate::catalog::lookup;
use crate::model::{DiagnosisReport, Verdict};

/// Combine a prediction with its catalog entry.
///
/// The unknown sentinel and any catalog miss both produce an `Unclassified` report
/// without a diagnosis.
pub fn build_report(prediction: PredictionResult) -> DiagnosisReport {
    let classified = prediction
        .label
        .class()
        .and_then(|label| lookup(label.into()).map(|entry| (label, entry)));

    match classified {
        Some((label, entry)) => DiagnosisReport {
            prediction,
            verdict: if label.is_healthy() {
                Verdict::Healthy
            } else {
                Verdict::Diseased
            },
            diagnosis: Some(entry),
        },
        None => DiagnosisReport {
            prediction,
            verdict: Verdict::Unclassified,
            diagnosis: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leafdx_types::ClassLabel;

    #[test]
    fn test_healthy_report() {
        let report = build_report(PredictionResult::new(ClassLabel::Healthy, 0.97));
        assert_eq!(report.verdict, Verdict::Healthy);
        assert_eq!(report.diagnosis.unwrap().title, "Healthy");
        assert!(report.is_classified());
    }

    #[test]
    fn test_disease_report() {
        for label in [ClassLabel::EarlyBlight, ClassLabel::LateBlight] {
            let report = build_report(PredictionResult::new(label, 0.6));
            assert_eq!(report.verdict, Verdict::Diseased);
            assert!(report.diagnosis.is_some());
        }
    }

    #[test]
    fn test_unknown_report_has_no_diagnosis() {
        let report = build_report(PredictionResult::unknown());
        assert_eq!(report.verdict, Verdict::Unclassified);
        assert!(report.diagnosis.is_none());
        assert!(!report.is_classified());
        assert_eq!(report.prediction.confidence, 0.0);
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_report(PredictionResult::new(ClassLabel::EarlyBlight, 0.5));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["verdict"], "diseased");
        assert_eq!(value["prediction"]["label"], "Potato___Early_blight");
        assert_eq!(value["diagnosis"]["title"], "Early Blight");

        let unknown = serde_json::to_value(build_report(PredictionResult::unknown())).unwrap();
        assert_eq!(unknown["verdict"], "unclassified");
        assert!(unknown["diagnosis"].is_null());
    }
}
