//! Combined prediction + diagnosis handed to the presentation layer

use leafdx_types::PredictionResult;
use serde::Serialize;

use super::DiagnosisEntry;

/// Overall outcome shown on the result card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Healthy,
    Diseased,
    /// No usable label; render the generic failure message, never a partial card
    Unclassified,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Healthy => "Healthy",
            Verdict::Diseased => "Disease detected",
            Verdict::Unclassified => "Unclassified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisReport {
    pub prediction: PredictionResult,
    pub verdict: Verdict,
    /// Absent exactly when `verdict` is `Unclassified`
    pub diagnosis: Option<&'static DiagnosisEntry>,
}

impl DiagnosisReport {
    pub const UNCLASSIFIED_MESSAGE: &'static str =
        "Could not classify the image. Please try a different one.";

    pub fn is_classified(&self) -> bool {
        self.verdict != Verdict::Unclassified
    }
}
