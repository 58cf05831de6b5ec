//! Classification types

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// Diagnosis category emitted by the classifier.
///
/// Variant order is the model's output order. Every index <-> label conversion goes
/// through [`ClassLabel::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassLabel {
    #[serde(rename = "Potato___Early_blight")]
    EarlyBlight,
    #[serde(rename = "Potato___Late_blight")]
    LateBlight,
    #[serde(rename = "Potato___healthy")]
    Healthy,
}

impl ClassLabel {
    /// All labels, indexed by model output position
    pub const ALL: [ClassLabel; 3] = [
        ClassLabel::EarlyBlight,
        ClassLabel::LateBlight,
        ClassLabel::Healthy,
    ];

    /// Label at a model output index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Model output index of this label
    pub fn index(self) -> usize {
        match self {
            ClassLabel::EarlyBlight => 0,
            ClassLabel::LateBlight => 1,
            ClassLabel::Healthy => 2,
        }
    }

    /// Class name as the model was trained with
    pub fn as_str(self) -> &'static str {
        match self {
            ClassLabel::EarlyBlight => "Potato___Early_blight",
            ClassLabel::LateBlight => "Potato___Late_blight",
            ClassLabel::Healthy => "Potato___healthy",
        }
    }

    pub fn is_healthy(self) -> bool {
        matches!(self, ClassLabel::Healthy)
    }
}

impl std::fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| Error::UnknownLabel(s.to_string()))
    }
}

/// Label attached to a prediction: a known class or the unknown sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PredictedLabel {
    Class(ClassLabel),
    Unknown,
}

impl PredictedLabel {
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    pub fn as_str(self) -> &'static str {
        match self {
            PredictedLabel::Class(label) => label.as_str(),
            PredictedLabel::Unknown => Self::UNKNOWN_NAME,
        }
    }

    pub fn class(self) -> Option<ClassLabel> {
        match self {
            PredictedLabel::Class(label) => Some(label),
            PredictedLabel::Unknown => None,
        }
    }
}

impl From<ClassLabel> for PredictedLabel {
    fn from(label: ClassLabel) -> Self {
        PredictedLabel::Class(label)
    }
}

impl From<PredictedLabel> for String {
    fn from(label: PredictedLabel) -> Self {
        label.as_str().to_string()
    }
}

impl From<String> for PredictedLabel {
    fn from(s: String) -> Self {
        s.parse::<ClassLabel>()
            .map(PredictedLabel::Class)
            .unwrap_or(PredictedLabel::Unknown)
    }
}

impl std::fmt::Display for PredictedLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: PredictedLabel,
    /// Maximum of the model output vector, in [0, 1]. Not a calibrated probability.
    pub confidence: f32,
}

impl PredictionResult {
    pub fn new(label: ClassLabel, confidence: f32) -> Self {
        Self {
            label: PredictedLabel::Class(label),
            confidence,
        }
    }

    /// Sentinel returned when the output cannot be mapped to a known label
    pub fn unknown() -> Self {
        Self {
            label: PredictedLabel::Unknown,
            confidence: 0.0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.label == PredictedLabel::Unknown
    }
}
