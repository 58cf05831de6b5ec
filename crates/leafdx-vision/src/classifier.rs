//! Classifier service: image -> (label, confidence)

use image::DynamicImage;
use leafdx_types::{ClassLabel, PredictionResult, Result};
use serde::Serialize;

use crate::model::Model;
use crate::preprocess::{to_input_tensor, PreprocessConfig, INPUT_SIZE};

/// Allowed deviation of the output sum from 1.0 before the softmax check warns
pub const DEFAULT_SOFTMAX_TOLERANCE: f32 = 0.01;

/// Stateless classifier over a borrowed model handle
pub struct Classifier<'m> {
    model: &'m dyn Model,
    preprocess: PreprocessConfig,
    softmax_tolerance: f32,
}

impl<'m> Classifier<'m> {
    pub fn new(model: &'m dyn Model, preprocess: PreprocessConfig) -> Self {
        Self {
            model,
            preprocess,
            softmax_tolerance: DEFAULT_SOFTMAX_TOLERANCE,
        }
    }

    pub fn with_softmax_tolerance(mut self, tolerance: f32) -> Self {
        self.softmax_tolerance = tolerance.abs();
        self
    }

    /// Classify one image of any resolution.
    pub fn classify(&self, image: &DynamicImage) -> Result<PredictionResult> {
        let input = to_input_tensor(image, &self.preprocess);
        let scores = self.model.predict(input)?;

        let sum: f32 = scores.iter().sum();
        if scores.len() != ClassLabel::ALL.len() {
            log::warn!(
                "model returned {} scores for {} labels",
                scores.len(),
                ClassLabel::ALL.len()
            );
        } else if (sum - 1.0).abs() > self.softmax_tolerance {
            log::warn!("model output sums to {sum:.4}, not a softmax distribution");
        }

        let prediction = select_prediction(&scores);
        log::debug!("scores {:?} -> {} ({:.4})", scores, prediction.label, prediction.confidence);
        Ok(prediction)
    }

    /// Run a black input through the model and describe its output.
    pub fn probe(&self) -> Result<ModelProbe> {
        let black = DynamicImage::new_rgb8(INPUT_SIZE, INPUT_SIZE);
        let scores = self.model.predict(to_input_tensor(&black, &self.preprocess))?;
        Ok(ModelProbe::from_scores(&scores, self.softmax_tolerance))
    }
}

/// Pick the label at the first maximum of `scores`.
///
/// Returns the unknown sentinel when the output is empty, the maximum is not finite, or the
/// index is outside the label set. A finite maximum outside [0, 1] is clamped.
pub fn select_prediction(scores: &[f32]) -> PredictionResult {
    let mut best: Option<(usize, f32)> = None;
    for (index, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            log::warn!("model output contains NaN at index {index}");
            return PredictionResult::unknown();
        }
        match best {
            Some((_, max)) if score <= max => {}
            _ => best = Some((index, score)),
        }
    }

    let Some((index, max)) = best else {
        log::warn!("model returned an empty output");
        return PredictionResult::unknown();
    };
    if !max.is_finite() {
        log::warn!("model output maximum is not finite");
        return PredictionResult::unknown();
    }

    let Some(label) = ClassLabel::from_index(index) else {
        log::warn!(
            "predicted index {index} is outside the {} known labels",
            ClassLabel::ALL.len()
        );
        return PredictionResult::unknown();
    };

    let confidence = if (0.0..=1.0).contains(&max) {
        max
    } else {
        log::warn!("confidence {max} outside [0, 1], clamping");
        max.clamp(0.0, 1.0)
    };

    PredictionResult::new(label, confidence)
}

/// Shape and distribution check of a loaded model's output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelProbe {
    pub output_len: usize,
    pub label_count: usize,
    pub output_sum: f32,
    pub looks_like_softmax: bool,
}

impl ModelProbe {
    pub fn from_scores(scores: &[f32], tolerance: f32) -> Self {
        let output_sum: f32 = scores.iter().sum();
        let looks_like_softmax = scores.iter().all(|s| (0.0..=1.0).contains(s))
            && (output_sum - 1.0).abs() <= tolerance;
        Self {
            output_len: scores.len(),
            label_count: ClassLabel::ALL.len(),
            output_sum,
            looks_like_softmax,
        }
    }

    /// Output length matches the label set and the output looks like a softmax
    pub fn is_consistent(&self) -> bool {
        self.output_len == self.label_count && self.looks_like_softmax
    }
}
