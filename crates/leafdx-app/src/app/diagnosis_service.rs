//! Diagnosis Service - the upload -> classify -> explain use case
//!
//! 1. Decode and validate the uploaded image
//! 2. Classify it with the borrowed model handle
//! 3. Combine the prediction with the diagnosis catalog

use crate::config::Config;
use crate::scanner::{decode_image, load_image};
use image::DynamicImage;
use leafdx_domain::{build_report, DiagnosisReport};
use leafdx_types::Result;
use leafdx_vision::{Classifier, Model, ModelProbe};
use std::path::Path;

pub struct DiagnosisService<'m> {
    classifier: Classifier<'m>,
}

impl<'m> DiagnosisService<'m> {
    /// Build the service around a model loaded once at startup
    pub fn new(model: &'m dyn Model, config: &Config) -> Self {
        let classifier = Classifier::new(model, config.preprocess())
            .with_softmax_tolerance(config.softmax_tolerance);
        Self { classifier }
    }

    pub fn diagnose_image(&self, image: &DynamicImage) -> Result<DiagnosisReport> {
        let prediction = self.classifier.classify(image)?;
        let report = build_report(prediction);
        log::info!(
            "Diagnosis: {} ({:.2}%)",
            report.prediction.label,
            report.prediction.confidence * 100.0
        );
        Ok(report)
    }

    pub fn diagnose_path(&self, path: &Path) -> Result<DiagnosisReport> {
        let image = load_image(path)?;
        self.diagnose_image(&image)
    }

    pub fn diagnose_bytes(&self, bytes: &[u8]) -> Result<DiagnosisReport> {
        let image = decode_image(bytes)?;
        self.diagnose_image(&image)
    }

    pub fn probe(&self) -> Result<ModelProbe> {
        self.classifier.probe()
    }
}
