//! End-to-end diagnosis flow: image file -> report
//!
//! The tests with a real artifact are ignored by default:
//!   LEAFDX_MODEL=/path/to/model.onnx cargo test -p leafdx-app --test diagnosis_flow -- --ignored

use image::{DynamicImage, Rgb, RgbImage};
use leafdx_app::app::DiagnosisService;
use leafdx_app::config::Config;
use leafdx_app::startup::load_model;
use leafdx_domain::{DiagnosisReport, Verdict};
use leafdx_types::{ClassLabel, PredictedLabel, Result};
use leafdx_vision::{InputTensor, Model};
use std::cell::Cell;
use std::path::PathBuf;

/// Fixed output, counts forward passes
struct ScriptedModel {
    scores: Vec<f32>,
    calls: Cell<usize>,
}

impl ScriptedModel {
    fn new(scores: &[f32]) -> Self {
        Self {
            scores: scores.to_vec(),
            calls: Cell::new(0),
        }
    }
}

impl Model for ScriptedModel {
    fn predict(&self, input: InputTensor) -> Result<Vec<f32>> {
        assert_eq!(input.shape(), &[1, 256, 256, 3]);
        self.calls.set(self.calls.get() + 1);
        Ok(self.scores.clone())
    }
}

fn write_leaf(dir: &std::path::Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([40, 160, 60]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn test_healthy_leaf_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_leaf(dir.path(), "leaf.png", 640, 480);

    let model = ScriptedModel::new(&[0.02, 0.03, 0.95]);
    let service = DiagnosisService::new(&model, &Config::default());

    let report = service.diagnose_path(&path).unwrap();
    assert_eq!(report.verdict, Verdict::Healthy);
    assert_eq!(
        report.prediction.label,
        PredictedLabel::Class(ClassLabel::Healthy)
    );
    assert_eq!(report.prediction.confidence, 0.95);
    assert_eq!(model.calls.get(), 1);
}

#[test]
fn test_same_image_twice_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_leaf(dir.path(), "leaf.jpg", 300, 300);

    let model = ScriptedModel::new(&[0.3, 0.6, 0.1]);
    let service = DiagnosisService::new(&model, &Config::default());

    let first = service.diagnose_path(&path).unwrap();
    let second = service.diagnose_path(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(model.calls.get(), 2);
}

#[test]
fn test_unknown_prediction_renders_no_card() {
    let model = ScriptedModel::new(&[0.1, 0.1, 0.1, 0.1, 0.6]);
    let service = DiagnosisService::new(&model, &Config::default());

    let report = service
        .diagnose_image(&DynamicImage::new_rgb8(300, 300))
        .unwrap();
    assert!(!report.is_classified());
    assert!(report.diagnosis.is_none());
    assert_eq!(report.prediction.label.as_str(), "Unknown");
    assert_eq!(report.prediction.confidence, 0.0);
    assert!(DiagnosisReport::UNCLASSIFIED_MESSAGE.starts_with("Could not classify"));
}

#[test]
fn test_missing_model_blocks_startup() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        model_path: dir.path().join("model.onnx"),
        ..Config::default()
    };

    let err = load_model(&config).unwrap_err();
    assert!(err.to_string().contains("model.onnx"));
}

fn real_model_config() -> Option<Config> {
    let path = std::env::var_os("LEAFDX_MODEL")?;
    Some(Config {
        model_path: PathBuf::from(path),
        ..Config::default()
    })
}

#[test]
#[ignore] // Requires LEAFDX_MODEL
fn test_real_model_black_image() {
    let config = real_model_config().expect("LEAFDX_MODEL not set");
    let model = load_model(&config).unwrap();
    assert_eq!(model.path(), config.model_path.as_path());
    assert_eq!(model.layout(), config.tensor_layout);
    let service = DiagnosisService::new(&model, &config);

    let probe = service.probe().unwrap();
    println!("Probe: {:?}", probe);
    assert_eq!(probe.output_len, ClassLabel::ALL.len());

    let image = DynamicImage::new_rgb8(300, 300);
    let first = service.diagnose_image(&image).unwrap();
    let second = service.diagnose_image(&image).unwrap();
    assert!((0.0..=1.0).contains(&first.prediction.confidence));
    assert_eq!(first, second);
}
