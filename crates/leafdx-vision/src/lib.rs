//! Vision module - leaf image classification with a pre-trained model

pub mod classifier;
pub mod model;
pub mod preprocess;

// Re-export main types for convenience
pub use classifier::{select_prediction, Classifier, ModelProbe, DEFAULT_SOFTMAX_TOLERANCE};
pub use model::{InputTensor, Model, OnnxModel};
pub use preprocess::{to_input_tensor, PreprocessConfig, INPUT_SIZE};
