//! Model artifact handle
//!
//! The artifact is loaded once by the application and passed by reference to the
//! [`Classifier`](crate::Classifier). Nothing here holds global state.

use leafdx_types::{ModelError, Result, TensorLayout};
use std::path::{Path, PathBuf};
use tract_onnx::prelude::*;

use crate::preprocess::input_shape;

/// Batched `f32` input, layout per [`TensorLayout`]
pub type InputTensor = tract_ndarray::Array4<f32>;

/// Inference seam between the classifier and a concrete runtime
pub trait Model {
    /// Run one forward pass and return the flattened output vector.
    fn predict(&self, input: InputTensor) -> Result<Vec<f32>>;
}

type Plan = TypedRunnableModel<TypedModel>;

/// ONNX model executed with tract
pub struct OnnxModel {
    plan: Plan,
    path: PathBuf,
    layout: TensorLayout,
}

impl OnnxModel {
    /// Load and optimize the artifact at `path` for a fixed input shape.
    pub fn load(path: &Path, layout: TensorLayout) -> Result<Self> {
        if !path.is_file() {
            return Err(ModelError::NotFound(path.to_path_buf()).into());
        }

        let [n, a, b, c] = input_shape(layout);
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    InferenceFact::dt_shape(f32::datum_type(), tvec!(n, a, b, c)),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ModelError::Load {
                path: path.to_path_buf(),
                reason: format!("{e:#}"),
            })?;

        log::info!("Loaded model {} (input {:?})", path.display(), [n, a, b, c]);

        Ok(Self {
            plan,
            path: path.to_path_buf(),
            layout,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> TensorLayout {
        self.layout
    }
}

impl Model for OnnxModel {
    fn predict(&self, input: InputTensor) -> Result<Vec<f32>> {
        let outputs = self
            .plan
            .run(tvec!(input.into_tensor().into()))
            .map_err(|e| ModelError::Inference(format!("{e:#}")))?;

        let output = outputs
            .first()
            .ok_or_else(|| ModelError::Inference("model produced no outputs".to_string()))?;
        let view = output
            .to_array_view::<f32>()
            .map_err(|e| ModelError::Inference(format!("{e:#}")))?;

        Ok(view.iter().copied().collect())
    }
}

impl std::fmt::Debug for OnnxModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxModel")
            .field("path", &self.path)
            .field("layout", &self.layout)
            .finish()
    }
}
