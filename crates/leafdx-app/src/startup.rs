//! Process startup: load the model artifact exactly once

use crate::config::Config;
use leafdx_types::Result;
use leafdx_vision::OnnxModel;

/// Load the configured model artifact.
///
/// Failure is fatal for the caller: without a model there is nothing to classify with.
pub fn load_model(config: &Config) -> Result<OnnxModel> {
    log::info!("Loading model from {}", config.model_path.display());
    OnnxModel::load(&config.model_path, config.tensor_layout).map_err(|e| {
        log::error!("{}", e);
        e
    })
}
