//! Configuration management for leafdx
//!
//! Config stored at: ~/.config/leafdx/config.json

use leafdx_types::{ConfigError, OutputFormat, ResizeFilter, Result, TensorLayout};
use leafdx_vision::{PreprocessConfig, DEFAULT_SOFTMAX_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the ONNX model artifact
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Interpolation used when resizing to the model input size
    #[serde(default)]
    pub resize_filter: ResizeFilter,

    /// Input tensor layout expected by the model
    #[serde(default)]
    pub tensor_layout: TensorLayout,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Allowed deviation of the model output sum from 1.0
    #[serde(default = "default_softmax_tolerance")]
    pub softmax_tolerance: f32,
}

fn default_model_path() -> PathBuf {
    PathBuf::from("model.onnx")
}

fn default_softmax_tolerance() -> f32 {
    DEFAULT_SOFTMAX_TOLERANCE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            resize_filter: ResizeFilter::default(),
            tensor_layout: TensorLayout::default(),
            output_format: OutputFormat::default(),
            softmax_tolerance: default_softmax_tolerance(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("leafdx");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Load config from the default location, falling back to defaults when it is unreadable
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                log::warn!("Using default configuration: {}", e);
                Config::default()
            }
        }
    }

    /// Load config from `path`; a corrupt or unreadable file yields the defaults
    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        })
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    pub fn preprocess(&self) -> PreprocessConfig {
        PreprocessConfig::default()
            .with_filter(self.resize_filter)
            .with_layout(self.tensor_layout)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "leafdx Configuration")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(f, "Model:             {}", self.model_path.display())?;
        writeln!(f, "Resize filter:     {}", self.resize_filter)?;
        writeln!(f, "Tensor layout:     {}", self.tensor_layout)?;
        writeln!(f, "Output format:     {}", self.output_format)?;
        writeln!(f, "Softmax tolerance: {}", self.softmax_tolerance)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}
