//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_labels, output_probe, output_report};
use leafdx_app::app::DiagnosisService;
use leafdx_app::config::Config;
use leafdx_app::startup::load_model;
use leafdx_types::{OutputFormat, ResizeFilter, Result, TensorLayout};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Diagnose { image } => {
            let (config, output_format) = runtime_config(&cli);
            cmd_diagnose(&config, image, output_format)
        }

        Commands::Labels => output_labels(runtime_config(&cli).1),

        Commands::Probe => {
            let (config, output_format) = runtime_config(&cli);
            cmd_probe(&config, output_format)
        }

        Commands::Config {
            show,
            set_model,
            set_filter,
            set_layout,
            set_output,
            reset,
        } => cmd_config(
            &Config::config_path()?,
            *show,
            set_model.clone(),
            *set_filter,
            *set_layout,
            *set_output,
            *reset,
        ),
    }
}

/// Saved config with CLI overrides applied; a corrupt file falls back to defaults
fn runtime_config(cli: &Cli) -> (Config, OutputFormat) {
    let mut config = Config::load_or_default();

    if let Some(ref model) = cli.model {
        config.model_path = model.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    (config, output_format)
}

fn cmd_diagnose(config: &Config, image: &Path, output_format: OutputFormat) -> Result<()> {
    // Startup: a missing or corrupt artifact stops here, before any classification
    let model = load_model(config)?;
    let service = DiagnosisService::new(&model, config);

    let report = if image == Path::new("-") {
        service.diagnose_bytes(&read_upload(std::io::stdin().lock())?)?
    } else {
        service.diagnose_path(image)?
    };

    if !report.is_classified() {
        log::warn!("{} could not be classified", image.display());
    }

    output_report(output_format, &report)
}

/// Read a whole upload from `reader`
fn read_upload(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    log::debug!("Read {} bytes of upload", bytes.len());
    Ok(bytes)
}

fn cmd_probe(config: &Config, output_format: OutputFormat) -> Result<()> {
    let model = load_model(config)?;
    let probe = DiagnosisService::new(&model, config).probe()?;
    output_probe(output_format, &probe)
}

fn cmd_config(
    path: &Path,
    show: bool,
    set_model: Option<PathBuf>,
    set_filter: Option<ResizeFilter>,
    set_layout: Option<TensorLayout>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    // Reset never reads the existing file, so it also repairs a corrupt one
    if reset {
        Config::default().save_to(path)?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load_or_default_from(path);
    let mut modified = false;

    if let Some(model) = set_model {
        config.model_path = model;
        modified = true;
    }
    if let Some(filter) = set_filter {
        config.resize_filter = filter;
        modified = true;
    }
    if let Some(layout) = set_layout {
        config.tensor_layout = layout;
        modified = true;
    }
    if let Some(output) = set_output {
        config.output_format = output;
        modified = true;
    }

    if modified {
        config.save_to(path)?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrupt_config(dir: &Path) -> PathBuf {
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        path
    }

    #[test]
    fn test_reset_repairs_corrupt_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = corrupt_config(dir.path());
        assert!(Config::load_from(&path).is_err());

        cmd_config(&path, false, None, None, None, None, true).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_set_model_over_corrupt_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = corrupt_config(dir.path());

        cmd_config(
            &path,
            false,
            Some(PathBuf::from("/models/potato.onnx")),
            None,
            Some(TensorLayout::Nchw),
            None,
            false,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.model_path, PathBuf::from("/models/potato.onnx"));
        assert_eq!(config.tensor_layout, TensorLayout::Nchw);
        assert_eq!(config.resize_filter, ResizeFilter::Bicubic);
    }

    #[test]
    fn test_read_upload_keeps_all_bytes() {
        let data = vec![7u8; 70_000];
        let bytes = read_upload(std::io::Cursor::new(data.clone())).unwrap();
        assert_eq!(bytes, data);
    }
}
