//! CLI definition using clap

use clap::{Parser, Subcommand};
use leafdx_types::{OutputFormat, ResizeFilter, TensorLayout};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leafdx")]
#[command(version)]
#[command(about = "Potato leaf disease detection from leaf photographs")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Model artifact path override
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Diagnose a leaf image
    Diagnose {
        /// Path to image file (jpg, jpeg, png), or "-" to read it from stdin
        image: PathBuf,
    },

    /// List the diagnosis categories in model output order
    Labels,

    /// Check the model output against the label set
    Probe,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set model artifact path
        #[arg(long)]
        set_model: Option<PathBuf>,

        /// Set resize interpolation
        #[arg(long)]
        set_filter: Option<ResizeFilter>,

        /// Set input tensor layout
        #[arg(long)]
        set_layout: Option<TensorLayout>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
