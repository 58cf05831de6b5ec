//! leafdx - Potato leaf disease detection
//!
//! A CLI tool that classifies a leaf photograph with a pre-trained model and explains the result.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use leafdx_types::Error;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        if let Error::Model(ref model_err) = e {
            if model_err.is_startup_failure() {
                eprintln!("Set the model path with --model <path> or `leafdx config --set-model <path>`.");
            }
        }
        std::process::exit(1);
    }
}
