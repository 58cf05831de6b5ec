//! Application service layer - config, image intake, model startup, diagnosis

pub mod app;
pub mod config;
pub mod scanner;
pub mod startup;
