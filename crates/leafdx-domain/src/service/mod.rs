//! Domain services

pub mod report;

pub use report::build_report;
