//! Domain layer: diagnosis catalog and report building

pub mod catalog;
pub mod model;
pub mod service;

pub use catalog::{entries, lookup, DiagnosisLookup};
pub use model::{DiagnosisEntry, DiagnosisReport, Verdict};
pub use service::build_report;
