//! Domain model types

pub mod diagnosis;
pub mod report;

pub use diagnosis::DiagnosisEntry;
pub use report::{DiagnosisReport, Verdict};
