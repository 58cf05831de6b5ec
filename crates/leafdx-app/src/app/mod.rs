//! Application use cases

pub mod diagnosis_service;

pub use diagnosis_service::DiagnosisService;
