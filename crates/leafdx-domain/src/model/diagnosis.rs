use serde::Serialize;

/// Human-readable description of a diagnosis category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Recommended actions, most important first
    pub remedies: &'static [&'static str],
}
