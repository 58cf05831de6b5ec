//! Diagnosis catalog
//!
//! One static entry per [`ClassLabel`]. The match in [`DiagnosisLookup::diagnosis`] is
//! exhaustive, so adding a label without catalog content fails to compile.

use leafdx_types::{ClassLabel, PredictedLabel};

use crate::model::DiagnosisEntry;

static EARLY_BLIGHT: DiagnosisEntry = DiagnosisEntry {
    title: "Early Blight",
    description: "Early blight is a fungal disease caused by *Alternaria solani*. It primarily \
        affects leaves and tubers. Symptoms include small, dark, circular to oval lesions, \
        often with a characteristic 'target spot' or 'bull's-eye' appearance.",
    remedies: &[
        "Use disease-resistant potato varieties.",
        "Practice crop rotation with non-host crops.",
        "Apply fungicides preventatively, especially during warm, humid conditions.",
        "Ensure good air circulation and avoid overhead irrigation.",
        "Remove and destroy infected plant debris.",
    ],
};

static LATE_BLIGHT: DiagnosisEntry = DiagnosisEntry {
    title: "Late Blight",
    description: "Late blight, caused by the oomycete *Phytophthora infestans*, is one of the \
        most destructive potato diseases. It appears as pale green, water-soaked spots, often \
        at the tips or edges of leaves. These spots enlarge rapidly and turn dark brown or black.",
    remedies: &[
        "Plant certified disease-free seed potatoes.",
        "Implement a preventative fungicide spray program.",
        "Ensure proper spacing between plants to promote airflow.",
        "Destroy cull piles and volunteer potato plants.",
        "Harvest during dry weather and ensure tubers are dry before storage.",
    ],
};

static HEALTHY: DiagnosisEntry = DiagnosisEntry {
    title: "Healthy",
    description: "The plant appears to be healthy. No significant disease symptoms are detected \
        on the leaf. Continue with good agricultural practices to maintain plant health.",
    remedies: &[
        "Continue regular monitoring for pests and diseases.",
        "Ensure balanced fertilization and proper irrigation.",
        "Maintain good field sanitation.",
        "Practice crop rotation to prevent soil-borne issues.",
    ],
};

/// Catalog access for a known label
pub trait DiagnosisLookup {
    fn diagnosis(self) -> &'static DiagnosisEntry;
}

impl DiagnosisLookup for ClassLabel {
    fn diagnosis(self) -> &'static DiagnosisEntry {
        match self {
            ClassLabel::EarlyBlight => &EARLY_BLIGHT,
            ClassLabel::LateBlight => &LATE_BLIGHT,
            ClassLabel::Healthy => &HEALTHY,
        }
    }
}

/// Look up the diagnosis for a predicted label. `None` for the unknown sentinel.
pub fn lookup(label: PredictedLabel) -> Option<&'static DiagnosisEntry> {
    label.class().map(DiagnosisLookup::diagnosis)
}

/// All catalog entries in model output order
pub fn entries() -> impl Iterator<Item = (ClassLabel, &'static DiagnosisEntry)> {
    ClassLabel::ALL
        .into_iter()
        .map(|label| (label, label.diagnosis()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_total_over_labels() {
        for label in ClassLabel::ALL {
            let entry = lookup(PredictedLabel::Class(label)).unwrap();
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.remedies.is_empty());
        }
    }

    #[test]
    fn test_lookup_unknown_is_absent() {
        assert!(lookup(PredictedLabel::Unknown).is_none());
    }

    #[test]
    fn test_titles() {
        assert_eq!(ClassLabel::EarlyBlight.diagnosis().title, "Early Blight");
        assert_eq!(ClassLabel::LateBlight.diagnosis().title, "Late Blight");
        assert_eq!(ClassLabel::Healthy.diagnosis().title, "Healthy");
    }

    #[test]
    fn test_remedy_order_preserved() {
        let remedies = ClassLabel::LateBlight.diagnosis().remedies;
        assert_eq!(remedies.len(), 5);
        assert_eq!(remedies[0], "Plant certified disease-free seed potatoes.");
        assert_eq!(
            remedies[4],
            "Harvest during dry weather and ensure tubers are dry before storage."
        );
    }

    #[test]
    fn test_entries_follow_model_order() {
        let labels: Vec<ClassLabel> = entries().map(|(label, _)| label).collect();
        assert_eq!(labels, ClassLabel::ALL.to_vec());
    }

    #[test]
    fn test_description_has_no_line_break_artifacts() {
        for (_, entry) in entries() {
            assert!(!entry.description.contains('\n'));
            assert!(!entry.description.contains("  "));
        }
    }
}
