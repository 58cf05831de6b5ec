//! Output formatting module

use leafdx_domain::{entries, DiagnosisReport};
use leafdx_types::{OutputFormat, Result};
use leafdx_vision::ModelProbe;
use serde::Serialize;
use std::fmt;

pub fn output_report(output_format: OutputFormat, report: &DiagnosisReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", ReportTable(report));
    }
    Ok(())
}

/// Table rendering of a report. Unclassified reports only show the generic message.
pub struct ReportTable<'a>(pub &'a DiagnosisReport);

impl fmt::Display for ReportTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "\nPrediction Result")?;
        writeln!(f, "=================")?;

        let Some(entry) = report.diagnosis.filter(|_| report.is_classified()) else {
            return writeln!(f, "{}", DiagnosisReport::UNCLASSIFIED_MESSAGE);
        };

        writeln!(f, "Prediction:  {}", entry.title)?;
        writeln!(f, "Status:      {}", report.verdict.label())?;
        writeln!(
            f,
            "Confidence:  {:.2}%",
            report.prediction.confidence * 100.0
        )?;

        writeln!(f, "\nDescription:")?;
        writeln!(f, "{}", entry.description)?;

        writeln!(f, "\nRecommended Actions:")?;
        for remedy in entry.remedies {
            writeln!(f, "  - {}", remedy)?;
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct LabelRow {
    index: usize,
    label: &'static str,
    title: &'static str,
}

pub fn output_labels(output_format: OutputFormat) -> Result<()> {
    let rows: Vec<LabelRow> = entries()
        .map(|(label, entry)| LabelRow {
            index: label.index(),
            label: label.as_str(),
            title: entry.title,
        })
        .collect();

    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{:<6} {:<24} {}", "Index", "Label", "Title");
        for row in rows {
            println!("{:<6} {:<24} {}", row.index, row.label, row.title);
        }
    }
    Ok(())
}

pub fn output_probe(output_format: OutputFormat, probe: &ModelProbe) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(probe)?);
        return Ok(());
    }

    println!("\nModel Probe");
    println!("===========");
    println!("Output length:  {} (labels: {})", probe.output_len, probe.label_count);
    println!("Output sum:     {:.4}", probe.output_sum);
    println!(
        "Softmax:        {}",
        if probe.looks_like_softmax { "yes" } else { "no" }
    );
    if !probe.is_consistent() {
        println!("\nWarning: model output does not match the label set; predictions may be mislabeled.");
    }
    Ok(())
}
