//! Caller-facing views of an analysis: display tags and a plain-text report.

use crate::matcher::OBSERVATION_MIN_CONFIDENCE;
use crate::types::{Characteristic, FaceAnalysis};
use std::fmt::Write;

/// Every characteristic confident enough to show, across all faces, in order.
pub fn tags(analyses: &[FaceAnalysis]) -> Vec<Characteristic> {
    analyses
        .iter()
        .flat_map(|face| &face.characteristics)
        .filter(|c| c.confidence > OBSERVATION_MIN_CONFIDENCE)
        .cloned()
        .collect()
}

fn percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Multi-line summary, one block per face:
///
/// ```text
/// Face 1 (90%):
/// • hair: short hair (60%)
/// ```
pub fn format_report(analyses: &[FaceAnalysis]) -> String {
    if analyses.is_empty() {
        return "No face detected".to_string();
    }

    let mut out = String::new();
    for (n, face) in analyses.iter().enumerate() {
        let _ = writeln!(out, "Face {} ({}%):", n + 1, percent(face.confidence));
        for c in &face.characteristics {
            let _ = writeln!(out, "• {}: {} ({}%)", c.kind, c.value, percent(c.confidence));
        }
        out.push('\n');
    }

    out.trim().to_string()
}
