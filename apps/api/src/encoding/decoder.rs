//! Decoding of raw classifier output into the result record served to the
//! presentation layer.

use serde::Serialize;

use crate::encoding::schema::{FormSchema, UNKNOWN_CAREER};

/// Reported when the scoring backend exposes no probability estimates.
const FALLBACK_CONFIDENCE: f64 = 85.0;

/// Prediction returned to the presentation layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Prediction {
    pub career: String,
    /// 1-based class label (classifier output + 1).
    pub label: u32,
    /// Percentage in [0, 100], rounded to 2 decimal places.
    pub confidence: f64,
}

/// Maps the classifier's 0-based class index onto the 1-based career table.
///
/// Labels outside the table decode to the `Unknown Career` placeholder, and
/// a backend without probability estimates yields the fixed fallback
/// confidence; decoding never fails.
pub fn decode(schema: &FormSchema, class: u32, probabilities: Option<&[f64]>) -> Prediction {
    let label = class + 1;
    let career = schema
        .career_for_label(label)
        .unwrap_or(UNKNOWN_CAREER)
        .to_string();

    let confidence = match probabilities.and_then(max_probability) {
        Some(p) => round2(p * 100.0),
        None => FALLBACK_CONFIDENCE,
    };

    Prediction {
        career,
        label,
        confidence,
    }
}

fn max_probability(probabilities: &[f64]) -> Option<f64> {
    probabilities
        .iter()
        .copied()
        .fold(None, |best: Option<f64>, p| {
            Some(best.map_or(p, |b| b.max(p)))
        })
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
