//! Pre-trained artifact files: deserialization and startup validation.
//!
//! The training pipeline exports three JSON files next to each other:
//! `scaler.json`, `classifier.json`, and `label_encoder.json`. They are read
//! once at startup; a bundle whose dimensions disagree with the feature
//! schema aborts startup rather than silently mis-scoring every request.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Standard-scaler parameters: per-column mean and scale in column order.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerArtifact {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Model family tag carried by `classifier.json`. Decides whether the
/// backend exposes probability estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    LogisticRegression,
    LinearSvc,
}

/// Multinomial linear classifier: one coefficient row and intercept per class.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierArtifact {
    pub model_type: ModelType,
    pub classes: Vec<u32>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

/// Reverse label mapping exported alongside the classifier. Loaded and
/// shape-checked but never consulted on the request path; the career table
/// in `encoding::schema` is the authoritative reverse mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelEncoderArtifact {
    pub classes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub scaler: ScalerArtifact,
    pub classifier: ClassifierArtifact,
    pub label_encoder: LabelEncoderArtifact,
}

/// Loads and validates the three artifact files from `dir`.
pub fn load_bundle(dir: &Path, expected_features: usize) -> Result<ModelBundle> {
    let scaler: ScalerArtifact = read_json(&dir.join("scaler.json"))?;
    let classifier: ClassifierArtifact = read_json(&dir.join("classifier.json"))?;
    let label_encoder: LabelEncoderArtifact = read_json(&dir.join("label_encoder.json"))?;

    validate(&scaler, &classifier, &label_encoder, expected_features)?;

    Ok(ModelBundle {
        scaler,
        classifier,
        label_encoder,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading artifact {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing artifact {}", path.display()))
}

fn validate(
    scaler: &ScalerArtifact,
    classifier: &ClassifierArtifact,
    label_encoder: &LabelEncoderArtifact,
    expected_features: usize,
) -> Result<()> {
    if scaler.feature_names.len() != expected_features {
        bail!(
            "scaler covers {} columns, schema has {expected_features}",
            scaler.feature_names.len()
        );
    }
    if scaler.mean.len() != expected_features || scaler.scale.len() != expected_features {
        bail!(
            "scaler mean/scale lengths ({}/{}) do not match {expected_features} columns",
            scaler.mean.len(),
            scaler.scale.len()
        );
    }
    if classifier.classes.is_empty() {
        bail!("classifier has no classes");
    }
    if classifier.coefficients.len() != classifier.classes.len()
        || classifier.intercepts.len() != classifier.classes.len()
    {
        bail!(
            "classifier has {} classes but {} coefficient rows and {} intercepts",
            classifier.classes.len(),
            classifier.coefficients.len(),
            classifier.intercepts.len()
        );
    }
    for (i, row) in classifier.coefficients.iter().enumerate() {
        if row.len() != expected_features {
            bail!(
                "coefficient row {i} has {} columns, schema has {expected_features}",
                row.len()
            );
        }
    }
    if label_encoder.classes.len() != classifier.classes.len() {
        bail!(
            "label encoder lists {} classes, classifier has {}",
            label_encoder.classes.len(),
            classifier.classes.len()
        );
    }
    Ok(())
}
