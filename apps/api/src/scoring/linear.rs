//! Linear scoring backend: standardize the frame, compute per-class decision
//! scores, argmax for the class, softmax for probabilities when the model
//! family supports them.

use async_trait::async_trait;

use crate::encoding::encoder::FeatureFrame;
use crate::errors::AppError;
use crate::scoring::artifacts::{ClassifierArtifact, ModelBundle, ModelType, ScalerArtifact};
use crate::scoring::{CareerModel, ModelOutput};

/// Scaler + multinomial linear classifier loaded from the artifact bundle.
pub struct LinearCareerModel {
    bundle: ModelBundle,
}

impl LinearCareerModel {
    pub fn new(bundle: ModelBundle) -> Self {
        Self { bundle }
    }

    fn standardize(scaler: &ScalerArtifact, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .zip(scaler.mean.iter().zip(&scaler.scale))
            .map(|(x, (mean, scale))| {
                // Constant training columns export scale 0; center only.
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect()
    }

    fn decision_scores(classifier: &ClassifierArtifact, z: &[f64]) -> Vec<f64> {
        classifier
            .coefficients
            .iter()
            .zip(&classifier.intercepts)
            .map(|(row, intercept)| {
                row.iter().zip(z).map(|(w, x)| w * x).sum::<f64>() + intercept
            })
            .collect()
    }
}

#[async_trait]
impl CareerModel for LinearCareerModel {
    async fn predict(&self, frame: &FeatureFrame) -> Result<ModelOutput, AppError> {
        let scaler = &self.bundle.scaler;
        if frame.len() != scaler.mean.len() {
            return Err(AppError::Model(format!(
                "feature frame has {} columns, scaler expects {}",
                frame.len(),
                scaler.mean.len()
            )));
        }

        let z = Self::standardize(scaler, &frame.values);
        let scores = Self::decision_scores(&self.bundle.classifier, &z);

        let best = argmax(&scores)
            .ok_or_else(|| AppError::Model("classifier produced no scores".to_string()))?;
        let class = self
            .bundle
            .classifier
            .classes
            .get(best)
            .copied()
            .ok_or_else(|| AppError::Model(format!("no class for score row {best}")))?;

        let probabilities = match self.bundle.classifier.model_type {
            ModelType::LogisticRegression => Some(softmax(&scores)),
            ModelType::LinearSvc => None,
        };

        Ok(ModelOutput {
            class,
            probabilities,
        })
    }
}

fn argmax(scores: &[f64]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    // Shift by the max score so the exponentials cannot overflow.
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}
