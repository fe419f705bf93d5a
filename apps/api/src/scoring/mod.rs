//! Scoring backend: the pre-trained scaler + classifier pair behind a trait
//! seam, so handlers never depend on a concrete model family.
//!
//! `AppState` holds an `Arc<dyn CareerModel>`; the default implementation is
//! `LinearCareerModel`, built from the JSON artifact bundle at startup.

pub mod artifacts;
pub mod linear;

use async_trait::async_trait;

use crate::encoding::encoder::FeatureFrame;
use crate::errors::AppError;

/// Raw classifier output: a 0-based class plus optional class probabilities.
///
/// `probabilities` is `None` for model families without probability
/// estimates; the decoder substitutes its fixed fallback confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    pub class: u32,
    pub probabilities: Option<Vec<f64>>,
}

/// The scoring backend trait. Carried in `AppState` as `Arc<dyn CareerModel>`.
#[async_trait]
pub trait CareerModel: Send + Sync {
    async fn predict(&self, frame: &FeatureFrame) -> Result<ModelOutput, AppError>;
}
