use std::collections::HashMap;

use axum::{extract::State, Form, Json};

use crate::encoding::decoder::{decode, Prediction};
use crate::encoding::encoder::encode;
use crate::encoding::schema::FormDescriptor;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/form
/// Serves the form descriptor so the frontend renders fields and options from
/// the same tables the encoder uses, instead of duplicating them.
pub async fn handle_form_descriptor(State(state): State<AppState>) -> Json<FormDescriptor> {
    Json(state.schema.descriptor())
}

/// POST /api/v1/predict
/// Accepts the urlencoded form keyed by display label, encodes it into the
/// feature frame, runs the scoring backend, and decodes the result.
pub async fn handle_predict(
    State(state): State<AppState>,
    Form(answers): Form<HashMap<String, String>>,
) -> Result<Json<Prediction>, AppError> {
    let frame = encode(&state.schema, &answers);
    let output = state.model.predict(&frame).await?;
    let prediction = decode(&state.schema, output.class, output.probabilities.as_deref());
    Ok(Json(prediction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::encoding::encoder::FeatureFrame;
    use crate::encoding::schema::{FieldDescriptor, FormSchema};
    use crate::scoring::artifacts::{
        ClassifierArtifact, LabelEncoderArtifact, ModelBundle, ModelType, ScalerArtifact,
    };
    use crate::scoring::linear::LinearCareerModel;
    use crate::scoring::{CareerModel, ModelOutput};

    struct FixedModel(ModelOutput);

    #[async_trait]
    impl CareerModel for FixedModel {
        async fn predict(&self, _frame: &FeatureFrame) -> Result<ModelOutput, AppError> {
            Ok(self.0.clone())
        }
    }

    fn state_with(model: Arc<dyn CareerModel>) -> AppState {
        AppState {
            schema: Arc::new(FormSchema::new()),
            model,
        }
    }

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_form_descriptor_serves_all_fields() {
        let state = state_with(Arc::new(FixedModel(ModelOutput {
            class: 0,
            probabilities: None,
        })));
        let Json(descriptor) = handle_form_descriptor(State(state)).await;
        assert_eq!(descriptor.fields.len(), 19);
        assert!(descriptor
            .fields
            .iter()
            .any(|f| matches!(f, FieldDescriptor::Number { label: "Age" })));
    }

    #[tokio::test]
    async fn test_predict_decodes_model_output() {
        let state = state_with(Arc::new(FixedModel(ModelOutput {
            class: 2,
            probabilities: Some(vec![0.05, 0.1, 0.7, 0.1, 0.05]),
        })));
        let result = handle_predict(State(state), Form(HashMap::new())).await.unwrap();
        assert_eq!(result.0.label, 3);
        assert_eq!(result.0.career, "Corporate Employee");
        assert_eq!(result.0.confidence, 70.0);
    }

    #[tokio::test]
    async fn test_predict_without_probabilities_reports_fallback() {
        let state = state_with(Arc::new(FixedModel(ModelOutput {
            class: 4,
            probabilities: None,
        })));
        let result = handle_predict(State(state), Form(HashMap::new())).await.unwrap();
        assert_eq!(result.0.career, "Researcher/Scientist");
        assert_eq!(result.0.confidence, 85.0);
    }

    // Full pipeline against a synthetic linear bundle: the Gender column
    // alone decides between class 0 and class 1.
    fn gender_decides_bundle() -> ModelBundle {
        let schema = FormSchema::new();
        let n = schema.feature_names().len();
        let mut row = vec![0.0; n];
        row[1] = 1.0; // Gender column

        ModelBundle {
            scaler: ScalerArtifact {
                feature_names: schema.feature_names().iter().map(|s| s.to_string()).collect(),
                mean: vec![0.0; n],
                scale: vec![1.0; n],
            },
            classifier: ClassifierArtifact {
                model_type: ModelType::LogisticRegression,
                classes: vec![0, 1],
                coefficients: vec![vec![0.0; n], row],
                intercepts: vec![0.1, 0.0],
            },
            label_encoder: LabelEncoderArtifact {
                classes: vec!["Government Officer".into(), "Entrepreneur".into()],
            },
        }
    }

    #[tokio::test]
    async fn test_predict_end_to_end_through_linear_model() {
        let state = state_with(Arc::new(LinearCareerModel::new(gender_decides_bundle())));

        // Female encodes as 1 in the Gender slot: score 1.0 beats 0.1.
        let result = handle_predict(
            State(state.clone()),
            Form(answers(&[("Gender", "Female")])),
        )
        .await
        .unwrap();
        assert_eq!(result.0.label, 2);
        assert_eq!(result.0.career, "Entrepreneur");
        assert!((0.0..=100.0).contains(&result.0.confidence));

        // Male encodes as 0: the 0.1 intercept wins.
        let result = handle_predict(State(state), Form(answers(&[("Gender", "Male")])))
            .await
            .unwrap();
        assert_eq!(result.0.label, 1);
        assert_eq!(result.0.career, "Government Officer");
    }
}
