pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::predict::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/form", get(handlers::handle_form_descriptor))
        .route("/api/v1/predict", post(handlers::handle_predict))
        .with_state(state)
}
