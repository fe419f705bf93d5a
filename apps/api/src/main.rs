mod config;
mod encoding;
mod errors;
mod predict;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::encoding::schema::FormSchema;
use crate::routes::build_router;
use crate::scoring::artifacts::load_bundle;
use crate::scoring::linear::LinearCareerModel;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerCast API v{}", env!("CARGO_PKG_VERSION"));

    // Form schema and codebooks are immutable once built
    let schema = Arc::new(FormSchema::new());
    info!(
        "Form schema initialized ({} feature columns)",
        schema.feature_names().len()
    );

    // Load the pre-trained artifact bundle (scaler, classifier, label encoder)
    let bundle = load_bundle(&config.model_dir, schema.feature_names().len())
        .with_context(|| format!("loading model bundle from {}", config.model_dir.display()))?;
    info!(
        "Model bundle loaded from {} ({:?}, {} classes)",
        config.model_dir.display(),
        bundle.classifier.model_type,
        bundle.classifier.classes.len()
    );

    let model = Arc::new(LinearCareerModel::new(bundle));

    let state = AppState { schema, model };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
