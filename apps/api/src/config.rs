use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup only fails later, on a missing or
/// malformed artifact bundle.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding scaler.json, classifier.json, label_encoder.json.
    pub model_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            model_dir: std::env::var("MODEL_DIR")
                .unwrap_or_else(|_| "artifacts".to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
