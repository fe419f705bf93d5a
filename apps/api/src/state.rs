use std::sync::Arc;

use crate::encoding::schema::FormSchema;
use crate::scoring::CareerModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Form schema and codebooks, immutable once built at startup.
    pub schema: Arc<FormSchema>,
    /// Pluggable scoring backend loaded from the artifact bundle.
    pub model: Arc<dyn CareerModel>,
}
