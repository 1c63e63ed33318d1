use std::sync::Arc;

use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide resume store. Constructed once in `main`, never
    /// persisted anywhere.
    pub store: Arc<ResumeStore>,
}
