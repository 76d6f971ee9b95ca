//! Shared application state for Axum routers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use prism_core::ProfileClassifier;
use prism_storage::RecordSource;

/// Customer data access shared by all handlers.
pub type SharedSource = Arc<dyn RecordSource>;

/// Application-wide state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Read-only customer table; every lookup re-reads it.
    pub source: SharedSource,
    pub classifier: ProfileClassifier,
    /// Directory holding the favicon and other static assets.
    pub static_dir: Arc<PathBuf>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(source: SharedSource, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            classifier: ProfileClassifier::default(),
            static_dir: Arc::new(static_dir.into()),
            start_time: Instant::now(),
        }
    }
}

crate::impl_from_ref!(SharedSource, source);
crate::impl_from_ref!(ProfileClassifier, classifier);
crate::impl_from_ref!(Instant, start_time);
