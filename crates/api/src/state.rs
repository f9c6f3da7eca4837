use std::sync::Arc;

use journal_core::ContentAdapter;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    adapter: ContentAdapter,
    config: AppConfig,
}

impl AppState {
    pub fn new(adapter: ContentAdapter, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(InnerState { adapter, config }),
        }
    }

    pub fn adapter(&self) -> &ContentAdapter {
        &self.inner.adapter
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
