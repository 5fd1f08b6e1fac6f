//! Application state shared across handlers

use std::sync::Arc;

use postboard_core::PostStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: impl PostStore + 'static) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Wrap a store the caller keeps a handle to
    pub fn from_shared(store: Arc<dyn PostStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    pub fn store(&self) -> &dyn PostStore {
        self.inner.store.as_ref()
    }
}
