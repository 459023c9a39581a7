use std::sync::Arc;

use bloglist_core::PostStore;

/// Application state
///
/// The store is injected here; nothing below the router knows which
/// implementation is behind the trait object.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}
