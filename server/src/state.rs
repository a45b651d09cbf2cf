//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! mock backend keeps nothing but the fixture document, loaded once at startup
//! and never mutated: created customers are echoed, not stored.

use std::sync::Arc;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// JSON array text served verbatim by `GET /api/v1/customers`.
    pub fixtures: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(fixtures: String) -> Self {
        Self { fixtures: Arc::from(fixtures) }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// State serving the embedded fixtures.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let fixtures = crate::services::fixtures::embedded().expect("embedded fixtures decode");
        AppState::new(fixtures)
    }
}
