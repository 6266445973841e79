//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use cdocs_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Documentation site; rescans content on every request.
    pub(crate) site: Arc<Site>,
    /// Application version mixed into `ETag`s.
    pub(crate) version: String,
}
