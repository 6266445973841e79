//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use cdocs_site::STYLESHEET_PATH;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers::{api, assets, pages};
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// `cdn_origin` is added to the Content-Security-Policy sources.
pub(crate) fn create_router(state: Arc<AppState>, cdn_origin: Option<&str>) -> Router {
    Router::new()
        .route("/", get(pages::get_home))
        .route("/docs/{category}/{slug}", get(pages::get_document))
        .route("/api/docs", get(api::list_documents))
        .route(STYLESHEET_PATH, get(assets::stylesheet))
        .fallback(pages::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer(cdn_origin))
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
