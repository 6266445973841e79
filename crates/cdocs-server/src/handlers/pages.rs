//! HTML page endpoints.
//!
//! Pages are rendered on every request. Successful responses carry an `ETag`
//! derived from the application version and the page body.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use cdocs_site::ResolveError;
use cdocs_storage::Category;
use md5::{Digest, Md5};

use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn get_home(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let html = state.site.render_home();
    cached_page(&state.version, &headers, html)
}

/// Handle GET /docs/{category}/{slug}.
pub(crate) async fn get_document(
    Path((category, slug)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let Ok(category) = category.parse::<Category>() else {
        return not_found_page(&state);
    };

    match state.site.resolve(category, &slug) {
        Ok(doc) => {
            let html = state.site.render_resolved(&doc);
            cached_page(&state.version, &headers, html)
        }
        Err(ResolveError::NotFound { .. }) => not_found_page(&state),
        Err(e) => {
            tracing::error!(%category, %slug, error = %e, "Failed to load document");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(state.site.render_error())).into_response()
        }
    }
}

/// Fallback for unknown routes.
pub(crate) async fn not_found(State(state): State<Arc<AppState>>) -> Response {
    not_found_page(&state)
}

fn not_found_page(state: &AppState) -> Response {
    (StatusCode::NOT_FOUND, Html(state.site.render_not_found())).into_response()
}

/// Respond with `html`, or 304 when the client already holds it.
fn cached_page(version: &str, headers: &HeaderMap, html: String) -> Response {
    let etag = compute_etag(version, &html);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        Html(html),
    )
        .into_response()
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_etag_includes_version() {
        let etag1 = compute_etag("1.0.0", "content");
        let etag2 = compute_etag("1.0.1", "content");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_includes_content() {
        let etag1 = compute_etag("1.0.0", "content1");
        let etag2 = compute_etag("1.0.0", "content2");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        // 16 hex chars + 2 quotes
        assert_eq!(etag.len(), 18);
    }
}
