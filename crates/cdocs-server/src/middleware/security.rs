//! Security headers middleware.
//!
//! Adds security headers to all responses:
//! - Content-Security-Policy
//! - X-Content-Type-Options
//! - X-Frame-Options

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Build the Content-Security-Policy value.
///
/// `cdn_origin` is allowed as a script and style source when highlighting
/// assets are loaded from a CDN.
fn content_security_policy(cdn_origin: Option<&str>) -> String {
    let extra = cdn_origin.map(|origin| format!(" {origin}")).unwrap_or_default();
    format!(
        "default-src 'self'; \
         script-src 'self'{extra}; \
         style-src 'self' 'unsafe-inline'{extra}; \
         font-src 'self' data:; \
         img-src 'self' data: https:; \
         frame-ancestors 'none'"
    )
}

/// Scheme and host of a URL, without path.
pub(crate) fn url_origin(url: &str) -> Option<&str> {
    let scheme_end = url.find("://")? + 3;
    let host_end = url[scheme_end..]
        .find('/')
        .map_or(url.len(), |i| scheme_end + i);
    (host_end > scheme_end).then(|| &url[..host_end])
}

/// Create layer that adds Content-Security-Policy header.
pub(crate) fn csp_layer(cdn_origin: Option<&str>) -> SetResponseHeaderLayer<HeaderValue> {
    let value = HeaderValue::from_str(&content_security_policy(cdn_origin)).unwrap_or_else(|e| {
        tracing::warn!(origin = ?cdn_origin, error = %e, "CDN origin not usable in CSP");
        HeaderValue::from_static(
            "default-src 'self'; style-src 'self' 'unsafe-inline'; frame-ancestors 'none'",
        )
    });
    SetResponseHeaderLayer::overriding(HeaderName::from_static("content-security-policy"), value)
}

/// Create layer that adds X-Content-Type-Options header.
pub(crate) fn content_type_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    )
}

/// Create layer that adds X-Frame-Options header.
pub(crate) fn frame_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    )
}
