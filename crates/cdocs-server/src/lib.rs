//! HTTP server for the cdocs documentation site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - The landing page and one HTML page per document
//! - A JSON listing of all documents at `/api/docs`
//! - The embedded stylesheet
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use cdocs_server::{ServerConfig, run_server};
//! use cdocs_site::{Site, SiteConfig};
//! use cdocs_storage::FsStorage;
//!
//! #[tokio::main]
//! async fn main() {
//!     let storage = Arc::new(FsStorage::new(PathBuf::from("content")));
//!     let site = Arc::new(Site::new(storage, SiteConfig::default()));
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         version: "1.0.0".to_owned(),
//!     };
//!
//!     run_server(config, site).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (cdocs-server)
//!                        │
//!                        ├─► HTML pages ──► Site (index + render)
//!                        ├─► /api/docs  ──► Site (index)
//!                        └─► /assets/style.css (embedded)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use cdocs_site::Site;

pub use error::ServerError;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Application version (mixed into `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid, the port cannot be bound, or
/// the server loop fails.
pub async fn run_server(config: ServerConfig, site: Arc<Site>) -> Result<(), ServerError> {
    let highlight = &site.config().highlight;
    let cdn_origin = if highlight.enabled {
        middleware::security::url_origin(&highlight.cdn_url).map(str::to_owned)
    } else {
        None
    };

    let state = Arc::new(AppState {
        site,
        version: config.version.clone(),
    });
    let app = app::create_router(state, cdn_origin.as_deref());

    let address = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = address.parse().map_err(|source| ServerError::Address {
        address: address.clone(),
        source,
    })?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;
    tracing::info!(address = %addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
