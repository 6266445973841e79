//! Error types for the HTTP server.

use std::net::AddrParseError;

/// Server startup and runtime error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Host and port do not form a socket address.
    #[error("Invalid listen address {address}: {source}")]
    Address {
        address: String,
        #[source]
        source: AddrParseError,
    },

    /// Binding the listener failed.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The server loop failed.
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
