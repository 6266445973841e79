//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for listing and reading content files,
//! along with [`StorageError`] for unified error handling across backends.

use std::path::PathBuf;

use crate::category::Category;

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Directory or file does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// File name escapes the category directory.
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for content listing and retrieval.
///
/// Each [`Category`] is a flat collection of files addressed by file name.
/// Implementations decide where the files live.
pub trait Storage: Send + Sync {
    /// List the file names of a category in listing order.
    ///
    /// Only regular files are returned; no extension filtering is applied.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the category cannot be listed (e.g., the
    /// directory is missing or unreadable).
    fn list(&self, category: Category) -> Result<Vec<String>, StorageError>;

    /// Read the full contents of a file.
    ///
    /// # Arguments
    ///
    /// * `category` - Category the file belongs to
    /// * `file_name` - Bare file name as returned by [`list`](Self::list)
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file doesn't exist or can't be read.
    fn read(&self, category: Category, file_name: &str) -> Result<String, StorageError>;
}

/// Reject file names that would escape the category directory.
pub(crate) fn validate_file_name(
    file_name: &str,
    backend: &'static str,
) -> Result<(), StorageError> {
    if matches!(file_name, "" | "." | "..") || file_name.contains(['/', '\\']) {
        return Err(StorageError::new(StorageErrorKind::InvalidPath)
            .with_path(file_name)
            .with_backend(backend));
    }
    Ok(())
}
