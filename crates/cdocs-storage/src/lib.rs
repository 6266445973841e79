//! Content storage abstraction for cdocs.
//!
//! This crate provides a [`Storage`] trait for listing and reading the Markdown
//! files of the two content categories. This enables:
//!
//! - **Unit testing** of the indexer without touching the real filesystem
//! - **Clean separation** between the doc index and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Category`] for the two fixed content groupings
//! - [`Storage`] trait with `list()` and `read()` methods
//! - [`FsStorage`] implementation mapping each category to a directory
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use cdocs_storage::{Category, FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("content"));
//! for name in storage.list(Category::Basics).unwrap_or_default() {
//!     tracing::info!(%name, "found");
//! }
//! ```

mod category;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use category::{Category, ParseCategoryError};
pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
