//! Document index and page rendering for the Frontend Concepts site.
//!
//! This crate provides:
//! - [`DocIndex`]: Ordered document listing and slug resolution
//! - [`Site`]: Landing, document and error pages as HTML
//! - [`build_site`]: Static generation of the whole site
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::{Path, PathBuf};
//! use std::sync::Arc;
//! use cdocs_site::{Site, SiteConfig, build_site};
//! use cdocs_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("content")));
//! let site = Site::new(storage, SiteConfig::default());
//!
//! let report = build_site(&site, Path::new("dist"))?;
//! println!("{} pages", report.pages);
//! # Ok(())
//! # }
//! ```

mod build;
mod front_matter;
mod index;
mod site;
mod template;
mod title;

pub use build::{BuildError, BuildReport, build_site};
pub use front_matter::{FrontMatter, FrontMatterError, split_front_matter};
pub use index::{
    DocDescriptor, DocIndex, DocRef, IndexConfig, Navigation, NavigationScope, ResolveError,
    ResolvedDoc,
};
pub use site::{ERROR_MESSAGE, HighlightConfig, NOT_FOUND_MESSAGE, Site, SiteConfig};
pub use template::{STYLESHEET, STYLESHEET_PATH};
pub use title::parse_title;
