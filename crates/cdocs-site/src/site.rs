//! Site facade tying the index, renderer and templates together.
//!
//! [`Site`] owns no mutable state: each call rescans storage through the
//! [`DocIndex`], so pages always reflect the files on disk.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use cdocs_site::{Site, SiteConfig};
//! use cdocs_storage::{Category, FsStorage};
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("content")));
//! let site = Site::new(storage, SiteConfig::default());
//!
//! let home = site.render_home();
//! let page = site.render_document(Category::Basics, "array.prototype.filter")?;
//! # Ok::<(), cdocs_site::ResolveError>(())
//! ```

use std::sync::Arc;

use cdocs_renderer::MarkdownRenderer;
use cdocs_storage::{Category, Storage};
use chrono::Datelike;

use crate::index::{DocDescriptor, DocIndex, IndexConfig, ResolveError, ResolvedDoc};
use crate::template::{self, Chrome};

/// Message shown for unknown documents.
pub const NOT_FOUND_MESSAGE: &str = "Document not found";
/// Message shown when a document cannot be processed.
pub const ERROR_MESSAGE: &str = "Error processing document content";

/// Client-side syntax highlighting settings.
#[derive(Clone, Debug)]
pub struct HighlightConfig {
    /// Load Prism on every page.
    pub enabled: bool,
    /// Base URL of the Prism distribution.
    pub cdn_url: String,
    /// Prism language components to load.
    pub languages: Vec<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cdn_url: "https://cdnjs.cloudflare.com/ajax/libs/prism/1.29.0".to_owned(),
            languages: vec![
                "javascript".to_owned(),
                "typescript".to_owned(),
                "jsx".to_owned(),
            ],
        }
    }
}

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Site title, shown in the hero and used for page titles.
    pub title: String,
    /// Brand text of the header link to `/`.
    pub brand: String,
    /// Default `<meta name="description">`.
    pub description: String,
    /// Syntax highlighting.
    pub highlight: HighlightConfig,
    /// Document index settings.
    pub index: IndexConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Frontend Concepts".to_owned(),
            brand: "Frontend Docs".to_owned(),
            description: "A comprehensive guide to frontend development concepts".to_owned(),
            highlight: HighlightConfig::default(),
            index: IndexConfig::default(),
        }
    }
}

/// Documentation site.
pub struct Site {
    index: DocIndex,
    config: SiteConfig,
}

impl Site {
    /// Create a site over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, config: SiteConfig) -> Self {
        Self {
            index: DocIndex::new(storage, config.index.clone()),
            config,
        }
    }

    /// Site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// List all documents in navigation order.
    pub fn documents(&self) -> Vec<DocDescriptor> {
        self.index.list_documents()
    }

    /// Resolve a document with its content and navigation.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the document is unknown or unreadable.
    pub fn resolve(&self, category: Category, slug: &str) -> Result<ResolvedDoc, ResolveError> {
        self.index.resolve(slug, category)
    }

    /// Render the landing page.
    pub fn render_home(&self) -> String {
        let docs = self.index.list_documents();
        let links = first_of_each(&docs);
        let get_started = docs
            .iter()
            .find(|d| d.category == Category::Basics)
            .or_else(|| docs.first());

        template::render_home(&self.chrome(&links), get_started)
    }

    /// Render the page of one document.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the document is unknown or unreadable.
    pub fn render_document(&self, category: Category, slug: &str) -> Result<String, ResolveError> {
        let doc = self.index.resolve(slug, category)?;
        Ok(self.render_resolved(&doc))
    }

    /// Render an already resolved document.
    pub fn render_resolved(&self, doc: &ResolvedDoc) -> String {
        let base_path = format!("docs/{}", doc.descriptor.category);
        let result = MarkdownRenderer::new()
            .with_base_path(base_path)
            .with_extension(self.config.index.extension.as_str())
            .render_markdown(&doc.content);

        let links = first_of_each(&self.index.list_documents());
        template::render_doc_page(
            &self.chrome(&links),
            &doc.descriptor.title,
            doc.description.as_deref(),
            &result.html,
            &doc.navigation,
        )
    }

    /// Render the "Document not found" page.
    pub fn render_not_found(&self) -> String {
        self.render_message(NOT_FOUND_MESSAGE)
    }

    /// Render the "Error processing document content" page.
    pub fn render_error(&self) -> String {
        self.render_message(ERROR_MESSAGE)
    }

    fn render_message(&self, message: &str) -> String {
        let links = first_of_each(&self.index.list_documents());
        template::render_message_page(&self.chrome(&links), message)
    }

    fn chrome<'a>(&'a self, links: &'a [DocDescriptor]) -> Chrome<'a> {
        Chrome {
            site: &self.config,
            category_links: links,
            year: chrono::Local::now().year(),
        }
    }
}

fn first_of_each(docs: &[DocDescriptor]) -> Vec<DocDescriptor> {
    Category::ALL
        .into_iter()
        .filter_map(|category| docs.iter().find(|d| d.category == category).cloned())
        .collect()
}
