//! Document index over the content categories.
//!
//! [`DocIndex`] scans both categories on every call and never caches. The
//! document order is all basics files followed by all advanced files, each in
//! storage listing order; navigation neighbours are positional in that order.

use std::sync::Arc;

use cdocs_renderer::convert_hints;
use cdocs_storage::{Category, Storage, StorageError};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::front_matter::{FrontMatter, split_front_matter};
use crate::title::parse_title;

/// Characters kept verbatim in a route segment: A-Z a-z 0-9 - . _ ~
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Site route of a document page, with the slug percent-encoded.
fn doc_href(category: Category, slug: &str) -> String {
    format!(
        "/docs/{category}/{}",
        utf8_percent_encode(slug, SEGMENT_ENCODE_SET)
    )
}

/// How prev/next neighbours are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavigationScope {
    /// One chain across all categories; the last basics document links to
    /// the first advanced document.
    #[default]
    Global,
    /// Neighbours restricted to the document's own category.
    Category,
}

/// Configuration for [`DocIndex`].
#[derive(Clone, Debug)]
pub struct IndexConfig {
    /// Content file extension without the leading dot.
    pub extension: String,
    /// Navigation neighbour selection.
    pub scope: NavigationScope,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extension: "md".to_owned(),
            scope: NavigationScope::Global,
        }
    }
}

/// A content file known to the index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocDescriptor {
    /// File name without extension; the lookup key within a category.
    pub slug: String,
    /// Bare file name in the category directory.
    pub file_name: String,
    /// Title derived from the file name.
    pub title: String,
    /// Category the file belongs to.
    pub category: Category,
}

impl DocDescriptor {
    /// Site route of the document page.
    #[must_use]
    pub fn href(&self) -> String {
        doc_href(self.category, &self.slug)
    }

    fn to_ref(&self) -> DocRef {
        DocRef {
            title: self.title.clone(),
            slug: self.slug.clone(),
            category: self.category,
        }
    }
}

/// Link target for prev/next navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocRef {
    pub title: String,
    pub slug: String,
    pub category: Category,
}

impl DocRef {
    /// Site route of the referenced page.
    #[must_use]
    pub fn href(&self) -> String {
        doc_href(self.category, &self.slug)
    }
}

/// Neighbours of a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub prev: Option<DocRef>,
    pub next: Option<DocRef>,
}

/// A document with its body and navigation.
#[derive(Clone, Debug)]
pub struct ResolvedDoc {
    pub descriptor: DocDescriptor,
    /// Body after front matter removal and hint substitution.
    pub content: String,
    /// `description` from the front matter.
    pub description: Option<String>,
    pub navigation: Navigation,
}

/// Error returned when a document cannot be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No document with this slug in this category.
    #[error("Document not found: {category}/{slug}")]
    NotFound { category: Category, slug: String },
    /// The document is indexed but its file could not be read.
    #[error("Failed to read document {category}/{slug}: {source}")]
    Read {
        category: Category,
        slug: String,
        #[source]
        source: StorageError,
    },
}

/// Document index backed by a [`Storage`].
pub struct DocIndex {
    storage: Arc<dyn Storage>,
    suffix: String,
    scope: NavigationScope,
}

impl DocIndex {
    /// Create an index over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, config: IndexConfig) -> Self {
        Self {
            storage,
            suffix: format!(".{}", config.extension),
            scope: config.scope,
        }
    }

    /// List all documents: basics first, then advanced.
    ///
    /// A category that cannot be listed contributes no documents; the failure
    /// is logged and the other category is still returned.
    pub fn list_documents(&self) -> Vec<DocDescriptor> {
        Category::ALL
            .into_iter()
            .flat_map(|category| self.list_category(category))
            .collect()
    }

    /// Resolve a document with its content and navigation.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] if no document matches, or
    /// [`ResolveError::Read`] if its file cannot be read.
    pub fn resolve(&self, slug: &str, category: Category) -> Result<ResolvedDoc, ResolveError> {
        let mut docs = self.list_documents();
        if self.scope == NavigationScope::Category {
            docs.retain(|d| d.category == category);
        }

        let Some(pos) = docs
            .iter()
            .position(|d| d.category == category && d.slug == slug)
        else {
            return Err(ResolveError::NotFound {
                category,
                slug: slug.to_owned(),
            });
        };

        let descriptor = &docs[pos];
        let source = self
            .storage
            .read(category, &descriptor.file_name)
            .map_err(|source| ResolveError::Read {
                category,
                slug: slug.to_owned(),
                source,
            })?;

        let (matter, body) = split_front_matter(&source);
        let front_matter = matter.map_or_else(FrontMatter::default, |yaml| {
            FrontMatter::from_yaml(yaml).unwrap_or_else(|e| {
                tracing::warn!(
                    category = %category,
                    file = %descriptor.file_name,
                    error = %e,
                    "Ignoring malformed front matter"
                );
                FrontMatter::default()
            })
        });

        let navigation = Navigation {
            prev: pos.checked_sub(1).map(|i| docs[i].to_ref()),
            next: docs.get(pos + 1).map(DocDescriptor::to_ref),
        };

        Ok(ResolvedDoc {
            content: convert_hints(body),
            description: front_matter.description,
            navigation,
            descriptor: docs.swap_remove(pos),
        })
    }

    fn list_category(&self, category: Category) -> Vec<DocDescriptor> {
        let names = match self.storage.list(category) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(category = %category, error = %e, "Failed to list documents");
                return Vec::new();
            }
        };

        names
            .into_iter()
            .filter_map(|file_name| {
                let slug = file_name.strip_suffix(&self.suffix)?;
                if slug.is_empty() {
                    return None;
                }
                Some(DocDescriptor {
                    slug: slug.to_owned(),
                    title: parse_title(&file_name),
                    file_name,
                    category,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use cdocs_storage::{MockStorage, StorageErrorKind};
    use pretty_assertions::assert_eq;

    use super::*;

    fn index(storage: MockStorage) -> DocIndex {
        DocIndex::new(Arc::new(storage), IndexConfig::default())
    }

    fn sample_storage() -> MockStorage {
        MockStorage::new()
            .with_file(Category::Basics, "a.md", "# A")
            .with_file(Category::Basics, "b-test.md", "# B")
            .with_file(Category::Advanced, "c.md", "# C")
    }

    fn doc_ref(title: &str, slug: &str, category: Category) -> DocRef {
        DocRef {
            title: title.to_owned(),
            slug: slug.to_owned(),
            category,
        }
    }

    #[test]
    fn test_list_documents_order_and_titles() {
        let docs = index(sample_storage()).list_documents();

        let summary: Vec<(&str, &str, Category)> = docs
            .iter()
            .map(|d| (d.slug.as_str(), d.title.as_str(), d.category))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("a", "A", Category::Basics),
                ("b-test", "B Test", Category::Basics),
                ("c", "C", Category::Advanced),
            ]
        );
        assert_eq!(docs[1].file_name, "b-test.md");
    }

    #[test]
    fn test_list_documents_filters_extension() {
        let storage = MockStorage::new()
            .with_file(Category::Basics, "notes.txt", "")
            .with_file(Category::Basics, "draft.md.bak", "")
            .with_file(Category::Basics, ".md", "")
            .with_file(Category::Basics, "map.md", "");

        let docs = index(storage).list_documents();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].slug, "map");
    }

    #[test]
    fn test_custom_extension() {
        let storage = MockStorage::new()
            .with_file(Category::Basics, "a.md", "")
            .with_file(Category::Basics, "b.mdx", "");
        let index = DocIndex::new(
            Arc::new(storage),
            IndexConfig {
                extension: "mdx".to_owned(),
                ..IndexConfig::default()
            },
        );

        let docs = index.list_documents();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].slug, "b");
    }

    #[test]
    fn test_unreadable_category_is_skipped() {
        let storage = sample_storage().with_unreadable(Category::Advanced);

        let docs = index(storage).list_documents();
        let slugs: Vec<&str> = docs.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b-test"]);
    }

    #[test]
    fn test_empty_storage() {
        assert!(index(MockStorage::new()).list_documents().is_empty());
    }

    #[test]
    fn test_resolve_navigation_chain() {
        let index = index(sample_storage());

        let a = index.resolve("a", Category::Basics).unwrap();
        assert_eq!(a.navigation.prev, None);
        assert_eq!(
            a.navigation.next,
            Some(doc_ref("B Test", "b-test", Category::Basics))
        );

        let b = index.resolve("b-test", Category::Basics).unwrap();
        assert_eq!(b.navigation.prev, Some(doc_ref("A", "a", Category::Basics)));
        // Last basics document links into advanced
        assert_eq!(
            b.navigation.next,
            Some(doc_ref("C", "c", Category::Advanced))
        );

        let c = index.resolve("c", Category::Advanced).unwrap();
        assert_eq!(
            c.navigation.prev,
            Some(doc_ref("B Test", "b-test", Category::Basics))
        );
        assert_eq!(c.navigation.next, None);
    }

    #[test]
    fn test_resolve_category_scope() {
        let index = DocIndex::new(
            Arc::new(sample_storage()),
            IndexConfig {
                scope: NavigationScope::Category,
                ..IndexConfig::default()
            },
        );

        let b = index.resolve("b-test", Category::Basics).unwrap();
        assert_eq!(b.navigation.next, None);

        let c = index.resolve("c", Category::Advanced).unwrap();
        assert_eq!(c.navigation, Navigation::default());
    }

    #[test]
    fn test_resolve_returns_descriptor_and_content() {
        let storage = MockStorage::new().with_file(
            Category::Basics,
            "array.prototype.map.md",
            "# Map\n\n{% hint style=\"info\" %}Returns a new array{% endhint %}",
        );

        let doc = index(storage)
            .resolve("array.prototype.map", Category::Basics)
            .unwrap();
        assert_eq!(doc.descriptor.title, "Array.prototype.Map");
        assert_eq!(doc.descriptor.file_name, "array.prototype.map.md");
        assert_eq!(doc.content, "# Map\n\n> **Info:** Returns a new array");
        assert_eq!(doc.description, None);
    }

    #[test]
    fn test_resolve_strips_front_matter() {
        let storage = MockStorage::new().with_file(
            Category::Advanced,
            "hooks.md",
            "---\ndescription: Rules of hooks\nauthor: someone\n---\n# Hooks\n",
        );

        let doc = index(storage).resolve("hooks", Category::Advanced).unwrap();
        assert_eq!(doc.content, "# Hooks\n");
        assert_eq!(doc.description.as_deref(), Some("Rules of hooks"));
    }

    #[test]
    fn test_resolve_ignores_malformed_front_matter() {
        let storage = MockStorage::new().with_file(
            Category::Basics,
            "a.md",
            "---\ndescription: [oops\n---\nBody",
        );

        let doc = index(storage).resolve("a", Category::Basics).unwrap();
        assert_eq!(doc.content, "Body");
        assert_eq!(doc.description, None);
    }

    #[test]
    fn test_resolve_unknown_slug() {
        let err = index(sample_storage())
            .resolve("missing", Category::Basics)
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::NotFound { category: Category::Basics, ref slug } if slug == "missing"
        ));
        assert_eq!(err.to_string(), "Document not found: basics/missing");
    }

    #[test]
    fn test_resolve_wrong_category() {
        let err = index(sample_storage())
            .resolve("c", Category::Basics)
            .unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { .. }));
    }

    #[test]
    fn test_resolve_read_failure() {
        let storage = sample_storage().with_entry(Category::Advanced, "gone.md");

        let err = index(storage)
            .resolve("gone", Category::Advanced)
            .unwrap_err();
        match err {
            ResolveError::Read { source, .. } => {
                assert_eq!(source.kind, StorageErrorKind::NotFound);
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_descriptor_serializes_camel_case() {
        let docs = index(sample_storage()).list_documents();
        let json = serde_json::to_value(&docs[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "slug": "b-test",
                "fileName": "b-test.md",
                "title": "B Test",
                "category": "basics",
            })
        );
    }

    #[test]
    fn test_hrefs() {
        let docs = index(sample_storage()).list_documents();
        assert_eq!(docs[2].href(), "/docs/advanced/c");
        assert_eq!(docs[0].to_ref().href(), "/docs/basics/a");
    }

    #[test]
    fn test_hrefs_encode_reserved_characters() {
        let storage = MockStorage::new()
            .with_file(Category::Basics, "what-is-this?.md", "")
            .with_file(Category::Basics, "100%-js.md", "")
            .with_file(Category::Advanced, "event loop#2.md", "");
        let docs = index(storage).list_documents();

        assert_eq!(docs[0].href(), "/docs/basics/what-is-this%3F");
        assert_eq!(docs[1].to_ref().href(), "/docs/basics/100%25-js");
        assert_eq!(docs[2].href(), "/docs/advanced/event%20loop%232");
    }
}
