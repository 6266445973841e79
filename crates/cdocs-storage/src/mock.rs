//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::path::PathBuf;

use crate::category::Category;
use crate::storage::{Storage, StorageError, StorageErrorKind, validate_file_name};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

#[derive(Debug)]
struct MockFile {
    category: Category,
    name: String,
    content: Option<String>,
}

/// Mock storage for testing.
///
/// Stores files in memory and lists them in insertion order. Use the builder
/// methods to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use cdocs_storage::{Category, MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file(Category::Basics, "a.md", "# A")
///     .with_unreadable(Category::Advanced);
///
/// let names = storage.list(Category::Basics).unwrap();
/// assert!(storage.list(Category::Advanced).is_err());
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: Vec<MockFile>,
    unreadable: Vec<Category>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with content.
    #[must_use]
    pub fn with_file(
        mut self,
        category: Category,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.files.push(MockFile {
            category,
            name: name.into(),
            content: Some(content.into()),
        });
        self
    }

    /// Add a listed file whose read fails with [`StorageErrorKind::NotFound`].
    ///
    /// Simulates a file deleted between listing and reading.
    #[must_use]
    pub fn with_entry(mut self, category: Category, name: impl Into<String>) -> Self {
        self.files.push(MockFile {
            category,
            name: name.into(),
            content: None,
        });
        self
    }

    /// Make listing a category fail with [`StorageErrorKind::PermissionDenied`].
    #[must_use]
    pub fn with_unreadable(mut self, category: Category) -> Self {
        self.unreadable.push(category);
        self
    }

    fn find(&self, category: Category, name: &str) -> Option<&MockFile> {
        self.files
            .iter()
            .find(|f| f.category == category && f.name == name)
    }
}

impl Storage for MockStorage {
    fn list(&self, category: Category) -> Result<Vec<String>, StorageError> {
        if self.unreadable.contains(&category) {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_path(category.as_str())
                .with_backend(BACKEND));
        }

        Ok(self
            .files
            .iter()
            .filter(|f| f.category == category)
            .map(|f| f.name.clone())
            .collect())
    }

    fn read(&self, category: Category, file_name: &str) -> Result<String, StorageError> {
        validate_file_name(file_name, BACKEND)?;
        self.find(category, file_name)
            .and_then(|f| f.content.clone())
            .ok_or_else(|| {
                StorageError::not_found(PathBuf::from(category.as_str()).join(file_name))
                    .with_backend(BACKEND)
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_storage_lists_nothing() {
        let storage = MockStorage::new();

        assert!(storage.list(Category::Basics).unwrap().is_empty());
        assert!(storage.list(Category::Advanced).unwrap().is_empty());
    }

    #[test]
    fn test_list_keeps_insertion_order_per_category() {
        let storage = MockStorage::new()
            .with_file(Category::Basics, "z.md", "Z")
            .with_file(Category::Advanced, "hooks.md", "Hooks")
            .with_file(Category::Basics, "a.md", "A");

        assert_eq!(storage.list(Category::Basics).unwrap(), vec!["z.md", "a.md"]);
        assert_eq!(storage.list(Category::Advanced).unwrap(), vec!["hooks.md"]);
    }

    #[test]
    fn test_read_content() {
        let storage = MockStorage::new().with_file(Category::Basics, "a.md", "# A");

        assert_eq!(storage.read(Category::Basics, "a.md").unwrap(), "# A");
    }

    #[test]
    fn test_read_wrong_category_is_not_found() {
        let storage = MockStorage::new().with_file(Category::Basics, "a.md", "# A");

        let err = storage.read(Category::Advanced, "a.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(err.backend, Some("Mock"));
    }

    #[test]
    fn test_entry_is_listed_but_unreadable() {
        let storage = MockStorage::new().with_entry(Category::Basics, "gone.md");

        assert_eq!(storage.list(Category::Basics).unwrap(), vec!["gone.md"]);
        let err = storage.read(Category::Basics, "gone.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn test_unreadable_category() {
        let storage = MockStorage::new()
            .with_file(Category::Basics, "a.md", "A")
            .with_unreadable(Category::Advanced);

        assert!(storage.list(Category::Basics).is_ok());
        let err = storage.list(Category::Advanced).unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
    }
}
