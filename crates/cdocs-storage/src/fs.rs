//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading content files from the local filesystem.
//! Each [`Category`] maps to one directory; directories are read flat (no
//! recursion) and file names are returned sorted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::storage::{Storage, StorageError, validate_file_name};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use cdocs_storage::{Category, FsStorage, Storage};
///
/// // Reads `content/basics/*` and `content/advanced/*`
/// let storage = FsStorage::new(PathBuf::from("content"));
/// let names = storage.list(Category::Basics)?;
/// # Ok::<(), cdocs_storage::StorageError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FsStorage {
    basics_dir: PathBuf,
    advanced_dir: PathBuf,
}

impl FsStorage {
    /// Create storage rooted at `root`, using `root/basics` and `root/advanced`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            basics_dir: root.join(Category::Basics.as_str()),
            advanced_dir: root.join(Category::Advanced.as_str()),
        }
    }

    /// Create storage with an explicit directory per category.
    #[must_use]
    pub fn with_dirs(basics_dir: PathBuf, advanced_dir: PathBuf) -> Self {
        Self {
            basics_dir,
            advanced_dir,
        }
    }

    /// Directory backing a category.
    #[must_use]
    pub fn dir(&self, category: Category) -> &Path {
        match category {
            Category::Basics => &self.basics_dir,
            Category::Advanced => &self.advanced_dir,
        }
    }
}

impl Storage for FsStorage {
    fn list(&self, category: Category) -> Result<Vec<String>, StorageError> {
        let dir = self.dir(category);
        let entries = fs::read_dir(dir)
            .map_err(|e| StorageError::io(e, Some(dir.to_path_buf())).with_backend(BACKEND))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| StorageError::io(e, Some(dir.to_path_buf())).with_backend(BACKEND))?;

            // Follow symlinks so linked content files are listed too
            if !entry.path().is_file() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => {
                    tracing::warn!(
                        category = %category,
                        name = %name.to_string_lossy(),
                        "Skipping file with non UTF-8 name"
                    );
                }
            }
        }

        // Platform listing order is unspecified
        names.sort();
        Ok(names)
    }

    fn read(&self, category: Category, file_name: &str) -> Result<String, StorageError> {
        validate_file_name(file_name, BACKEND)?;
        let path = self.dir(category).join(file_name);
        fs::read_to_string(&path).map_err(|e| StorageError::io(e, Some(path)).with_backend(BACKEND))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::StorageErrorKind;

    fn create_content_dir() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("basics")).unwrap();
        fs::create_dir(temp_dir.path().join("advanced")).unwrap();
        temp_dir
    }

    #[test]
    fn test_fs_storage_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FsStorage>();
    }

    #[test]
    fn test_new_maps_categories_to_subdirectories() {
        let storage = FsStorage::new(PathBuf::from("/content"));
        assert_eq!(
            storage.dir(Category::Basics),
            Path::new("/content/basics")
        );
        assert_eq!(
            storage.dir(Category::Advanced),
            Path::new("/content/advanced")
        );
    }

    #[test]
    fn test_list_empty_dir() {
        let temp_dir = create_content_dir();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        assert!(storage.list(Category::Basics).unwrap().is_empty());
    }

    #[test]
    fn test_list_returns_sorted_file_names() {
        let temp_dir = create_content_dir();
        let basics = temp_dir.path().join("basics");
        fs::write(basics.join("b-test.md"), "B").unwrap();
        fs::write(basics.join("a.md"), "A").unwrap();
        fs::write(basics.join("notes.txt"), "not markdown").unwrap();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        let names = storage.list(Category::Basics).unwrap();

        assert_eq!(names, vec!["a.md", "b-test.md", "notes.txt"]);
    }

    #[test]
    fn test_list_skips_directories() {
        let temp_dir = create_content_dir();
        let basics = temp_dir.path().join("basics");
        fs::create_dir(basics.join("folder.md")).unwrap();
        fs::write(basics.join("page.md"), "Page").unwrap();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        assert_eq!(storage.list(Category::Basics).unwrap(), vec!["page.md"]);
    }

    #[test]
    fn test_list_missing_dir_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        let err = storage.list(Category::Advanced).unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(err.backend, Some("Fs"));
        assert_eq!(err.path, Some(temp_dir.path().join("advanced")));
    }

    #[test]
    fn test_with_dirs_uses_custom_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let intro = temp_dir.path().join("intro");
        let deep = temp_dir.path().join("deep-dive");
        fs::create_dir(&intro).unwrap();
        fs::create_dir(&deep).unwrap();
        fs::write(deep.join("hooks.md"), "# Hooks").unwrap();

        let storage = FsStorage::with_dirs(intro, deep);

        assert!(storage.list(Category::Basics).unwrap().is_empty());
        assert_eq!(storage.list(Category::Advanced).unwrap(), vec!["hooks.md"]);
        assert_eq!(
            storage.read(Category::Advanced, "hooks.md").unwrap(),
            "# Hooks"
        );
    }

    #[test]
    fn test_read_existing_file() {
        let temp_dir = create_content_dir();
        fs::write(
            temp_dir.path().join("basics").join("array.prototype.map.md"),
            "# Map\n\nContent.",
        )
        .unwrap();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        let content = storage
            .read(Category::Basics, "array.prototype.map.md")
            .unwrap();

        assert_eq!(content, "# Map\n\nContent.");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = create_content_dir();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        let err = storage.read(Category::Basics, "missing.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn test_read_rejects_path_traversal() {
        let temp_dir = create_content_dir();
        fs::write(temp_dir.path().join("secret.md"), "secret").unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        let err = storage.read(Category::Basics, "../secret.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::InvalidPath);
    }
}
