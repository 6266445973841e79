//! Static site generation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::index::ResolveError;
use crate::site::Site;
use crate::template::STYLESHEET;

/// Summary of a completed build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildReport {
    /// Output directory.
    pub out_dir: PathBuf,
    /// Number of document pages written (landing and 404 pages excluded).
    pub pages: usize,
}

/// Error returned by [`build_site`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Writing the output failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A listed document could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Generate the whole site as static files under `out_dir`.
///
/// Writes `index.html`, `404.html`, `assets/style.css` and one
/// `docs/{category}/{slug}/index.html` per document. Any document that fails
/// to resolve aborts the build.
///
/// # Errors
///
/// Returns [`BuildError`] if a document cannot be resolved or a file cannot be
/// written.
pub fn build_site(site: &Site, out_dir: &Path) -> Result<BuildReport, BuildError> {
    write_file(&out_dir.join("index.html"), &site.render_home())?;

    let mut pages = 0;
    for descriptor in site.documents() {
        let doc = site.resolve(descriptor.category, &descriptor.slug)?;
        let path = out_dir
            .join("docs")
            .join(descriptor.category.as_str())
            .join(&descriptor.slug)
            .join("index.html");
        write_file(&path, &site.render_resolved(&doc))?;
        tracing::debug!(path = %path.display(), "Wrote page");
        pages += 1;
    }

    write_file(&out_dir.join("404.html"), &site.render_not_found())?;
    write_file(&out_dir.join("assets").join("style.css"), STYLESHEET)?;

    tracing::info!(pages, out_dir = %out_dir.display(), "Site built");
    Ok(BuildReport {
        out_dir: out_dir.to_path_buf(),
        pages,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    let io_err = |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cdocs_storage::{Category, MockStorage};

    use super::*;
    use crate::site::SiteConfig;

    #[test]
    fn test_build_writes_all_files() {
        let storage = MockStorage::new()
            .with_file(Category::Basics, "a.md", "# A")
            .with_file(Category::Advanced, "c.md", "# C");
        let site = Site::new(Arc::new(storage), SiteConfig::default());
        let out = tempfile::tempdir().unwrap();

        let report = build_site(&site, out.path()).unwrap();

        assert_eq!(report.pages, 2);
        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("404.html").is_file());
        assert!(out.path().join("assets/style.css").is_file());
        let page = fs::read_to_string(out.path().join("docs/advanced/c/index.html")).unwrap();
        assert!(page.contains("<h1 class=\"doc-h1\" id=\"c\">C</h1>"));
    }

    #[test]
    fn test_build_aborts_on_unreadable_document() {
        let storage = MockStorage::new()
            .with_file(Category::Basics, "a.md", "# A")
            .with_entry(Category::Basics, "gone.md");
        let site = Site::new(Arc::new(storage), SiteConfig::default());
        let out = tempfile::tempdir().unwrap();

        let err = build_site(&site, out.path()).unwrap_err();
        assert!(matches!(err, BuildError::Resolve(ResolveError::Read { .. })));
    }

    #[test]
    fn test_build_reports_io_errors() {
        let storage = MockStorage::new();
        let site = Site::new(Arc::new(storage), SiteConfig::default());
        let out = tempfile::tempdir().unwrap();
        // A file where the output directory should be
        let blocked = out.path().join("blocked");
        fs::write(&blocked, "").unwrap();

        let err = build_site(&site, &blocked).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }
}
