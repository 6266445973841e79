//! End-to-end build over a content directory on disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use cdocs_site::{Site, SiteConfig, build_site};
use cdocs_storage::FsStorage;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn test_build_site_from_disk() {
    let content = tempfile::tempdir().unwrap();
    write(content.path(), "basics/a.md", "# A\n\nFirst.");
    write(
        content.path(),
        "basics/b-test.md",
        "{% hint style=\"info\" %}\nRemember this.\n{% endhint %}",
    );
    write(content.path(), "advanced/c.md", "# C");
    let out = tempfile::tempdir().unwrap();

    let site = Site::new(
        Arc::new(FsStorage::new(content.path().to_path_buf())),
        SiteConfig::default(),
    );
    let report = build_site(&site, out.path()).unwrap();
    assert_eq!(report.pages, 3);

    let a = read(out.path(), "docs/basics/a/index.html");
    assert!(a.contains("<title>A - Frontend Concepts Documentation</title>"));
    assert!(a.contains("href=\"/docs/basics/b-test\" class=\"doc-nav-link doc-nav-next\""));

    let b = read(out.path(), "docs/basics/b-test/index.html");
    assert!(b.contains("<title>B Test - Frontend Concepts Documentation</title>"));
    assert!(b.contains("<strong>Info:</strong> Remember this."));
    assert!(b.contains("href=\"/docs/basics/a\" class=\"doc-nav-link doc-nav-prev\""));
    assert!(b.contains("href=\"/docs/advanced/c\" class=\"doc-nav-link doc-nav-next\""));

    let c = read(out.path(), "docs/advanced/c/index.html");
    assert!(c.contains("<title>C - Frontend Concepts Documentation</title>"));
    assert!(c.contains("href=\"/docs/basics/b-test\" class=\"doc-nav-link doc-nav-prev\""));

    let home = read(out.path(), "index.html");
    assert!(home.contains("<a href=\"/docs/basics/a\" class=\"button\">"));

    assert!(read(out.path(), "404.html").contains("Document not found"));
    assert!(read(out.path(), "assets/style.css").contains(".doc-nav"));
}

#[test]
fn test_build_site_with_missing_category_directory() {
    let content = tempfile::tempdir().unwrap();
    write(content.path(), "advanced/hooks.md", "# Hooks");
    let out = tempfile::tempdir().unwrap();

    let site = Site::new(
        Arc::new(FsStorage::new(content.path().to_path_buf())),
        SiteConfig::default(),
    );
    let report = build_site(&site, out.path()).unwrap();

    assert_eq!(report.pages, 1);
    let home = read(out.path(), "index.html");
    assert!(home.contains("<a href=\"/docs/advanced/hooks\" class=\"button\">"));
}
