//! Presentational HTML fragments.
//!
//! Every element the renderer emits carries a class so the stylesheet can
//! style article content without relying on element selectors.

use std::fmt::Write;

use crate::state::escape_html;

/// Class on `<p>`.
pub(crate) const PARAGRAPH_CLASS: &str = "doc-p";
/// Class on `<ul>`.
pub(crate) const UNORDERED_LIST_CLASS: &str = "doc-ul";
/// Class on `<ol>`.
pub(crate) const ORDERED_LIST_CLASS: &str = "doc-ol";
/// Class on `<li>`.
pub(crate) const LIST_ITEM_CLASS: &str = "doc-li";
/// Class on `<blockquote>`.
pub(crate) const BLOCKQUOTE_CLASS: &str = "doc-blockquote";

/// Opening heading tag, e.g. `<h2 class="doc-h2" id="usage">`.
pub(crate) fn heading_start(level: u8, id: &str, out: &mut String) {
    write!(out, r#"<h{level} class="doc-h{level}" id="{id}">"#).unwrap();
}

/// Inline code span.
///
/// Surrounding backticks and whitespace are trimmed from the content.
pub(crate) fn inline_code(code: &str, out: &mut String) {
    let code = code.strip_prefix('`').unwrap_or(code);
    let code = code.strip_suffix('`').unwrap_or(code);
    write!(
        out,
        r#"<code class="inline-code">{}</code>"#,
        escape_html(code.trim())
    )
    .unwrap();
}

/// Fenced or indented code block.
///
/// A single trailing newline is removed. The `language-*` class is what the
/// client-side highlighter picks up.
pub(crate) fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
    let content = content.strip_suffix('\n').unwrap_or(content);
    match lang {
        Some(lang) => write!(
            out,
            r#"<pre class="code-block"><code class="block-code language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(content)
        ),
        None => write!(
            out,
            r#"<pre class="code-block"><code class="block-code">{}</code></pre>"#,
            escape_html(content)
        ),
    }
    .unwrap();
}

pub(crate) fn image(src: &str, alt: &str, title: &str, out: &mut String) {
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, escape_html(title))
    };
    write!(
        out,
        r#"<img src="{}"{title_attr} alt="{}">"#,
        escape_html(src),
        escape_html(alt)
    )
    .unwrap();
}

pub(crate) fn task_list_marker(checked: bool, out: &mut String) {
    if checked {
        out.push_str(r#"<input type="checkbox" checked disabled>"#);
    } else {
        out.push_str(r#"<input type="checkbox" disabled>"#);
    }
}

/// Resolve a markdown link URL relative to a base path.
///
/// Transforms relative links to content files (ending in `.{extension}`) to
/// absolute site routes:
/// - `./sibling.md` → `/docs/basics/sibling` (base `docs/basics`)
/// - `../advanced/hooks.md#rules` → `/docs/advanced/hooks#rules`
///
/// External links, fragment-only links, and links to other files are returned unchanged.
pub(crate) fn resolve_link(url: &str, base_path: &str, extension: &str) -> String {
    if url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
        || url.starts_with("mailto:")
        || url.starts_with("tel:")
        || url.starts_with('#')
    {
        return url.to_owned();
    }

    let (path_part, fragment) = match url.find('#') {
        Some(hash_pos) => (&url[..hash_pos], &url[hash_pos..]),
        None => (url, ""),
    };

    let Some(path_part) = path_part
        .strip_suffix(extension)
        .and_then(|p| p.strip_suffix('.'))
    else {
        return url.to_owned();
    };

    let resolved = if path_part.starts_with('/') {
        path_part.trim_start_matches('/').to_owned()
    } else {
        resolve_relative_path(path_part, base_path)
    };

    format!("/{resolved}{fragment}")
}

/// Resolve a relative path against a base directory.
fn resolve_relative_path(relative: &str, base: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    for component in relative.split('/') {
        match component {
            "" | "." => {}
            // Popping past the root is a no-op
            ".." => {
                segments.pop();
            }
            _ => segments.push(component),
        }
    }

    segments.join("/")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_heading_start() {
        let mut out = String::new();
        heading_start(3, "notes", &mut out);
        assert_eq!(out, r#"<h3 class="doc-h3" id="notes">"#);
    }

    #[test]
    fn test_inline_code_trims_whitespace_and_backticks() {
        let mut out = String::new();
        inline_code("` arr.map() `", &mut out);
        assert_eq!(out, r#"<code class="inline-code">arr.map()</code>"#);
    }

    #[test]
    fn test_inline_code_is_escaped() {
        let mut out = String::new();
        inline_code("<App />", &mut out);
        assert_eq!(out, r#"<code class="inline-code">&lt;App /&gt;</code>"#);
    }

    #[test]
    fn test_code_block_with_language() {
        let mut out = String::new();
        code_block(Some("javascript"), "const x = 1;\n", &mut out);
        assert_eq!(
            out,
            r#"<pre class="code-block"><code class="block-code language-javascript">const x = 1;</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_strips_only_one_newline() {
        let mut out = String::new();
        code_block(None, "a\n\n", &mut out);
        assert_eq!(
            out,
            "<pre class=\"code-block\"><code class=\"block-code\">a\n</code></pre>"
        );
    }

    #[test]
    fn test_image_with_title() {
        let mut out = String::new();
        image("diagram.png", "Event loop", "Loop", &mut out);
        assert_eq!(
            out,
            r#"<img src="diagram.png" title="Loop" alt="Event loop">"#
        );
    }

    #[test]
    fn test_resolve_link_sibling() {
        assert_eq!(
            resolve_link("./array.prototype.map.md", "docs/basics", "md"),
            "/docs/basics/array.prototype.map"
        );
    }

    #[test]
    fn test_resolve_link_other_category_with_fragment() {
        assert_eq!(
            resolve_link("../advanced/hooks.md#rules", "docs/basics", "md"),
            "/docs/advanced/hooks#rules"
        );
    }

    #[test]
    fn test_resolve_link_bare_name() {
        assert_eq!(
            resolve_link("closures.md", "docs/basics", "md"),
            "/docs/basics/closures"
        );
    }

    #[test]
    fn test_resolve_link_external_unchanged() {
        assert_eq!(
            resolve_link("https://developer.mozilla.org/a.md", "docs/basics", "md"),
            "https://developer.mozilla.org/a.md"
        );
        assert_eq!(
            resolve_link("mailto:team@example.com", "docs/basics", "md"),
            "mailto:team@example.com"
        );
    }

    #[test]
    fn test_resolve_link_fragment_only() {
        assert_eq!(resolve_link("#usage", "docs/basics", "md"), "#usage");
    }

    #[test]
    fn test_resolve_link_non_md_unchanged() {
        assert_eq!(resolve_link("./image.png", "docs/basics", "md"), "./image.png");
    }

    #[test]
    fn test_resolve_link_absolute() {
        assert_eq!(
            resolve_link("/docs/advanced/hooks.md", "docs/basics", "md"),
            "/docs/advanced/hooks"
        );
    }

    #[test]
    fn test_resolve_link_traversal_clamped() {
        assert_eq!(resolve_link("../../../../x.md", "docs/basics", "md"), "/x");
    }

    #[test]
    fn test_resolve_link_custom_extension() {
        assert_eq!(
            resolve_link("../advanced/hooks.mdx#rules", "docs/basics", "mdx"),
            "/docs/advanced/hooks#rules"
        );
        assert_eq!(
            resolve_link("./notes.md", "docs/basics", "mdx"),
            "./notes.md"
        );
    }

    #[test]
    fn test_resolve_link_requires_dot_before_extension() {
        assert_eq!(resolve_link("./readmd", "docs/basics", "md"), "./readmd");
    }
}
