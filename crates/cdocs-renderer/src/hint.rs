//! Hint block substitution.
//!
//! Content files use GitBook-style callouts:
//!
//! ```text
//! {% hint style="info" %}
//! Arrays are zero-indexed.
//! {% endhint %}
//! ```
//!
//! These are rewritten into Markdown blockquotes before rendering, so the
//! result above becomes `> **Info:** Arrays are zero-indexed.`

use std::sync::LazyLock;

use regex::{Captures, Regex};

static INFO_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\{% hint style="info" %\}(.*?)\{% endhint %\}"#).unwrap()
});

static WARNING_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\{% hint style="warning" %\}(.*?)\{% endhint %\}"#).unwrap()
});

/// Replace `info` and `warning` hint blocks with blockquote callouts.
///
/// Matching is non-greedy and spans lines. All `info` blocks are replaced
/// before any `warning` block. Blocks with another style, or without a
/// closing `{% endhint %}`, are left unchanged.
///
/// # Examples
///
/// ```
/// use cdocs_renderer::convert_hints;
///
/// let out = convert_hints(r#"{% hint style="info" %}Note{% endhint %}"#);
/// assert_eq!(out, "> **Info:** Note");
/// ```
#[must_use]
pub fn convert_hints(content: &str) -> String {
    let content = replace_hints(&INFO_HINT, content, "Info");
    replace_hints(&WARNING_HINT, &content, "Warning")
}

fn replace_hints(pattern: &Regex, content: &str, label: &str) -> String {
    pattern
        .replace_all(content, |caps: &Captures<'_>| {
            format!("> **{label}:** {}", caps[1].trim())
        })
        .into_owned()
}
