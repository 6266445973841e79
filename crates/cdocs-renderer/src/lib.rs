//! Markdown to HTML rendering for cdocs pages.
//!
//! This crate turns the body of a content file into the HTML article shown on
//! a document page. Rendering happens in two steps:
//!
//! 1. [`convert_hints`] rewrites `{% hint %}` callouts into Markdown
//!    blockquotes (a pure string transform).
//! 2. [`MarkdownRenderer`] walks pulldown-cmark events and emits HTML where
//!    block elements carry presentational classes, headings get unique IDs,
//!    and fenced code is tagged `language-*` for client-side highlighting.
//!
//! # Example
//!
//! ```
//! use cdocs_renderer::{MarkdownRenderer, convert_hints};
//!
//! let body = convert_hints("{% hint style=\"warning\" %}Mutates{% endhint %}");
//! let result = MarkdownRenderer::new().render_markdown(&body);
//! assert!(result.html.contains("<strong>Warning:</strong> Mutates"));
//! ```

mod hint;
mod html;
mod renderer;
mod state;
mod util;

pub use hint::convert_hints;
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::escape_html;
pub use util::slugify;
