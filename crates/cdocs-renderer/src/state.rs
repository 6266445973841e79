//! Render state tracked across pulldown-cmark events.

use std::collections::HashMap;

use pulldown_cmark::Alignment;

use crate::util::slugify;

/// Escape special HTML characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Code block accumulation.
#[derive(Debug, Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    lang: Option<String>,
    content: String,
}

impl CodeBlockState {
    pub(crate) fn start(&mut self, lang: Option<String>) {
        self.active = true;
        self.lang = lang;
        self.content.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.content.push_str(s);
    }

    pub(crate) fn push_newline(&mut self) {
        self.content.push('\n');
    }

    /// Finish the block, returning its language and source.
    pub(crate) fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.lang.take(), std::mem::take(&mut self.content))
    }
}

/// Table rendering state.
#[derive(Debug, Default)]
pub(crate) struct TableState {
    alignments: Vec<Alignment>,
    in_head: bool,
    cell_index: usize,
}

impl TableState {
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Inline style attribute for the current cell, or an empty string.
    pub(crate) fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align: left""#,
            Some(Alignment::Center) => r#" style="text-align: center""#,
            Some(Alignment::Right) => r#" style="text-align: right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// Image alt text accumulation.
#[derive(Debug, Default)]
pub(crate) struct ImageState {
    active: bool,
    alt: String,
}

impl ImageState {
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.alt.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.alt.push_str(s);
    }

    pub(crate) fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt)
    }
}

/// Heading capture and ID generation.
///
/// Heading content is buffered until the end tag so the opening tag can carry
/// an `id` derived from the plain text.
#[derive(Debug, Default)]
pub(crate) struct HeadingState {
    level: Option<u8>,
    text: String,
    html: String,
    used_ids: HashMap<String, usize>,
}

impl HeadingState {
    pub(crate) fn start_heading(&mut self, level: u8) {
        self.level = Some(level);
        self.text.clear();
        self.html.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.level.is_some()
    }

    pub(crate) fn push_text(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub(crate) fn push_html(&mut self, s: &str) {
        self.html.push_str(s);
    }

    pub(crate) fn html_buffer(&mut self) -> &mut String {
        &mut self.html
    }

    /// Finish the current heading.
    ///
    /// Returns `(level, id, html)`.
    pub(crate) fn complete_heading(&mut self) -> Option<(u8, String, String)> {
        let level = self.level.take()?;
        let title = self.text.trim().to_owned();
        let id = self.unique_id(&title);
        Some((level, id, std::mem::take(&mut self.html)))
    }

    fn unique_id(&mut self, title: &str) -> String {
        let mut base = slugify(title);
        if base.is_empty() {
            base.push_str("section");
        }

        let count = self.used_ids.entry(base.clone()).or_insert(0);
        let id = if *count == 0 {
            base
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_heading_ids_are_deduplicated() {
        let mut state = HeadingState::default();
        let mut ids = Vec::new();
        for _ in 0..3 {
            state.start_heading(2);
            state.push_text("Usage");
            ids.push(state.complete_heading().unwrap().1);
        }
        assert_eq!(ids, vec!["usage", "usage-1", "usage-2"]);
    }

    #[test]
    fn test_heading_ids_shared_across_levels() {
        let mut state = HeadingState::default();
        state.start_heading(1);
        state.push_text("Detail");
        let (level, id, _) = state.complete_heading().unwrap();
        assert_eq!((level, id.as_str()), (1, "detail"));

        state.start_heading(3);
        state.push_text("  Detail ");
        let (level, id, _) = state.complete_heading().unwrap();
        assert_eq!((level, id.as_str()), (3, "detail-1"));
    }

    #[test]
    fn test_heading_without_slug_characters() {
        let mut state = HeadingState::default();
        state.start_heading(2);
        state.push_text("!!!");
        assert_eq!(state.complete_heading().unwrap().1, "section");
    }

    #[test]
    fn test_table_alignment_style() {
        let mut table = TableState::default();
        table.start(vec![Alignment::None, Alignment::Right]);
        assert_eq!(table.current_alignment_style(), "");
        table.next_cell();
        assert_eq!(
            table.current_alignment_style(),
            r#" style="text-align: right""#
        );
        table.next_cell();
        assert_eq!(table.current_alignment_style(), "");
    }
}
