//! Display titles derived from content file names.

/// Segment kept verbatim between two method-path segments.
const PROTECTED_SEGMENT: &str = "prototype";

/// Derive a display title from a content file name.
///
/// The extension is stripped and the stem is split on `.` into segments.
/// Hyphens inside a segment separate words. Segments and words are joined with
/// single spaces, and every ASCII lowercase letter at a word boundary is
/// uppercased.
///
/// A `prototype` segment with a segment on each side keeps its dots and its
/// casing, so method paths read naturally.
///
/// # Examples
///
/// ```
/// use cdocs_site::parse_title;
///
/// assert_eq!(parse_title("array.prototype.filter.md"), "Array.prototype.Filter");
/// assert_eq!(parse_title("object.keys.md"), "Object Keys");
/// assert_eq!(parse_title("b-test.md"), "B Test");
/// ```
#[must_use]
pub fn parse_title(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);
    let segments: Vec<&str> = stem.split('.').filter(|s| !s.is_empty()).collect();

    let mut title = String::with_capacity(stem.len());
    let mut prev_protected = false;

    for (i, segment) in segments.iter().enumerate() {
        let protected = *segment == PROTECTED_SEGMENT && i > 0 && i + 1 < segments.len();

        if protected {
            if !title.is_empty() {
                title.push('.');
            }
            title.push_str(segment);
        } else {
            let mut words = segment.split('-').filter(|w| !w.is_empty()).peekable();
            if words.peek().is_none() {
                continue;
            }
            if !title.is_empty() {
                title.push(if prev_protected { '.' } else { ' ' });
            }
            for (j, word) in words.enumerate() {
                if j > 0 {
                    title.push(' ');
                }
                capitalize_words_into(word, &mut title);
            }
        }

        prev_protected = protected;
    }

    title
}

/// Append `word`, uppercasing ASCII lowercase letters that start a word.
fn capitalize_words_into(word: &str, buf: &mut String) {
    let mut at_boundary = true;
    for c in word.chars() {
        if at_boundary && c.is_ascii_lowercase() {
            buf.push(c.to_ascii_uppercase());
        } else {
            buf.push(c);
        }
        at_boundary = !(c.is_ascii_alphanumeric() || c == '_');
    }
}
