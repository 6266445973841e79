//! YAML front matter support.
//!
//! A content file may start with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! description: Creates a new array with the elements that pass a test.
//! ---
//! # Array.prototype.filter()
//! ```
//!
//! The block is separated from the body before rendering. Only `description`
//! is used; other keys are accepted and ignored.

use serde::Deserialize;

/// Line that opens and closes the front matter block.
const DELIMITER: &str = "---";

/// Front matter fields understood by the site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    /// Page description for the `<meta name="description">` tag.
    #[serde(default)]
    pub description: Option<String>,
}

impl FrontMatter {
    /// Parse front matter from YAML content.
    ///
    /// Empty content returns a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or is not a mapping.
    pub fn from_yaml(content: &str) -> Result<Self, FrontMatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed)
            .map_err(|e| FrontMatterError::Parse(format!("Invalid YAML: {e}")))
    }
}

/// Error type for front matter parsing.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

/// Split a source file into its front matter block and body.
///
/// The first line must be exactly `---` (trailing whitespace allowed) and the
/// block ends at the next such line. The body starts after the closing line.
/// Without an opening line, or without a closing line, there is no front
/// matter and the whole source is the body.
#[must_use]
pub fn split_front_matter(source: &str) -> (Option<&str>, &str) {
    let mut lines = source.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, source);
    };
    if first.trim_end() != DELIMITER {
        return (None, source);
    }

    let matter_start = first.len();
    let mut offset = matter_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return (
                Some(&source[matter_start..offset]),
                &source[offset + line.len()..],
            );
        }
        offset += line.len();
    }

    (None, source)
}
