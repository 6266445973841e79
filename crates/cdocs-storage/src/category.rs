//! Content categories.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One of the two fixed content groupings.
///
/// Each category corresponds to one source directory. The declaration order is
/// the order in which categories are concatenated into the document index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Core methods and fundamental concepts.
    Basics,
    /// Patterns and advanced techniques.
    Advanced,
}

impl Category {
    /// All categories in index order.
    pub const ALL: [Category; 2] = [Category::Basics, Category::Advanced];

    /// Lowercase name used in routes and as the default directory name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Basics => "basics",
            Category::Advanced => "advanced",
        }
    }

    /// Human-readable label for navigation chrome.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Basics => "Basics",
            Category::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no category.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basics" => Ok(Category::Basics),
            "advanced" => Ok(Category::Advanced),
            other => Err(ParseCategoryError(other.to_owned())),
        }
    }
}
