use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Printed by `list` when nothing matches
pub const NO_ENTRIES_MESSAGE: &str = "No blog entries found.";

/// A published post as it appears in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Filename-derived identifier (ordering prefix and extension removed)
    pub slug: String,
    /// Explicit title, or the slug with hyphens turned into spaces
    pub title: String,
    /// Always false once an entry reaches the index
    pub draft: bool,
    /// Tags in header order; duplicates are kept
    pub tags: Vec<String>,
    /// Publication date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Source path relative to the blog root, `/`-separated
    #[serde(rename = "filePath")]
    pub file_path: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.date, self.title, self.file_path)
    }
}

/// One line per entry, or a single notice when there are none.
pub fn format_listing(entries: &[Entry]) -> Vec<String> {
    if entries.is_empty() {
        return vec![NO_ENTRIES_MESSAGE.to_string()];
    }
    entries.iter().map(Entry::to_string).collect()
}

/// Normalized metadata for one document before validity checks.
///
/// The date is still raw text: whether it parses, and whether it is in the
/// future, is decided by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub slug: String,
    pub title: String,
    pub draft: bool,
    pub tags: Vec<String>,
    pub date: Option<String>,
    pub file_path: String,
}

impl Candidate {
    /// Promote to an entry once the date has been resolved.
    pub fn into_entry(self, date: NaiveDate) -> Entry {
        Entry {
            slug: self.slug,
            title: self.title,
            draft: self.draft,
            tags: self.tags,
            date,
            file_path: self.file_path,
        }
    }
}
