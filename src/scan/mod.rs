mod path;


pub use path::relative_source_path;

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Marker prefix for entries the scanner never visits
pub const HIDDEN_PREFIX: char = '.';

/// Hidden names are skipped below the root; the root itself is always walked.
fn is_visible(entry: &DirEntry) -> bool {
    entry.depth() == 0
        || !entry
            .file_name()
            .to_string_lossy()
            .starts_with(HIDDEN_PREFIX)
}

/// Check whether a file name carries the document extension
pub fn is_document(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy();
            name.len() > extension.len() + 1 && name.ends_with(&format!(".{}", extension))
        })
        .unwrap_or(false)
}

/// Walk `root` recursively and collect every document path.
///
/// Order follows the directory walk and is not stable across platforms.
/// A missing root or unreadable subdirectories shrink the result instead of
/// failing the scan.
pub fn scan_documents(root: &Path, extension: &str) -> Vec<PathBuf> {
    if !root.exists() {
        tracing::debug!("Root does not exist, nothing to scan: {}", root.display());
        return Vec::new();
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(is_visible)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || !is_document(path, extension) {
            continue;
        }

        documents.push(path.to_path_buf());
    }

    tracing::debug!(
        "Found {} documents under {}",
        documents.len(),
        root.display()
    );
    documents
}
