use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;

use crate::config::Config;
use crate::entry::{Candidate, Entry, normalize, select_published};
use crate::header::parse_header;
use crate::index::{WrittenIndex, write_index};
use crate::scan::{relative_source_path, scan_documents};

/// Scan, parse and normalize every document under the configured root.
///
/// Files that cannot be read as UTF-8 text are skipped with a warning.
pub fn collect_candidates(config: &Config) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for path in scan_documents(&config.root, &config.extension) {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Skipping unreadable document {}: {}", path.display(), e);
                continue;
            }
        };

        let relative = relative_source_path(&config.root, &path);
        candidates.push(normalize(parse_header(&content), &relative, &config.extension));
    }

    candidates
}

/// All published entries under the root, newest first.
pub fn collect_entries(config: &Config, today: NaiveDate) -> Vec<Entry> {
    let candidates = collect_candidates(config);
    let total = candidates.len();
    let entries = select_published(candidates, today);

    tracing::debug!(
        "Selected {} of {} documents under {}",
        entries.len(),
        total,
        config.root.display()
    );
    entries
}

/// Rebuild the persisted index and return what was written.
pub fn build_index(config: &Config, today: NaiveDate) -> Result<WrittenIndex> {
    let target = config.output_path();
    let entries = collect_entries(config, today);

    write_index(entries, &target)
        .with_context(|| format!("Failed to write index to {}", target.display()))
}
