use crate::entry::Entry;
use crate::error::BlogdexError;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Serialize entries exactly as they are persisted (2-space pretty JSON).
pub fn render_index(entries: &[Entry]) -> Result<String, BlogdexError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// SHA-256 of a rendered index, hex encoded
pub fn index_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// What [`write_index`] put on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIndex {
    pub entries: Vec<Entry>,
    /// SHA-256 of the exact bytes written
    pub digest: String,
}

/// Write the full index to `target`, replacing whatever was there.
///
/// Parent directories are created first. The JSON goes to a sibling temp file
/// that is renamed over the target, so readers never see a half-written
/// index.
pub fn write_index(entries: Vec<Entry>, target: &Path) -> Result<WrittenIndex, BlogdexError> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BlogdexError::io(parent, e))?;
    }

    let json = render_index(&entries)?;

    let tmp_path = target.with_extension("json.tmp");
    fs::write(&tmp_path, &json).map_err(|e| BlogdexError::io(&tmp_path, e))?;
    if let Err(e) = fs::rename(&tmp_path, target) {
        let _ = fs::remove_file(&tmp_path);
        return Err(BlogdexError::io(target, e));
    }

    let digest = index_digest(json.as_bytes());
    tracing::info!(
        "Wrote {} entries to {} (sha256 {})",
        entries.len(),
        target.display(),
        &digest[..12]
    );

    Ok(WrittenIndex { entries, digest })
}
