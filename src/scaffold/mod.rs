//! Directory and post scaffolding for the date-organised layout
//! (`YYYY/MM/DD/<slug>.md`).

mod template;

#[cfg(test)]
mod tests;

pub use template::render_template;

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BlogdexError;

/// Result of asking for a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Written to this root-relative path
    Created(String),
    /// A post already lives at this root-relative path; nothing was written
    AlreadyExists(String),
}

/// URL-safe file name for a title.
///
/// Lowercases, keeps ASCII word characters, and collapses whitespace and
/// hyphen runs into single hyphens. Edge hyphens are dropped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Validate a year/month/day triple from the command line.
pub fn entry_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, BlogdexError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(BlogdexError::InvalidDate { year, month, day })
}

/// Root-relative directory for posts of a given day
fn day_dir(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("{:04}", date.year()))
        .join(format!("{:02}", date.month()))
        .join(format!("{:02}", date.day()))
}

/// Create `root/YYYY/01` through `root/YYYY/12`.
pub fn create_year(root: &Path, year: i32) -> Result<Vec<PathBuf>> {
    let year_dir = root.join(format!("{:04}", year));
    let mut created = Vec::with_capacity(12);

    for month in 1..=12 {
        let dir = year_dir.join(format!("{:02}", month));
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        created.push(dir);
    }

    tracing::info!("Created year structure for {:04}", year);
    Ok(created)
}

/// Create a post for `date` from the template, unless one already exists.
///
/// An existing file is reported through [`CreateOutcome::AlreadyExists`]
/// and left untouched.
pub fn create_entry(root: &Path, date: NaiveDate, title: &str) -> Result<CreateOutcome> {
    let slug = slugify(title);
    if slug.is_empty() {
        bail!("Title {:?} does not produce a usable file name", title);
    }

    let relative = day_dir(date).join(format!("{}.md", slug));
    let shown = relative.to_string_lossy().replace('\\', "/");
    let path = root.join(&relative);

    if path.exists() {
        tracing::info!("Blog entry already exists: {}", shown);
        return Ok(CreateOutcome::AlreadyExists(shown));
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    fs::write(&path, render_template(title, date))
        .with_context(|| format!("Failed to write entry: {}", path.display()))?;

    tracing::info!("Created blog entry: {}", shown);
    Ok(CreateOutcome::Created(shown))
}
