use super::Candidate;
use crate::header::{RawFieldMap, RawValue};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static FULL_DATE_SEGMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})/([0-9]{2})/([0-9]{2})").expect("full date pattern compiles")
});

static YEAR_MONTH_SEGMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})/([0-9]{2})").expect("year/month pattern compiles"));

static ORDERING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2,}-").expect("ordering prefix pattern compiles"));

/// Derive a `YYYY-MM-DD` string from `YYYY/MM/DD` or `YYYY/MM` in a path.
///
/// The year/month form defaults the day to `01`. The result is not checked
/// for calendar validity.
pub fn derive_date_from_path(relative_path: &str) -> Option<String> {
    let normalized = relative_path.replace('\\', "/");

    if let Some(caps) = FULL_DATE_SEGMENTS.captures(&normalized) {
        return Some(format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]));
    }

    YEAR_MONTH_SEGMENTS
        .captures(&normalized)
        .map(|caps| format!("{}-{}-01", &caps[1], &caps[2]))
}

/// Slug from a file name: the `.{extension}` suffix dropped, then one
/// leading `NN-` removed.
pub fn normalize_slug(relative_path: &str, extension: &str) -> String {
    let file_name = Path::new(relative_path)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let suffix = format!(".{}", extension);
    let stem = file_name.strip_suffix(&suffix).unwrap_or(&file_name);

    ORDERING_PREFIX.replace(stem, "").into_owned()
}

/// Tags from either a decoded list or comma-separated text.
pub fn parse_tags(raw: Option<&RawValue>) -> Vec<String> {
    match raw {
        Some(RawValue::List(items)) => items
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        Some(RawValue::Text(text)) => text
            .replace(['[', ']', '"', '\''], "")
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Turn the header fields of one document into a candidate entry.
///
/// Consumes the field map; nothing of it survives past this point.
pub fn normalize(mut fields: RawFieldMap, relative_path: &str, extension: &str) -> Candidate {
    let slug = normalize_slug(relative_path, extension);

    let date = match fields.remove("date") {
        Some(RawValue::Text(date)) if !date.trim().is_empty() => Some(date),
        _ => derive_date_from_path(relative_path),
    };

    let title = match fields.remove("title") {
        Some(RawValue::Text(title)) if !title.is_empty() => title,
        _ => slug.replace('-', " "),
    };

    let draft = fields
        .get("draft")
        .map(RawValue::is_truthy)
        .unwrap_or(false);

    let tags = parse_tags(fields.get("tags"));

    Candidate {
        slug,
        title,
        draft,
        tags,
        date,
        file_path: relative_path.replace('\\', "/"),
    }
}
