use super::{Candidate, Entry};
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a publication date.
///
/// Accepts `YYYY-MM-DD`, or a timestamp whose first ten characters are a
/// date followed by `T` or a space (the time part is discarded).
pub fn parse_publication_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    let (day, time) = raw.split_at_checked(10)?;
    if time.starts_with(['T', ' ']) {
        NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
    } else {
        None
    }
}

/// Newest first; equal dates fall back to source path so output is stable.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| a.file_path.cmp(&b.file_path))
}

fn publish(candidate: Candidate, today: NaiveDate) -> Option<Entry> {
    let Some(raw_date) = candidate.date.as_deref() else {
        tracing::debug!("Excluding {}: no date", candidate.file_path);
        return None;
    };

    let Some(date) = parse_publication_date(raw_date) else {
        tracing::debug!(
            "Excluding {}: unparseable date {:?}",
            candidate.file_path,
            raw_date
        );
        return None;
    };

    if date > today {
        tracing::debug!("Excluding {}: dated in the future ({})", candidate.file_path, date);
        return None;
    }

    if candidate.draft {
        tracing::debug!("Excluding {}: draft", candidate.file_path);
        return None;
    }

    Some(candidate.into_entry(date))
}

/// Keep dated, non-future, non-draft candidates and sort them newest first.
pub fn select_published(
    candidates: impl IntoIterator<Item = Candidate>,
    today: NaiveDate,
) -> Vec<Entry> {
    let mut entries: Vec<Entry> = candidates
        .into_iter()
        .filter_map(|candidate| publish(candidate, today))
        .collect();

    entries.sort_by(compare_entries);
    entries
}

/// Restrict entries to a year, and optionally a month within it.
///
/// A month without a year does not filter anything.
pub fn filter_by_period(entries: Vec<Entry>, year: Option<i32>, month: Option<u32>) -> Vec<Entry> {
    let Some(year) = year else {
        return entries;
    };

    entries
        .into_iter()
        .filter(|entry| entry.date.year() == year)
        .filter(|entry| month.map_or(true, |month| entry.date.month() == month))
        .collect()
}

/// The `count` most recent entries of an already sorted list.
pub fn latest(mut entries: Vec<Entry>, count: usize) -> Vec<Entry> {
    entries.truncate(count);
    entries
}
