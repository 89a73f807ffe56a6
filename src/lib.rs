// Public API exports
pub mod config;
pub mod entry;
pub mod error;
pub mod header;
pub mod index;
pub mod pipeline;
pub mod scaffold;
pub mod scan;

// Re-export main types for convenience
pub use config::Config;
pub use error::BlogdexError;

pub use header::{RawFieldMap, RawValue, parse_header};

pub use entry::{
    Candidate, Entry, filter_by_period, format_listing, latest, normalize, select_published,
};

pub use index::{WrittenIndex, index_digest, render_index, write_index};

pub use pipeline::{build_index, collect_entries};

pub use scaffold::{CreateOutcome, create_entry, create_year, slugify};

pub use scan::scan_documents;
