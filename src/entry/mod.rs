mod filter;
mod model;
mod normalize;


pub use filter::{
    compare_entries, filter_by_period, latest, parse_publication_date, select_published,
};
pub use model::{Candidate, Entry, NO_ENTRIES_MESSAGE, format_listing};
pub use normalize::{derive_date_from_path, normalize, normalize_slug, parse_tags};
