//! Tolerant decoding of the `---` preamble at the top of a post.
//!
//! There is no grammar here: each line is classified on its own and
//! anything that does not look like `key: value` is dropped.

mod block;
mod value;


pub use block::{DELIMITER, extract_block, parse_header};
pub use value::{RawFieldMap, RawValue};
