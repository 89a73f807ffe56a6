use super::{RawFieldMap, RawValue};

/// Line that opens and closes a header block
pub const DELIMITER: &str = "---";

/// Locate the header block at the start of `text` and return its inner lines.
///
/// Leading blank space is skipped. Both delimiter lines must be exactly `---`
/// apart from trailing whitespace. An empty block counts as no block.
pub fn extract_block(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let mut lines = text.split_inclusive('\n');

    let opening = lines.next()?;
    if opening.trim_end() != DELIMITER {
        return None;
    }

    let start = opening.len();
    let mut end = start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let block = &text[start..end];
            return if block.trim().is_empty() {
                None
            } else {
                Some(block)
            };
        }
        end += line.len();
    }

    None
}

/// Split one `key: value` line. Lines without a colon, or with an empty key
/// or value, yield nothing.
fn parse_line(line: &str) -> Option<(String, RawValue)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key.to_string(), RawValue::coerce(value)))
}

/// Decode the header block of a document into a field map.
///
/// Never fails: a missing block gives an empty map and unclassifiable lines
/// are dropped. A repeated key keeps its last value.
pub fn parse_header(text: &str) -> RawFieldMap {
    let Some(block) = extract_block(text) else {
        return RawFieldMap::new();
    };

    let mut fields = RawFieldMap::new();
    for (key, value) in block.lines().filter_map(parse_line) {
        fields.insert(key, value);
    }
    fields
}
