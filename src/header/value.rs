use std::collections::HashMap;

/// Field values decoded from one header block, keyed by field name
pub type RawFieldMap = HashMap<String, RawValue>;

/// Loosely-typed value of a single header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Literal `true` or `false`
    Bool(bool),
    /// Anything else, with one layer of surrounding quotes removed
    Text(String),
    /// A bracketed list that decoded cleanly
    List(Vec<String>),
}

impl RawValue {
    /// Decode a trimmed, non-empty value.
    ///
    /// Booleans first, then bracketed lists (single quotes are accepted as
    /// string delimiters), then plain text. A list that fails to decode is
    /// kept as text.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }

        if raw.starts_with('[') && raw.ends_with(']') {
            if let Some(items) = Self::decode_list(raw) {
                return Self::List(items);
            }
        }

        Self::Text(Self::strip_quotes(raw).to_string())
    }

    fn decode_list(raw: &str) -> Option<Vec<String>> {
        let json = raw.replace('\'', "\"");
        let items: Vec<serde_json::Value> = serde_json::from_str(&json).ok()?;

        Some(
            items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    fn strip_quotes(raw: &str) -> &str {
        for quote in ['"', '\''] {
            if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
                return &raw[1..raw.len() - 1];
            }
        }
        raw
    }

    /// Text payload, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Loose truthiness: non-empty text and any list count as true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(text) => !text.is_empty(),
            Self::List(_) => true,
        }
    }
}
