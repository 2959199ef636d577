use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the backend.
///
/// The REST API is not consistent about id types (numeric ids for most
/// tables, string ids for a few), so both shapes are accepted and written
/// back exactly as they were received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl RecordId {
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Parse an id coming from a form control (`<select>` values are strings).
    pub fn from_form_value(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.parse::<i64>() {
            Ok(n) => RecordId::Int(n),
            Err(_) => RecordId::Str(trimmed.to_string()),
        })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Int(0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Str(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numeric_and_string_ids() {
        let n: RecordId = serde_json::from_str("42").unwrap();
        let s: RecordId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(n, RecordId::Int(42));
        assert_eq!(s, RecordId::Str("a1b2".to_string()));
        assert_eq!(serde_json::to_string(&n).unwrap(), "42");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"a1b2\"");
    }

    #[test]
    fn test_from_form_value() {
        assert_eq!(RecordId::from_form_value(" 7 "), Some(RecordId::Int(7)));
        assert_eq!(
            RecordId::from_form_value("abc"),
            Some(RecordId::Str("abc".to_string()))
        );
        assert_eq!(RecordId::from_form_value("  "), None);
    }
}
