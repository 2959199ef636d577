//! Product specifications.
//!
//! The backend stores specifications as a JSON object serialised into a
//! string column. The form edits that string directly, so it is parsed
//! before submit and normalised on load.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecificationError {
    #[error("Specifications must be valid JSON: {0}")]
    InvalidJson(String),
    #[error("Specifications must be a JSON object like {{\"color\": \"black\"}}")]
    NotAnObject,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specifications(pub Map<String, Value>);

impl Specifications {
    /// Blank input counts as an empty object.
    pub fn parse(raw: &str) -> Result<Self, SpecificationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(_) => Err(SpecificationError::NotAnObject),
            Err(e) => Err(SpecificationError::InvalidJson(e.to_string())),
        }
    }

    /// Normalise a stored value for display: malformed text becomes `{}`.
    ///
    /// Some rows hold the object itself rather than a string, so both are
    /// accepted.
    pub fn coerce(value: &Value) -> String {
        match value {
            Value::String(s) => match Self::parse(s) {
                Ok(spec) => spec.to_pretty(),
                Err(_) => "{}".to_string(),
            },
            Value::Object(map) => Self(map.clone()).to_pretty(),
            _ => "{}".to_string(),
        }
    }

    pub fn to_pretty(&self) -> String {
        if self.0.is_empty() {
            return "{}".to_string();
        }
        serde_json::to_string_pretty(&Value::Object(self.0.clone()))
            .unwrap_or_else(|_| "{}".to_string())
    }

    pub fn to_compact(&self) -> String {
        serde_json::to_string(&Value::Object(self.0.clone())).unwrap_or_else(|_| "{}".to_string())
    }

    /// Key/value pairs for read-only display.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| {
                let shown = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), shown)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = Specifications::parse("{invalid}").unwrap_err();
        assert!(matches!(err, SpecificationError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Specifications must be valid JSON"));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert_eq!(
            Specifications::parse("[1,2]").unwrap_err(),
            SpecificationError::NotAnObject
        );
    }

    #[test]
    fn test_blank_is_empty_object() {
        assert_eq!(Specifications::parse("  ").unwrap().to_compact(), "{}");
    }

    #[test]
    fn test_coerce_on_load() {
        assert_eq!(Specifications::coerce(&json!("{oops")), "{}");
        assert_eq!(Specifications::coerce(&json!(null)), "{}");
        let pretty = Specifications::coerce(&json!("{\"color\":\"black\"}"));
        assert!(pretty.contains("\"color\": \"black\""));
        let from_object = Specifications::coerce(&json!({"weight": 2}));
        assert!(from_object.contains("\"weight\": 2"));
    }

    #[test]
    fn test_entries() {
        let spec = Specifications::parse(r#"{"color":"black","ports":2}"#).unwrap();
        let entries = spec.entries();
        assert!(entries.contains(&("color".to_string(), "black".to_string())));
        assert!(entries.contains(&("ports".to_string(), "2".to_string())));
    }
}
