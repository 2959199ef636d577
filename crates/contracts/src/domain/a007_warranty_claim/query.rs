use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Query string for `GET /warrantyclaims`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_type: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// `GET /warrantyclaims/dashboard/stats`. The payload is a loose object of
/// counters, possibly nested one level (`{"byStatus": {"submitted": 3}}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimStats(pub BTreeMap<String, Value>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub key: String,
    pub label: String,
    pub value: i64,
}

impl ClaimStats {
    /// Numeric counters flattened into cards; `total` comes first.
    pub fn cards(&self) -> Vec<StatCard> {
        let mut cards = Vec::new();
        for (key, value) in &self.0 {
            match value {
                Value::Object(inner) => {
                    for (k, v) in inner {
                        if let Some(n) = as_count(v) {
                            cards.push(card(k, n));
                        }
                    }
                }
                other => {
                    if let Some(n) = as_count(other) {
                        cards.push(card(key, n));
                    }
                }
            }
        }
        cards.sort_by_key(|c| !c.key.eq_ignore_ascii_case("total"));
        cards
    }

    pub fn total(&self) -> Option<i64> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("total") || k.eq_ignore_ascii_case("totalClaims"))
            .and_then(|(_, v)| as_count(v))
    }
}

fn as_count(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn card(key: &str, value: i64) -> StatCard {
    StatCard {
        key: key.to_string(),
        label: humanize_key(key),
        value,
    }
}

/// `picked_up` and `pickedUp` both become `Picked Up`.
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in key.chars() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_skips_empty_filters() {
        let q = ClaimQuery {
            page: 1,
            limit: 10,
            status: Some("picked_up".to_string()),
            start_date: Some("2024-01-01".to_string()),
            ..ClaimQuery::default()
        };
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({"page": 1, "limit": 10, "status": "picked_up", "startDate": "2024-01-01"})
        );
    }

    #[test]
    fn test_stats_cards() {
        let stats: ClaimStats = serde_json::from_value(json!({
            "total": 12,
            "byStatus": {"submitted": 5, "picked_up": 4, "completed": "3"},
            "note": "ignored"
        }))
        .unwrap();
        let cards = stats.cards();
        assert_eq!(cards[0].label, "Total");
        assert_eq!(cards[0].value, 12);
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().any(|c| c.label == "Picked Up" && c.value == 4));
        assert_eq!(stats.total(), Some(12));
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("pickedUp"), "Picked Up");
        assert_eq!(humanize_key("picked_up"), "Picked Up");
        assert_eq!(humanize_key("Sent"), "Sent");
    }
}
