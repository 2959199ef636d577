//! Display formatting for backend timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    // .NET style without offset, with or without fractional seconds.
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

/// `2024-03-15T14:02:26.123Z` → `Mar 15, 2024 14:02`. Unparseable input is
/// returned unchanged.
pub fn format_datetime(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%b %d, %Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

/// `2024-03-15` or a full timestamp → `Mar 15, 2024`.
pub fn format_date(value: &str) -> String {
    if let Some(dt) = parse_timestamp(value) {
        return dt.format("%b %d, %Y").to_string();
    }
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%b %d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

pub fn format_optional(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string())
}

/// Money with two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "Mar 15, 2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "Dec 31, 2024 23:59");
        assert_eq!(format_datetime("invalid"), "invalid");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "Mar 15, 2024");
        assert_eq!(format_optional(None), "-");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(12.5), "$12.50");
    }
}
