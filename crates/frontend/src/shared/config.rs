//! Runtime configuration of the admin console.

use leptos::prelude::*;

const DEFAULT_DEBOUNCE_MS: u32 = 400;
const BACKEND_PORT: u16 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// REST base, e.g. `http://localhost:5000/api`. No trailing slash.
    pub api_base_url: String,
    /// Origin that relative image paths are resolved against.
    pub asset_base_url: String,
    pub search_debounce_ms: u32,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl AppConfig {
    /// Build from compile-time environment, falling back to the page
    /// location.
    pub fn load() -> Self {
        let api_base_url = option_env!("ADMIN_API_BASE_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(location_api_base);
        let search_debounce_ms = parse_debounce(option_env!("ADMIN_SEARCH_DEBOUNCE_MS"));
        Self::new(api_base_url, search_debounce_ms)
    }

    pub fn new(api_base_url: String, search_debounce_ms: u32) -> Self {
        let asset_base_url = asset_base_from_api(&api_base_url);
        Self {
            api_base_url,
            asset_base_url,
            search_debounce_ms,
            default_page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn location_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://127.0.0.1:{}/api", BACKEND_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}/api", protocol, hostname, BACKEND_PORT)
}

/// Quiet period for search inputs, kept within 300..=500 ms.
pub fn parse_debounce(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_DEBOUNCE_MS)
        .clamp(300, 500)
}

pub fn asset_base_from_api(api_base_url: &str) -> String {
    let trimmed = api_base_url.trim_end_matches('/');
    trimmed
        .strip_suffix("/api")
        .unwrap_or(trimmed)
        .to_string()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_debounce_is_clamped() {
        assert_eq!(parse_debounce(None), 400);
        assert_eq!(parse_debounce(Some("350")), 350);
        assert_eq!(parse_debounce(Some("50")), 300);
        assert_eq!(parse_debounce(Some("9000")), 500);
        assert_eq!(parse_debounce(Some("abc")), 400);
    }

    #[test]
    fn test_asset_base_strips_api_suffix() {
        assert_eq!(asset_base_from_api("http://h:5000/api"), "http://h:5000");
        assert_eq!(asset_base_from_api("http://h:5000/api/"), "http://h:5000");
        assert_eq!(asset_base_from_api("https://cdn.test"), "https://cdn.test");
    }

    #[test]
    fn test_url_joins_path() {
        let cfg = AppConfig::new("http://h:5000/api".to_string(), 400);
        assert_eq!(cfg.url("/brands"), "http://h:5000/api/brands");
        assert_eq!(cfg.default_page_size, 10);
    }
}
