//! API URL helpers.

use super::config::AppConfig;

/// REST base URL, e.g. `http://localhost:5000/api`.
pub fn api_base() -> String {
    AppConfig::load().api_base_url
}

/// Full URL for an API path such as `/brands/7`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Full URL with a query string built from a typed query struct. Empty
/// filters are skipped by the struct's serde attributes.
pub fn api_url_with_query<Q: serde::Serialize>(path: &str, query: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    Ok(join_query(&api_url(path), &qs))
}

pub fn join_query(url: &str, qs: &str) -> String {
    if qs.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, qs)
    }
}

/// Origin used to resolve relative image paths.
pub fn asset_base() -> String {
    AppConfig::load().asset_base_url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_query() {
        assert_eq!(join_query("http://h/api/blogs", ""), "http://h/api/blogs");
        assert_eq!(
            join_query("http://h/api/blogs", "page=1&limit=10"),
            "http://h/api/blogs?page=1&limit=10"
        );
    }
}
