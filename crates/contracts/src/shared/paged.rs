use serde::{Deserialize, Serialize};

use super::pagination::PageWindow;

/// Envelope returned by server-side paged list endpoints.
///
/// Different controllers name the collection `items` or `data`, and some
/// omit the paging fields entirely; missing values fall back to "one page
/// holding everything".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    #[serde(alias = "data", default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub total_pages: Option<usize>,
}

impl<T> Paged<T> {
    /// Fold the envelope into the page window of the last successful fetch.
    ///
    /// Without `total`, a `totalPages` count stands in as
    /// `totalPages * limit` so the pager still reaches the last page.
    pub fn apply_to(&self, window: &mut PageWindow) {
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            window.limit = limit;
        }
        window.total = match (self.total, self.total_pages) {
            (Some(total), _) => total,
            (None, Some(pages)) if pages > 0 => pages * window.limit,
            _ => self.items.len(),
        };
        if let Some(page) = self.page.filter(|p| *p > 0) {
            window.page = page;
        }
        window.clamp_page();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_data_alias_and_missing_paging() {
        let json = r#"{"data":[1,2,3]}"#;
        let paged: Paged<u32> = serde_json::from_str(json).unwrap();
        let mut w = PageWindow::new(10);
        paged.apply_to(&mut w);
        assert_eq!(paged.items, vec![1, 2, 3]);
        assert_eq!(w.total, 3);
        assert_eq!(w.total_pages(), 1);
    }

    #[test]
    fn test_applies_server_paging() {
        let json = r#"{"items":[1],"total":41,"page":2,"limit":20,"totalPages":3}"#;
        let paged: Paged<u32> = serde_json::from_str(json).unwrap();
        let mut w = PageWindow::new(10);
        paged.apply_to(&mut w);
        assert_eq!(w.page, 2);
        assert_eq!(w.limit, 20);
        assert_eq!(w.total_pages(), 3);
    }

    #[test]
    fn test_total_pages_without_total_keeps_pager_open() {
        let json = r#"{"items":[1,2],"page":1,"limit":2,"totalPages":5}"#;
        let paged: Paged<u32> = serde_json::from_str(json).unwrap();
        let mut w = PageWindow::new(10);
        paged.apply_to(&mut w);
        assert_eq!(w.total_pages(), 5);
        assert_eq!(w.page, 1);
        assert_eq!(w.total, 10);
    }
}
