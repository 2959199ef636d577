//! Page window arithmetic shared by client-side and server-side lists.
//!
//! Pages are 1-based, matching the `page` query parameter the REST API
//! accepts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            total: 0,
        }
    }
}

impl PageWindow {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            ..Self::default()
        }
    }

    /// Safe state after a failed fetch: one empty page.
    pub fn reset_empty(&mut self) {
        self.page = 1;
        self.total = 0;
    }

    /// Always at least one page so "1 / 1" renders for empty lists.
    pub fn total_pages(&self) -> usize {
        let limit = self.limit.max(1);
        ((self.total + limit - 1) / limit).max(1)
    }

    pub fn first_index(&self) -> usize {
        (self.page.max(1) - 1) * self.limit
    }

    pub fn last_index(&self) -> usize {
        self.page.max(1) * self.limit
    }

    /// Displayed slice `[first, last)` clamped to the collection length.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.first_index().min(items.len());
        let end = self.last_index().min(items.len());
        &items[start..end]
    }

    /// Move to `page`, clamped to `1..=total_pages`.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Re-clamp the current page after `total` changed.
    pub fn clamp_page(&mut self) {
        self.go_to(self.page);
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp_page();
    }

    /// Changing the page size restarts from the first page.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.page = 1;
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_follow_page_and_limit() {
        let w = PageWindow {
            page: 3,
            limit: 10,
            total: 25,
        };
        assert_eq!(w.first_index(), 20);
        assert_eq!(w.last_index(), 30);
        assert_eq!(w.total_pages(), 3);
    }

    #[test]
    fn test_slice_is_clamped_to_length() {
        let items: Vec<u32> = (0..25).collect();
        let w = PageWindow {
            page: 3,
            limit: 10,
            total: 25,
        };
        assert_eq!(w.slice(&items), &[20, 21, 22, 23, 24]);

        let beyond = PageWindow {
            page: 9,
            limit: 10,
            total: 25,
        };
        assert!(beyond.slice(&items).is_empty());
    }

    #[test]
    fn test_navigation_is_boundary_clamped() {
        let mut w = PageWindow {
            page: 1,
            limit: 5,
            total: 12,
        };
        w.go_to(0);
        assert_eq!(w.page, 1);
        w.go_to(99);
        assert_eq!(w.page, 3);
        assert!(!w.has_next());
        assert!(w.has_prev());
    }

    #[test]
    fn test_reset_empty_after_failure() {
        let mut w = PageWindow {
            page: 4,
            limit: 10,
            total: 80,
        };
        w.reset_empty();
        assert_eq!(w.total_pages(), 1);
        assert_eq!(w.total, 0);
        assert_eq!(w.page, 1);
    }

    #[test]
    fn test_shrinking_total_pulls_page_back() {
        let mut w = PageWindow {
            page: 5,
            limit: 10,
            total: 50,
        };
        w.set_total(21);
        assert_eq!(w.page, 3);
    }

    #[test]
    fn test_limit_change_restarts_paging() {
        let mut w = PageWindow {
            page: 3,
            limit: 10,
            total: 50,
        };
        w.set_limit(20);
        assert_eq!(w.page, 1);
        assert_eq!(w.total_pages(), 3);
    }
}
