//! Client-side search / sort / paginate pipeline for lists that are fetched
//! in full (brands, categories, subcategories, orders).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::pagination::PageWindow;

/// Types that can be matched against a free-text search.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be compared by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive substring test used by `Searchable` impls.
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive string ordering used by `Sortable` impls.
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &str, ascending: bool) -> Self {
        Self {
            field: field.to_string(),
            ascending,
        }
    }

    /// Clicking the active column flips direction, another column starts
    /// ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }

    /// `asc` / `desc` for server-side `sortOrder` parameters.
    pub fn order_param(&self) -> &'static str {
        if self.ascending {
            "asc"
        } else {
            "desc"
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field == field {
            if self.ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }
}

/// Stable sort: rows that compare equal keep their fetched order.
pub fn sort_list<T: Sortable>(items: &mut [T], sort: &SortState) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, &sort.field);
        if sort.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .cloned()
        .collect()
}

/// View state of a fully fetched list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientList {
    pub search: String,
    pub sort: SortState,
    pub window: PageWindow,
}

impl ClientList {
    pub fn new(sort_field: &str, page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort: SortState::new(sort_field, true),
            window: PageWindow::new(page_size),
        }
    }

    /// Filter, sort and cut the visible page. Updates `window.total` to the
    /// filtered count and clamps the page.
    pub fn apply<T, P>(&mut self, items: &[T], extra: P) -> Vec<T>
    where
        T: Searchable + Sortable + Clone,
        P: Fn(&T) -> bool,
    {
        let mut rows: Vec<T> = filter_list(items, &self.search)
            .into_iter()
            .filter(|row| extra(row))
            .collect();
        sort_list(&mut rows, &self.sort);
        self.window.set_total(rows.len());
        self.window.slice(&rows).to_vec()
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.window.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        rank: i32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "rank" => self.rank.cmp(&other.rank),
                _ => cmp_ci(self.name, other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Delta", rank: 2 },
            Row { name: "alpha", rank: 1 },
            Row { name: "Charlie", rank: 2 },
            Row { name: "bravo", rank: 3 },
        ]
    }

    #[test]
    fn test_toggle_sort() {
        let mut sort = SortState::new("name", true);
        sort.toggle("name");
        assert!(!sort.ascending);
        sort.toggle("rank");
        assert_eq!(sort.field, "rank");
        assert!(sort.ascending);
        assert_eq!(sort.order_param(), "asc");
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut items = rows();
        sort_list(&mut items, &SortState::new("rank", true));
        let names: Vec<&str> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["alpha", "Delta", "Charlie", "bravo"]);
    }

    #[test]
    fn test_pipeline_filters_sorts_and_pages() {
        let mut list = ClientList::new("name", 2);
        let page = list.apply(&rows(), |_| true);
        assert_eq!(page.iter().map(|r| r.name).collect::<Vec<_>>(), vec!["alpha", "bravo"]);
        assert_eq!(list.window.total, 4);

        list.window.go_to(2);
        let page = list.apply(&rows(), |_| true);
        assert_eq!(page.iter().map(|r| r.name).collect::<Vec<_>>(), vec!["Charlie", "Delta"]);

        list.set_search("AR".to_string());
        let page = list.apply(&rows(), |_| true);
        assert_eq!(page.iter().map(|r| r.name).collect::<Vec<_>>(), vec!["Charlie"]);
        assert_eq!(list.window.page, 1);
    }

    #[test]
    fn test_extra_predicate() {
        let mut list = ClientList::new("name", 10);
        let page = list.apply(&rows(), |r| r.rank == 2);
        assert_eq!(page.len(), 2);
    }
}
