use crate::domain::a005_blog::api::BlogBatch;
use contracts::domain::a005_blog::aggregate::{Blog, BlogQuery};
use contracts::domain::common::{non_blank, RecordId};
use contracts::shared::list_state::SortState;
use contracts::shared::pagination::PageWindow;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct BlogListState {
    pub items: Vec<Blog>,
    pub search: String,
    /// `""`, `"true"` or `"false"`.
    pub published: String,
    pub featured: String,
    pub sort: SortState,
    pub window: PageWindow,
    pub selected: HashSet<RecordId>,
}

fn tri_state(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

impl BlogListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            search: String::new(),
            published: String::new(),
            featured: String::new(),
            sort: SortState::new("created_at", false),
            window: PageWindow::new(page_size),
            selected: HashSet::new(),
        }
    }

    pub fn query(&self) -> BlogQuery {
        let sort_by = match self.sort.field.as_str() {
            "title" => "title",
            "published_at" => "publishedAt",
            _ => "createdAt",
        };
        BlogQuery {
            page: self.window.page,
            limit: self.window.limit,
            search: non_blank(&self.search),
            is_published: tri_state(&self.published),
            is_featured: tri_state(&self.featured),
            sort_by: Some(sort_by.to_string()),
            sort_order: Some(self.sort.order_param().to_string()),
        }
    }

    pub fn toggle_selected(&mut self, id: RecordId, checked: bool) {
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    pub fn all_selected(&self) -> bool {
        let ids: Vec<_> = self.items.iter().filter_map(|b| b.id.as_ref()).collect();
        !ids.is_empty() && ids.iter().all(|id| self.selected.contains(*id))
    }

    /// Header checkbox: select or clear every row of the current page.
    pub fn select_page(&mut self, checked: bool) {
        let ids: Vec<_> = self.items.iter().filter_map(|b| b.id.clone()).collect();
        for id in ids {
            self.toggle_selected(id, checked);
        }
    }

    /// Selected ids in row order.
    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.items
            .iter()
            .filter_map(|b| b.id.clone())
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    /// Selected rows in row order, as loaded.
    pub fn selected_blogs(&self) -> Vec<Blog> {
        self.items
            .iter()
            .filter(|b| b.id.as_ref().is_some_and(|id| self.selected.contains(id)))
            .cloned()
            .collect()
    }

    /// Drop the rows whose delete succeeded; failed rows stay listed and
    /// selected so the action can be retried.
    pub fn remove_succeeded(&mut self, report: &BlogBatch) {
        let gone: HashSet<&RecordId> = report.succeeded_keys().collect();
        self.items
            .retain(|b| b.id.as_ref().map_or(true, |id| !gone.contains(id)));
        self.selected.retain(|id| !gone.contains(id));
        self.window.total = self.window.total.saturating_sub(gone.len());
    }
}

pub fn create_state(page_size: usize) -> RwSignal<BlogListState> {
    RwSignal::new(BlogListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(id: i64) -> Blog {
        Blog {
            id: Some(RecordId::Int(id)),
            title: format!("Post {}", id),
            ..Blog::default()
        }
    }

    #[test]
    fn test_select_page_and_order() {
        let mut state = BlogListState::new(10);
        state.items = vec![blog(3), blog(1), blog(2)];
        assert!(!state.all_selected());
        state.select_page(true);
        assert!(state.all_selected());
        state.toggle_selected(RecordId::Int(1), false);
        assert_eq!(state.selected_ids(), vec![RecordId::Int(3), RecordId::Int(2)]);
    }

    #[test]
    fn test_query_filters() {
        let mut state = BlogListState::new(10);
        state.published = "true".into();
        state.search = "rust".into();
        let q = state.query();
        assert_eq!(q.is_published, Some(true));
        assert_eq!(q.is_featured, None);
        assert_eq!(q.search.as_deref(), Some("rust"));
        assert_eq!(q.sort_by.as_deref(), Some("createdAt"));
        assert_eq!(q.sort_order.as_deref(), Some("desc"));
    }

    #[test]
    fn test_remove_succeeded_keeps_failed_rows() {
        let mut state = BlogListState::new(10);
        state.items = vec![blog(1), blog(2), blog(3)];
        state.window.total = 3;
        state.select_page(true);

        let mut report = BlogBatch::default();
        report.push(RecordId::Int(1), Ok(()));
        report.push(RecordId::Int(2), Err("HTTP 500".to_string()));
        report.push(RecordId::Int(3), Ok(()));
        state.remove_succeeded(&report);

        let left: Vec<_> = state.items.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(left, vec!["Post 2"]);
        assert_eq!(state.selected_ids(), vec![RecordId::Int(2)]);
        assert_eq!(state.window.total, 1);
    }

    #[test]
    fn test_selected_blogs_are_full_rows() {
        let mut state = BlogListState::new(10);
        state.items = vec![blog(1), blog(2)];
        state.toggle_selected(RecordId::Int(2), true);
        let picked = state.selected_blogs();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].title, "Post 2");
    }
}
