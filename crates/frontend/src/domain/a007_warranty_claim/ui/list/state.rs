use contracts::domain::a007_warranty_claim::aggregate::WarrantyClaim;
use contracts::domain::a007_warranty_claim::query::ClaimQuery;
use contracts::domain::common::{non_blank, RecordId};
use contracts::shared::pagination::PageWindow;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ClaimFilters {
    pub search: String,
    pub status: String,
    pub claim_type: String,
    /// `YYYY-MM-DD` from the date inputs.
    pub start_date: String,
    pub end_date: String,
}

#[derive(Clone, Debug)]
pub struct ClaimListState {
    pub items: Vec<WarrantyClaim>,
    pub filters: ClaimFilters,
    pub window: PageWindow,
}

impl ClaimListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filters: ClaimFilters::default(),
            window: PageWindow::new(page_size),
        }
    }

    pub fn query(&self) -> ClaimQuery {
        let f = &self.filters;
        ClaimQuery {
            page: self.window.page,
            limit: self.window.limit,
            search: non_blank(&f.search),
            status: non_blank(&f.status),
            claim_type: non_blank(&f.claim_type),
            start_date: non_blank(&f.start_date),
            end_date: non_blank(&f.end_date),
        }
    }

    /// Remove a row ahead of its delete request, remembering where it was.
    pub fn take_item(&mut self, id: &RecordId) -> Option<(usize, WarrantyClaim)> {
        let index = self.items.iter().position(|c| c.id.as_ref() == Some(id))?;
        self.window.total = self.window.total.saturating_sub(1);
        Some((index, self.items.remove(index)))
    }

    /// Put back a row whose delete failed.
    pub fn restore_item(&mut self, index: usize, claim: WarrantyClaim) {
        let index = index.min(self.items.len());
        self.items.insert(index, claim);
        self.window.total += 1;
    }

    pub fn has_filters(&self) -> bool {
        let f = &self.filters;
        [&f.search, &f.status, &f.claim_type, &f.start_date, &f.end_date]
            .iter()
            .any(|v| !v.trim().is_empty())
    }
}

pub fn create_state(page_size: usize) -> RwSignal<ClaimListState> {
    RwSignal::new(ClaimListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_carries_date_range() {
        let mut state = ClaimListState::new(10);
        assert!(!state.has_filters());
        state.filters.start_date = "2024-01-01".into();
        state.filters.status = "picked_up".into();
        state.window.page = 3;
        let q = state.query();
        assert_eq!(q.page, 3);
        assert_eq!(q.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(q.end_date, None);
        assert_eq!(q.status.as_deref(), Some("picked_up"));
        assert!(state.has_filters());
    }

    #[test]
    fn test_take_and_restore_keep_row_position() {
        let claim = |id: i64| WarrantyClaim {
            id: Some(RecordId::Int(id)),
            claim_number: format!("WC-{}", id),
            ..WarrantyClaim::default()
        };
        let mut state = ClaimListState::new(10);
        state.items = vec![claim(1), claim(2), claim(3)];
        state.window.total = 3;

        let (index, taken) = state.take_item(&RecordId::Int(2)).unwrap();
        assert_eq!(index, 1);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.window.total, 2);
        assert!(state.take_item(&RecordId::Int(9)).is_none());

        state.restore_item(index, taken);
        let numbers: Vec<_> = state.items.iter().map(|c| c.claim_number.as_str()).collect();
        assert_eq!(numbers, vec!["WC-1", "WC-2", "WC-3"]);
        assert_eq!(state.window.total, 3);
    }
}
