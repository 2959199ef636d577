use contracts::domain::a004_product::aggregate::{Product, ProductQuery};
use contracts::domain::common::non_blank;
use contracts::shared::list_state::SortState;
use contracts::shared::pagination::PageWindow;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub items: Vec<Product>,
    pub search: String,
    pub brand_id: String,
    pub subcategory_id: String,
    /// `""`, `"true"` or `"false"`.
    pub active: String,
    pub sort: SortState,
    pub window: PageWindow,
}

impl ProductListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            search: String::new(),
            brand_id: String::new(),
            subcategory_id: String::new(),
            active: String::new(),
            sort: SortState::new("name", true),
            window: PageWindow::new(page_size),
        }
    }

    pub fn query(&self) -> ProductQuery {
        ProductQuery {
            page: self.window.page,
            limit: self.window.limit,
            search: non_blank(&self.search),
            brand_id: non_blank(&self.brand_id),
            subcategory_id: non_blank(&self.subcategory_id),
            is_active: match self.active.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            sort_by: Some(sort_param(&self.sort.field).to_string()),
            sort_order: Some(self.sort.order_param().to_string()),
        }
    }
}

/// Column key to the backend's `sortBy` name.
pub fn sort_param(field: &str) -> &str {
    match field {
        "price" => "price",
        "stock" => "stockQuantity",
        "created_at" => "createdAt",
        "sku" => "sku",
        _ => "name",
    }
}

pub fn create_state(page_size: usize) -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_blank_filters() {
        let mut state = ProductListState::new(20);
        state.search = "  ".into();
        state.active = "false".into();
        state.sort.toggle("stock");
        let q = state.query();
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 20);
        assert_eq!(q.search, None);
        assert_eq!(q.is_active, Some(false));
        assert_eq!(q.sort_by.as_deref(), Some("stockQuantity"));
        assert_eq!(q.sort_order.as_deref(), Some("asc"));
    }
}
