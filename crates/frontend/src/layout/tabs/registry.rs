//! Tab key → screen.

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_brand::ui::list::BrandList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_subcategory::ui::list::SubcategoryList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_blog::ui::list::BlogList;
use crate::domain::a006_order::ui::list::OrderList;
use crate::domain::a007_warranty_claim::ui::list::WarrantyClaimList;
use leptos::prelude::*;

/// Only the active screen is mounted; switching tabs drops the previous one
/// together with its pending timers and object URLs.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "dashboard" => view! { <OverviewDashboard /> }.into_any(),
        "a001_brand" => view! { <BrandList /> }.into_any(),
        "a002_category" => view! { <CategoryList /> }.into_any(),
        "a003_subcategory" => view! { <SubcategoryList /> }.into_any(),
        "a004_product" => view! { <ProductList /> }.into_any(),
        "a005_blog" => view! { <BlogList /> }.into_any(),
        "a006_order" => view! { <OrderList /> }.into_any(),
        "a007_warranty_claim" => view! { <WarrantyClaimList /> }.into_any(),
        other => {
            log::warn!("Unknown tab key '{}'", other);
            view! { <div class="placeholder">{format!("Unknown screen: {}", other)}</div> }.into_any()
        }
    }
}
