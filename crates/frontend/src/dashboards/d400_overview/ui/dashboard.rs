use crate::domain::a006_order::api::fetch_orders;
use crate::domain::a007_warranty_claim::ui::stats::ClaimStatsCards;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_labels::{tab_icon_for_key, tab_label_for_key};
use crate::layout::tabs::TAB_KEYS;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::{format_money, format_optional};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::domain::a006_order::aggregate::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

const RECENT_ORDERS: usize = 5;

/// Newest first; orders without a timestamp go last.
fn latest_orders(mut orders: Vec<Order>, n: usize) -> Vec<Order> {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders.truncate(n);
    orders
}

/// Landing screen: shortcuts to every section, claim counters and the most
/// recent orders.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();
    let orders = RwSignal::new(Vec::<Order>::new());
    let orders_error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match fetch_orders().await {
            Ok(list) => orders.set(latest_orders(list, RECENT_ORDERS)),
            Err(e) => {
                log::warn!("Recent orders unavailable: {}", e);
                orders_error.set(Some(e));
            }
        }
    });

    let greeting = move || match auth.user() {
        Some(user) => format!("Welcome, {}", user.display_name()),
        None => "Welcome".to_string(),
    };

    view! {
        <div class="content dashboard">
            <div class="header">
                <h2>{greeting}</h2>
            </div>

            <div class="quick-links">
                {TAB_KEYS.iter().filter(|k| **k != "dashboard").map(|key| {
                    let key = *key;
                    view! {
                        <button class="quick-links__item" on:click=move |_| ctx.open_tab(key)>
                            {icon(tab_icon_for_key(key))}
                            <span>{tab_label_for_key(key).to_string()}</span>
                        </button>
                    }
                }).collect_view()}
            </div>

            <h3>"Warranty claims"</h3>
            <ClaimStatsCards />

            <h3>"Recent orders"</h3>
            {move || orders_error.get().map(|e| view! { <p class="hint">{e}</p> })}
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Order"</th>
                        <th class="table__header-cell">"Placed"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell table__header-cell--number">"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || orders.get().into_iter().map(|o| view! {
                        <tr class="table__row">
                            <td class="table__cell table__cell--mono">{o.order_number.clone()}</td>
                            <td class="table__cell">{format_optional(o.created_at.as_deref())}</td>
                            <td class="table__cell"><StatusBadge status=o.status.to_string() /></td>
                            <td class="table__cell table__cell--number">{format_money(o.total_amount)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
            <button class="button button--secondary" on:click=move |_| ctx.open_tab("a006_order")>
                "All orders"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(number: &str, created: Option<&str>) -> Order {
        Order {
            order_number: number.to_string(),
            created_at: created.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_latest_orders_newest_first() {
        let list = vec![
            order("A", Some("2024-01-01T10:00:00Z")),
            order("B", None),
            order("C", Some("2024-03-01T10:00:00Z")),
        ];
        let latest = latest_orders(list, 2);
        let numbers: Vec<_> = latest.iter().map(|o| o.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["C", "A"]);
    }
}
