use crate::domain::a006_order::api;
use crate::domain::a006_order::ui::details::OrderDetails;
use crate::shared::components::{ErrorBanner, PaginationControls, StatusBadge, SuccessBanner};
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_money, format_optional};
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SortableHeaderCell};
use crate::shared::modal_stack::use_modal_stack;
use contracts::domain::a006_order::aggregate::{apply_status, Order, OrderStatus};
use contracts::domain::common::RecordId;
use contracts::shared::list_state::ClientList;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let config = use_config();
    let modal_stack = use_modal_stack();
    let orders = RwSignal::new(Vec::<Order>::new());
    let list = RwSignal::new(ClientList::new("created_at", config.default_page_size));
    let status_filter = RwSignal::new(None::<OrderStatus>);
    // Order shown in the detail modal.
    let selected = RwSignal::new(Order::default());
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    // Newest first.
    list.update(|l| l.sort.ascending = false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(items) => {
                    orders.set(items);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load orders: {}", e);
                    error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let change_status = move |id: RecordId, status: OrderStatus| {
        spawn_local(async move {
            match api::update_status(&id, &status).await {
                Ok(()) => {
                    orders.update(|list| {
                        selected.update(|open| apply_status(list, Some(open), &id, &status));
                    });
                    success.set(Some(format!("Order status changed to {}", status)));
                }
                Err(e) => {
                    log::error!("Failed to update status of order {}: {}", id, e);
                    error.set(Some(e));
                }
            }
        });
    };

    let open_details = move |order: Order| {
        let title = format!("Order {}", order.order_number);
        selected.set(order);
        modal_stack.push(Some(title), Some("order-details-modal"), move |_handle| {
            view! {
                <OrderDetails
                    order=selected
                    on_status_change=Callback::new(move |status: OrderStatus| {
                        let id = selected.with_untracked(|o| o.id.clone());
                        change_status(id, status);
                    })
                />
            }
            .into_any()
        });
    };

    let page = Memo::new(move |_| {
        let filter = status_filter.get();
        let mut state = list.get();
        let rows = orders.with(|items| state.apply(items, |o: &Order| o.matches_status(filter.as_ref())));
        (rows, state.window)
    });
    let sort = Signal::derive(move || list.get().sort);
    let on_sort = Callback::new(move |field: String| list.update(|l| l.sort.toggle(&field)));

    view! {
        <div class="content">
            <div class="header">
                <h2>"Orders"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <ErrorBanner error=error />
            <SuccessBanner message=success />

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || list.get().search)
                    on_change=Callback::new(move |s: String| list.update(|l| l.set_search(s)))
                    placeholder="Order number, user or transaction..."
                />
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        status_filter.set((!value.is_empty()).then(|| OrderStatus::from(value)));
                        list.update(|l| l.window.page = 1);
                    }
                >
                    <option value="">"All statuses"</option>
                    {OrderStatus::SELECTABLE.iter().map(|s| {
                        let value = s.as_str().to_string();
                        view! { <option value=value.clone()>{value.clone()}</option> }
                    }).collect_view()}
                </select>
            </div>

            <div class="table-container">
                <Show when=move || loading.get()>
                    <div class="table__loading">"Loading..."</div>
                </Show>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell label="Order" field="order_number" sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Date" field="created_at" sort=sort on_sort=on_sort />
                            <th class="table__header-cell">"Items"</th>
                            <SortableHeaderCell label="Total" field="total_amount" sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Status" field="status" sort=sort on_sort=on_sort />
                            <th class="table__header-cell">"Payment"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let (rows, _) = page.get();
                            if rows.is_empty() && !loading.get() {
                                return view! {
                                    <tr><td colspan="7" class="table__empty">"No orders found"</td></tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|order| {
                                let for_details = order.clone();
                                let id = order.id.clone();
                                let current = order.status.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--mono">{order.order_number.clone()}</td>
                                        <td class="table__cell">{format_optional(order.created_at.as_deref())}</td>
                                        <td class="table__cell table__cell--number">{order.items.len()}</td>
                                        <td class="table__cell table__cell--number">{format_money(order.total_amount)}</td>
                                        <td class="table__cell"><StatusBadge status=order.status.to_string() /></td>
                                        <td class="table__cell">{order.payment_status.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="View" on:click=move |_| open_details(for_details.clone())>
                                                {icon("eye")}
                                            </button>
                                            <select
                                                class="table__inline-select"
                                                on:change=move |ev| change_status(id.clone(), OrderStatus::from(event_target_value(&ev)))
                                            >
                                                {OrderStatus::SELECTABLE.iter().map(|s| {
                                                    let value = s.as_str().to_string();
                                                    view! {
                                                        <option value=value.clone() selected={*s == current}>{value.clone()}</option>
                                                    }
                                                }).collect_view()}
                                            </select>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                window=Signal::derive(move || page.get().1)
                on_page_change=Callback::new(move |p: usize| list.update(|l| l.window.page = p.max(1)))
                on_page_size_change=Callback::new(move |size: usize| list.update(|l| l.window.set_limit(size)))
                page_size_options=config.page_size_options.clone()
            />
        </div>
    }
}
