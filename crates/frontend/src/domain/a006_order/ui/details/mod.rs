use crate::shared::components::StatusBadge;
use crate::shared::date_utils::{format_money, format_optional};
use contracts::domain::a006_order::aggregate::{Order, OrderStatus};
use leptos::prelude::*;

/// Order detail: items, shipping address and payment block, with a status
/// selector. `order` is shared with the list so a status change shows in
/// both places.
#[component]
pub fn OrderDetails(order: RwSignal<Order>, on_status_change: Callback<OrderStatus>) -> impl IntoView {
    view! {
        <div class="details-container order-details">
            <div class="order-details__summary">
                <div>
                    <span class="label">"Order"</span>
                    <strong>{move || order.with(|o| o.order_number.clone())}</strong>
                </div>
                <div>
                    <span class="label">"Placed"</span>
                    {move || order.with(|o| format_optional(o.created_at.as_deref()))}
                </div>
                <div>
                    <span class="label">"Status"</span>
                    {move || view! { <StatusBadge status=order.with(|o| o.status.to_string()) /> }}
                </div>
                <div class="order-details__status-select">
                    <select on:change=move |ev| on_status_change.run(OrderStatus::from(event_target_value(&ev)))>
                        {OrderStatus::SELECTABLE.iter().map(|s| {
                            let value = s.as_str().to_string();
                            let option_status = s.clone();
                            view! {
                                <option value=value.clone() selected=move || order.with(|o| o.status == option_status)>
                                    {value.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <h4>"Items"</h4>
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Product"</th>
                        <th class="table__header-cell table__header-cell--number">"Qty"</th>
                        <th class="table__header-cell table__header-cell--number">"Unit price"</th>
                        <th class="table__header-cell table__header-cell--number">"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || order.with(|o| o.items.clone()).into_iter().map(|item| view! {
                        <tr class="table__row">
                            <td class="table__cell">{item.product_name.clone()}</td>
                            <td class="table__cell table__cell--number">{item.quantity}</td>
                            <td class="table__cell table__cell--number">{format_money(item.unit_price)}</td>
                            <td class="table__cell table__cell--number">{format_money(item.line_total())}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <td class="table__cell" colspan="3">"Order total"</td>
                        <td class="table__cell table__cell--number">
                            <strong>{move || order.with(|o| format_money(o.total_amount))}</strong>
                        </td>
                    </tr>
                </tfoot>
            </table>

            <div class="details-columns">
                <div class="details-block">
                    <h4>"Shipping address"</h4>
                    {move || match order.with(|o| o.shipping_address.clone()) {
                        Some(address) => address.lines().into_iter()
                            .map(|line| view! { <div>{line}</div> })
                            .collect_view()
                            .into_any(),
                        None => view! { <p class="hint">"No address on file"</p> }.into_any(),
                    }}
                </div>
                <div class="details-block">
                    <h4>"Payment"</h4>
                    <div>
                        <span class="label">"Status: "</span>
                        {move || order.with(|o| o.payment_status.clone().unwrap_or_else(|| "-".into()))}
                    </div>
                    <div>
                        <span class="label">"Transaction: "</span>
                        <code>{move || order.with(|o| o.transaction_id.clone().unwrap_or_else(|| "-".into()))}</code>
                    </div>
                </div>
            </div>
        </div>
    }
}
