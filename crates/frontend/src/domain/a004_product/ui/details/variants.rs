use super::view_model::{parse_optional_price, ProductDetailsViewModel};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn VariantsTable(vm: ProductDetailsViewModel) -> impl IntoView {
    let count = move || vm.form.with(|f| f.variants.len());

    view! {
        <div class="variants">
            <div class="variants__header">
                <h4>"Variants"</h4>
                <button class="button button--secondary button--small" on:click=move |_| vm.add_variant()>
                    {icon("plus")}
                    "Add variant"
                </button>
            </div>
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Name"</th>
                        <th class="table__header-cell">"SKU"</th>
                        <th class="table__header-cell">"Price"</th>
                        <th class="table__header-cell">"Stock"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || (0..count()).map(|idx| {
                        let variant = move || vm.form.with(|f| f.variants.get(idx).cloned().unwrap_or_default());
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">
                                    <input
                                        type="text"
                                        prop:value=move || variant().name
                                        on:input=move |ev| vm.edit_variant(idx, |v| v.name = event_target_value(&ev))
                                    />
                                </td>
                                <td class="table__cell">
                                    <input
                                        type="text"
                                        prop:value=move || variant().sku
                                        on:input=move |ev| vm.edit_variant(idx, |v| v.sku = event_target_value(&ev))
                                    />
                                </td>
                                <td class="table__cell">
                                    <input
                                        type="number"
                                        step="0.01"
                                        min="0"
                                        prop:value=move || variant().price.map(|p| p.to_string()).unwrap_or_default()
                                        on:input=move |ev| vm.edit_variant(idx, |v| v.price = parse_optional_price(&event_target_value(&ev)))
                                    />
                                </td>
                                <td class="table__cell">
                                    <input
                                        type="number"
                                        min="0"
                                        prop:value=move || variant().stock_quantity.to_string()
                                        on:input=move |ev| {
                                            let qty = event_target_value(&ev).parse::<i32>().unwrap_or(0);
                                            vm.edit_variant(idx, |v| v.stock_quantity = qty);
                                        }
                                    />
                                </td>
                                <td class="table__cell table__cell--actions">
                                    <button
                                        class="button button--icon button--danger"
                                        title="Remove variant"
                                        on:click=move |_| vm.remove_variant(idx)
                                    >
                                        {icon("x")}
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
            <Show when=move || count() == 0>
                <p class="hint">"No variants."</p>
            </Show>
        </div>
    }
}
