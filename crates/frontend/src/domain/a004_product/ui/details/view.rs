use super::images::ProductImages;
use super::variants::VariantsTable;
use super::view_model::{parse_optional_price, specification_error, ProductDetailsViewModel};
use crate::shared::icons::icon;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    id: Option<RecordId>,
    on_saved: Callback<Product>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    vm.load(id);

    let spec_error = Memo::new(move |_| vm.form.with(|f| specification_error(&f.specifications)));
    let select_id = |id: &Option<RecordId>| id.as_ref().map(|i| i.to_string()).unwrap_or_default();

    view! {
        <div class="details-container product-details">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            <Show when=move || vm.loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="sku">"SKU"</label>
                        <input
                            type="text"
                            id="sku"
                            prop:value=move || vm.form.get().sku
                            on:input=move |ev| vm.form.update(|f| f.sku = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || vm.form.get().name
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="4"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="brand">"Brand"</label>
                        <select
                            id="brand"
                            prop:value=move || select_id(&vm.form.get().brand_id)
                            on:change=move |ev| {
                                let id = RecordId::from_form_value(&event_target_value(&ev));
                                vm.form.update(|f| f.brand_id = id);
                            }
                        >
                            <option value="">"No brand"</option>
                            {move || vm.brands.get().into_iter().filter_map(|b| {
                                let value = b.id.as_ref()?.to_string();
                                Some(view! { <option value=value>{b.name}</option> })
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="subcategory">"Subcategory"</label>
                        <select
                            id="subcategory"
                            prop:value=move || select_id(&vm.form.get().subcategory_id)
                            on:change=move |ev| {
                                let id = RecordId::from_form_value(&event_target_value(&ev));
                                vm.form.update(|f| f.subcategory_id = id);
                            }
                        >
                            <option value="">"No subcategory"</option>
                            {move || vm.subcategories.get().into_iter().filter_map(|s| {
                                let value = s.id.as_ref()?.to_string();
                                Some(view! { <option value=value>{s.name}</option> })
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="price">"Price"</label>
                        <input
                            type="number"
                            id="price"
                            step="0.01"
                            min="0"
                            prop:value=move || vm.form.get().price.to_string()
                            on:input=move |ev| {
                                let price = parse_optional_price(&event_target_value(&ev)).unwrap_or(0.0);
                                vm.form.update(|f| f.price = price);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="discount_price">"Discount price"</label>
                        <input
                            type="number"
                            id="discount_price"
                            step="0.01"
                            min="0"
                            prop:value=move || vm.form.get().discount_price.map(|d| d.to_string()).unwrap_or_default()
                            on:input=move |ev| {
                                let discount = parse_optional_price(&event_target_value(&ev));
                                vm.form.update(|f| f.discount_price = discount);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="stock">"Stock"</label>
                        <input
                            type="number"
                            id="stock"
                            min="0"
                            prop:value=move || vm.form.get().stock_quantity.to_string()
                            on:input=move |ev| {
                                let qty = event_target_value(&ev).parse::<i32>().unwrap_or(0);
                                vm.form.update(|f| f.stock_quantity = qty);
                            }
                        />
                    </div>
                </div>

                <div class="form-group form-group--inline">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.get().is_active
                            on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        " Active"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.get().is_featured
                            on:change=move |ev| vm.form.update(|f| f.is_featured = event_target_checked(&ev))
                        />
                        " Featured"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.get().is_redemption
                            on:change=move |ev| vm.form.update(|f| f.is_redemption = event_target_checked(&ev))
                        />
                        " Redemption"
                    </label>
                </div>

                <div class="form-group" class:form-group--invalid=move || spec_error.get().is_some()>
                    <label for="specifications">"Specifications (JSON)"</label>
                    <textarea
                        id="specifications"
                        class="code-input"
                        rows="6"
                        prop:value=move || vm.form.get().specifications
                        on:input=move |ev| vm.form.update(|f| f.specifications = event_target_value(&ev))
                        on:blur=move |_| vm.format_specifications()
                    />
                    {move || spec_error.get().map(|e| view! { <span class="form-group__error">{e}</span> })}
                </div>
            </div>

            <VariantsTable vm=vm />
            <ProductImages vm=vm />

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.saving.get() || spec_error.get().is_some()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
