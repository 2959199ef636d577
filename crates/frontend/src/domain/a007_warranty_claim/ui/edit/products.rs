use super::view_model::ClaimEditViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ProductsEditor(vm: ClaimEditViewModel) -> impl IntoView {
    let is_multi = move || vm.form.with(|c| c.products.is_multi());
    let count = move || vm.form.with(|c| c.products.as_slice().len());

    view! {
        <fieldset class="form-fieldset">
            <legend>"Products"</legend>
            {move || (0..count()).map(|idx| {
                let product = move || vm.form.with(|c| c.products.as_slice().get(idx).cloned().unwrap_or_default());
                view! {
                    <div class="claim-product">
                        <Show when=is_multi>
                            <div class="claim-product__header">
                                <strong>{format!("Product {}", idx + 1)}</strong>
                                <button
                                    class="button button--icon button--danger"
                                    title="Remove product"
                                    disabled=move || count() <= 1
                                    on:click=move |_| vm.remove_product(idx)
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        </Show>
                        <div class="form-row">
                            <div class="form-group">
                                <label>"Model number"</label>
                                <input
                                    type="text"
                                    prop:value=move || product().model_number
                                    on:input=move |ev| vm.edit_product(idx, |p| p.model_number = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Serial number"</label>
                                <input
                                    type="text"
                                    prop:value=move || product().serial_number
                                    on:input=move |ev| vm.edit_product(idx, |p| p.serial_number = event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label>"Fault description"</label>
                            <textarea
                                rows="2"
                                prop:value=move || product().fault_description
                                on:input=move |ev| vm.edit_product(idx, |p| p.fault_description = event_target_value(&ev))
                            />
                        </div>
                    </div>
                }
            }).collect_view()}

            <Show
                when=is_multi
                fallback=move || view! {
                    <button class="button button--secondary button--small" on:click=move |_| vm.convert_to_multi()>
                        "Convert to multiple products"
                    </button>
                }
            >
                <button class="button button--secondary button--small" on:click=move |_| vm.add_product()>
                    {icon("plus")}
                    "Add product"
                </button>
            </Show>
        </fieldset>
    }
}
