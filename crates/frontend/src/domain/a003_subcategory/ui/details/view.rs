use super::images::SubcategoryImagesPanel;
use super::view_model::SubcategoryDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a003_subcategory::aggregate::Subcategory;
use leptos::prelude::*;

#[component]
pub fn SubcategoryDetails(
    initial: Option<Subcategory>,
    on_saved: Callback<Subcategory>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SubcategoryDetailsViewModel::new(initial);
    vm.load();

    view! {
        <div class="details-container subcategory-details">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="category">"Category"</label>
                    <select id="category" on:change=move |ev| vm.set_category(&event_target_value(&ev))>
                        <option value="" selected=move || vm.form.with(|f| f.category_id.is_none())>
                            "Select a category"
                        </option>
                        {move || vm.categories.get().into_iter().filter_map(|c| {
                            let id = c.id.clone()?;
                            let value = id.to_string();
                            Some(view! {
                                <option
                                    value=value
                                    selected=move || vm.form.with(|f| f.category_id.as_ref() == Some(&id))
                                >
                                    {c.name}
                                </option>
                            })
                        }).collect_view()}
                    </select>
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
                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="image_url">"Image URL"</label>
                        <input
                            type="url"
                            id="image_url"
                            prop:value=move || vm.form.get().image_url
                            on:input=move |ev| vm.form.update(|f| f.image_url = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="display_order">"Display order"</label>
                        <input
                            type="number"
                            id="display_order"
                            min="0"
                            prop:value=move || vm.form.get().display_order.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse::<i32>().unwrap_or(0);
                                vm.form.update(|f| f.display_order = value);
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
                </div>
            </div>

            <SubcategoryImagesPanel vm=vm />

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    "Save"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    "Close"
                </button>
            </div>
        </div>
    }
}
