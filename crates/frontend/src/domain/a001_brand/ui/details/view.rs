use super::view_model::BrandDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_brand::aggregate::Brand;
use leptos::prelude::*;

#[component]
pub fn BrandDetails(
    initial: Option<Brand>,
    on_saved: Callback<Brand>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BrandDetailsViewModel::new(initial);
    vm.load_categories();

    let invalid = move |field: &'static str| vm.invalid_field.get() == Some(field);

    view! {
        <div class="details-container brand-details">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group" class:form-group--invalid=move || invalid("name")>
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Brand name"
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
                        <label for="logo_url">"Logo URL"</label>
                        <input
                            type="url"
                            id="logo_url"
                            prop:value=move || vm.form.get().logo_url
                            on:input=move |ev| vm.form.update(|f| f.logo_url = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="website_url">"Website"</label>
                        <input
                            type="url"
                            id="website_url"
                            prop:value=move || vm.form.get().website_url
                            on:input=move |ev| vm.form.update(|f| f.website_url = event_target_value(&ev))
                            placeholder="https://"
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label>"Categories"</label>
                    <div class="checkbox-list">
                        {move || vm.categories.get().into_iter().filter_map(|c| {
                            let id = c.id.clone()?;
                            let id_checked = id.clone();
                            Some(view! {
                                <label class="checkbox-list__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || vm.form.with(|f| f.category_ids.contains(&id_checked))
                                        on:change=move |ev| vm.toggle_category(id.clone(), event_target_checked(&ev))
                                    />
                                    {c.name}
                                </label>
                            })
                        }).collect_view()}
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

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.saving.get()
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
