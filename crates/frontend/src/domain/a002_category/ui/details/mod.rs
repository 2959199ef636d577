use crate::shared::icons::icon;
use crate::shared::resource_api;
use contracts::domain::a002_category::aggregate::Category;
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CategoryDetails(
    initial: Option<Category>,
    on_saved: Callback<Category>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let form = RwSignal::new(initial.unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            error.set(Some(e.message));
            return;
        }
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            match resource_api::save(&current).await {
                Ok(saved) => on_saved.run(saved),
                Err(e) => {
                    log::error!("Failed to save category: {}", e);
                    error.set(Some(e));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="details-container category-details">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="image_url">"Image URL"</label>
                        <input
                            type="url"
                            id="image_url"
                            prop:value=move || form.get().image_url
                            on:input=move |ev| form.update(|f| f.image_url = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="display_order">"Display order"</label>
                        <input
                            type="number"
                            id="display_order"
                            min="0"
                            prop:value=move || form.get().display_order.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse::<i32>().unwrap_or(0);
                                form.update(|f| f.display_order = value);
                            }
                        />
                    </div>
                </div>
                <div class="form-group form-group--inline">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_active
                            on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        " Active"
                    </label>
                </div>
            </div>

            <div class="details-actions">
                <button class="button button--primary" on:click=save disabled=move || saving.get()>
                    {icon("save")}
                    {if is_edit { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
