use super::view_model::SubcategoryDetailsViewModel;
use crate::shared::files::selected_files;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn SubcategoryImagesPanel(vm: SubcategoryDetailsViewModel) -> impl IntoView {
    view! {
        <div class="image-panel">
            <h4>"Images"</h4>
            <Show
                when=move || vm.subcategory_id().is_some()
                fallback=|| view! { <p class="hint">"Images can be added after the subcategory is saved."</p> }
            >
                <div class="image-panel__upload">
                    <input
                        type="text"
                        placeholder="Alt text"
                        prop:value=move || vm.alt_text.get()
                        on:input=move |ev| vm.alt_text.set(event_target_value(&ev))
                    />
                    <label class="button button--secondary">
                        {icon("upload")}
                        {move || if vm.uploading.get() { "Uploading..." } else { "Upload images" }}
                        <input
                            type="file"
                            accept="image/*"
                            multiple=true
                            style="display:none"
                            disabled=move || vm.uploading.get()
                            on:change=move |ev| vm.upload_files(selected_files(&ev))
                        />
                    </label>
                </div>
                <div class="image-grid">
                    {move || vm.images.get().into_iter().map(|img| {
                        let id = img.id.clone();
                        view! {
                            <div class="image-grid__item" class:image-grid__item--primary=img.is_primary>
                                <img src=img.image_url.clone() alt=img.alt_text.clone() />
                                {img.is_primary.then(|| view! { <span class="image-grid__badge">"Primary"</span> })}
                                <button
                                    class="button button--icon button--danger"
                                    title="Delete image"
                                    on:click=move |_| {
                                        if let Some(id) = id.clone() {
                                            vm.delete_image(id);
                                        }
                                    }
                                >
                                    {icon("delete")}
                                </button>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
