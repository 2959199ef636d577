use super::view_model::BlogDetailsViewModel;
use crate::shared::files::selected_files;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Stored images plus previews of picked files that upload on save.
#[component]
pub fn BlogImages(vm: BlogDetailsViewModel) -> impl IntoView {
    let is_featured = move |url: &str| vm.form.with(|f| !url.is_empty() && f.featured_image_url == url);

    view! {
        <div class="image-panel">
            <div class="image-panel__header">
                <h4>"Images"</h4>
                <label class="button button--secondary button--small">
                    {icon("upload")}
                    "Add images"
                    <input
                        type="file"
                        accept="image/*"
                        multiple=true
                        style="display:none"
                        on:change=move |ev| vm.add_files(selected_files(&ev))
                    />
                </label>
            </div>
            <div class="image-grid">
                {move || vm.form.with(|f| f.images.clone()).into_iter().map(|img| {
                    let id = img.id.clone();
                    let url = img.image_url.clone();
                    let url_featured = img.image_url.clone();
                    let url_check = img.image_url.clone();
                    view! {
                        <div class="image-grid__item" class:image-grid__item--primary=move || is_featured(&url_check)>
                            <img src=img.image_url.clone() alt=img.alt_text.clone() />
                            <div class="image-grid__actions">
                                <button
                                    class="button button--icon"
                                    title="Use as featured image"
                                    on:click=move |_| vm.set_featured(url_featured.clone())
                                >
                                    {icon("star")}
                                </button>
                                <button
                                    class="button button--icon button--danger"
                                    title="Delete image"
                                    on:click=move |_| {
                                        if let Some(id) = id.clone() {
                                            vm.delete_image(id, url.clone());
                                        }
                                    }
                                >
                                    {icon("delete")}
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
                {move || vm.temps.with(|t| t.items().to_vec()).into_iter().map(|temp| {
                    let temp_id = temp.temp_id.clone();
                    let preview = temp.preview_url.clone();
                    let preview_check = temp.preview_url.clone();
                    view! {
                        <div
                            class="image-grid__item image-grid__item--pending"
                            class:image-grid__item--primary=move || is_featured(&preview_check)
                        >
                            <img src=temp.preview_url.clone() alt=temp.alt_text.clone() />
                            <span class="image-grid__badge">"Not uploaded"</span>
                            <div class="image-grid__actions">
                                <button
                                    class="button button--icon"
                                    title="Use as featured image"
                                    on:click=move |_| vm.set_featured(preview.clone())
                                >
                                    {icon("star")}
                                </button>
                                <button
                                    class="button button--icon button--danger"
                                    title="Remove"
                                    on:click=move |_| vm.remove_temp(&temp_id)
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
