use super::images::BlogImages;
use super::view_model::BlogDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a005_blog::aggregate::{Blog, META_DESCRIPTION_MAX, META_TITLE_MAX};
use contracts::domain::a005_blog::slug::SLUG_MAX_LEN;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

fn counter(len: usize, max: usize) -> impl IntoView {
    view! {
        <span class="char-counter" class:char-counter--over={len > max}>
            {format!("{}/{}", len, max)}
        </span>
    }
}

#[component]
pub fn BlogDetails(
    id: Option<RecordId>,
    on_saved: Callback<Blog>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BlogDetailsViewModel::new();
    vm.load(id);
    on_cleanup(move || vm.release_previews());

    view! {
        <div class="details-container blog-details">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || vm.info.get().map(|m| view! { <div class="info">{m}</div> })}
            <Show when=move || vm.loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>

            <div class="details-form">
                <div class="form-group">
                    <label for="title">"Title"</label>
                    <input
                        type="text"
                        id="title"
                        prop:value=move || vm.form.get().title
                        on:input=move |ev| vm.set_title(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="slug">"Slug"</label>
                    <input
                        type="text"
                        id="slug"
                        maxlength=SLUG_MAX_LEN.to_string()
                        prop:value=move || vm.form.get().slug
                        on:input=move |ev| vm.set_slug(event_target_value(&ev))
                    />
                    <Show when=move || !vm.slug_touched.get()>
                        <span class="hint">"Generated from the title"</span>
                    </Show>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="author">"Author"</label>
                        <input
                            type="text"
                            id="author"
                            prop:value=move || vm.form.get().author
                            on:input=move |ev| vm.form.update(|f| f.author = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="featured_image_url">"Featured image URL"</label>
                        <input
                            type="text"
                            id="featured_image_url"
                            prop:value=move || vm.form.get().featured_image_url
                            on:input=move |ev| vm.form.update(|f| f.featured_image_url = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="excerpt">"Excerpt"</label>
                    <textarea
                        id="excerpt"
                        rows="2"
                        prop:value=move || vm.form.get().excerpt
                        on:input=move |ev| vm.form.update(|f| f.excerpt = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="content">"Content"</label>
                    <textarea
                        id="content"
                        class="content-editor"
                        rows="12"
                        prop:value=move || vm.form.get().content
                        on:input=move |ev| vm.form.update(|f| f.content = event_target_value(&ev))
                    />
                </div>

                <fieldset class="form-fieldset">
                    <legend>"SEO"</legend>
                    <div class="form-group">
                        <label for="meta_title">"Meta title"</label>
                        <input
                            type="text"
                            id="meta_title"
                            prop:value=move || vm.form.get().meta_title
                            on:input=move |ev| vm.form.update(|f| f.meta_title = event_target_value(&ev))
                        />
                        {move || counter(vm.form.with(|f| f.meta_title.chars().count()), META_TITLE_MAX)}
                    </div>
                    <div class="form-group">
                        <label for="meta_description">"Meta description"</label>
                        <textarea
                            id="meta_description"
                            rows="2"
                            prop:value=move || vm.form.get().meta_description
                            on:input=move |ev| vm.form.update(|f| f.meta_description = event_target_value(&ev))
                        />
                        {move || counter(vm.form.with(|f| f.meta_description.chars().count()), META_DESCRIPTION_MAX)}
                    </div>
                    <div class="form-group">
                        <label for="meta_keywords">"Meta keywords"</label>
                        <input
                            type="text"
                            id="meta_keywords"
                            placeholder="comma, separated"
                            prop:value=move || vm.form.get().meta_keywords
                            on:input=move |ev| vm.form.update(|f| f.meta_keywords = event_target_value(&ev))
                        />
                    </div>
                </fieldset>

                <div class="form-group form-group--inline">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.get().is_published
                            on:change=move |ev| vm.form.update(|f| f.is_published = event_target_checked(&ev))
                        />
                        " Published"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.get().is_featured
                            on:change=move |ev| vm.form.update(|f| f.is_featured = event_target_checked(&ev))
                        />
                        " Featured"
                    </label>
                </div>
            </div>

            <BlogImages vm=vm />

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.saving.get() || !vm.is_dirty()
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Saving..." } else if vm.is_edit_mode() { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
