use crate::domain::a005_blog::api;
use crate::shared::files::{preview_url, revoke};
use contracts::domain::a005_blog::aggregate::{is_dirty, Blog};
use contracts::domain::a005_blog::slug::slugify;
use contracts::domain::common::images::next_display_order;
use contracts::domain::common::RecordId;
use contracts::shared::resource::Resource;
use contracts::shared::temp_images::{clear_reference, swap_preview_reference, TempImageSet};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct BlogDetailsViewModel {
    pub form: RwSignal<Blog>,
    /// Last fetched copy, for the dirty check.
    pub snapshot: RwSignal<Option<Blog>>,
    pub slug_touched: RwSignal<bool>,
    pub temps: RwSignal<TempImageSet>,
    files: StoredValue<HashMap<String, File>, LocalStorage>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub info: RwSignal<Option<String>>,
}

/// Preview URLs never go to the server; the real URL is known only after
/// the upload.
fn storable_featured_url(url: &str) -> String {
    if url.starts_with("blob:") {
        String::new()
    } else {
        url.to_string()
    }
}

impl Default for BlogDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(Blog::default()),
            snapshot: RwSignal::new(None),
            slug_touched: RwSignal::new(false),
            temps: RwSignal::new(TempImageSet::new()),
            files: StoredValue::new_local(HashMap::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            info: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_dirty(&self) -> bool {
        let pending = self.temps.with(|t| t.len());
        self.form
            .with(|f| self.snapshot.with(|s| is_dirty(f, s.as_ref(), pending)))
    }

    pub fn load(&self, id: Option<RecordId>) {
        let Some(id) = id else {
            return;
        };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::get(&id).await {
                Ok(blog) => {
                    this.snapshot.set(Some(blog.clone()));
                    this.form.set(blog);
                    this.slug_touched.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load blog {}: {}", id, e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn set_title(&self, title: String) {
        let auto_slug = !self.slug_touched.get_untracked();
        self.form.update(|f| {
            if auto_slug {
                f.slug = slugify(&title);
            }
            f.title = title;
        });
    }

    /// A manual edit stops slug generation for the rest of the session.
    pub fn set_slug(&self, slug: String) {
        self.slug_touched.set(true);
        self.form.update(|f| f.slug = slug);
    }

    pub fn add_files(&self, files: Vec<File>) {
        for file in files {
            match preview_url(&file) {
                Ok(url) => {
                    let temp_id = self.temps.try_update(|t| t.add(url, file.name()));
                    if let Some(temp_id) = temp_id {
                        self.files.update_value(|m| {
                            m.insert(temp_id, file);
                        });
                    }
                }
                Err(e) => self.error.set(Some(e)),
            }
        }
    }

    pub fn remove_temp(&self, temp_id: &str) {
        let removed = self.temps.try_update(|t| t.remove(temp_id)).flatten();
        self.files.update_value(|m| {
            m.remove(temp_id);
        });
        if let Some(temp) = removed {
            revoke(&temp.preview_url);
            self.form
                .update(|f| clear_reference(&mut f.featured_image_url, &temp.preview_url));
        }
    }

    pub fn set_featured(&self, url: String) {
        self.form.update(|f| f.featured_image_url = url);
    }

    pub fn delete_image(&self, image_id: RecordId, url: String) {
        let this = *self;
        spawn_local(async move {
            match api::delete_image(&image_id).await {
                Ok(()) => this.form.update(|f| {
                    f.images.retain(|img| img.id.as_ref() != Some(&image_id));
                    clear_reference(&mut f.featured_image_url, &url);
                }),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    /// Revoke every preview still held. Called on teardown.
    pub fn release_previews(&self) {
        if let Some(urls) = self.temps.try_update_untracked(|t| t.drain()) {
            for url in urls {
                revoke(&url);
            }
        }
    }

    pub fn save_command(&self, on_saved: Callback<Blog>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e.message));
            return;
        }
        if !self.is_dirty() {
            self.info.set(Some("No changes to save".into()));
            return;
        }
        self.error.set(None);
        self.info.set(None);
        self.saving.set(true);

        let this = *self;
        spawn_local(async move {
            match this.save_and_upload(current).await {
                Ok(saved) => {
                    log::info!("Saved blog '{}'", saved.title);
                    on_saved.run(saved);
                }
                Err(e) => {
                    log::error!("Failed to save blog: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.saving.set(false);
        });
    }

    /// Save the post, then upload pending images against its id. A failed
    /// upload keeps its preview so the user can retry.
    async fn save_and_upload(&self, current: Blog) -> Result<Blog, String> {
        let mut payload = current.clone();
        payload.featured_image_url = storable_featured_url(&current.featured_image_url);
        let saved = api::save(&payload).await?;
        let Some(blog_id) = saved.id.clone() else {
            return Err("The server did not return an id for the blog".into());
        };

        let mut form = current;
        form.id = Some(blog_id.clone());
        form.images = saved.images.clone();

        let pending: Vec<(String, String)> = self.temps.with_untracked(|t| {
            t.items()
                .iter()
                .map(|i| (i.temp_id.clone(), i.alt_text.clone()))
                .collect()
        });
        let mut failures = Vec::new();
        for (temp_id, alt_text) in pending {
            let Some(file) = self.files.with_value(|m| m.get(&temp_id).cloned()) else {
                continue;
            };
            let order = next_display_order(&form.images);
            match api::upload_image(&blog_id, &file, &alt_text, order).await {
                Ok(image) => {
                    let promotion = self
                        .temps
                        .try_update(|t| t.promote(&temp_id, image.image_url.clone()))
                        .flatten();
                    self.files.update_value(|m| {
                        m.remove(&temp_id);
                    });
                    if let Some(promotion) = promotion {
                        revoke(&promotion.temp.preview_url);
                        swap_preview_reference(&mut form.featured_image_url, &promotion);
                    }
                    form.images.push(image);
                }
                Err(e) => failures.push(format!("{}: {}", file.name(), e)),
            }
        }

        // The featured image may have just received its server URL.
        let mut result = saved;
        if storable_featured_url(&form.featured_image_url) != result.featured_image_url {
            form.featured_image_url = storable_featured_url(&form.featured_image_url);
            result = api::save(&form).await?;
        }
        result.images = form.images.clone();

        if failures.is_empty() {
            Ok(result)
        } else {
            self.snapshot.set(Some(result.clone()));
            self.form.set(form);
            Err(format!("Blog saved, but some images failed to upload: {}", failures.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_urls_are_not_stored() {
        assert_eq!(storable_featured_url("blob:http://localhost/abc"), "");
        assert_eq!(
            storable_featured_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
