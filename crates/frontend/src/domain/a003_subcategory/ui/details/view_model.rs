use super::model::{self, UploadRequest};
use crate::shared::api_utils::asset_base;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_subcategory::aggregate::{Subcategory, SubcategoryImage};
use contracts::domain::common::images::{
    absolutize_url, next_display_order, next_upload_is_primary, normalize_gallery, remove_image,
};
use contracts::domain::common::RecordId;
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct SubcategoryDetailsViewModel {
    pub form: RwSignal<Subcategory>,
    pub categories: RwSignal<Vec<Category>>,
    pub images: RwSignal<Vec<SubcategoryImage>>,
    pub alt_text: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
}

impl SubcategoryDetailsViewModel {
    pub fn new(initial: Option<Subcategory>) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_default()),
            categories: RwSignal::new(Vec::new()),
            images: RwSignal::new(Vec::new()),
            alt_text: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            uploading: RwSignal::new(false),
        }
    }

    pub fn subcategory_id(&self) -> Option<RecordId> {
        self.form.with(|f| f.id.clone())
    }

    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            match model::fetch_categories().await {
                Ok(list) => this.categories.set(list),
                Err(e) => this.error.set(Some(format!("Could not load categories: {}", e))),
            }
        });
        self.reload_images();
    }

    pub fn reload_images(&self) {
        let Some(id) = self.subcategory_id() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match model::fetch_images(&id).await {
                Ok(mut images) => {
                    let base = asset_base();
                    for img in images.iter_mut() {
                        img.image_url = absolutize_url(&base, &img.image_url);
                    }
                    normalize_gallery(&mut images);
                    this.images.set(images);
                }
                Err(e) => {
                    log::warn!("Failed to load images of subcategory {}: {}", id, e);
                    this.error.set(Some(e));
                }
            }
        });
    }

    pub fn set_category(&self, raw: &str) {
        let id = RecordId::from_form_value(raw);
        self.form.update(|f| f.category_id = id);
    }

    pub fn save_command(&self, on_saved: Callback<Subcategory>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e.message));
            return;
        }
        self.error.set(None);
        self.saving.set(true);
        let this = *self;
        spawn_local(async move {
            match model::save_form(&current).await {
                Ok(saved) => on_saved.run(saved),
                Err(e) => {
                    log::error!("Failed to save subcategory: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.saving.set(false);
        });
    }

    /// Uploads one after another so display order and the primary flag
    /// follow the pick order.
    pub fn upload_files(&self, files: Vec<File>) {
        let Some(id) = self.subcategory_id() else {
            self.error.set(Some("Save the subcategory before adding images".into()));
            return;
        };
        if files.is_empty() {
            return;
        }
        let this = *self;
        this.uploading.set(true);
        spawn_local(async move {
            let base = asset_base();
            for file in files {
                let (display_order, is_primary) = this
                    .images
                    .with_untracked(|imgs| (next_display_order(imgs), next_upload_is_primary(imgs)));
                let alt_text = this.alt_text.get_untracked();
                let req = UploadRequest {
                    subcategory_id: &id,
                    file: &file,
                    alt_text: &alt_text,
                    display_order,
                    is_primary,
                };
                match model::upload_image(req).await {
                    Ok(mut img) => {
                        img.image_url = absolutize_url(&base, &img.image_url);
                        this.images.update(|imgs| {
                            imgs.push(img);
                            normalize_gallery(imgs);
                        });
                    }
                    Err(e) => {
                        log::error!("Upload of '{}' failed: {}", file.name(), e);
                        this.error.set(Some(format!("Upload of '{}' failed: {}", file.name(), e)));
                    }
                }
            }
            this.alt_text.set(String::new());
            this.uploading.set(false);
        });
    }

    pub fn delete_image(&self, image_id: RecordId) {
        let this = *self;
        spawn_local(async move {
            match model::delete_image(&image_id).await {
                Ok(()) => this.images.update(|imgs| {
                    remove_image(imgs, &image_id);
                }),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}
