use crate::domain::a004_product::api::{ImageUpload, ProductService};
use crate::shared::resource_api;
use contracts::domain::a001_brand::aggregate::Brand;
use contracts::domain::a003_subcategory::aggregate::Subcategory;
use contracts::domain::a004_product::aggregate::{Product, ProductVariant};
use contracts::domain::a004_product::specifications::Specifications;
use contracts::domain::common::images::{next_display_order, next_upload_is_primary, normalize_gallery};
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<Product>,
    pub brands: RwSignal<Vec<Brand>>,
    pub subcategories: RwSignal<Vec<Subcategory>>,
    pub alt_text: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

/// Parse error of the specifications text, or `None` when it is valid.
pub fn specification_error(raw: &str) -> Option<String> {
    Specifications::parse(raw).err().map(|e| e.to_string())
}

/// Number input to an optional price: blank or unparsable clears it.
pub fn parse_optional_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(Product::default()),
            brands: RwSignal::new(Vec::new()),
            subcategories: RwSignal::new(Vec::new()),
            alt_text: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            uploading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn product_id(&self) -> Option<RecordId> {
        self.form.with(|f| f.id.clone())
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load(&self, id: Option<RecordId>) {
        let this = *self;
        spawn_local(async move {
            if let Some(id) = id {
                this.loading.set(true);
                match ProductService::new().get(&id).await {
                    Ok(product) => this.form.set(product),
                    Err(e) => {
                        log::error!("Failed to load product {}: {}", id, e);
                        this.error.set(Some(e));
                    }
                }
                this.loading.set(false);
            }
            match resource_api::fetch_all::<Brand>().await {
                Ok(list) => this.brands.set(list),
                Err(e) => log::warn!("Brands unavailable: {}", e),
            }
            match resource_api::fetch_all::<Subcategory>().await {
                Ok(list) => this.subcategories.set(list),
                Err(e) => log::warn!("Subcategories unavailable: {}", e),
            }
        });
    }

    pub fn add_variant(&self) {
        self.form.update(|f| f.variants.push(ProductVariant::default()));
    }

    pub fn remove_variant(&self, index: usize) {
        self.form.update(|f| {
            if index < f.variants.len() {
                f.variants.remove(index);
            }
        });
    }

    pub fn edit_variant(&self, index: usize, edit: impl FnOnce(&mut ProductVariant)) {
        self.form.update(|f| {
            if let Some(v) = f.variants.get_mut(index) {
                edit(v);
            }
        });
    }

    /// Reformat valid specifications as pretty JSON.
    pub fn format_specifications(&self) {
        self.form.update(|f| {
            if let Ok(spec) = Specifications::parse(&f.specifications) {
                f.specifications = spec.to_pretty();
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<Product>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.to_payload() {
            self.error.set(Some(e.message));
            return;
        }
        self.error.set(None);
        self.saving.set(true);
        let this = *self;
        spawn_local(async move {
            let service = ProductService::new();
            let result = match current.id.clone() {
                Some(id) => service.update(&id, &current).await,
                None => service.create(&current).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("Saved product '{}'", saved.name);
                    on_saved.run(saved);
                }
                Err(e) => {
                    log::error!("Failed to save product: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.saving.set(false);
        });
    }

    pub fn upload_files(&self, files: Vec<File>) {
        let Some(product_id) = self.product_id() else {
            self.error.set(Some("Save the product before adding images".into()));
            return;
        };
        if files.is_empty() {
            return;
        }
        let this = *self;
        this.uploading.set(true);
        spawn_local(async move {
            let service = ProductService::new();
            for file in files {
                let (display_order, is_primary) = this
                    .form
                    .with_untracked(|f| (next_display_order(&f.images), next_upload_is_primary(&f.images)));
                let alt_text = this.alt_text.get_untracked();
                let upload = ImageUpload {
                    product_id: &product_id,
                    file: &file,
                    alt_text: &alt_text,
                    display_order,
                    is_primary,
                };
                match service.upload_image(upload).await {
                    Ok(image) => this.form.update(|f| {
                        f.images.push(image);
                        normalize_gallery(&mut f.images);
                    }),
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

    /// Delete on the server, then take the gallery from a fresh copy so the
    /// primary flag matches what the backend decided.
    pub fn delete_image(&self, image_id: RecordId) {
        let Some(product_id) = self.product_id() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let service = ProductService::new();
            if let Err(e) = service.delete_image(&image_id).await {
                this.error.set(Some(e));
                return;
            }
            match service.get(&product_id).await {
                Ok(fresh) => this.form.update(|f| f.images = fresh.images),
                Err(e) => {
                    log::warn!("Refetch after image delete failed: {}", e);
                    this.form.update(|f| f.images.retain(|img| img.id.as_ref() != Some(&image_id)));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specification_error_is_live() {
        assert_eq!(specification_error(r#"{"color": "red"}"#), None);
        assert_eq!(specification_error(""), None);
        assert!(specification_error("{color").is_some());
        assert!(specification_error("[1, 2]").unwrap().contains("JSON object"));
    }

    #[test]
    fn test_parse_optional_price() {
        assert_eq!(parse_optional_price(""), None);
        assert_eq!(parse_optional_price("12.5"), Some(12.5));
        assert_eq!(parse_optional_price("abc"), None);
    }
}
