//! `ProductService`: the only place the product screens talk to `/products`.
//!
//! Every product handed back is normalised for display (absolute image URLs,
//! ordered gallery with one primary image).

use crate::shared::api_utils::asset_base;
use crate::shared::files::MultipartForm;
use crate::shared::{http, resource_api};
use contracts::domain::a004_product::aggregate::{Product, ProductImage, ProductQuery};
use contracts::domain::common::absolutize_url;
use contracts::domain::common::RecordId;
use contracts::shared::paged::Paged;
use contracts::shared::resource::Resource;
use web_sys::File;

#[derive(Clone, Debug)]
pub struct ProductService {
    asset_base: String,
}

pub struct ImageUpload<'a> {
    pub product_id: &'a RecordId,
    pub file: &'a File,
    pub alt_text: &'a str,
    pub display_order: i32,
    pub is_primary: bool,
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductService {
    pub fn new() -> Self {
        Self {
            asset_base: asset_base(),
        }
    }

    fn normalize(&self, product: Product) -> Product {
        product.normalized(&self.asset_base)
    }

    pub async fn list(&self, query: &ProductQuery) -> Result<Paged<Product>, String> {
        let mut paged: Paged<Product> = http::get_json_query(Product::ENDPOINT, query).await?;
        paged.items = paged.items.into_iter().map(|p| self.normalize(p)).collect();
        Ok(paged)
    }

    pub async fn get(&self, id: &RecordId) -> Result<Product, String> {
        resource_api::fetch_one::<Product>(id)
            .await
            .map(|p| self.normalize(p))
    }

    pub async fn create(&self, product: &Product) -> Result<Product, String> {
        let payload = product.to_payload().map_err(|e| e.to_string())?;
        resource_api::create(&payload).await.map(|p| self.normalize(p))
    }

    pub async fn update(&self, id: &RecordId, product: &Product) -> Result<Product, String> {
        let payload = product.to_payload().map_err(|e| e.to_string())?;
        resource_api::update(id, &payload)
            .await
            .map(|p| self.normalize(p))
    }

    pub async fn delete(&self, id: &RecordId) -> Result<(), String> {
        resource_api::remove::<Product>(id).await
    }

    pub async fn upload_image(&self, upload: ImageUpload<'_>) -> Result<ProductImage, String> {
        let form = MultipartForm::new()?
            .text("productId", &upload.product_id.to_string())?
            .file("image", upload.file)?
            .text("altText", upload.alt_text)?
            .text("displayOrder", &upload.display_order.to_string())?
            .text("isPrimary", if upload.is_primary { "true" } else { "false" })?
            .finish();
        let mut image: ProductImage = http::post_form("/products/images", form).await?;
        image.image_url = absolutize_url(&self.asset_base, &image.image_url);
        Ok(image)
    }

    pub async fn delete_image(&self, image_id: &RecordId) -> Result<(), String> {
        http::delete(&format!("/products/images/{}", image_id)).await
    }
}
