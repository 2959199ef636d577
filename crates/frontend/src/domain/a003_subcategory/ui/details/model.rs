use crate::shared::files::MultipartForm;
use crate::shared::http;
use crate::shared::resource_api;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_subcategory::aggregate::{Subcategory, SubcategoryImage};
use contracts::domain::common::RecordId;
use web_sys::File;

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    resource_api::fetch_all::<Category>().await
}

pub async fn save_form(subcategory: &Subcategory) -> Result<Subcategory, String> {
    resource_api::save(subcategory).await
}

pub async fn fetch_images(subcategory_id: &RecordId) -> Result<Vec<SubcategoryImage>, String> {
    http::get_json(&format!("/subcategories/{}/images", subcategory_id)).await
}

pub struct UploadRequest<'a> {
    pub subcategory_id: &'a RecordId,
    pub file: &'a File,
    pub alt_text: &'a str,
    pub display_order: i32,
    pub is_primary: bool,
}

pub async fn upload_image(req: UploadRequest<'_>) -> Result<SubcategoryImage, String> {
    let form = MultipartForm::new()?
        .text("subcategoryId", &req.subcategory_id.to_string())?
        .file("image", req.file)?
        .text("altText", req.alt_text)?
        .text("displayOrder", &req.display_order.to_string())?
        .text("isPrimary", if req.is_primary { "true" } else { "false" })?
        .finish();
    http::post_form("/subcategories/images", form).await
}

pub async fn delete_image(image_id: &RecordId) -> Result<(), String> {
    http::delete(&format!("/subcategories/images/{}", image_id)).await
}
