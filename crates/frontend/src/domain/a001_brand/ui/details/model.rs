use contracts::domain::a001_brand::aggregate::Brand;
use contracts::domain::a002_category::aggregate::Category;

use crate::shared::resource_api;

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    resource_api::fetch_all::<Category>().await
}

pub async fn save_form(brand: &Brand) -> Result<Brand, String> {
    resource_api::save(brand).await
}
