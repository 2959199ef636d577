//! `/warrantyclaims` endpoints.

use crate::shared::api_utils::asset_base;
use crate::shared::files::MultipartForm;
use crate::shared::http;
use contracts::domain::a007_warranty_claim::aggregate::WarrantyClaim;
use contracts::domain::a007_warranty_claim::gallery::fault_download_path;
use contracts::domain::a007_warranty_claim::query::{ClaimQuery, ClaimStats};
use contracts::domain::a007_warranty_claim::status::StatusUpdateRequest;
use contracts::domain::common::{absolutize_url, RecordId};
use contracts::shared::paged::Paged;
use web_sys::File;

fn normalize(mut claim: WarrantyClaim) -> WarrantyClaim {
    let base = asset_base();
    for img in claim.fault_images.iter_mut() {
        img.image_url = absolutize_url(&base, &img.image_url);
    }
    claim
}

pub async fn list(query: &ClaimQuery) -> Result<Paged<WarrantyClaim>, String> {
    let mut paged: Paged<WarrantyClaim> = http::get_json_query(WarrantyClaim::ENDPOINT, query).await?;
    paged.items = paged.items.into_iter().map(normalize).collect();
    Ok(paged)
}

pub async fn stats() -> Result<ClaimStats, String> {
    http::get_json("/warrantyclaims/dashboard/stats").await
}

pub async fn get(id: &RecordId) -> Result<WarrantyClaim, String> {
    http::get_json::<WarrantyClaim>(&WarrantyClaim::item_path(id))
        .await
        .map(normalize)
}

/// PUT the whole claim. Fields the console does not edit travel back
/// untouched through the claim's `extra` map.
pub async fn update(claim: &WarrantyClaim) -> Result<(), String> {
    let Some(id) = claim.id.as_ref() else {
        return Err("Claim has no id".into());
    };
    http::send_json("PUT", &WarrantyClaim::item_path(id), claim).await
}

pub async fn upload_proof(id: &RecordId, file: &File) -> Result<(), String> {
    let form = MultipartForm::new()?.file("proofOfPurchase", file)?.finish();
    http::post_form_unit(&format!("{}/upload-proof", WarrantyClaim::item_path(id)), form).await
}

pub async fn update_status(id: &RecordId, request: &StatusUpdateRequest) -> Result<(), String> {
    http::send_json("PUT", &format!("{}/status", WarrantyClaim::item_path(id)), request).await
}

pub async fn delete(id: &RecordId) -> Result<(), String> {
    http::delete(&WarrantyClaim::item_path(id)).await
}

pub async fn print_html(id: &RecordId) -> Result<String, String> {
    http::get_text(&format!("{}/print", WarrantyClaim::item_path(id))).await
}

/// API path of one stored fault image.
pub fn fault_image_path(file_name: &str) -> String {
    fault_download_path(&urlencoding::encode(file_name))
}

pub async fn fetch_fault_image(file_name: String) -> Result<Vec<u8>, String> {
    http::get_bytes(&fault_image_path(&file_name)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_image_path_is_encoded() {
        assert_eq!(
            fault_image_path("front panel #2.jpg"),
            "/warrantyclaims/fault/front%20panel%20%232.jpg"
        );
    }
}
