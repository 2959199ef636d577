use crate::shared::api_utils::asset_base;
use crate::shared::files::MultipartForm;
use crate::shared::{http, resource_api};
use contracts::domain::a005_blog::aggregate::{Blog, BlogImage, BlogQuery, BulkStatusRequest};
use contracts::domain::common::{absolutize_url, RecordId};
use contracts::shared::batch::{run_batch, BatchReport};
use contracts::shared::paged::Paged;
use contracts::shared::resource::Resource;
use web_sys::File;

pub type BlogBatch = BatchReport<RecordId, String>;

pub async fn list(query: &BlogQuery) -> Result<Paged<Blog>, String> {
    let base = asset_base();
    let mut paged: Paged<Blog> = http::get_json_query(Blog::ENDPOINT, query).await?;
    paged.items = paged.items.into_iter().map(|b| b.normalized(&base)).collect();
    Ok(paged)
}

pub async fn get(id: &RecordId) -> Result<Blog, String> {
    resource_api::fetch_one::<Blog>(id)
        .await
        .map(|b| b.normalized(&asset_base()))
}

pub async fn save(blog: &Blog) -> Result<Blog, String> {
    resource_api::save(blog)
        .await
        .map(|b| b.normalized(&asset_base()))
}

pub async fn delete_many(ids: Vec<RecordId>) -> BlogBatch {
    run_batch(ids, |id| async move { resource_api::remove::<Blog>(&id).await }).await
}

/// Publish or unpublish `blogs` in one call. If the bulk endpoint is missing
/// or fails, each blog is saved on its own with its full record.
pub async fn set_published(blogs: Vec<Blog>, is_published: bool) -> BlogBatch {
    let blogs: Vec<(RecordId, Blog)> = blogs
        .into_iter()
        .filter_map(|b| Some((b.id.clone()?, b.with_published(is_published))))
        .collect();
    let request = BulkStatusRequest {
        ids: blogs.iter().map(|(id, _)| id.clone()).collect(),
        is_published,
    };
    match http::send_json("POST", "/blogs/bulk-status", &request).await {
        Ok(()) => {
            let mut report = BlogBatch::default();
            for (id, _) in blogs {
                report.push(id, Ok(()));
            }
            report
        }
        Err(e) => {
            log::warn!("Bulk status update failed ({}), updating one by one", e);
            let ids: Vec<RecordId> = blogs.iter().map(|(id, _)| id.clone()).collect();
            let blogs = &blogs;
            run_batch(ids, |id| async move {
                let (_, blog) = blogs
                    .iter()
                    .find(|(k, _)| *k == id)
                    .ok_or_else(|| format!("blog {} is no longer loaded", id))?;
                resource_api::update(&id, blog).await.map(|_| ())
            })
            .await
        }
    }
}

pub async fn upload_image(
    blog_id: &RecordId,
    file: &File,
    alt_text: &str,
    display_order: i32,
) -> Result<BlogImage, String> {
    let form = MultipartForm::new()?
        .text("blogId", &blog_id.to_string())?
        .file("image", file)?
        .text("altText", alt_text)?
        .text("displayOrder", &display_order.to_string())?
        .finish();
    let mut image: BlogImage = http::post_form("/blogs/images", form).await?;
    image.image_url = absolutize_url(&asset_base(), &image.image_url);
    Ok(image)
}

pub async fn delete_image(image_id: &RecordId) -> Result<(), String> {
    http::delete(&format!("/blogs/images/{}", image_id)).await
}
