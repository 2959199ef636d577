use serde::{Deserialize, Serialize};

use super::slug::validate_slug;
use crate::domain::common::images::GalleryImage;
use crate::domain::common::validation::{max_chars, require};
use crate::domain::common::{absolutize_url, RecordId, ValidationError};
use crate::shared::resource::Resource;

pub const META_TITLE_MAX: usize = 60;
pub const META_DESCRIPTION_MAX: usize = 160;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub featured_image_url: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub meta_keywords: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing)]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing)]
    pub images: Vec<BlogImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogImage {
    pub id: Option<RecordId>,
    #[serde(default)]
    pub blog_id: Option<RecordId>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub display_order: i32,
}

impl GalleryImage for BlogImage {
    fn image_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
    fn display_order(&self) -> i32 {
        self.display_order
    }
    // Blog galleries have no primary flag; the featured image plays that role.
    fn is_primary(&self) -> bool {
        false
    }
    fn set_primary(&mut self, _primary: bool) {}
}

impl Blog {
    /// Full record with only the publish flag changed, for `PUT /blogs/:id`
    /// which replaces the whole post.
    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub fn normalized(mut self, asset_base: &str) -> Self {
        self.featured_image_url = absolutize_url(asset_base, &self.featured_image_url);
        for img in self.images.iter_mut() {
            img.image_url = absolutize_url(asset_base, &img.image_url);
        }
        self.images.sort_by_key(|img| img.display_order);
        self
    }

    /// Fields compared by the dirty check, in a comparable form.
    fn tracked(&self) -> TrackedFields<'_> {
        TrackedFields {
            title: &self.title,
            slug: &self.slug,
            excerpt: &self.excerpt,
            content: &self.content,
            featured_image_url: &self.featured_image_url,
            author: &self.author,
            meta_title: &self.meta_title,
            meta_description: &self.meta_description,
            meta_keywords: &self.meta_keywords,
            is_published: self.is_published,
            is_featured: self.is_featured,
        }
    }
}

#[derive(PartialEq)]
struct TrackedFields<'a> {
    title: &'a str,
    slug: &'a str,
    excerpt: &'a str,
    content: &'a str,
    featured_image_url: &'a str,
    author: &'a str,
    meta_title: &'a str,
    meta_description: &'a str,
    meta_keywords: &'a str,
    is_published: bool,
    is_featured: bool,
}

/// Whether the blog form has something to submit.
///
/// A new blog is always dirty. An existing one is dirty when a tracked field
/// differs from the last fetched snapshot or an unsaved image is pending.
pub fn is_dirty(draft: &Blog, snapshot: Option<&Blog>, pending_images: usize) -> bool {
    match snapshot {
        None => true,
        Some(_) if draft.id.is_none() => true,
        Some(original) => pending_images > 0 || draft.tracked() != original.tracked(),
    }
}

impl Resource for Blog {
    const ENDPOINT: &'static str = "/blogs";
    const LABEL: &'static str = "blog";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title, "Title")?;
        validate_slug(&self.slug).map_err(|e| ValidationError::new("slug", e.to_string()))?;
        require("content", &self.content, "Content")?;
        max_chars("meta_title", &self.meta_title, META_TITLE_MAX, "Meta title")?;
        max_chars(
            "meta_description",
            &self.meta_description,
            META_DESCRIPTION_MAX,
            "Meta description",
        )?;
        Ok(())
    }
}

// ============================================================================
// Queries and bulk requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusRequest {
    pub ids: Vec<RecordId>,
    pub is_published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved() -> Blog {
        Blog {
            id: Some(RecordId::Int(1)),
            title: "My Post".to_string(),
            slug: "my-post".to_string(),
            content: "<p>Body</p>".to_string(),
            ..Blog::default()
        }
    }

    #[test]
    fn test_new_blog_is_always_dirty() {
        assert!(is_dirty(&Blog::default(), None, 0));
        let mut draft = saved();
        draft.id = None;
        assert!(is_dirty(&draft, Some(&saved()), 0));
    }

    #[test]
    fn test_unchanged_blog_is_clean() {
        let snapshot = saved();
        assert!(!is_dirty(&snapshot.clone(), Some(&snapshot), 0));
    }

    #[test]
    fn test_edits_and_pending_images_make_dirty() {
        let snapshot = saved();
        let mut draft = snapshot.clone();
        draft.is_featured = true;
        assert!(is_dirty(&draft, Some(&snapshot), 0));
        assert!(is_dirty(&snapshot.clone(), Some(&snapshot), 1));
    }

    #[test]
    fn test_untracked_fields_do_not_make_dirty() {
        let snapshot = saved();
        let mut draft = snapshot.clone();
        draft.created_at = Some("2024-01-01".to_string());
        assert!(!is_dirty(&draft, Some(&snapshot), 0));
    }

    #[test]
    fn test_validation() {
        assert!(saved().validate().is_ok());

        let mut bad = saved();
        bad.slug = "My Post".to_string();
        assert_eq!(bad.validate().unwrap_err().field, "slug");

        let mut long_meta = saved();
        long_meta.meta_title = "x".repeat(META_TITLE_MAX + 1);
        assert_eq!(long_meta.validate().unwrap_err().field, "meta_title");

        let mut no_content = saved();
        no_content.content.clear();
        assert_eq!(no_content.validate().unwrap_err().field, "content");
    }

    #[test]
    fn test_slug_round_trips_through_payload() {
        let json = serde_json::to_string(&saved()).unwrap();
        let back: Blog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.slug, "my-post");
    }

    #[test]
    fn test_publish_toggle_keeps_full_payload() {
        let body = serde_json::to_value(saved().with_published(true)).unwrap();
        assert_eq!(body["isPublished"], true);
        assert_eq!(body["title"], "My Post");
        assert_eq!(body["slug"], "my-post");
        assert_eq!(body["content"], "<p>Body</p>");
    }
}
