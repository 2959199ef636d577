//! Bookkeeping for images picked before their parent entity is saved.
//!
//! Each temporary image owns one browser object URL. The set hands every
//! preview URL back exactly once (on delete, on promotion to a server URL or
//! on teardown) so the caller can revoke it without double-revoking.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempImage {
    pub temp_id: String,
    pub preview_url: String,
    pub file_name: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TempImageSet {
    items: Vec<TempImage>,
}

/// Result of promoting a temporary image to a stored one.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    pub temp: TempImage,
    pub server_url: String,
}

impl TempImageSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[TempImage] {
        &self.items
    }

    /// Register a picked file and return its temp id.
    pub fn add(&mut self, preview_url: String, file_name: String) -> String {
        let temp_id = format!("temp-{}", Uuid::new_v4());
        let alt_text = file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem.to_string())
            .unwrap_or_else(|| file_name.clone());
        self.items.push(TempImage {
            temp_id: temp_id.clone(),
            preview_url,
            file_name,
            alt_text,
        });
        temp_id
    }

    pub fn get(&self, temp_id: &str) -> Option<&TempImage> {
        self.items.iter().find(|t| t.temp_id == temp_id)
    }

    /// Drop an unsaved image. Returns its preview URL for revocation.
    pub fn remove(&mut self, temp_id: &str) -> Option<TempImage> {
        let pos = self.items.iter().position(|t| t.temp_id == temp_id)?;
        Some(self.items.remove(pos))
    }

    /// Replace a temporary image with the URL the server stored it under.
    /// The returned promotion carries the preview URL to revoke.
    pub fn promote(&mut self, temp_id: &str, server_url: String) -> Option<Promotion> {
        let temp = self.remove(temp_id)?;
        Some(Promotion { temp, server_url })
    }

    /// Component teardown: every remaining preview URL, once.
    pub fn drain(&mut self) -> Vec<String> {
        self.items.drain(..).map(|t| t.preview_url).collect()
    }
}

/// Swap a field that pointed at a preview URL for its promoted server URL.
pub fn swap_preview_reference(field: &mut String, promotion: &Promotion) {
    if *field == promotion.temp.preview_url {
        *field = promotion.server_url.clone();
    }
}

/// Clear a field that pointed at a deleted image.
pub fn clear_reference(field: &mut String, removed_url: &str) {
    if !removed_url.is_empty() && *field == removed_url {
        field.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_preview_url_is_returned_once() {
        let mut set = TempImageSet::new();
        let a = set.add("blob:a".to_string(), "a.png".to_string());
        let b = set.add("blob:b".to_string(), "b.jpg".to_string());
        let _c = set.add("blob:c".to_string(), "c".to_string());

        let removed = set.remove(&a).unwrap();
        assert_eq!(removed.preview_url, "blob:a");
        assert!(set.remove(&a).is_none());

        let promoted = set.promote(&b, "/uploads/b.jpg".to_string()).unwrap();
        assert_eq!(promoted.temp.preview_url, "blob:b");
        assert!(set.promote(&b, "/uploads/b.jpg".to_string()).is_none());

        assert_eq!(set.drain(), vec!["blob:c".to_string()]);
        assert!(set.drain().is_empty());
    }

    #[test]
    fn test_alt_text_defaults_to_file_stem() {
        let mut set = TempImageSet::new();
        let id = set.add("blob:x".to_string(), "hero.banner.png".to_string());
        assert_eq!(set.get(&id).unwrap().alt_text, "hero.banner");
        assert!(id.starts_with("temp-"));
    }

    #[test]
    fn test_featured_reference_follows_image() {
        let mut set = TempImageSet::new();
        let id = set.add("blob:hero".to_string(), "hero.png".to_string());
        let mut featured = "blob:hero".to_string();
        let promotion = set.promote(&id, "https://cdn/hero.png".to_string()).unwrap();
        swap_preview_reference(&mut featured, &promotion);
        assert_eq!(featured, "https://cdn/hero.png");

        clear_reference(&mut featured, "https://cdn/hero.png");
        assert!(featured.is_empty());
    }
}
