//! Rules for ordered image galleries (product, subcategory and blog images).

use super::RecordId;

/// An image attached to a parent entity and shown in display order.
pub trait GalleryImage {
    fn image_id(&self) -> Option<&RecordId>;
    fn display_order(&self) -> i32;
    fn is_primary(&self) -> bool;
    fn set_primary(&mut self, primary: bool);
}

/// Sort by `display_order` and keep at most one primary image.
///
/// The first primary (after sorting) wins; the others are cleared.
pub fn normalize_gallery<T: GalleryImage>(images: &mut [T]) {
    images.sort_by_key(|img| img.display_order());
    let mut seen_primary = false;
    for img in images.iter_mut() {
        if img.is_primary() {
            if seen_primary {
                img.set_primary(false);
            }
            seen_primary = true;
        }
    }
}

/// The first image uploaded into an empty gallery becomes primary.
pub fn next_upload_is_primary<T: GalleryImage>(images: &[T]) -> bool {
    !images.iter().any(|img| img.is_primary())
}

/// Display order for the next uploaded image.
pub fn next_display_order<T: GalleryImage>(images: &[T]) -> i32 {
    images
        .iter()
        .map(|img| img.display_order())
        .max()
        .map(|max| max + 1)
        .unwrap_or(0)
}

/// Remove an image and hand the primary flag to the first remaining one
/// when the removed image was primary.
pub fn remove_image<T: GalleryImage>(images: &mut Vec<T>, id: &RecordId) -> Option<T> {
    let pos = images
        .iter()
        .position(|img| img.image_id() == Some(id))?;
    let removed = images.remove(pos);
    if removed.is_primary() {
        if let Some(first) = images.first_mut() {
            first.set_primary(true);
        }
    }
    Some(removed)
}

/// Make a stored image path absolute against the asset origin.
///
/// Absolute (`http(s)://`), `blob:` and `data:` URLs are returned unchanged.
pub fn absolutize_url(asset_base: &str, url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("blob:")
        || lower.starts_with("data:")
        || lower.starts_with("//")
    {
        return url.to_string();
    }
    let base = asset_base.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{}{}", base, url)
    } else {
        format!("{}/{}", base, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Img {
        id: RecordId,
        order: i32,
        primary: bool,
    }

    impl GalleryImage for Img {
        fn image_id(&self) -> Option<&RecordId> {
            Some(&self.id)
        }
        fn display_order(&self) -> i32 {
            self.order
        }
        fn is_primary(&self) -> bool {
            self.primary
        }
        fn set_primary(&mut self, primary: bool) {
            self.primary = primary;
        }
    }

    fn img(id: i64, order: i32, primary: bool) -> Img {
        Img {
            id: RecordId::Int(id),
            order,
            primary,
        }
    }

    #[test]
    fn test_normalize_sorts_and_keeps_single_primary() {
        let mut images = vec![img(1, 2, true), img(2, 0, true), img(3, 1, false)];
        normalize_gallery(&mut images);
        let ids: Vec<i64> = images
            .iter()
            .map(|i| match i.id {
                RecordId::Int(n) => n,
                _ => 0,
            })
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(images.iter().filter(|i| i.primary).count(), 1);
        assert!(images[0].primary);
    }

    #[test]
    fn test_removing_primary_reassigns_it() {
        let mut images = vec![img(1, 0, true), img(2, 1, false), img(3, 2, false)];
        let removed = remove_image(&mut images, &RecordId::Int(1));
        assert!(removed.is_some());
        assert!(images[0].primary);
        assert_eq!(images[0].id, RecordId::Int(2));
    }

    #[test]
    fn test_removing_last_image_leaves_empty_gallery() {
        let mut images = vec![img(1, 0, true)];
        remove_image(&mut images, &RecordId::Int(1));
        assert!(images.is_empty());
        assert!(next_upload_is_primary(&images));
        assert_eq!(next_display_order(&images), 0);
    }

    #[test]
    fn test_first_upload_is_primary_only_once() {
        let images = vec![img(1, 4, true)];
        assert!(!next_upload_is_primary(&images));
        assert_eq!(next_display_order(&images), 5);
    }

    #[test]
    fn test_absolutize_url() {
        let base = "https://shop.example.com";
        assert_eq!(
            absolutize_url(base, "/uploads/a.png"),
            "https://shop.example.com/uploads/a.png"
        );
        assert_eq!(
            absolutize_url("https://shop.example.com/", "uploads/a.png"),
            "https://shop.example.com/uploads/a.png"
        );
        assert_eq!(
            absolutize_url(base, "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(absolutize_url(base, "blob:abc"), "blob:abc");
        assert_eq!(absolutize_url(base, "  "), "");
    }
}
