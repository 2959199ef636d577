//! Fault image download helpers.
//!
//! Images are fetched one by one from `GET /warrantyclaims/fault/:filename`
//! and appended to an in-memory archive in gallery order.

use std::future::Future;

use super::aggregate::WarrantyClaimImage;
use crate::shared::archive::{ArchiveBuilder, ArchiveError};
use crate::shared::batch::{progress_percent, BatchReport};

/// Stored filename of a fault image: the explicit `fileName` when present,
/// otherwise the last path segment of the URL without query or fragment.
pub fn fault_file_name(image: &WarrantyClaimImage) -> String {
    if let Some(name) = image.file_name.as_deref().map(str::trim) {
        if !name.is_empty() {
            return name.to_string();
        }
    }
    file_name_from_url(&image.image_url)
}

pub fn file_name_from_url(url: &str) -> String {
    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    path.rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("image")
        .to_string()
}

/// API path of the per-file download endpoint. `encoded_name` must already
/// be percent-encoded.
pub fn fault_download_path(encoded_name: &str) -> String {
    format!("/warrantyclaims/fault/{}", encoded_name)
}

pub fn archive_file_name(claim_number: &str) -> String {
    let cleaned: String = claim_number
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "claim-images.zip".to_string()
    } else {
        format!("claim-{}-images.zip", cleaned)
    }
}

pub fn zip_success_message(added: usize) -> String {
    format!("Downloaded {} images as ZIP", added)
}

pub fn zip_partial_failure_message(failed: usize) -> String {
    format!("{} image(s) could not be downloaded", failed)
}

pub const ZIP_FALLBACK_MESSAGE: &str =
    "Could not package images as ZIP, downloading them individually";

/// Result of packing a gallery.
#[derive(Debug)]
pub enum GalleryDownload {
    /// At least one image was fetched.
    Archive {
        bytes: Vec<u8>,
        report: BatchReport<String, String>,
    },
    /// Nothing could be fetched; the caller falls back to per-file downloads.
    NothingFetched { report: BatchReport<String, String> },
}

impl GalleryDownload {
    pub fn report(&self) -> &BatchReport<String, String> {
        match self {
            GalleryDownload::Archive { report, .. } => report,
            GalleryDownload::NothingFetched { report } => report,
        }
    }
}

/// Fetch every image sequentially and pack the successes.
///
/// `fetch` receives the stored filename and returns the raw bytes.
/// `on_progress` is called after each image with the percentage of images
/// processed so far.
pub async fn pack_fault_images<F, Fut, P>(
    images: &[WarrantyClaimImage],
    mut fetch: F,
    mut on_progress: P,
) -> Result<GalleryDownload, ArchiveError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Vec<u8>, String>>,
    P: FnMut(u8),
{
    let total = images.len();
    let mut builder = ArchiveBuilder::new();
    let mut report = BatchReport::default();

    for (processed, image) in images.iter().enumerate() {
        let name = fault_file_name(image);
        match fetch(name.clone()).await {
            Ok(bytes) => {
                builder.add_file(&name, &bytes)?;
                report.push(name, Ok(()));
            }
            Err(e) => report.push(name, Err(e)),
        }
        on_progress(progress_percent(processed + 1, total));
    }

    if builder.is_empty() {
        return Ok(GalleryDownload::NothingFetched { report });
    }
    Ok(GalleryDownload::Archive {
        bytes: builder.finish()?,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::batch::test_exec::block_on;
    use std::io::Cursor;
    use zip::ZipArchive;

    fn image(url: &str) -> WarrantyClaimImage {
        WarrantyClaimImage {
            id: None,
            image_url: url.to_string(),
            file_name: None,
        }
    }

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(file_name_from_url("https://x.test/uploads/fault/a.jpg"), "a.jpg");
        assert_eq!(file_name_from_url("uploads/fault/b.png?v=2#top"), "b.png");
        assert_eq!(file_name_from_url("uploads\\fault\\c.jpg"), "c.jpg");
        assert_eq!(file_name_from_url(""), "image");

        let mut img = image("uploads/fault/a.jpg");
        img.file_name = Some("original.jpg".to_string());
        assert_eq!(fault_file_name(&img), "original.jpg");
    }

    #[test]
    fn test_partial_failures_still_produce_archive() {
        let images: Vec<_> = (1..=5)
            .map(|i| image(&format!("uploads/fault/img{}.jpg", i)))
            .collect();
        let mut progress = Vec::new();
        let outcome = block_on(pack_fault_images(
            &images,
            |name| async move {
                if name == "img2.jpg" || name == "img4.jpg" {
                    Err("HTTP 404".to_string())
                } else {
                    Ok(name.into_bytes())
                }
            },
            |p| progress.push(p),
        ))
        .unwrap();

        assert_eq!(progress, vec![20, 40, 60, 80, 100]);
        let GalleryDownload::Archive { bytes, report } = outcome else {
            panic!("expected an archive");
        };
        assert_eq!(report.succeeded(), 3);
        assert_eq!(report.failed(), 2);
        assert_eq!(zip_success_message(report.succeeded()), "Downloaded 3 images as ZIP");

        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);
    }

    #[test]
    fn test_nothing_fetched_asks_for_fallback() {
        let images = vec![image("a.jpg"), image("b.jpg")];
        let outcome = block_on(pack_fault_images(
            &images,
            |_| async { Err::<Vec<u8>, _>("offline".to_string()) },
            |_| {},
        ))
        .unwrap();
        assert!(matches!(outcome, GalleryDownload::NothingFetched { .. }));
        assert_eq!(outcome.report().failed(), 2);
    }

    #[test]
    fn test_archive_file_name() {
        assert_eq!(archive_file_name("WC-2024/17"), "claim-WC-2024_17-images.zip");
        assert_eq!(archive_file_name(" "), "claim-images.zip");
    }
}
