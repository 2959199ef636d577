//! Browser file saving.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlIFrameElement, Url};

/// Object URLs handed to the browser for a download are revoked only after
/// this delay; revoking immediately can cancel the save.
const REVOKE_DELAY_MS: u32 = 1500;
const IFRAME_LIFETIME_MS: u32 = 60_000;

pub fn bytes_to_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Save bytes as a file via a synthetic anchor click.
pub fn save_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
    let blob = bytes_to_blob(bytes, mime)?;
    save_blob(&blob, filename)
}

pub fn save_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    anchor.remove();

    revoke_later(url);
    Ok(())
}

/// Revoke an object URL after the download delay.
pub fn revoke_later(url: String) {
    Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
}

/// Fallback download: point a hidden iframe at the file URL and let the
/// browser handle the response. The iframe is removed a minute later.
pub fn download_via_iframe(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let iframe = document
        .create_element("iframe")
        .map_err(|e| format!("Failed to create iframe: {:?}", e))?
        .dyn_into::<HtmlIFrameElement>()
        .map_err(|e| format!("Failed to cast to iframe: {:?}", e))?;
    iframe
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;
    iframe.set_src(url);
    body.append_child(&iframe)
        .map_err(|e| format!("Failed to append iframe: {:?}", e))?;

    Timeout::new(IFRAME_LIFETIME_MS, move || iframe.remove()).forget();
    Ok(())
}

/// Show an HTML document (fetched with credentials) in a new window.
pub fn open_html_in_new_window(html: &str) -> Result<(), String> {
    let blob = bytes_to_blob(html.as_bytes(), "text/html;charset=utf-8")?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;
    let window = web_sys::window().ok_or("No window object")?;
    let opened = window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("Failed to open window: {:?}", e))?;
    if opened.is_none() {
        let _ = Url::revoke_object_url(&url);
        return Err("The print window was blocked by the browser".to_string());
    }
    // The new window reads the blob asynchronously.
    Timeout::new(IFRAME_LIFETIME_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

/// MIME type guessed from a file extension.
pub fn mime_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("a.JPG"), "image/jpeg");
        assert_eq!(mime_for("proof.pdf"), "application/pdf");
        assert_eq!(mime_for("noext"), "application/octet-stream");
    }
}
