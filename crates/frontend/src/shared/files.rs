//! File inputs, object URLs and multipart forms.

use wasm_bindgen::JsCast;
use web_sys::{File, FormData, HtmlInputElement, Url};

/// Files picked in an `<input type="file">` change event.
pub fn selected_files(ev: &web_sys::Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = match input.files() {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    };
    // Allow picking the same file again.
    input.set_value("");
    files
}

/// Local preview URL for a picked file. Must be revoked exactly once.
pub fn preview_url(file: &File) -> Result<String, String> {
    Url::create_object_url_with_blob(file).map_err(|e| format!("Failed to preview file: {:?}", e))
}

pub fn revoke(url: &str) {
    if url.starts_with("blob:") {
        let _ = Url::revoke_object_url(url);
    }
}

/// Builder over `FormData` for image upload endpoints.
pub struct MultipartForm {
    form: FormData,
}

impl MultipartForm {
    pub fn new() -> Result<Self, String> {
        let form = FormData::new().map_err(|e| format!("Failed to create form: {:?}", e))?;
        Ok(Self { form })
    }

    pub fn text(self, name: &str, value: &str) -> Result<Self, String> {
        self.form
            .append_with_str(name, value)
            .map_err(|e| format!("Failed to add field '{}': {:?}", name, e))?;
        Ok(self)
    }

    pub fn file(self, name: &str, file: &File) -> Result<Self, String> {
        self.form
            .append_with_blob_and_filename(name, file, &file.name())
            .map_err(|e| format!("Failed to add file '{}': {:?}", name, e))?;
        Ok(self)
    }

    pub fn finish(self) -> FormData {
        self.form
    }
}
