//! Browser file download from in-memory bytes.
//!
//! Builds a `Blob`, points a temporary `<a download>` at an object URL,
//! clicks it, and revokes the URL. Off-browser this is a no-op.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// `name` with `extension` appended unless already present.
pub fn file_name(name: &str, extension: &str) -> String {
    let suffix = format!(".{extension}");
    if name.to_ascii_lowercase().ends_with(&suffix) {
        name.to_owned()
    } else {
        format!("{name}{suffix}")
    }
}

/// Offer `bytes` to the user as a download.
pub fn save_bytes(bytes: &[u8], filename: &str, mime: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options) else {
            leptos::logging::warn!("download: blob creation failed");
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        if let Some(anchor) = document
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        {
            anchor.set_href(&url);
            anchor.set_download(filename);
            if let Some(body) = document.body() {
                let _ = body.append_child(&anchor);
                anchor.click();
                let _ = body.remove_child(&anchor);
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, filename, mime);
    }
}

pub fn save_text(text: &str, filename: &str, mime: &str) {
    save_bytes(text.as_bytes(), filename, mime);
}
