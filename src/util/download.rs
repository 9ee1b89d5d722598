//! Triggering a browser download for in-memory bytes.
//!
//! Builds a `Blob`, mints an object URL, and clicks a synthetic anchor.
//! Requires a browser environment.

/// Offer `bytes` to the user as a file download named `filename`.
///
/// # Errors
///
/// Returns a display string when any browser API call fails.
pub fn save_bytes(filename: &str, bytes: &[u8]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));

        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/octet-stream");

        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|_| "could not assemble the download".to_owned())?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| "could not create a download link".to_owned())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document available".to_owned())?;
        let anchor = document
            .create_element("a")
            .map_err(|_| "could not create a download link".to_owned())?
            .unchecked_into::<web_sys::HtmlAnchorElement>();

        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, bytes);
        Err("downloads require a browser".to_owned())
    }
}
