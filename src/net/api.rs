//! REST helpers for the verification API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since uploads and liveness polling are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(feature = "hydrate")]
use crate::net::disposition::recover_filename;
#[cfg(feature = "hydrate")]
use crate::net::error::UploadError;
#[cfg(feature = "hydrate")]
use crate::net::types::{VerificationResponse, error_detail};
#[cfg(feature = "hydrate")]
use crate::state::upload::{ResponseKind, UploadConfig, UploadOutcome};

/// Target API configuration, provided as a context value at the app root.
///
/// The base URL is injected at build time through `API_BASE_URL`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("API_BASE_URL")
                .unwrap_or("http://localhost:8000/api")
                .to_owned(),
        }
    }
}

impl ApiConfig {
    /// Join `path` onto the base URL without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// POST `file` as the single `file` field of a multipart body and interpret
/// the response according to the widget's [`ResponseKind`].
///
/// # Errors
///
/// [`UploadError`] covering network failures, non-2xx responses (with the
/// body's `detail` when decodable), and 2xx payloads missing the expected
/// content.
#[cfg(feature = "hydrate")]
pub async fn upload_file(
    url: &str,
    config: &UploadConfig,
    file: &web_sys::File,
) -> Result<UploadOutcome, UploadError> {
    use gloo_net::http::Request;

    let form = web_sys::FormData::new()
        .map_err(|_| UploadError::NetworkFailure("could not build the request body".to_owned()))?;
    form.append_with_blob("file", file)
        .map_err(|_| UploadError::NetworkFailure("could not attach the file".to_owned()))?;

    let response = Request::post(url)
        .body(form)
        .map_err(|e| UploadError::NetworkFailure(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::NetworkFailure(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let detail = response
            .text()
            .await
            .ok()
            .and_then(|body| error_detail(&body))
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        return Err(UploadError::ServerError { status, detail });
    }

    match config.response_kind {
        ResponseKind::Fields => {
            let parsed: VerificationResponse = response.json().await.map_err(|_| {
                UploadError::MalformedResponse("No valid data received from the server".to_owned())
            })?;
            if !parsed.has_usable_data() {
                return Err(UploadError::MalformedResponse(
                    "No valid data received from the server".to_owned(),
                ));
            }
            Ok(UploadOutcome::Fields(parsed))
        }
        ResponseKind::Download => {
            let filename = recover_filename(
                response.headers().get("content-disposition").as_deref(),
                config.default_filename,
            );
            let bytes = response.binary().await.map_err(|_| {
                UploadError::MalformedResponse("Unreadable document in response".to_owned())
            })?;
            if bytes.is_empty() {
                return Err(UploadError::MalformedResponse(
                    "Server returned an empty document".to_owned(),
                ));
            }
            Ok(UploadOutcome::Download { filename, bytes })
        }
    }
}

/// GET `<base>/status` and return the reported status string.
///
/// Returns `None` on any failure so the poll boundary never throws; a 200
/// without a parseable `status` field reads as `Unknown`.
pub async fn fetch_status(base_url: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/status", base_url.trim_end_matches('/'));
        let response = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !response.ok() {
            return None;
        }
        let body: serde_json::Value = response.json().await.ok()?;
        Some(
            body.get("status")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("Unknown")
                .to_owned(),
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base_url;
        None
    }
}
