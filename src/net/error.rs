//! Failure taxonomy for the upload request path.
//!
//! All variants collapse into the widget's `Failed` phase with a display
//! string; the `Display` impl is the string the user sees.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// The file failed the MIME/size filter before any request was made.
    #[error("{0}")]
    ValidationRejected(String),

    /// The request could not complete (DNS, refused connection, CORS, ...).
    #[error("Failed to reach the server: {0}")]
    NetworkFailure(String),

    /// Non-2xx response; `detail` is taken from the body when decodable.
    #[error("{detail}")]
    ServerError { status: u16, detail: String },

    /// 2xx response whose payload was missing the expected content.
    #[error("{0}")]
    MalformedResponse(String),
}
