//! Per-widget upload lifecycle state machine.
//!
//! DESIGN
//! ======
//! `Idle --accept--> Uploading --settle--> Succeeded | Failed --remove--> Idle`.
//! `Uploading` is never skipped. Settles carry the token handed out by
//! [`UploadState::begin_upload`]; a token that no longer matches the current
//! generation (the user removed the file, or a new upload started) is
//! discarded, so a late response can never clobber fresh state.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::error::UploadError;
use crate::net::types::VerificationResponse;
use crate::util::file_size::format_size;

/// Discrete state of a widget's current upload attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

/// Metadata of the chosen file, captured from the browser `File` handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// How a widget interprets a 2xx response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    /// JSON document with extracted/validated fields.
    Fields,
    /// Binary document download named via `Content-Disposition`.
    Download,
}

/// Structured result of a successful upload.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    Fields(VerificationResponse),
    Download { filename: String, bytes: Vec<u8> },
}

/// Static configuration distinguishing the three upload tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    /// Path under the API base URL, e.g. `upload`.
    pub endpoint_path: &'static str,
    /// Accepted MIME patterns; a trailing `/*` matches any subtype.
    pub accepted: &'static [&'static str],
    /// Human-readable version of `accepted` for the dropzone hint.
    pub accepted_hint: &'static str,
    pub max_bytes: u64,
    pub response_kind: ResponseKind,
    /// Noun used in progress copy, e.g. "Processing your resume...".
    pub subject: &'static str,
    /// Status-log line emitted when the user removes the file.
    pub ready_message: &'static str,
    /// Fallback name when a download response has no parseable filename.
    pub default_filename: &'static str,
}

impl UploadConfig {
    /// Validate a candidate file against the MIME/size filter.
    ///
    /// # Errors
    ///
    /// `UploadError::ValidationRejected` with a user-facing explanation.
    pub fn check(&self, file: &SelectedFile) -> Result<(), UploadError> {
        if !self.accepted.iter().any(|pattern| mime_matches(pattern, &file.mime)) {
            let shown = if file.mime.is_empty() { "unknown" } else { &file.mime };
            return Err(UploadError::ValidationRejected(format!(
                "{}: unsupported file type ({shown})",
                file.name
            )));
        }
        if file.size > self.max_bytes {
            return Err(UploadError::ValidationRejected(format!(
                "{}: file exceeds the {} limit",
                file.name,
                format_size(self.max_bytes)
            )));
        }
        Ok(())
    }
}

/// Case-insensitive MIME match supporting `type/*` patterns.
pub fn mime_matches(pattern: &str, mime: &str) -> bool {
    let mime = mime.to_ascii_lowercase();
    let pattern = pattern.to_ascii_lowercase();
    match pattern.strip_suffix("/*") {
        Some(prefix) => mime
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/')),
        None => mime == pattern,
    }
}

/// Opaque handle tying an in-flight request to the state that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadToken(u64);

/// State for one upload widget instance.
///
/// Invariant: exactly one of `outcome`/`error` is present in a terminal
/// phase; both are absent while `Idle` or `Uploading`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub file: Option<SelectedFile>,
    pub phase: UploadPhase,
    pub outcome: Option<UploadOutcome>,
    pub error: Option<String>,
    generation: u64,
}

impl UploadState {
    /// Accept a validated file and enter `Uploading`.
    ///
    /// Returns the token the eventual settle must present.
    pub fn begin_upload(&mut self, file: SelectedFile) -> UploadToken {
        self.generation += 1;
        self.file = Some(file);
        self.phase = UploadPhase::Uploading;
        self.outcome = None;
        self.error = None;
        UploadToken(self.generation)
    }

    /// Settle the current upload successfully.
    ///
    /// Returns `false` (discarding `outcome`) when the token is stale or
    /// the widget is not uploading.
    pub fn finish_success(&mut self, token: UploadToken, outcome: UploadOutcome) -> bool {
        if !self.settles(token) {
            return false;
        }
        self.phase = UploadPhase::Succeeded;
        self.outcome = Some(outcome);
        true
    }

    /// Settle the current upload with a failure message.
    pub fn finish_failure(&mut self, token: UploadToken, message: String) -> bool {
        if !self.settles(token) {
            return false;
        }
        self.phase = UploadPhase::Failed;
        self.error = Some(message);
        true
    }

    /// Record a validation rejection without ever entering `Uploading`.
    pub fn reject(&mut self, message: String) {
        self.generation += 1;
        self.file = None;
        self.phase = UploadPhase::Failed;
        self.outcome = None;
        self.error = Some(message);
    }

    /// Reset to `Idle`, clearing all derived state. Any in-flight request
    /// keeps running but its settle will no longer apply.
    pub fn remove(&mut self) {
        self.generation += 1;
        self.file = None;
        self.phase = UploadPhase::Idle;
        self.outcome = None;
        self.error = None;
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    fn settles(&self, token: UploadToken) -> bool {
        token.0 == self.generation && self.phase == UploadPhase::Uploading
    }
}
