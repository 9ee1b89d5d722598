//! Serde types for the verification API's JSON responses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level body returned by the verifier and extractor endpoints.
///
/// Every field is optional-with-default: the backend omits fields freely
/// and the UI degrades rather than failing to deserialize.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub is_valid: Option<bool>,
    #[serde(default)]
    pub validity_reason: Option<serde_json::Value>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub ai_response: Option<AiResponse>,
}

/// Extracted document fields nested under `ai_response`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub document_lang: Option<String>,
    #[serde(default)]
    pub has_english_translation: Option<bool>,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub document_details: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub is_valid: Option<bool>,
    #[serde(default)]
    pub validity_reason: Option<serde_json::Value>,
}

impl AiResponse {
    /// True when the backend sent no usable extracted fields at all.
    pub fn is_empty(&self) -> bool {
        self.document_type.is_none()
            && self.document_lang.is_none()
            && self.has_english_translation.is_none()
            && self.applicant_name.is_none()
            && self.document_details.is_empty()
            && self.is_valid.is_none()
            && self.validity_reason.is_none()
    }
}

impl VerificationResponse {
    /// A 2xx body still counts as malformed when it carries neither a
    /// success flag nor any extracted fields.
    pub fn has_usable_data(&self) -> bool {
        self.success || self.ai_response.as_ref().is_some_and(|a| !a.is_empty())
    }

    /// One-line summary for the status log, derived from response fields.
    pub fn summary_line(&self) -> String {
        let document_type = self
            .ai_response
            .as_ref()
            .and_then(|a| a.document_type.as_deref())
            .unwrap_or("document");

        if self.success {
            let applicant = self
                .ai_response
                .as_ref()
                .and_then(|a| a.applicant_name.as_deref())
                .unwrap_or("applicant");
            format!("Successfully processed {document_type} for {applicant}")
        } else {
            format!("Warning: {document_type} processing issues")
        }
    }

    /// The reason string/object to surface in the result banner, preferring
    /// the top-level field over the nested one.
    pub fn validity_reason(&self) -> Option<&serde_json::Value> {
        self.validity_reason
            .as_ref()
            .or_else(|| self.ai_response.as_ref().and_then(|a| a.validity_reason.as_ref()))
    }
}

/// Best-effort extraction of a human-readable error from a response body.
///
/// Error bodies carry a `detail` field (FastAPI style) or, in older
/// backends, `error`; any other shape yields `None`.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .or_else(|| value.get("error").and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}
