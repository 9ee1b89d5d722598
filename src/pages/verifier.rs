//! Document Verifier page.

use leptos::prelude::*;

use crate::components::upload_widget::UploadWidget;
use crate::state::upload::{ResponseKind, UploadConfig};

const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Accepts immigration documents (PDF or any image) for AI verification.
pub const VERIFIER_CONFIG: UploadConfig = UploadConfig {
    endpoint_path: "upload",
    accepted: &["application/pdf", "image/*"],
    accepted_hint: "PDF or image files, up to 10 MB",
    max_bytes: MAX_UPLOAD_BYTES,
    response_kind: ResponseKind::Fields,
    subject: "document",
    ready_message: "Ready to verify immigration document",
    default_filename: "document",
};

#[component]
pub fn VerifierPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Document Verifier"</h1>
            <p class="page__blurb">
                "Upload an immigration document to verify its contents and extract key fields."
            </p>
            <UploadWidget config=VERIFIER_CONFIG/>
        </div>
    }
}
