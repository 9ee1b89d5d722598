//! Hiring Extractor page.

use leptos::prelude::*;

use crate::components::upload_widget::UploadWidget;
use crate::state::upload::{ResponseKind, UploadConfig};

const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Accepts hiring paperwork (PDF, JPEG, or PNG) for field extraction.
pub const EXTRACTOR_CONFIG: UploadConfig = UploadConfig {
    endpoint_path: "extract-hiring",
    accepted: &["application/pdf", "image/jpeg", "image/png"],
    accepted_hint: "PDF, JPEG, or PNG files, up to 10 MB",
    max_bytes: MAX_UPLOAD_BYTES,
    response_kind: ResponseKind::Fields,
    subject: "document",
    ready_message: "Ready to extract hiring document",
    default_filename: "document",
};

#[component]
pub fn ExtractorPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Hiring Extractor"</h1>
            <p class="page__blurb">
                "Upload hiring paperwork to extract applicant details for review."
            </p>
            <UploadWidget config=EXTRACTOR_CONFIG/>
        </div>
    }
}
