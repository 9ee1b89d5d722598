//! Resume Converter page.

use leptos::prelude::*;

use crate::components::upload_widget::UploadWidget;
use crate::state::upload::{ResponseKind, UploadConfig};

const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Accepts candidate resumes and returns a converted document download.
pub const CONVERTER_CONFIG: UploadConfig = UploadConfig {
    endpoint_path: "convert-resume",
    accepted: &[
        "application/pdf",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "application/msword",
        "text/plain",
    ],
    accepted_hint: "PDF, DOCX, DOC, or TXT files, up to 10 MB",
    max_bytes: MAX_UPLOAD_BYTES,
    response_kind: ResponseKind::Download,
    subject: "resume",
    ready_message: "Ready to convert candidate resume",
    default_filename: "converted-resume.docx",
};

#[component]
pub fn ConverterPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Resume Converter"</h1>
            <p class="page__blurb">
                "Upload a candidate resume to convert it into the standard template."
            </p>
            <UploadWidget config=CONVERTER_CONFIG/>
        </div>
    }
}
