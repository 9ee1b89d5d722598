//! Rendering of successful upload results.
//!
//! [`FieldsCard`] shows the parsed verification fields from a JSON
//! response; [`DownloadCard`] offers a converted document as a file
//! download.

use leptos::prelude::*;

use crate::net::types::VerificationResponse;
use crate::state::status::{Severity, StatusLogState};
use crate::util::download::save_bytes;
use crate::util::file_size::format_size;

/// Banner, detail grid, and collapsible prompt/raw-JSON sections for a
/// JSON-fields response.
#[component]
pub fn FieldsCard(response: VerificationResponse) -> impl IntoView {
    let show_prompt = RwSignal::new(false);
    let show_raw = RwSignal::new(false);

    let banner_class = if response.success {
        "result-card__banner result-card__banner--success"
    } else {
        "result-card__banner result-card__banner--warning"
    };
    let banner_text = if response.success {
        "Document Processed Successfully"
    } else {
        "Document Processing Issues"
    };
    let validity_reason = response
        .validity_reason()
        .map(|reason| serde_json::to_string_pretty(reason).unwrap_or_default());

    let applicant = response
        .ai_response
        .as_ref()
        .and_then(|a| a.applicant_name.clone())
        .unwrap_or_else(|| "N/A".to_owned());
    let language = response
        .ai_response
        .as_ref()
        .and_then(|a| a.document_lang.clone())
        .unwrap_or_else(|| "N/A".to_owned());
    let details: Vec<(String, String)> = response
        .ai_response
        .as_ref()
        .map(|a| {
            a.document_details
                .iter()
                .map(|(key, value)| (key.replace('_', " "), render_value(value)))
                .collect()
        })
        .unwrap_or_default();

    let prompt_paragraphs: Option<Vec<String>> = response
        .prompt
        .as_ref()
        .map(|prompt| prompt.split("\n\n").map(ToOwned::to_owned).collect());

    let raw_json = response
        .ai_response
        .as_ref()
        .map(|a| serde_json::to_string_pretty(a).unwrap_or_default())
        .unwrap_or_default();

    view! {
        <div class="result-card">
            <div class=banner_class>
                <p class="result-card__banner-title">{banner_text}</p>
                {validity_reason
                    .map(|reason| view! { <pre class="result-card__reason">{reason}</pre> })}
            </div>

            <div class="result-card__details">
                <h3 class="result-card__heading">"Document Details"</h3>
                <dl class="result-card__grid">
                    <dt>"Applicant Name"</dt>
                    <dd>{applicant}</dd>
                    <dt>"Detected Language"</dt>
                    <dd>{language}</dd>
                    {details
                        .into_iter()
                        .map(|(key, value)| {
                            view! {
                                <dt class="result-card__detail-key">{key}</dt>
                                <dd class="result-card__detail-value">{value}</dd>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
            </div>

            {prompt_paragraphs
                .map(|paragraphs| {
                    view! {
                        <div class="result-card__prompt">
                            <button
                                class="btn result-card__toggle"
                                on:click=move |_| show_prompt.update(|v| *v = !*v)
                            >
                                {move || {
                                    if show_prompt.get() { "Hide Prompt Data" } else { "Show Prompt Data" }
                                }}
                            </button>
                            <Show when=move || show_prompt.get()>
                                <div class="result-card__prompt-body">
                                    {paragraphs
                                        .iter()
                                        .map(|paragraph| {
                                            view! {
                                                <p class="result-card__prompt-para">{paragraph.clone()}</p>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </Show>
                        </div>
                    }
                })}

            <button class="btn result-card__toggle" on:click=move |_| show_raw.update(|v| *v = !*v)>
                {move || {
                    if show_raw.get() { "Hide Raw JSON Response" } else { "Show Raw JSON Response" }
                }}
            </button>
            <Show when=move || show_raw.get()>
                <pre class="result-card__raw">{raw_json.clone()}</pre>
            </Show>
        </div>
    }
}

/// Filename, size, and a download button for a binary conversion result.
#[component]
pub fn DownloadCard(filename: String, bytes: Vec<u8>) -> impl IntoView {
    let log = expect_context::<RwSignal<StatusLogState>>();
    let size = format_size(bytes.len() as u64);
    let download_name = filename.clone();

    let on_download = move |_| {
        if let Err(err) = save_bytes(&download_name, &bytes) {
            leptos::logging::warn!("download failed: {err}");
            log.update(|l| {
                l.report(format!("Error: {err}"), Severity::Error);
            });
        }
    };

    view! {
        <div class="result-card result-card--download">
            <div class="result-card__banner result-card__banner--success">
                <p class="result-card__banner-title">"Conversion Complete"</p>
            </div>
            <div class="result-card__download-row">
                <span class="result-card__file-name">{filename}</span>
                <span class="result-card__file-size">{size}</span>
                <button class="btn btn--primary result-card__download" on:click=on_download>
                    "Download"
                </button>
            </div>
        </div>
    }
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}
