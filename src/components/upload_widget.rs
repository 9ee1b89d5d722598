//! The parametric upload widget shared by all three tools.
//!
//! Drag/drop or click-to-select a single file, submit it as a multipart
//! POST, and render the parsed fields or the download artifact. Each
//! instance owns its own [`UploadState`]; completion, removal, and
//! validation rejections are reported to the shared status log.

use leptos::prelude::*;

use crate::components::result_card::{DownloadCard, FieldsCard};
use crate::net::api::ApiConfig;
use crate::state::status::{Severity, StatusLogState};
use crate::state::upload::{UploadConfig, UploadOutcome, UploadPhase, UploadState};
use crate::util::file_size::format_size;

/// One upload tool instance, configured by an [`UploadConfig`].
#[component]
pub fn UploadWidget(config: UploadConfig) -> impl IntoView {
    let log = expect_context::<RwSignal<StatusLogState>>();
    let api = expect_context::<ApiConfig>();
    let state = RwSignal::new(UploadState::default());
    let drag_active = RwSignal::new(false);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let endpoint = api.endpoint(config.endpoint_path);
    let endpoint_for_drop = endpoint.clone();
    let endpoint_for_change = endpoint;

    let on_remove = move |_| {
        state.update(|s| s.remove());
        log.update(|l| {
            l.report(config.ready_message, Severity::Info);
        });
    };

    let open_picker = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(true);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                accept_file(state, log, config, endpoint_for_drop.clone(), file);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &endpoint_for_drop;
        }
    };

    let on_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_input_ref.get() {
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    accept_file(state, log, config, endpoint_for_change.clone(), file);
                }
                // Allow re-selecting the same file after a remove.
                input.set_value("");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &endpoint_for_change;
        }
    };

    let dropzone_class = move || {
        if drag_active.get() {
            "upload-widget__dropzone upload-widget__dropzone--active"
        } else {
            "upload-widget__dropzone"
        }
    };

    let headline = move || {
        if drag_active.get() {
            "Drop the file here..."
        } else {
            "Drag & drop a file here, or click to select"
        }
    };

    let body = move || {
        let current = state.get();
        match current.phase {
            UploadPhase::Idle => ().into_any(),
            UploadPhase::Uploading => view! {
                <div class="upload-widget__progress">
                    <span class="upload-widget__spinner"></span>
                    <span>{format!("Processing your {}...", config.subject)}</span>
                </div>
            }
            .into_any(),
            UploadPhase::Failed => view! {
                <div class="upload-widget__alert upload-widget__alert--error">
                    {current.error.unwrap_or_default()}
                </div>
            }
            .into_any(),
            UploadPhase::Succeeded => match current.outcome {
                Some(UploadOutcome::Fields(response)) => {
                    view! { <FieldsCard response=response/> }.into_any()
                }
                Some(UploadOutcome::Download { filename, bytes }) => {
                    view! { <DownloadCard filename=filename bytes=bytes/> }.into_any()
                }
                None => ().into_any(),
            },
        }
    };

    view! {
        <section class="upload-widget">
            <Show when=move || state.get().file.is_none()>
                <div
                    class=dropzone_class
                    on:click=open_picker
                    on:dragover=on_drag_over
                    on:dragleave=move |_| drag_active.set(false)
                    on:drop=on_drop.clone()
                >
                    <p class="upload-widget__headline">{headline}</p>
                    <p class="upload-widget__hint">{config.accepted_hint}</p>
                </div>
            </Show>

            {move || {
                state
                    .get()
                    .file
                    .map(|file| {
                        let size = format_size(file.size);
                        view! {
                            <div class="upload-widget__file">
                                <span class="upload-widget__file-name">{file.name}</span>
                                <span class="upload-widget__file-size">{size}</span>
                                <button class="btn upload-widget__remove" on:click=on_remove>
                                    "Remove"
                                </button>
                            </div>
                        }
                    })
            }}

            <input
                class="upload-widget__input"
                style="display: none"
                type="file"
                accept=config.accepted.join(",")
                node_ref=file_input_ref
                on:change=on_change
            />

            {body}
        </section>
    }
}

/// Validate the chosen file, then run the upload to settlement.
///
/// The token from `begin_upload` guards the settle: if the user removes
/// the file (or the widget is gone) before the response lands, the late
/// settle is discarded and nothing is reported.
#[cfg(feature = "hydrate")]
fn accept_file(
    state: RwSignal<UploadState>,
    log: RwSignal<StatusLogState>,
    config: UploadConfig,
    endpoint: String,
    file: web_sys::File,
) {
    use crate::state::upload::SelectedFile;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let selected = SelectedFile {
        name: file.name(),
        size: file.size() as u64,
        mime: file.type_(),
    };

    if let Err(rejection) = config.check(&selected) {
        let message = rejection.to_string();
        leptos::logging::warn!("file rejected: {message}");
        state.update(|s| s.reject(message.clone()));
        log.update(|l| {
            l.report(message, Severity::Warning);
        });
        return;
    }

    let name = selected.name.clone();
    let mut started = None;
    state.update(|s| started = Some(s.begin_upload(selected)));
    let Some(token) = started else {
        return;
    };
    log.update(|l| {
        l.report(format!("Uploading {name}..."), Severity::Info);
    });

    leptos::task::spawn_local(async move {
        match crate::net::api::upload_file(&endpoint, &config, &file).await {
            Ok(outcome) => {
                let (summary, severity) = match &outcome {
                    UploadOutcome::Fields(response) => (
                        response.summary_line(),
                        if response.success {
                            Severity::Success
                        } else {
                            Severity::Warning
                        },
                    ),
                    UploadOutcome::Download { filename, .. } => (
                        format!("Converted document ready: {filename}"),
                        Severity::Success,
                    ),
                };
                let mut applied = false;
                state.update(|s| applied = s.finish_success(token, outcome));
                if applied {
                    log.update(|l| {
                        l.report(summary, severity);
                    });
                }
            }
            Err(err) => {
                let message = err.to_string();
                leptos::logging::warn!("upload failed: {message}");
                let mut applied = false;
                state.update(|s| applied = s.finish_failure(token, message.clone()));
                if applied {
                    log.update(|l| {
                        l.report(format!("Error: {message}"), Severity::Error);
                    });
                }
            }
        }
    });
}
