//! Floating status widget: recent notifications plus backend liveness.
//!
//! The widget owns the liveness poll loop. The loop is keyed to a signal
//! created inside the component, so unmounting the widget disposes the
//! signal and the loop winds down on its next tick instead of polling
//! forever.

use leptos::prelude::*;

use crate::net::api::ApiConfig;
use crate::state::status::{LivenessStatus, StatusLogState};

#[cfg(feature = "hydrate")]
use crate::state::status::POLL_INTERVAL;

/// Collapsible status panel anchored to the corner of the viewport.
#[component]
pub fn StatusBox() -> impl IntoView {
    let log = expect_context::<RwSignal<StatusLogState>>();
    let api = expect_context::<ApiConfig>();
    let expanded = RwSignal::new(false);

    // Dropped when the component unmounts; the poll loop checks it each
    // tick and exits once it is gone.
    let alive = RwSignal::new(());

    #[cfg(feature = "hydrate")]
    {
        let base_url = api.base_url.clone();
        leptos::task::spawn_local(async move {
            loop {
                let result = crate::net::api::fetch_status(&base_url).await;
                if alive.try_get_untracked().is_none() {
                    break;
                }
                log.update(|l| l.apply_poll(result));
                gloo_timers::future::sleep(POLL_INTERVAL).await;
                if alive.try_get_untracked().is_none() {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&api, &alive);
    }

    let indicator_class = move || {
        log.with(|l| match l.liveness() {
            _ if l.liveness().is_ok() => "status-box__indicator status-box__indicator--ok",
            LivenessStatus::Checking => "status-box__indicator status-box__indicator--checking",
            LivenessStatus::Unreachable => "status-box__indicator status-box__indicator--error",
            LivenessStatus::Reported(_) => "status-box__indicator status-box__indicator--degraded",
        })
    };

    let liveness_label = move || log.with(|l| format!("API: {}", l.liveness().label()));

    let toggle_label = move || if expanded.get() { "Hide" } else { "Show" };

    let messages = move || {
        log.with(|l| {
            l.messages()
                .iter()
                .map(|message| {
                    let row_class =
                        format!("status-box__message {}", message.severity.css_class());
                    view! {
                        <li class=row_class>
                            <span class="status-box__message-text">{message.text.clone()}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let has_messages = move || log.with(|l| !l.messages().is_empty());

    view! {
        <aside class="status-box">
            <header class="status-box__header">
                <span class=indicator_class></span>
                <span class="status-box__liveness">{liveness_label}</span>
                <button
                    class="btn status-box__toggle"
                    on:click=move |_| expanded.update(|v| *v = !*v)
                >
                    {toggle_label}
                </button>
            </header>
            <Show when=move || expanded.get()>
                <div class="status-box__body">
                    <Show
                        when=has_messages
                        fallback=|| view! { <p class="status-box__empty">"No recent activity"</p> }
                    >
                        <ul class="status-box__messages">{messages}</ul>
                        <button
                            class="btn status-box__clear"
                            on:click=move |_| log.update(StatusLogState::clear)
                        >
                            "Clear"
                        </button>
                    </Show>
                </div>
            </Show>
        </aside>
    }
}
