//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::components::status_box::StatusBox;
use crate::net::api::ApiConfig;
use crate::pages::{converter::ConverterPage, extractor::ExtractorPage, verifier::VerifierPage};
use crate::state::status::StatusLogState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared status log and API configuration contexts and sets
/// up client-side routing for the three tools.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let status_log = RwSignal::new(StatusLogState::default());
    provide_context(status_log);
    provide_context(ApiConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/ivp-client.css"/>
        <Title text="Immigration Verification Platform"/>

        <Router>
            <div class="app">
                <Sidebar/>
                <main class="app__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=VerifierPage/>
                        <Route path=StaticSegment("hiring-extractor") view=ExtractorPage/>
                        <Route path=StaticSegment("resume-converter") view=ConverterPage/>
                    </Routes>
                </main>
                <StatusBox/>
            </div>
        </Router>
    }
}
