//! Navigation sidebar listing the three upload tools.

use leptos::prelude::*;

/// Fixed sidebar with links to each tool page.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Immigration Verification Platform"</div>
            <a class="sidebar__link" href="/">
                "Document Verifier"
            </a>
            <a class="sidebar__link" href="/hiring-extractor">
                "Hiring Extractor"
            </a>
            <a class="sidebar__link" href="/resume-converter">
                "Resume Converter"
            </a>
        </nav>
    }
}
