use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top navigation bar shared by both pages. Plain anchors on purpose: the
/// dashboard→index handoff relies on a full page navigation.
#[component]
pub fn TopNav() -> impl IntoView {
    view! {
        <header class="top-nav">
            <div class="top-nav__brand">
                {icon("orders")}
                <span>"Smart Order Tracker"</span>
            </div>
            <nav class="top-nav__links">
                <a class="top-nav__link" href="/">"Orders"</a>
                <a class="top-nav__link" href="/dashboard">"Dashboard"</a>
            </nav>
        </header>
    }
}
