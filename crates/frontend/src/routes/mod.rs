use crate::dashboards::spend::SpendDashboard;
use crate::domain::orders::ui::OrdersPage;
use crate::layout::TopNav;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Two pages: the orders index at `/` and the spend dashboard at
/// `/dashboard`. The session-storage bridge hands state across the
/// navigation between them.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <TopNav />
            <main class="app__main">
                <Routes fallback=|| view! { <p class="app__not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=OrdersPage />
                    <Route path=path!("/dashboard") view=SpendDashboard />
                </Routes>
            </main>
        </Router>
    }
}
