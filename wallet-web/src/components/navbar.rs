//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; gap: 24px; align-items: center;">
                <span class="nav-title">"Transaction Builder Demo"</span>
                <A href="/" attr:class="nav-link-clean">"Direct"</A>
                <A href="/multi-connector" attr:class="nav-link-clean">"Multi-connector"</A>
            </div>
        </nav>
    }
}
