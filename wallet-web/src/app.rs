//! Router and process-wide contexts

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{DirectDemoPage, MultiConnectorPage};
use crate::state::wallet::provide_chain_context;

#[component]
pub fn App() -> impl IntoView {
    // The multi-connector client is built once and outlives page navigation
    provide_chain_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=DirectDemoPage/>
                    <Route path=path!("/multi-connector") view=MultiConnectorPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card" style="max-width: 500px; margin: 48px auto; text-align: center;">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn">"Go to Home"</span>
            </A>
        </div>
    }
}
