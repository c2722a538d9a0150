//! Direct demo: the page owns the wallet connection and hands the signer to
//! the widget explicitly.

use leptos::prelude::*;
use lib_core::presentation::{PresentationRoot, RootOptions};

use crate::components::{DemoView, ThemeToggle};
use crate::services::wallet::OnboardSelector;
use crate::state::wallet::provide_demo_context;
use crate::utils::constants::app_config;

#[component]
pub fn DirectDemoPage() -> impl IntoView {
    let network_id = app_config().chain_id;
    let root = PresentationRoot::direct(RootOptions::default(), move |callback| {
        OnboardSelector::new(network_id, callback)
    });
    provide_demo_context(root);

    view! {
        <div class="container">
            <div class="page-header">
                <h1>"Direct connection"</h1>
                <ThemeToggle/>
            </div>
            <DemoView/>
        </div>
    }
}
