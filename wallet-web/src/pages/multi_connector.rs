//! Multi-connector demo: the widget reads the ambient chain client instead of
//! receiving a signer.

use leptos::prelude::*;
use lib_core::presentation::{PresentationRoot, RootOptions};

use crate::components::{DemoView, ThemeToggle};
use crate::state::wallet::{provide_demo_context, use_chain_context};

#[component]
pub fn MultiConnectorPage() -> impl IntoView {
    let Some(client) = use_chain_context().client() else {
        return view! {
            <div class="container">
                <div class="card error">
                    "Chain client is not configured. Check CHAIN_ID and rebuild."
                </div>
            </div>
        }
        .into_any();
    };

    let root = PresentationRoot::multi_connector(RootOptions::default(), client.clone());
    let ctx = provide_demo_context(root);

    let resume = ctx.root();
    leptos::task::spawn_local(async move {
        resume.resume_session().await;
    });

    // Query the transport once so a dead configuration shows up in the log
    let (block, set_block) = signal(None::<u64>);
    leptos::task::spawn_local(async move {
        match client.transport().block_number().await {
            Ok(number) => set_block.set(Some(number)),
            Err(e) => log::warn!("Block number unavailable on every transport: {}", e),
        }
    });

    view! {
        <div class="container">
            <div class="page-header">
                <h1>"Multi-connector"</h1>
                <ThemeToggle/>
            </div>
            <p class="info">
                {move || block.get().map(|number| format!("Latest block: {number}"))}
            </p>
            <DemoView/>
        </div>
    }
    .into_any()
}
