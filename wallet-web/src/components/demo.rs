//! Connection prompt, theme toggle and the widget mount point

use leptos::prelude::*;
use lib_core::presentation::{ThemeMode, View, WidgetBoundary, CONNECT_INTRO};

use crate::services::widget::JsWidgetBoundary;
use crate::state::wallet::use_demo_context;
use crate::utils::constants::WIDGET_CONTAINER_ID;

/// Prompt while disconnected, widget once a signer exists.
#[component]
pub fn DemoView() -> impl IntoView {
    let ctx = use_demo_context();

    view! {
        <Show
            when=move || ctx.view.with(View::is_widget)
            fallback=|| view! { <ConnectPrompt/> }
        >
            <TransactionBuilder/>
        </Show>
    }
}

#[component]
pub fn ConnectPrompt() -> impl IntoView {
    let ctx = use_demo_context();

    // Actions are fixed per page, so the prompt is built once
    let (intro, actions) = ctx.view.with_untracked(|view| match view {
        View::ConnectPrompt { intro, actions } => (*intro, actions.clone()),
        View::Widget(_) => (CONNECT_INTRO, Vec::new()),
    });

    view! {
        <div class="card">
            <p class="subtitle">{intro}</p>
            <div class="connect-actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        view! {
                            <button class="btn" on:click=move |_| ctx.trigger(action)>
                                {action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_demo_context();

    let label = move || match ctx.theme.get() {
        ThemeMode::Default => "Use custom theme",
        ThemeMode::Override => "Use default theme",
    };

    view! {
        <button class="btn btn-secondary" on:click=move |_| ctx.toggle_theme()>
            {label}
        </button>
    }
}

/// Mount point for the embedded transaction builder.
///
/// Remounts with fresh props on every render while connected.
#[component]
pub fn TransactionBuilder() -> impl IntoView {
    let ctx = use_demo_context();
    let boundary = JsWidgetBoundary::new(WIDGET_CONTAINER_ID, ctx.root().client());

    Effect::new(move || {
        ctx.view.with(|view| {
            if let Some(props) = view.widget_props() {
                boundary.mount(props);
            }
        });
    });

    view! { <div id=WIDGET_CONTAINER_ID class="widget-container"></div> }
}
