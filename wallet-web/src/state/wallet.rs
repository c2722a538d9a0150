//! Wallet state management
//!
//! Bridges the core presentation root into Leptos signals: the root's render
//! observer writes the current [`View`] into a local signal the page reads.

use std::rc::Rc;

use leptos::prelude::*;
use lib_core::chain::{ChainClient, ChainConfiguration};
use lib_core::presentation::{ConnectAction, PresentationRoot, ThemeMode, View};

use crate::services::connectors::connectors_for;
use crate::utils::constants::app_config;

/// Process-wide chain client for the multi-connector demo
#[derive(Clone, Copy)]
pub struct ChainContext {
    client: StoredValue<Option<Rc<ChainClient>>, LocalStorage>,
}

impl ChainContext {
    pub fn client(&self) -> Option<Rc<ChainClient>> {
        self.client.get_value()
    }
}

fn build_client() -> lib_core::Result<ChainClient> {
    let config = app_config();
    config.validate()?;

    let configuration = ChainConfiguration::from_config(&config)?;
    let connectors = connectors_for(&configuration);
    ChainClient::new(configuration, connectors)
}

pub fn provide_chain_context() -> ChainContext {
    let client = match build_client() {
        Ok(client) => Some(Rc::new(client)),
        Err(e) => {
            log::error!("Chain client not available: {}", e);
            None
        }
    };

    let context = ChainContext {
        client: StoredValue::new_local(client),
    };
    provide_context(context);
    context
}

pub fn use_chain_context() -> ChainContext {
    expect_context::<ChainContext>()
}

/// Per-page demo state
#[derive(Clone, Copy)]
pub struct DemoContext {
    root: StoredValue<PresentationRoot, LocalStorage>,
    pub view: RwSignal<View, LocalStorage>,
    pub theme: RwSignal<ThemeMode>,
}

impl DemoContext {
    pub fn new(root: PresentationRoot) -> Self {
        root.mount();

        let view = RwSignal::new_local(root.render());
        root.on_render(move |next| {
            if view.try_set(next.clone()).is_some() {
                log::debug!("View signal disposed, render dropped");
            }
        });

        Self {
            theme: RwSignal::new(root.theme_mode()),
            root: StoredValue::new_local(root),
            view,
        }
    }

    pub fn root(&self) -> PresentationRoot {
        self.root.get_value()
    }

    pub fn trigger(&self, action: ConnectAction) {
        let root = self.root();
        leptos::task::spawn_local(async move {
            root.trigger(action).await;
        });
    }

    pub fn toggle_theme(&self) {
        let root = self.root();
        root.toggle_theme();
        self.theme.set(root.theme_mode());
    }
}

pub fn provide_demo_context(root: PresentationRoot) -> DemoContext {
    let context = DemoContext::new(root);
    provide_context(context);
    context
}

pub fn use_demo_context() -> DemoContext {
    expect_context::<DemoContext>()
}
