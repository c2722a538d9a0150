//! # Presentation Root
//!
//! Turns the connection state into what the page shows: a connection prompt, or
//! the embedded widget with its configuration.
//!
//! ## Views
//!
//! | Connection state | View                                                        |
//! |------------------|-------------------------------------------------------------|
//! | `Disconnected`   | [`View::ConnectPrompt`] with one action per connection path |
//! | `Connected`      | [`View::Widget`] with [`WidgetProps`]                        |
//!
//! The root only asks whether a signer is present. The signer itself is passed
//! through untouched, whichever path produced it.
//!
//! ## Variants
//!
//! - **Direct** ([`PresentationRoot::direct`]): owns its store and a
//!   [`WalletConnector`]; offers the external-wallet and random-key actions and
//!   passes the signer to the widget explicitly.
//! - **Multi-connector** ([`PresentationRoot::multi_connector`]): observes the
//!   [`ChainClient`]'s ambient store; offers one action per connector and passes
//!   the client's chain id instead of a signer.
//!
//! ## Re-rendering
//!
//! [`PresentationRoot::mount`] subscribes to the store. Every state write and
//! every theme toggle re-renders and calls each observer registered with
//! [`PresentationRoot::on_render`]. Dropping the last handle unsubscribes.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use shared::dto::theme::ThemeOverride;
use shared::dto::widget::{TransactionBlock, TransactionBlockType, WidgetConfig};

use crate::adapter::{ProviderCallback, WalletConnector, WalletSelector};
use crate::chain::{ChainClient, ConnectorKind};
use crate::signer::ActiveSigner;
use crate::state::{ConnectionState, ConnectionStore, SubscriptionId};

#[cfg(test)]
mod tests;

pub const CONNECT_INTRO: &str = "Connect part showcases how any dapp maintained web3 connector can \
     interact with Etherspot transaction builder component directly";

/// A connection trigger offered while disconnected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectAction {
    External,
    Ephemeral,
    Connector(ConnectorKind),
}

impl ConnectAction {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectAction::External => "Connect with external wallet",
            ConnectAction::Ephemeral => "Connect with random Key Based",
            ConnectAction::Connector(kind) => kind.name(),
        }
    }
}

/// Local theme toggle. Independent of the connection state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Default,
    Override,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Default => ThemeMode::Override,
            ThemeMode::Override => ThemeMode::Default,
        }
    }
}

/// Everything handed to the widget.
#[derive(Debug, Clone)]
pub struct WidgetProps {
    pub config: WidgetConfig,
    /// Explicit signer. `None` in the multi-connector variant, where the widget
    /// reads the ambient client instead.
    pub signer: Option<ActiveSigner>,
}

/// What the page should show.
#[derive(Debug, Clone)]
pub enum View {
    ConnectPrompt {
        intro: &'static str,
        actions: Vec<ConnectAction>,
    },
    Widget(WidgetProps),
}

impl View {
    pub fn is_widget(&self) -> bool {
        matches!(self, View::Widget(_))
    }

    pub fn widget_props(&self) -> Option<&WidgetProps> {
        match self {
            View::Widget(props) => Some(props),
            View::ConnectPrompt { .. } => None,
        }
    }
}

/// One-way hand-off to the embedded widget. Nothing is read back.
pub trait WidgetBoundary {
    fn mount(&self, props: &WidgetProps);
}

/// Tunables shared by both variants.
#[derive(Debug, Clone)]
pub struct RootOptions {
    pub default_workflow: Vec<TransactionBlock>,
    /// Theme passed while the toggle is on [`ThemeMode::Override`].
    pub theme_preset: ThemeOverride,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            default_workflow: vec![TransactionBlock::new(
                TransactionBlockType::AssetBridgeTransaction,
            )],
            theme_preset: ThemeOverride::demo(),
        }
    }
}

enum Variant {
    Direct(WalletConnector),
    MultiConnector(Rc<ChainClient>),
}

type Observer = Rc<dyn Fn(&View)>;

struct RootInner {
    variant: Variant,
    store: ConnectionStore,
    options: RootOptions,
    theme: Cell<ThemeMode>,
    observers: RefCell<Vec<Observer>>,
    subscription: Cell<Option<SubscriptionId>>,
}

impl RootInner {
    fn actions(&self) -> Vec<ConnectAction> {
        match &self.variant {
            Variant::Direct(_) => vec![ConnectAction::External, ConnectAction::Ephemeral],
            Variant::MultiConnector(client) => client
                .connector_kinds()
                .into_iter()
                .map(ConnectAction::Connector)
                .collect(),
        }
    }

    fn theme_override(&self) -> Option<ThemeOverride> {
        match self.theme.get() {
            ThemeMode::Default => None,
            // An empty preset would reach the widget as `{}` and reset its theme
            ThemeMode::Override if self.options.theme_preset.is_empty() => None,
            ThemeMode::Override => Some(self.options.theme_preset.clone()),
        }
    }

    fn widget_props(&self, signer: ActiveSigner) -> WidgetProps {
        let config = WidgetConfig::new(self.options.default_workflow.clone())
            .with_theme_override(self.theme_override());

        match &self.variant {
            Variant::Direct(_) => WidgetProps {
                config,
                signer: Some(signer),
            },
            Variant::MultiConnector(client) => WidgetProps {
                config: config
                    .with_chain_id(client.chain_id())
                    .with_show_menu_logout(false),
                signer: None,
            },
        }
    }

    fn render_state(&self, state: ConnectionState) -> View {
        match state {
            ConnectionState::Disconnected => View::ConnectPrompt {
                intro: CONNECT_INTRO,
                actions: self.actions(),
            },
            ConnectionState::Connected(signer) => View::Widget(self.widget_props(signer)),
        }
    }

    fn render(&self) -> View {
        self.render_state(self.store.state())
    }

    fn emit(&self) {
        let observers: Vec<Observer> = self.observers.borrow().iter().cloned().collect();
        if observers.is_empty() {
            return;
        }

        let view = self.render();
        for observer in observers {
            observer(&view);
        }
    }
}

impl Drop for RootInner {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.store.unsubscribe(id);
        }
    }
}

/// Composition root for one demo variant. Clones share the same root.
#[derive(Clone)]
pub struct PresentationRoot {
    inner: Rc<RootInner>,
}

impl PresentationRoot {
    /// Direct variant: a fresh store written by a [`WalletConnector`].
    pub fn direct<S, F>(options: RootOptions, build_selector: F) -> Self
    where
        S: WalletSelector + 'static,
        F: FnOnce(ProviderCallback) -> S,
    {
        let store = ConnectionStore::new();
        let connector = WalletConnector::new(store.clone(), build_selector);
        Self::from_parts(Variant::Direct(connector), store, options)
    }

    /// Multi-connector variant: observes the client's ambient store.
    pub fn multi_connector(options: RootOptions, client: Rc<ChainClient>) -> Self {
        let store = client.store().clone();
        Self::from_parts(Variant::MultiConnector(client), store, options)
    }

    fn from_parts(variant: Variant, store: ConnectionStore, options: RootOptions) -> Self {
        Self {
            inner: Rc::new(RootInner {
                variant,
                store,
                options,
                theme: Cell::new(ThemeMode::Default),
                observers: RefCell::new(Vec::new()),
                subscription: Cell::new(None),
            }),
        }
    }

    /// Subscribe to the store. Calling it again has no effect.
    pub fn mount(&self) {
        if self.is_mounted() {
            return;
        }

        let weak: Weak<RootInner> = Rc::downgrade(&self.inner);
        let id = self.inner.store.subscribe(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.emit();
            }
        });
        self.inner.subscription.set(Some(id));
    }

    pub fn is_mounted(&self) -> bool {
        let id = self.inner.subscription.get();
        id.is_some()
    }

    /// Register a render observer. It is called with the current view right away.
    pub fn on_render(&self, observer: impl Fn(&View) + 'static) {
        let observer: Observer = Rc::new(observer);
        self.inner.observers.borrow_mut().push(observer.clone());
        observer(&self.render());
    }

    pub fn render(&self) -> View {
        self.inner.render()
    }

    pub fn store(&self) -> &ConnectionStore {
        &self.inner.store
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.inner.theme.get()
    }

    pub fn toggle_theme(&self) {
        let mode = self.inner.theme.get().toggled();
        self.inner.theme.set(mode);
        tracing::debug!(?mode, "theme toggled");
        self.inner.emit();
    }

    /// Run one connection action.
    ///
    /// Failures are dropped here on purpose: the user stays on the prompt.
    pub async fn trigger(&self, action: ConnectAction) {
        match (&self.inner.variant, action) {
            (Variant::Direct(connector), ConnectAction::External) => {
                connector.connect_external().await;
            }
            (Variant::Direct(connector), ConnectAction::Ephemeral) => {
                connector.connect_ephemeral();
            }
            (Variant::MultiConnector(client), ConnectAction::Connector(kind)) => {
                if let Err(err) = client.connect(kind).await {
                    tracing::debug!(connector = kind.name(), error = %err, "connector did not connect");
                }
            }
            (_, action) => {
                tracing::debug!(?action, "action not offered by this variant");
            }
        }
    }

    /// Auto-connect for the multi-connector variant; nothing to do otherwise.
    pub async fn resume_session(&self) {
        if let Variant::MultiConnector(client) = &self.inner.variant {
            client.reconnect().await;
        }
    }

    /// The ambient client, for the multi-connector variant.
    pub fn client(&self) -> Option<Rc<ChainClient>> {
        match &self.inner.variant {
            Variant::MultiConnector(client) => Some(client.clone()),
            Variant::Direct(_) => None,
        }
    }
}
