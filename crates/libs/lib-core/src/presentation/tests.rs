use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use shared::dto::theme::ThemeOverride;
use shared::dto::widget::TransactionBlockType;

use super::*;
use crate::adapter::test_support::{MockSelector, Selection};
use crate::chain::client::test_support::{as_dyn, connectors, MockConnector};
use crate::chain::ChainConfiguration;
use crate::config::Config;
use crate::signer::test_support::MockProvider;
use crate::signer::SignerKind;

fn direct_root(selection: Selection, check_passes: bool) -> PresentationRoot {
    let root = PresentationRoot::direct(RootOptions::default(), move |callback| {
        MockSelector::new(callback, selection, check_passes)
    });
    root.mount();
    root
}

fn multi_root(make: impl Fn(ConnectorKind) -> MockConnector) -> (PresentationRoot, Vec<Rc<MockConnector>>) {
    let mocks = connectors(make);
    let configuration = ChainConfiguration::from_config(&Config::default()).unwrap();
    let client = ChainClient::new(configuration, as_dyn(&mocks)).unwrap();
    let root = PresentationRoot::multi_connector(RootOptions::default(), Rc::new(client));
    root.mount();
    (root, mocks)
}

/// Collects every view an observer receives.
fn record(root: &PresentationRoot) -> Rc<RefCell<Vec<View>>> {
    let views = Rc::new(RefCell::new(Vec::new()));
    let sink = views.clone();
    root.on_render(move |view| sink.borrow_mut().push(view.clone()));
    views
}

fn props_json(root: &PresentationRoot) -> serde_json::Value {
    let view = root.render();
    let props = view.widget_props().expect("widget view");
    serde_json::to_value(&props.config).unwrap()
}

#[test]
fn test_disconnected_direct_prompt() {
    let root = direct_root(Selection::Reject, true);

    match root.render() {
        View::ConnectPrompt { intro, actions } => {
            assert_eq!(intro, CONNECT_INTRO);
            assert_eq!(actions, vec![ConnectAction::External, ConnectAction::Ephemeral]);
            assert_eq!(actions[1].label(), "Connect with random Key Based");
        }
        View::Widget(_) => panic!("no widget before a signer exists"),
    }
}

#[tokio::test]
async fn test_ephemeral_connection_mounts_widget_with_signer() {
    let root = direct_root(Selection::Reject, true);
    let views = record(&root);

    root.trigger(ConnectAction::Ephemeral).await;

    let view = root.render();
    let props = view.widget_props().expect("widget view");
    let signer = props.signer.as_ref().expect("explicit signer");
    assert_eq!(signer.kind(), SignerKind::Ephemeral);
    assert_eq!(
        props.config.default_transaction_blocks[0].kind,
        TransactionBlockType::AssetBridgeTransaction
    );
    assert_eq!(props.config.chain_id, None);

    // Initial render plus one for the store write
    assert_eq!(views.borrow().len(), 2);
    assert!(views.borrow()[1].is_widget());
}

#[tokio::test]
async fn test_external_connection_passes_provider_through() {
    let provider = MockProvider::on_chain(1, "0x00000000000000000000000000000000000000bb");
    let root = direct_root(Selection::Provide(provider.clone()), true);

    root.trigger(ConnectAction::External).await;

    let view = root.render();
    match &view.widget_props().unwrap().signer {
        Some(ActiveSigner::External(external)) => assert!(external.is_same_handle(&provider)),
        other => panic!("unexpected signer {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_external_connection_keeps_prompt() {
    let root = direct_root(Selection::Reject, true);
    let views = record(&root);

    root.trigger(ConnectAction::External).await;

    assert!(!root.render().is_widget());
    assert_eq!(views.borrow().len(), 1);
}

#[tokio::test]
async fn test_multi_connector_passes_chain_id_not_signer() {
    let (root, mocks) = multi_root(MockConnector::new);

    match root.render() {
        View::ConnectPrompt { actions, .. } => assert_eq!(
            actions,
            vec![
                ConnectAction::Connector(ConnectorKind::Injected),
                ConnectAction::Connector(ConnectorKind::Hosted),
                ConnectAction::Connector(ConnectorKind::Relay),
            ]
        ),
        View::Widget(_) => panic!("not connected yet"),
    }

    root.trigger(ConnectAction::Connector(ConnectorKind::Relay)).await;

    assert_eq!(mocks[2].connects.get(), 1);
    let view = root.render();
    let props = view.widget_props().unwrap();
    assert!(props.signer.is_none());
    assert_eq!(props.config.chain_id, Some(1));
    assert_eq!(props.config.show_menu_logout, Some(false));
}

#[tokio::test]
async fn test_multi_connector_failed_connector_keeps_prompt() {
    let (root, _) = multi_root(|kind| MockConnector::new(kind).failing());

    root.trigger(ConnectAction::Connector(ConnectorKind::Injected)).await;

    assert!(!root.render().is_widget());
}

#[tokio::test]
async fn test_resume_session_reconnects_authorized_connector() {
    let (root, mocks) = multi_root(|kind| match kind {
        ConnectorKind::Injected => MockConnector::new(kind).authorized(),
        _ => MockConnector::new(kind),
    });
    let views = record(&root);

    root.resume_session().await;

    assert_eq!(mocks[0].connects.get(), 1);
    assert!(views.borrow().last().unwrap().is_widget());
}

#[tokio::test]
async fn test_action_from_other_variant_is_ignored() {
    let root = direct_root(Selection::Reject, true);

    root.trigger(ConnectAction::Connector(ConnectorKind::Injected)).await;
    root.resume_session().await;

    assert!(!root.render().is_widget());
    assert!(root.client().is_none());
}

#[test]
fn test_theme_absent_until_toggled() {
    let root = direct_root(Selection::Reject, true);
    root.store()
        .connect(ActiveSigner::external(MockProvider::on_chain(1, "0x1"), "test"));

    assert_eq!(root.theme_mode(), ThemeMode::Default);
    let value = props_json(&root);
    assert!(value.get("themeOverride").is_none());
    assert_eq!(
        value["defaultTransactionBlocks"],
        json!([{ "type": "ASSET_BRIDGE_TRANSACTION" }])
    );

    root.toggle_theme();

    assert_eq!(root.theme_mode(), ThemeMode::Override);
    let value = props_json(&root);
    let expected = serde_json::to_value(ThemeOverride::demo()).unwrap();
    assert_eq!(value["themeOverride"], expected);
}

#[test]
fn test_empty_theme_preset_is_omitted() {
    let options = RootOptions {
        theme_preset: ThemeOverride::default(),
        ..RootOptions::default()
    };
    let root = PresentationRoot::direct(options, |callback| {
        MockSelector::new(callback, Selection::Reject, true)
    });
    root.mount();
    root.store()
        .connect(ActiveSigner::external(MockProvider::on_chain(1, "0x1"), "test"));

    root.toggle_theme();

    assert_eq!(root.theme_mode(), ThemeMode::Override);
    assert!(props_json(&root).get("themeOverride").is_none());
}

#[test]
fn test_theme_toggle_twice_restores_props() {
    let root = direct_root(Selection::Reject, true);
    root.store()
        .connect(ActiveSigner::external(MockProvider::on_chain(1, "0x1"), "test"));
    let before = props_json(&root);

    root.toggle_theme();
    root.toggle_theme();

    assert_eq!(props_json(&root), before);
}

#[test]
fn test_theme_toggle_rerenders() {
    let root = direct_root(Selection::Reject, true);
    let views = record(&root);

    root.toggle_theme();

    assert_eq!(views.borrow().len(), 2);
    // Theme state does not depend on the connection state
    assert!(!root.render().is_widget());
}

#[test]
fn test_mount_is_idempotent_and_drop_unsubscribes() {
    let mocks = connectors(MockConnector::new);
    let configuration = ChainConfiguration::from_config(&Config::default()).unwrap();
    let client = Rc::new(ChainClient::new(configuration, as_dyn(&mocks)).unwrap());

    let root = PresentationRoot::multi_connector(RootOptions::default(), client.clone());
    root.mount();
    root.mount();
    assert!(root.is_mounted());
    assert_eq!(client.store().subscriber_count(), 1);

    let clone = root.clone();
    drop(root);
    assert_eq!(client.store().subscriber_count(), 1);

    drop(clone);
    assert_eq!(client.store().subscriber_count(), 0);
}
