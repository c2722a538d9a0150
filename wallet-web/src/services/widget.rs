//! Transaction Builder Widget via wasm-bindgen
//!
//! Mounts the externally supplied widget into a container element. Props are
//! passed one way; nothing is read back from the widget.
//!
//! In the multi-connector demo the props carry no signer. The widget instead
//! receives an ambient context `{ provider, chainId }` read from the shared
//! chain client, kept apart from the explicit `provider` prop.

use std::rc::Rc;

use js_sys::{Object, Reflect};
use lib_core::chain::ChainClient;
use lib_core::presentation::{WidgetBoundary, WidgetProps};
use lib_core::signer::ActiveSigner;
use wasm_bindgen::prelude::*;

use crate::services::wallet::{js_error_message, JsProvider};

#[wasm_bindgen(inline_js = "
export function mountTransactionBuilder(containerId, props, provider, ambient) {
    const container = document.getElementById(containerId);
    if (!container) {
        throw new Error('Widget container not found: ' + containerId);
    }

    const widget = window.EtherspotTransactionKit;
    if (!widget || typeof widget.mount !== 'function') {
        throw new Error('Transaction builder not loaded');
    }

    const merged = Object.assign({}, props);
    if (provider) {
        merged.provider = provider;
    }
    widget.mount(container, merged, ambient || undefined);
}

export function keyBasedProvider(privateKey) {
    if (!window.ethers || typeof window.ethers.Wallet !== 'function') {
        throw new Error('ethers not loaded');
    }
    return new window.ethers.Wallet(privateKey);
}
")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn mountTransactionBuilder(
        container_id: &str,
        props: JsValue,
        provider: JsValue,
        ambient: JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn keyBasedProvider(private_key: &str) -> Result<JsValue, JsValue>;
}

/// The widget mounted into one DOM element.
#[derive(Debug, Clone)]
pub struct JsWidgetBoundary {
    container_id: &'static str,
    client: Option<Rc<ChainClient>>,
}

impl JsWidgetBoundary {
    /// `client` is the shared chain client, when the page has one.
    pub fn new(container_id: &'static str, client: Option<Rc<ChainClient>>) -> Self {
        Self { container_id, client }
    }

    /// Ambient context for the widget, read from the client at mount time.
    fn ambient_value(&self) -> Result<JsValue, String> {
        let Some(client) = &self.client else {
            return Ok(JsValue::UNDEFINED);
        };

        let provider = match client.active_provider() {
            Some(handle) => handle
                .as_any()
                .downcast_ref::<JsProvider>()
                .map(|provider| provider.js_value().clone())
                .ok_or_else(|| "ambient provider is not a browser object".to_string())?,
            None => JsValue::UNDEFINED,
        };

        let ambient = Object::new();
        Reflect::set(&ambient, &"provider".into(), &provider).map_err(|e| js_error_message(&e))?;
        Reflect::set(&ambient, &"chainId".into(), &JsValue::from_f64(client.chain_id() as f64))
            .map_err(|e| js_error_message(&e))?;
        Ok(ambient.into())
    }

    /// The signer as the JavaScript object the widget expects.
    fn provider_value(signer: Option<&ActiveSigner>) -> Result<JsValue, String> {
        match signer {
            None => Ok(JsValue::UNDEFINED),
            Some(ActiveSigner::External(provider)) => provider
                .downcast_handle::<JsProvider>()
                .map(|provider| provider.js_value().clone())
                .ok_or_else(|| format!("provider from {} is not a browser object", provider.source())),
            Some(ActiveSigner::Ephemeral(key)) => {
                keyBasedProvider(&key.private_key_hex()).map_err(|e| js_error_message(&e))
            }
        }
    }
}

impl WidgetBoundary for JsWidgetBoundary {
    fn mount(&self, props: &WidgetProps) {
        let config = match serde_wasm_bindgen::to_value(&props.config) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to serialize widget props: {}", e);
                return;
            }
        };

        let provider = match Self::provider_value(props.signer.as_ref()) {
            Ok(provider) => provider,
            Err(e) => {
                log::error!("Failed to prepare widget signer: {}", e);
                return;
            }
        };

        let ambient = match self.ambient_value() {
            Ok(ambient) => ambient,
            Err(e) => {
                log::error!("Failed to prepare widget context: {}", e);
                return;
            }
        };

        match mountTransactionBuilder(self.container_id, config, provider, ambient) {
            Ok(()) => log::debug!("Transaction builder mounted into #{}", self.container_id),
            Err(e) => log::error!("Failed to mount transaction builder: {}", js_error_message(&e)),
        }
    }
}
