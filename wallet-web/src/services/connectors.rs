//! Connector Implementations via wasm-bindgen
//!
//! One [`JsConnector`] per configured connector kind. The JavaScript side owns
//! the wallet SDKs; Rust only passes settings in and gets a provider object back.

use std::rc::Rc;

use async_trait::async_trait;
use lib_core::chain::{ChainConfiguration, Connector, ConnectorConfig, ConnectorKind};
use lib_core::signer::ProviderHandle;
use lib_core::{AppError, Result};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::services::wallet::{js_error_message, provider_from_js};

#[wasm_bindgen(inline_js = "
export async function connectorConnect(id, options) {
    switch (id) {
        case 'injected': {
            const provider = window.ethereum;
            if (!provider) {
                throw new Error('No browser wallet found');
            }
            await provider.request({ method: 'eth_requestAccounts' });
            return provider;
        }
        case 'hosted': {
            const Sdk = window.CoinbaseWalletSDK;
            if (typeof Sdk !== 'function') {
                throw new Error('Coinbase Wallet SDK not loaded');
            }
            const sdk = new Sdk({ appName: options.appName });
            const provider = sdk.makeWeb3Provider(options.rpcUrl, options.chainId);
            await provider.request({ method: 'eth_requestAccounts' });
            return provider;
        }
        case 'relay': {
            const Relay = window.WalletConnectEthereumProvider;
            if (!Relay) {
                throw new Error('WalletConnect provider not loaded');
            }
            if (!options.projectId) {
                throw new Error('WalletConnect project id missing');
            }
            const provider = await Relay.init({
                projectId: options.projectId,
                chains: [options.chainId],
                showQrModal: true,
            });
            await provider.enable();
            return provider;
        }
        default:
            throw new Error('Unknown connector: ' + id);
    }
}

export async function connectorIsAuthorized(id) {
    try {
        switch (id) {
            case 'injected': {
                if (!window.ethereum) {
                    return false;
                }
                const accounts = await window.ethereum.request({ method: 'eth_accounts' });
                return Array.isArray(accounts) && accounts.length > 0;
            }
            case 'hosted':
                return window.localStorage.getItem('-walletlink:https://www.walletlink.org:Addresses') !== null;
            case 'relay':
                return Object.keys(window.localStorage).some((key) => key.startsWith('wc@2:client'));
            default:
                return false;
        }
    } catch (e) {
        return false;
    }
}
")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn connectorConnect(id: &str, options: JsValue) -> std::result::Result<JsValue, JsValue>;

    async fn connectorIsAuthorized(id: &str) -> JsValue;
}

/// Settings handed to the JavaScript connector.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectorOptions {
    chain_id: u64,
    rpc_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<String>,
}

pub struct JsConnector {
    kind: ConnectorKind,
    options: ConnectorOptions,
}

impl JsConnector {
    fn new(config: &ConnectorConfig, chain_id: u64, rpc_url: &str) -> Self {
        let (app_name, project_id) = match config {
            ConnectorConfig::Injected => (None, None),
            ConnectorConfig::Hosted { app_name } => (Some(app_name.clone()), None),
            ConnectorConfig::Relay { project_id } => (None, project_id.clone()),
        };

        Self {
            kind: config.kind(),
            options: ConnectorOptions {
                chain_id,
                rpc_url: rpc_url.to_string(),
                app_name,
                project_id,
            },
        }
    }
}

/// One connector per configuration entry, same order.
///
/// Hosted wallets get the public RPC URL; the metered one carries a credential.
pub fn connectors_for(configuration: &ChainConfiguration) -> Vec<Rc<dyn Connector>> {
    let rpc_url = configuration
        .transports()
        .iter()
        .find(|transport| transport.is_public())
        .map(|transport| transport.url().to_string())
        .unwrap_or_default();

    configuration
        .connectors()
        .iter()
        .map(|config| {
            Rc::new(JsConnector::new(config, configuration.chain_id(), &rpc_url)) as Rc<dyn Connector>
        })
        .collect()
}

#[async_trait(?Send)]
impl Connector for JsConnector {
    fn kind(&self) -> ConnectorKind {
        self.kind
    }

    async fn connect(&self) -> Result<Rc<dyn ProviderHandle>> {
        let options = serde_wasm_bindgen::to_value(&self.options)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let provider = connectorConnect(self.kind.id(), options)
            .await
            .map_err(|e| AppError::Connector(js_error_message(&e)))?;

        provider_from_js(provider).ok_or_else(|| {
            AppError::Connector(format!("{} returned no provider", self.kind.name()))
        })
    }

    async fn is_authorized(&self) -> bool {
        connectorIsAuthorized(self.kind.id()).await.as_bool().unwrap_or(false)
    }
}
