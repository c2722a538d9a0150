//! # Chain Client
//!
//! The multi-connector variant's process-wide client: immutable configuration,
//! the ordered fallback transport, the connector implementations and the
//! connection store they write into.
//!
//! Build it once at start-up and hand it down by context injection. Nothing in
//! it changes after construction except the connection store.
//!
//! ## Auto-connect
//!
//! [`ChainClient::reconnect`] asks each connector, in configuration order,
//! whether it can resume a previous session, and connects the first one that
//! can. It is a no-op when auto-connect is disabled or a signer is already held.

use std::rc::Rc;

use crate::chain::transport::FallbackTransport;
use crate::chain::{ChainConfiguration, Connector, ConnectorKind};
use crate::error::{AppError, Result};
use crate::signer::{ActiveSigner, ProviderHandle};
use crate::state::ConnectionStore;

pub struct ChainClient {
    configuration: ChainConfiguration,
    transport: FallbackTransport,
    connectors: Vec<Rc<dyn Connector>>,
    store: ConnectionStore,
}

impl ChainClient {
    /// Build the client with HTTP transports for every configured backend.
    pub fn new(configuration: ChainConfiguration, connectors: Vec<Rc<dyn Connector>>) -> Result<Self> {
        let transport = FallbackTransport::from_configs(configuration.transports());
        Self::with_transport(configuration, transport, connectors)
    }

    /// Build the client around an existing transport.
    ///
    /// Connector implementations must match the configured connector kinds, in order.
    pub fn with_transport(
        configuration: ChainConfiguration,
        transport: FallbackTransport,
        connectors: Vec<Rc<dyn Connector>>,
    ) -> Result<Self> {
        let provided: Vec<ConnectorKind> = connectors.iter().map(|c| c.kind()).collect();
        if provided != configuration.connector_kinds() {
            return Err(AppError::Config(format!(
                "Connector implementations {:?} do not match configuration {:?}",
                provided,
                configuration.connector_kinds()
            )));
        }

        tracing::info!(
            chain_id = configuration.chain_id(),
            transports = ?transport.labels(),
            connectors = connectors.len(),
            auto_connect = configuration.auto_connect(),
            "chain client ready"
        );

        Ok(Self {
            configuration,
            transport,
            connectors,
            store: ConnectionStore::new(),
        })
    }

    pub fn configuration(&self) -> &ChainConfiguration {
        &self.configuration
    }

    pub fn chain_id(&self) -> u64 {
        self.configuration.chain_id()
    }

    pub fn transport(&self) -> &FallbackTransport {
        &self.transport
    }

    pub fn connector_kinds(&self) -> Vec<ConnectorKind> {
        self.connectors.iter().map(|c| c.kind()).collect()
    }

    /// The ambient connection state every consumer of the client observes.
    pub fn store(&self) -> &ConnectionStore {
        &self.store
    }

    /// Provider held by the ambient store, for consumers that read the client
    /// instead of receiving a signer.
    pub fn active_provider(&self) -> Option<Rc<dyn ProviderHandle>> {
        match self.store.signer()? {
            ActiveSigner::External(provider) => Some(provider.handle().clone()),
            ActiveSigner::Ephemeral(_) => None,
        }
    }

    /// Connect through one connector and store the resulting provider.
    pub async fn connect(&self, kind: ConnectorKind) -> Result<()> {
        let connector = self
            .connectors
            .iter()
            .find(|c| c.kind() == kind)
            .ok_or_else(|| AppError::Connector(format!("{} is not configured", kind.name())))?;

        let handle = connector.connect().await?;
        self.store.connect(ActiveSigner::external(handle, kind.name()));
        Ok(())
    }

    /// Resume a previous session, if any connector recognises one.
    pub async fn reconnect(&self) {
        if !self.configuration.auto_connect() || self.store.is_connected() {
            return;
        }

        for connector in &self.connectors {
            if !connector.is_authorized().await {
                continue;
            }

            let kind = connector.kind();
            match connector.connect().await {
                Ok(handle) => {
                    tracing::info!(connector = kind.name(), "resumed previous session");
                    self.store.connect(ActiveSigner::external(handle, kind.name()));
                    return;
                }
                Err(err) => {
                    tracing::debug!(connector = kind.name(), error = %err, "could not resume session");
                }
            }
        }
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("configuration", &self.configuration)
            .field("connectors", &self.connector_kinds())
            .field("store", &self.store)
            .finish()
    }
}
