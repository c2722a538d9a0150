//! # Chain and Provider Configuration
//!
//! Static description of what the multi-connector variant can reach: one network,
//! an ordered list of RPC transports, and the wallet connectors on offer.
//!
//! ## Modules
//!
//! - [`transport`]: JSON-RPC transports and the ordered fallback wrapper
//! - [`connector`]: the wallet connector collaborator trait
//! - [`client`]: [`ChainClient`], the immutable client built once at process start
//!
//! ## Transport Order
//!
//! ```text
//! 1. metered provider   https://<network host>/v2/<ALCHEMY_API_KEY>   (only with a credential)
//! 2. public provider    the network's public RPC endpoint               (always)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lib_core::chain::{ChainConfiguration, ConnectorKind};
//! use lib_core::config::Config;
//!
//! let chain = ChainConfiguration::from_config(&Config::default()).unwrap();
//!
//! assert_eq!(chain.chain_id(), 1);
//! assert_eq!(chain.transports().len(), 1); // public fallback only
//! assert_eq!(
//!     chain.connector_kinds(),
//!     vec![ConnectorKind::Injected, ConnectorKind::Hosted, ConnectorKind::Relay]
//! );
//! ```

pub mod client;
pub mod connector;
pub mod transport;

use std::fmt;

use crate::config::Config;
use crate::error::{AppError, Result};

pub use client::ChainClient;
pub use connector::Connector;
pub use transport::{FallbackTransport, HttpTransport, RpcTransport};

/// A supported EVM network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub chain_id: u64,
    pub name: &'static str,
    pub public_rpc_url: &'static str,
    /// Host of the metered provider for this network, when it serves one.
    pub metered_rpc_host: Option<&'static str>,
}

const KNOWN_NETWORKS: &[Network] = &[
    Network {
        chain_id: 1,
        name: "Ethereum",
        public_rpc_url: "https://cloudflare-eth.com",
        metered_rpc_host: Some("eth-mainnet.g.alchemy.com"),
    },
    Network {
        chain_id: 10,
        name: "Optimism",
        public_rpc_url: "https://mainnet.optimism.io",
        metered_rpc_host: Some("opt-mainnet.g.alchemy.com"),
    },
    Network {
        chain_id: 100,
        name: "Gnosis",
        public_rpc_url: "https://rpc.gnosischain.com",
        metered_rpc_host: None,
    },
    Network {
        chain_id: 137,
        name: "Polygon",
        public_rpc_url: "https://polygon-rpc.com",
        metered_rpc_host: Some("polygon-mainnet.g.alchemy.com"),
    },
    Network {
        chain_id: 42161,
        name: "Arbitrum One",
        public_rpc_url: "https://arb1.arbitrum.io/rpc",
        metered_rpc_host: Some("arb-mainnet.g.alchemy.com"),
    },
    Network {
        chain_id: 11155111,
        name: "Sepolia",
        public_rpc_url: "https://rpc.sepolia.org",
        metered_rpc_host: Some("eth-sepolia.g.alchemy.com"),
    },
];

impl Network {
    pub fn by_chain_id(chain_id: u64) -> Option<Network> {
        KNOWN_NETWORKS
            .iter()
            .find(|network| network.chain_id == chain_id)
            .cloned()
    }
}

/// One RPC backend, in fallback priority order.
#[derive(Clone, PartialEq, Eq)]
pub enum TransportConfig {
    /// Metered provider keyed by an API credential.
    Metered { url: String },
    /// Public, rate-limited provider.
    Public { url: String },
}

impl TransportConfig {
    pub fn url(&self) -> &str {
        match self {
            TransportConfig::Metered { url } | TransportConfig::Public { url } => url,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportConfig::Metered { .. } => "metered",
            TransportConfig::Public { .. } => "public",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, TransportConfig::Public { .. })
    }
}

// The metered URL embeds the credential
impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportConfig::Metered { .. } => write!(f, "Metered(<redacted>)"),
            TransportConfig::Public { url } => write!(f, "Public({url})"),
        }
    }
}

/// Wallet connector implementations offered by the multi-connector variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorKind {
    /// Browser-extension wallet injected into the page.
    Injected,
    /// Hosted wallet reached through its SDK.
    Hosted,
    /// Peer-to-peer relay wallet (QR code / deep link pairing).
    Relay,
}

impl ConnectorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ConnectorKind::Injected => "Browser Wallet",
            ConnectorKind::Hosted => "Coinbase Wallet",
            ConnectorKind::Relay => "WalletConnect",
        }
    }

    /// Stable identifier used across the JavaScript boundary.
    pub fn id(&self) -> &'static str {
        match self {
            ConnectorKind::Injected => "injected",
            ConnectorKind::Hosted => "hosted",
            ConnectorKind::Relay => "relay",
        }
    }
}

/// Per-connector settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorConfig {
    Injected,
    Hosted { app_name: String },
    Relay { project_id: Option<String> },
}

impl ConnectorConfig {
    pub fn kind(&self) -> ConnectorKind {
        match self {
            ConnectorConfig::Injected => ConnectorKind::Injected,
            ConnectorConfig::Hosted { .. } => ConnectorKind::Hosted,
            ConnectorConfig::Relay { .. } => ConnectorKind::Relay,
        }
    }
}

/// Immutable description of networks, transports and connectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfiguration {
    networks: Vec<Network>,
    transports: Vec<TransportConfig>,
    connectors: Vec<ConnectorConfig>,
    auto_connect: bool,
}

impl ChainConfiguration {
    /// Build the single-network configuration described by `config`.
    ///
    /// Without a metered credential only the public transport is registered.
    pub fn from_config(config: &Config) -> Result<Self> {
        let network = Network::by_chain_id(config.chain_id).ok_or_else(|| {
            AppError::Config(format!("Unsupported chain id: {}", config.chain_id))
        })?;

        let mut transports = Vec::with_capacity(2);
        match (&config.metered_rpc_api_key, network.metered_rpc_host) {
            (Some(key), Some(host)) => transports.push(TransportConfig::Metered {
                url: format!("https://{host}/v2/{key}"),
            }),
            (Some(_), None) => {
                tracing::warn!(network = network.name, "no metered provider for network, using public RPC")
            }
            (None, _) => tracing::debug!("no metered RPC credential, using public RPC"),
        }
        transports.push(TransportConfig::Public {
            url: network.public_rpc_url.to_string(),
        });

        let connectors = vec![
            ConnectorConfig::Injected,
            ConnectorConfig::Hosted {
                app_name: config.app_name.clone(),
            },
            ConnectorConfig::Relay {
                project_id: config.relay_project_id.clone(),
            },
        ];

        Ok(Self {
            networks: vec![network],
            transports,
            connectors,
            auto_connect: true,
        })
    }

    pub fn with_auto_connect(mut self, auto_connect: bool) -> Self {
        self.auto_connect = auto_connect;
        self
    }

    /// Chain id of the primary (first) network.
    pub fn chain_id(&self) -> u64 {
        self.networks[0].chain_id
    }

    pub fn transports(&self) -> &[TransportConfig] {
        &self.transports
    }

    pub fn connectors(&self) -> &[ConnectorConfig] {
        &self.connectors
    }

    pub fn connector_kinds(&self) -> Vec<ConnectorKind> {
        self.connectors.iter().map(ConnectorConfig::kind).collect()
    }

    pub fn auto_connect(&self) -> bool {
        self.auto_connect
    }
}
