//! # Core Library
//!
//! Wallet connection state, signer resolution, chain configuration and the
//! presentation root shared by both demo variants.
//!
//! ## Layout
//!
//! - [`signer`]: the two signer shapes and [`ActiveSigner`]
//! - [`state`]: the observable [`ConnectionStore`]
//! - [`adapter`]: the direct variant's wallet connector
//! - [`chain`]: chain configuration, fallback transports, connectors and the client
//! - [`presentation`]: turning state into a connection prompt or a widget mount
//!
//! Everything here is single-threaded (`Rc`, `RefCell`) and runtime-agnostic, so
//! the same code drives the browser build and the native test suite.

pub mod adapter;
pub mod chain;
pub mod config;
pub mod error;
pub mod presentation;
pub mod signer;
pub mod state;

// Re-export commonly used types
pub use adapter::{ProviderCallback, WalletConnector, WalletSelector};
pub use chain::{ChainClient, ChainConfiguration, Connector, ConnectorKind};
pub use config::Config;
pub use error::{AppError, Result};
pub use presentation::{ConnectAction, PresentationRoot, RootOptions, ThemeMode, View, WidgetBoundary, WidgetProps};
pub use signer::{ActiveSigner, EphemeralKeySigner, ExternalWalletProvider, ProviderHandle, SignerKind};
pub use state::{ConnectionState, ConnectionStore, SubscriptionId};
