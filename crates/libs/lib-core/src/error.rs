//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used across the connection core.
//! It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Connection Errors** - produced by external collaborators, always recovered locally
//!    - [`WalletSelection`](AppError::WalletSelection): modal dismissed, no extension installed
//!    - [`WalletCheck`](AppError::WalletCheck): unsupported network, locked account
//!    - [`Connector`](AppError::Connector): a multi-connector implementation failed to connect
//!
//! 2. **Transport Errors** - absorbed by transport fallback
//!    - [`Transport`](AppError::Transport): endpoint unreachable, rejected credential, bad payload
//!    - [`Rpc`](AppError::Rpc): the node answered with a JSON-RPC error object
//!
//! 3. **Setup Errors** - raised while building configuration at process start
//!    - [`Config`](AppError::Config), [`InvalidInput`](AppError::InvalidInput), [`Decoding`](AppError::Decoding)
//!
//! ## Propagation Policy
//!
//! Connection and transport errors never reach the presentation layer. The
//! adapter and the fallback transport are the only places that discard them,
//! and they do so explicitly.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_chain_id(raw: &str) -> Result<u64> {
//!     raw.parse()
//!         .map_err(|_| AppError::InvalidInput(format!("not a chain id: {raw}")))
//! }
//!
//! assert!(parse_chain_id("1").is_ok());
//! assert!(parse_chain_id("mainnet").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type covering every failure the connection core can observe.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive wallet selection failed or was cancelled.
    #[error("Wallet selection error: {0}")]
    WalletSelection(String),

    /// Post-selection network/account validation failed.
    #[error("Wallet check error: {0}")]
    WalletCheck(String),

    /// A configured wallet connector failed to produce a provider.
    #[error("Connector error: {0}")]
    Connector(String),

    /// RPC transport failure (network, HTTP status, malformed response).
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON-RPC error object returned by a node.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Data decoding error.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Invalid input validation error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Whether a fallback transport should try the next endpoint after this error.
    ///
    /// A JSON-RPC error object is a definitive answer from a healthy node.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Decoding(_))
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

/// Convert `reqwest::Error` to `AppError`.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decoding(format!("HTTP body: {}", err))
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

/// Convert environment lookup failures to `AppError`.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
