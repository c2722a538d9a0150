//! # Application Configuration
//!
//! Configuration for the multi-connector client, loaded from environment variables.
//!
//! There is no global instance. Build a [`Config`] once at process start and pass it
//! to [`ChainConfiguration::from_config`](crate::chain::ChainConfiguration::from_config).
//!
//! ## Variables
//!
//! | Variable                   | Required | Default                      |
//! |----------------------------|----------|------------------------------|
//! | `CHAIN_ID`                 | no       | `1`                          |
//! | `ALCHEMY_API_KEY`          | no       | none (public RPC only)       |
//! | `WALLETCONNECT_PROJECT_ID` | no       | none                         |
//! | `APP_NAME`                 | no       | `Transaction Builder Demo`   |
//!
//! A missing metered-RPC credential is not an error: requests go to the public
//! fallback transport instead.
//!
//! ```rust,no_run
//! use lib_core::config::Config;
//!
//! let config = Config::from_env()?;
//! config.validate()?;
//! # Ok::<(), lib_core::AppError>(())
//! ```

use lib_utils::envs::{get_env_opt, get_env_parse, Error as EnvError};
use lib_utils::validate_not_empty;

use crate::error::{AppError, Result};

pub const DEFAULT_CHAIN_ID: u64 = 1;
pub const DEFAULT_APP_NAME: &str = "Transaction Builder Demo";

/// Runtime configuration for the connection core.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Chain the multi-connector client targets.
    pub chain_id: u64,

    /// Credential for the metered RPC provider.
    pub metered_rpc_api_key: Option<String>,

    /// Project id for the relay (WalletConnect) connector.
    pub relay_project_id: Option<String>,

    /// Name shown by hosted and relay wallets during connection.
    pub app_name: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("chain_id", &self.chain_id)
            .field(
                "metered_rpc_api_key",
                &self.metered_rpc_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("relay_project_id", &self.relay_project_id)
            .field("app_name", &self.app_name)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CHAIN_ID, None)
    }
}

impl Config {
    /// Build a configuration explicitly. Blank credentials are treated as absent.
    pub fn new(chain_id: u64, metered_rpc_api_key: Option<String>) -> Self {
        Self {
            chain_id,
            metered_rpc_api_key: non_blank(metered_rpc_api_key),
            relay_project_id: None,
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    pub fn with_relay_project_id(mut self, project_id: Option<String>) -> Self {
        self.relay_project_id = non_blank(project_id);
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Load configuration from environment variables (and `.env`, when present).
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; real environment variables still apply
        let _ = dotenvy::dotenv();

        let chain_id = match get_env_parse::<u64>("CHAIN_ID") {
            Ok(id) => id,
            Err(EnvError::MissingEnv(_)) => DEFAULT_CHAIN_ID,
            Err(err) => return Err(err.into()),
        };

        let metered_rpc_api_key = get_env_opt("ALCHEMY_API_KEY");
        if metered_rpc_api_key.is_none() {
            tracing::warn!("ALCHEMY_API_KEY not set, RPC requests will use the public provider");
        }

        let app_name = get_env_opt("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        Ok(Self::new(chain_id, metered_rpc_api_key)
            .with_relay_project_id(get_env_opt("WALLETCONNECT_PROJECT_ID"))
            .with_app_name(app_name))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.chain_id == 0 {
            return Err(AppError::Config("CHAIN_ID must be a positive number".to_string()));
        }

        validate_not_empty(&self.app_name, "APP_NAME").map_err(AppError::Config)?;

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
