//! Application constants
//!
//! Settings are baked in at build time; a static page has no runtime environment.

use lib_core::config::{Config, DEFAULT_APP_NAME, DEFAULT_CHAIN_ID};

/// DOM id of the element the transaction builder mounts into
pub const WIDGET_CONTAINER_ID: &str = "transaction-builder";

pub fn app_config() -> Config {
    let chain_id = option_env!("CHAIN_ID")
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_CHAIN_ID);

    Config::new(chain_id, option_env!("ALCHEMY_API_KEY").map(str::to_string))
        .with_relay_project_id(option_env!("WALLETCONNECT_PROJECT_ID").map(str::to_string))
        .with_app_name(option_env!("APP_NAME").unwrap_or(DEFAULT_APP_NAME))
}
