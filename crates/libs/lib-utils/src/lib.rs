//! # Utilities Library
//!
//! Environment variable access and small validation helpers.

pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_opt, get_env_parse};
pub use validation::validate_not_empty;
