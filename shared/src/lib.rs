//! # Shared Widget Data Library
//!
//! This library defines the contract between the connection core and the embedded
//! transaction builder widget. Everything in here crosses the widget boundary as
//! plain data; the signer itself never does (it is handed over separately).
//!
//! ## Structure
//!
//! - **[`dto`]**: Data handed to the widget
//!   - **[`dto::widget`]**: Default workflow blocks and widget configuration
//!   - **[`dto::theme`]**: Optional theme override, grouped by UI role
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The widget is a JavaScript component, so field names serialize to **camelCase**
//! and optional fields are omitted entirely when `None`
//! (`#[serde(skip_serializing_if = "Option::is_none")]`). An absent theme override
//! therefore never reaches the widget as `null` or `{}`.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::widget::{TransactionBlock, TransactionBlockType, WidgetConfig};
//!
//! let config = WidgetConfig::new(vec![TransactionBlock::new(
//!     TransactionBlockType::AssetBridgeTransaction,
//! )]);
//!
//! let json = serde_json::to_value(&config).unwrap();
//! assert_eq!(
//!     json["defaultTransactionBlocks"][0]["type"],
//!     "ASSET_BRIDGE_TRANSACTION"
//! );
//! assert!(json.get("themeOverride").is_none());
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a plain data library and everything is public API
pub use dto::*;
pub use utils::*;
