//! # Widget Data Transfer Objects
//!
//! Data structures handed one-way to the embedded transaction builder widget.
//! The core never reads anything back from the widget.
//!
//! ## Module Organization
//!
//! - [`widget`] - Default workflow selection and the widget configuration envelope
//! - [`theme`] - Theme override grouped by semantic UI role
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase (the widget is a JavaScript component)
//! - **Optional fields**: Omitted when `None`
//! - **Workflow kinds**: SCREAMING_SNAKE_CASE strings, matching the widget's block type constants
//!
//! ## Example Payload
//!
//! ```text
//! {
//!   "defaultTransactionBlocks": [{ "type": "ASSET_BRIDGE_TRANSACTION" }],
//!   "chainId": 1,
//!   "showMenuLogout": false
//! }
//! ```

pub mod theme;
pub mod widget;

pub use theme::*;
pub use widget::*;
