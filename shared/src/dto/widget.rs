//! # Widget Configuration
//!
//! The configuration envelope consumed by the embedded transaction builder widget.

use serde::{Deserialize, Serialize};

use crate::dto::theme::ThemeOverride;

/// Workflow kinds the widget can open with.
///
/// Serialized names match the widget's own block type constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionBlockType {
    AssetBridgeTransaction,
    SendAssetTransaction,
    AssetSwap,
    KlimaStake,
    PlrDaoStake,
}

/// A single predefined workflow block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionBlock {
    #[serde(rename = "type")]
    pub kind: TransactionBlockType,
}

impl TransactionBlock {
    pub fn new(kind: TransactionBlockType) -> Self {
        Self { kind }
    }
}

/// Everything the widget receives except the signer.
///
/// The signer (or the ambient client, in the multi-connector variant) is handed
/// over separately because it is a live object rather than data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub default_transaction_blocks: Vec<TransactionBlock>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_override: Option<ThemeOverride>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_menu_logout: Option<bool>,
}

impl WidgetConfig {
    pub fn new(default_transaction_blocks: Vec<TransactionBlock>) -> Self {
        Self {
            default_transaction_blocks,
            chain_id: None,
            theme_override: None,
            show_menu_logout: None,
        }
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub fn with_theme_override(mut self, theme_override: Option<ThemeOverride>) -> Self {
        self.theme_override = theme_override;
        self
    }

    pub fn with_show_menu_logout(mut self, show: bool) -> Self {
        self.show_menu_logout = Some(show);
        self
    }
}
