//! # Theme Override
//!
//! Optional restyling of the embedded widget, grouped by semantic UI role.
//!
//! Every role is optional. A role left as `None` is omitted on the wire and the
//! widget keeps its own default for it. Roles the widget does not recognise are
//! dropped when deserializing a stored override.

use serde::{Deserialize, Serialize};

/// Root of the theme override tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ThemeColors>,
}

/// Color roles, split into backgrounds and text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundColors>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextColors>,
}

/// Background roles. Values are CSS colors or gradients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_menu: Option<String>,
    /// Connected-wallet button in the top menu, usually a gradient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_menu_wallet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_menu_button: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_input_active_tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_button: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pill: Option<String>,
}

/// Text roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_menu_wallet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_input_active_tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_input_inactive_tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_balance: Option<String>,
}

fn role(value: &str) -> Option<String> {
    Some(value.to_string())
}

impl ThemeOverride {
    /// Dark preset shown by the demo's theme toggle.
    pub fn demo() -> Self {
        ThemeOverride {
            color: Some(ThemeColors {
                background: Some(BackgroundColors {
                    main: role("#0d0d12"),
                    top_menu: role("#17171f"),
                    top_menu_wallet: role("linear-gradient(#ff884d, #ff6a29)"),
                    top_menu_button: role("#ff7733"),
                    card: role("#1c1c26"),
                    horizontal_line: role("linear-gradient(90deg, #23232f, #2d2d3a)"),
                    select_input: role("#262633"),
                    text_input: role("#262633"),
                    switch_input: role("#262633"),
                    switch_input_active_tab: role("#ff7733"),
                    button: role("linear-gradient(#ff884d, #ff6a29)"),
                    close_button: role("#33334a"),
                    pill: role("#33334a"),
                }),
                text: Some(TextColors {
                    main: role("#ffffff"),
                    top_menu_wallet: role("#ffffff"),
                    card_title: role("#f2f2f7"),
                    inner_label: role("#9a9ab0"),
                    outer_label: role("#d0d0de"),
                    error_message: role("#ff5c5c"),
                    text_input: role("#ffffff"),
                    select_input: role("#ffffff"),
                    switch_input_active_tab: role("#ffffff"),
                    switch_input_inactive_tab: role("#9a9ab0"),
                    button: role("#ffffff"),
                    token_balance: role("#9a9ab0"),
                }),
            }),
        }
    }

    /// True when no role is set at all.
    pub fn is_empty(&self) -> bool {
        match &self.color {
            None => true,
            Some(colors) => colors.background.is_none() && colors.text.is_none(),
        }
    }
}
