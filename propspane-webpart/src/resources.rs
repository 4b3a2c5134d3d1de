//! Injected display strings and CSS class names.
//!
//! Localization and theming belong to the host; these defaults are the
//! en-US strings and unhashed class names.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaneStrings {
    pub property_pane_description: String,
    pub basic_group_name: String,
    pub description_field_label: String,
}

impl Default for PaneStrings {
    fn default() -> Self {
        Self {
            property_pane_description: "Description".to_string(),
            basic_group_name: "Group Name".to_string(),
            description_field_label: "Description Field".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebPartStyles {
    pub root: String,
    pub container: String,
    pub row: String,
    pub button: String,
    pub label: String,
}

impl Default for WebPartStyles {
    fn default() -> Self {
        Self {
            root: "spFxProps".to_string(),
            container: "container".to_string(),
            row: "row".to_string(),
            button: "button".to_string(),
            label: "label".to_string(),
        }
    }
}
