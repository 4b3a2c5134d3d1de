//! The web part's configuration object.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DESCRIPTION: &str = "description";
pub const LABEL_FIELD: &str = "labelField";
pub const TEXTBOX_FIELD: &str = "textboxField";
pub const MULTILINE_TEXTBOX_FIELD: &str = "multilineTextboxField";
pub const CHECKBOX_FIELD: &str = "checkboxField";
pub const DROPDOWN_FIELD: &str = "dropdownField";
pub const LINK_FIELD: &str = "linkField";
pub const SLIDER_FIELD: &str = "sliderField";
pub const TOGGLE_FIELD: &str = "toggleField";
pub const CUSTOM_FIELD: &str = "customField";
pub const LIST_NAME: &str = "listName";

pub const SLIDER_MIN: i64 = 0;
pub const SLIDER_MAX: i64 = 100;

/// Value of the fixed three-way dropdown. Serialized as its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DropdownChoice {
    #[default]
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

impl DropdownChoice {
    pub const ALL: [DropdownChoice; 3] = [Self::One, Self::Two, Self::Three];

    pub fn key(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::One => "Option 1",
            Self::Two => "Option 2",
            Self::Three => "Option 3",
        }
    }
}

impl fmt::Display for DropdownChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Configuration persisted by the host and edited through the property pane.
///
/// Missing fields deserialize to their defaults so partially stored objects
/// still load. Values are never corrected on load: an out-of-range slider
/// read from storage stays out of range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebPartProperties {
    /// Free-form user text; escaped on render.
    pub description: String,
    pub label_field: String,
    pub textbox_field: String,
    pub multiline_textbox_field: String,
    pub checkbox_field: bool,
    pub dropdown_field: DropdownChoice,
    pub link_field: String,
    pub slider_field: i64,
    pub toggle_field: bool,
    pub custom_field: String,
    /// Key of the selected site list, if any.
    pub list_name: Option<String>,
}

impl Default for WebPartProperties {
    fn default() -> Self {
        Self {
            description: "SpFxProps".to_string(),
            label_field: String::new(),
            textbox_field: String::new(),
            multiline_textbox_field: String::new(),
            checkbox_field: false,
            dropdown_field: DropdownChoice::One,
            link_field: String::new(),
            slider_field: 0,
            toggle_field: false,
            custom_field: String::new(),
            list_name: None,
        }
    }
}
