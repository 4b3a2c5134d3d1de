//! Property pane field descriptors.

use serde::{Deserialize, Serialize};

// ---- Dropdown Option ----

/// One selectable `(key, text)` entry of a dropdown field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropdownOption {
    pub key: String,
    pub text: String,
}

impl DropdownOption {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// Where a dropdown's options come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSource {
    /// Options are declared inline and never change.
    Fixed,
    /// Options are supplied at build time from data loaded during initialization.
    Dynamic,
}

// ---- Field Kind ----

/// Kind-specific parameters of a pane field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FieldKind {
    Label {
        text: String,
    },
    TextField {
        label: String,
        multiline: bool,
    },
    Checkbox {
        text: String,
    },
    Dropdown {
        label: String,
        options: Vec<DropdownOption>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selected_key: Option<String>,
        source: OptionSource,
    },
    Link {
        text: String,
        href: String,
        target: String,
    },
    Slider {
        label: String,
        min: i64,
        max: i64,
        step: i64,
    },
    Toggle {
        label: String,
        on_text: String,
        off_text: String,
    },
}

/// Flat discriminant over [`FieldKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Label,
    Text,
    MultilineText,
    Checkbox,
    Dropdown,
    DynamicDropdown,
    Link,
    Slider,
    Toggle,
}

impl FieldKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::Label { .. } => FieldType::Label,
            FieldKind::TextField { multiline: false, .. } => FieldType::Text,
            FieldKind::TextField { multiline: true, .. } => FieldType::MultilineText,
            FieldKind::Checkbox { .. } => FieldType::Checkbox,
            FieldKind::Dropdown {
                source: OptionSource::Fixed,
                ..
            } => FieldType::Dropdown,
            FieldKind::Dropdown {
                source: OptionSource::Dynamic,
                ..
            } => FieldType::DynamicDropdown,
            FieldKind::Link { .. } => FieldType::Link,
            FieldKind::Slider { .. } => FieldType::Slider,
            FieldKind::Toggle { .. } => FieldType::Toggle,
        }
    }
}

// ---- Property Pane Field ----

/// A single editable (or display-only) field bound to one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPaneField {
    /// Name of the configuration property this field reads and writes.
    pub target_property: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl PropertyPaneField {
    /// Single-line text input.
    pub fn text_field(target: &str, label: &str) -> Self {
        Self::new(
            target,
            FieldKind::TextField {
                label: label.into(),
                multiline: false,
            },
        )
    }

    /// Multi-line text input.
    pub fn multiline_text_field(target: &str, label: &str) -> Self {
        Self::new(
            target,
            FieldKind::TextField {
                label: label.into(),
                multiline: true,
            },
        )
    }

    /// Display-only label.
    pub fn label(target: &str, text: &str) -> Self {
        Self::new(target, FieldKind::Label { text: text.into() })
    }

    pub fn checkbox(target: &str, text: &str) -> Self {
        Self::new(target, FieldKind::Checkbox { text: text.into() })
    }

    /// Dropdown with a fixed option list and no preselection.
    pub fn dropdown(target: &str, label: &str, options: Vec<DropdownOption>) -> Self {
        Self::new(
            target,
            FieldKind::Dropdown {
                label: label.into(),
                options,
                selected_key: None,
                source: OptionSource::Fixed,
            },
        )
    }

    /// Dropdown fed from loaded data. Preselects the first option when there is one.
    pub fn dynamic_dropdown(target: &str, label: &str, options: Vec<DropdownOption>) -> Self {
        let selected_key = options.first().map(|o| o.key.clone());
        Self::new(
            target,
            FieldKind::Dropdown {
                label: label.into(),
                options,
                selected_key,
                source: OptionSource::Dynamic,
            },
        )
    }

    /// Display-only link with a fixed target.
    pub fn link(target: &str, text: &str, href: &str, link_target: &str) -> Self {
        Self::new(
            target,
            FieldKind::Link {
                text: text.into(),
                href: href.into(),
                target: link_target.into(),
            },
        )
    }

    /// Bounded integer slider with a step of 1.
    pub fn slider(target: &str, label: &str, min: i64, max: i64) -> Self {
        Self::new(
            target,
            FieldKind::Slider {
                label: label.into(),
                min,
                max,
                step: 1,
            },
        )
    }

    pub fn toggle(target: &str, label: &str, on_text: &str, off_text: &str) -> Self {
        Self::new(
            target,
            FieldKind::Toggle {
                label: label.into(),
                on_text: on_text.into(),
                off_text: off_text.into(),
            },
        )
    }

    fn new(target: &str, kind: FieldKind) -> Self {
        Self {
            target_property: target.into(),
            kind,
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Options offered by a dropdown field, `None` for every other kind.
    pub fn options(&self) -> Option<&[DropdownOption]> {
        match &self.kind {
            FieldKind::Dropdown { options, .. } => Some(options),
            _ => None,
        }
    }

    /// Preselected key of a dropdown field.
    pub fn selected_key(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Dropdown { selected_key, .. } => selected_key.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_splits_text_by_multiline() {
        assert_eq!(
            PropertyPaneField::text_field("a", "A").field_type(),
            FieldType::Text
        );
        assert_eq!(
            PropertyPaneField::multiline_text_field("a", "A").field_type(),
            FieldType::MultilineText
        );
    }

    #[test]
    fn field_type_splits_dropdown_by_source() {
        let fixed = PropertyPaneField::dropdown("d", "D", vec![DropdownOption::new("1", "One")]);
        let dynamic = PropertyPaneField::dynamic_dropdown("d", "D", Vec::new());
        assert_eq!(fixed.field_type(), FieldType::Dropdown);
        assert_eq!(dynamic.field_type(), FieldType::DynamicDropdown);
    }

    #[test]
    fn kind_serializes_with_type_tag() {
        let field = PropertyPaneField::toggle("toggleField", "Toggle label", "On", "Off");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "toggle");
        assert_eq!(json["targetProperty"], "toggleField");
        assert_eq!(json["onText"], "On");
        assert_eq!(json["offText"], "Off");
    }

    #[test]
    fn unset_selected_key_is_omitted() {
        let field = PropertyPaneField::dynamic_dropdown("listName", "Select a list", Vec::new());
        let json = serde_json::to_value(&field).unwrap();
        assert!(json.get("selectedKey").is_none());
        assert_eq!(json["source"], "dynamic");
    }

    #[test]
    fn non_dropdown_has_no_options() {
        let field = PropertyPaneField::checkbox("checkboxField", "Checkbox text");
        assert!(field.options().is_none());
        assert!(field.selected_key().is_none());
    }
}
