//! Page / group structure of a property pane.

use crate::field::PropertyPaneField;
use serde::{Deserialize, Serialize};

/// Full descriptor handed to the host's side panel renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPaneConfiguration {
    pub pages: Vec<PropertyPanePage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPanePage {
    pub header: PageHeader,
    pub groups: Vec<PropertyPaneGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHeader {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPaneGroup {
    pub group_name: String,
    pub group_fields: Vec<PropertyPaneField>,
}

impl PropertyPaneConfiguration {
    /// Single page, single group.
    pub fn single_group(
        page_description: &str,
        group_name: &str,
        fields: Vec<PropertyPaneField>,
    ) -> Self {
        Self {
            pages: vec![PropertyPanePage {
                header: PageHeader {
                    description: page_description.into(),
                },
                groups: vec![PropertyPaneGroup {
                    group_name: group_name.into(),
                    group_fields: fields,
                }],
            }],
        }
    }

    /// All fields in declaration order, across pages and groups.
    pub fn fields(&self) -> impl Iterator<Item = &PropertyPaneField> {
        self.pages
            .iter()
            .flat_map(|p| p.groups.iter())
            .flat_map(|g| g.group_fields.iter())
    }

    /// First field bound to `target_property`.
    pub fn field(&self, target_property: &str) -> Option<&PropertyPaneField> {
        self.fields().find(|f| f.target_property == target_property)
    }
}
