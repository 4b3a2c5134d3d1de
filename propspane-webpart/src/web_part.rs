//! Web part capability contract.

use crate::context::WebPartContext;
use crate::error::WebPartResult;
use crate::version::Version;
use async_trait::async_trait;
use propspane_schema::PropertyPaneConfiguration;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Identity of a web part as shown to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPartManifest {
    pub id: String,
    pub alias: String,
    pub title: String,
    pub description: String,
    pub version: String,
}

impl Default for WebPartManifest {
    fn default() -> Self {
        Self {
            id: String::new(),
            alias: String::new(),
            title: String::new(),
            description: String::new(),
            version: "0.0.1".into(),
        }
    }
}

/// Core web part contract. The host adapter drives every web part through it.
#[async_trait]
pub trait ClientSideWebPart: Send {
    /// Configuration object owned by the host.
    type Properties: Serialize + DeserializeOwned + Default + Clone + Send + Sync;

    fn manifest(&self) -> WebPartManifest;

    /// Schema version of [`Self::Properties`] as persisted by the host.
    fn data_version(&self) -> Version {
        Version::new(1, 0)
    }

    /// When true, pane edits are staged until the user applies them.
    fn disable_reactive_property_changes(&self) -> bool {
        false
    }

    /// Loads whatever the web part needs before it can render.
    async fn on_init(&mut self, context: &WebPartContext) -> WebPartResult<()>;

    /// Builds the side panel descriptor. Must not block or fail.
    fn property_pane_configuration(&self, properties: &Self::Properties)
    -> PropertyPaneConfiguration;

    fn render(&self, properties: &Self::Properties) -> String;

    /// Checks a changed property beyond its type, after it has been written
    /// into `properties`.
    fn validate_property(&self, _name: &str, _properties: &Self::Properties) -> WebPartResult<()> {
        Ok(())
    }

    /// Unsets values that depend on state loaded by [`Self::on_init`] and no
    /// longer match it. Returns true when anything changed.
    fn reconcile_properties(&self, _properties: &mut Self::Properties) -> bool {
        false
    }
}
