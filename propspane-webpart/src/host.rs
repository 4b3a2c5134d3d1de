//! Host adapter for client-side web parts.
//!
//! The hosting runtime owns a [`WebPartHost`] per placed web part and drives
//! it in order: initialize once, then build the property pane and render as
//! often as needed. The host also owns the configuration. Pane edits pass
//! through here to be type-checked and validated before they reach it.

use crate::context::WebPartContext;
use crate::error::{WebPartError, WebPartResult};
use crate::lifecycle::LifecycleState;
use crate::version::Version;
use crate::web_part::ClientSideWebPart;
use propspane_schema::{FieldType, PropertyPaneConfiguration};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Configuration as stored by the host, tagged with the schema version that wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedProperties<P> {
    pub data_version: Version,
    pub properties: P,
}

/// Outcome of a property pane edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneChange {
    /// Written to the committed configuration; the host should re-render.
    Applied,
    /// Held until [`WebPartHost::apply_pending_changes`].
    Staged,
}

pub struct WebPartHost<W: ClientSideWebPart> {
    web_part: W,
    context: WebPartContext,
    state: LifecycleState,
    properties: W::Properties,
    pending: Option<W::Properties>,
}

impl<W: ClientSideWebPart> WebPartHost<W> {
    pub fn new(web_part: W, context: WebPartContext, properties: W::Properties) -> Self {
        Self {
            web_part,
            context,
            state: LifecycleState::Uninitialized,
            properties,
            pending: None,
        }
    }

    /// Host with default configuration.
    pub fn with_defaults(web_part: W, context: WebPartContext) -> Self {
        Self::new(web_part, context, W::Properties::default())
    }

    pub fn web_part(&self) -> &W {
        &self.web_part
    }

    pub fn context(&self) -> &WebPartContext {
        &self.context
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Committed configuration.
    pub fn properties(&self) -> &W::Properties {
        &self.properties
    }

    pub fn has_pending_changes(&self) -> bool {
        self.pending.is_some()
    }

    // ---- Lifecycle ----

    /// Runs the web part's initialization and records the outcome.
    ///
    /// Failure leaves the host in [`LifecycleState::Failed`] and is returned
    /// unchanged; there is no fallback. Calling again re-runs initialization.
    pub async fn initialize(&mut self) -> WebPartResult<()> {
        let alias = self.web_part.manifest().alias;
        info!(
            "Initializing web part {} ({} environment)",
            alias, self.context.environment
        );

        let outcome = self.web_part.on_init(&self.context).await;
        self.reconcile();

        match outcome {
            Ok(()) => {
                self.state = LifecycleState::Ready;
                info!("Web part {} ready", alias);
                Ok(())
            }
            Err(e) => {
                warn!("Web part {} failed to initialize: {}", alias, e);
                self.state = LifecycleState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Brings committed and staged properties in line with what the last
    /// initialization loaded.
    fn reconcile(&mut self) {
        if self.web_part.reconcile_properties(&mut self.properties) {
            debug!("Reconciled committed properties after initialization");
        }
        if let Some(pending) = self.pending.as_mut() {
            if self.web_part.reconcile_properties(pending) {
                debug!("Reconciled staged properties after initialization");
            }
        }
    }

    // ---- Property pane ----

    /// Current pane descriptor. Available in every state; reflects staged edits.
    pub fn property_pane_configuration(&self) -> PropertyPaneConfiguration {
        self.web_part
            .property_pane_configuration(self.pending.as_ref().unwrap_or(&self.properties))
    }

    /// Handles an edit coming from the property pane.
    ///
    /// The target must be an editable field of the current pane. In reactive
    /// mode the edit is committed; otherwise it is staged.
    pub fn on_property_pane_field_changed(
        &mut self,
        name: &str,
        value: Value,
    ) -> WebPartResult<PaneChange> {
        if !has_property(&self.properties, name)? {
            return Err(WebPartError::UnknownProperty(name.to_string()));
        }
        let pane = self.property_pane_configuration();
        let field = pane
            .field(name)
            .ok_or_else(|| WebPartError::ReadOnlyProperty(name.to_string()))?;
        if matches!(field.field_type(), FieldType::Label | FieldType::Link) {
            return Err(WebPartError::ReadOnlyProperty(name.to_string()));
        }

        let base = self.pending.as_ref().unwrap_or(&self.properties);
        let updated = self.checked_update(base, name, value)?;

        if self.web_part.disable_reactive_property_changes() {
            debug!("Staged pane change to {}", name);
            self.pending = Some(updated);
            Ok(PaneChange::Staged)
        } else {
            debug!("Applied pane change to {}", name);
            self.properties = updated;
            Ok(PaneChange::Applied)
        }
    }

    /// Commits staged pane edits. Returns false when nothing was staged.
    pub fn apply_pending_changes(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                self.properties = pending;
                debug!("Applied pending pane changes");
                true
            }
            None => false,
        }
    }

    pub fn discard_pending_changes(&mut self) {
        if self.pending.take().is_some() {
            debug!("Discarded pending pane changes");
        }
    }

    /// Programmatic change by the host. Checked like a pane edit, committed
    /// immediately, and not limited to fields shown in the pane.
    pub fn set_property(&mut self, name: &str, value: Value) -> WebPartResult<()> {
        self.properties = self.checked_update(&self.properties, name, value)?;
        Ok(())
    }

    fn checked_update(
        &self,
        base: &W::Properties,
        name: &str,
        value: Value,
    ) -> WebPartResult<W::Properties> {
        let updated = with_property(base, name, value)?;
        self.web_part.validate_property(name, &updated)?;
        Ok(updated)
    }

    // ---- Render ----

    /// Renders committed configuration. Only possible once initialized.
    pub fn render(&self) -> WebPartResult<String> {
        if !self.state.is_ready() {
            return Err(WebPartError::NotReady(self.state.clone()));
        }
        Ok(self.web_part.render(&self.properties))
    }

    // ---- Persistence ----

    pub fn persist(&self) -> PersistedProperties<W::Properties> {
        PersistedProperties {
            data_version: self.web_part.data_version(),
            properties: self.properties.clone(),
        }
    }

    /// Replaces the configuration with a stored one and drops staged edits.
    /// Values are taken as stored, without validation. Once initialized, a list
    /// selection that is not among the loaded lists is unset.
    pub fn restore(&mut self, persisted: PersistedProperties<W::Properties>) -> WebPartResult<()> {
        let supported = self.web_part.data_version();
        if !supported.can_read(&persisted.data_version) {
            return Err(WebPartError::UnsupportedDataVersion {
                found: persisted.data_version,
                supported,
            });
        }
        self.properties = persisted.properties;
        self.pending = None;
        if self.state.is_ready() {
            self.reconcile();
        }
        Ok(())
    }

    pub fn restore_json(&mut self, json: &str) -> WebPartResult<()> {
        let persisted: PersistedProperties<W::Properties> = serde_json::from_str(json)?;
        self.restore(persisted)
    }
}

fn has_property<P: Serialize>(properties: &P, name: &str) -> WebPartResult<bool> {
    let json = serde_json::to_value(properties)?;
    Ok(json.get(name).is_some())
}

/// Writes `value` into the `name` property of `base`, type-checking it
/// against the property model.
fn with_property<P>(base: &P, name: &str, value: Value) -> WebPartResult<P>
where
    P: Serialize + DeserializeOwned,
{
    let mut json = serde_json::to_value(base)?;
    let slot = json
        .as_object_mut()
        .and_then(|object| object.get_mut(name))
        .ok_or_else(|| WebPartError::UnknownProperty(name.to_string()))?;
    *slot = value;

    serde_json::from_value(json).map_err(|e| WebPartError::InvalidValue {
        property: name.to_string(),
        reason: e.to_string(),
    })
}
