//! The property showcase web part.
//!
//! Declares one field of every pane kind, a dropdown fed from the site's
//! lists, and renders the current values.

use crate::context::WebPartContext;
use crate::error::{WebPartError, WebPartResult};
use crate::properties::{
    CHECKBOX_FIELD, DESCRIPTION, DROPDOWN_FIELD, DropdownChoice, LABEL_FIELD, LINK_FIELD,
    LIST_NAME, MULTILINE_TEXTBOX_FIELD, SLIDER_FIELD, SLIDER_MAX, SLIDER_MIN, TEXTBOX_FIELD,
    TOGGLE_FIELD, WebPartProperties,
};
use crate::render::render_html;
use crate::resources::{PaneStrings, WebPartStyles};
use crate::web_part::{ClientSideWebPart, WebPartManifest};
use async_trait::async_trait;
use propspane_lists::ListSource;
use propspane_schema::{DropdownOption, PropertyPaneConfiguration, PropertyPaneField};
use tracing::{debug, info, warn};

const DOCS_URL: &str = "https://dev.office.com/sharepoint/docs/spfx";

pub struct PropsWebPart {
    strings: PaneStrings,
    styles: WebPartStyles,
    options: Vec<DropdownOption>,
    /// Replaces the context-selected source when set.
    list_source: Option<Box<dyn ListSource>>,
}

impl Default for PropsWebPart {
    fn default() -> Self {
        Self::new()
    }
}

impl PropsWebPart {
    pub fn new() -> Self {
        Self {
            strings: PaneStrings::default(),
            styles: WebPartStyles::default(),
            options: Vec::new(),
            list_source: None,
        }
    }

    pub fn with_list_source(mut self, source: Box<dyn ListSource>) -> Self {
        self.list_source = Some(source);
        self
    }

    pub fn with_strings(mut self, strings: PaneStrings) -> Self {
        self.strings = strings;
        self
    }

    pub fn with_styles(mut self, styles: WebPartStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Lists loaded by the last successful initialization.
    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    async fn load_options(&self, context: &WebPartContext) -> WebPartResult<Vec<DropdownOption>> {
        let options = match &self.list_source {
            Some(source) => source.load_options().await?,
            None => context.list_source()?.load_options().await?,
        };
        Ok(options)
    }

    fn fixed_dropdown_options() -> Vec<DropdownOption> {
        DropdownChoice::ALL
            .iter()
            .map(|c| DropdownOption::new(c.key(), c.text()))
            .collect()
    }
}

#[async_trait]
impl ClientSideWebPart for PropsWebPart {
    type Properties = WebPartProperties;

    fn manifest(&self) -> WebPartManifest {
        WebPartManifest {
            id: "7d6e8c2a-3f1b-4a90-9b5e-1c2d3e4f5a6b".into(),
            alias: "SpFxPropsWebPart".into(),
            title: "SpFx Props".into(),
            description: "Shows every property pane field kind".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }

    // Edits are held until the pane's Apply button is pressed.
    fn disable_reactive_property_changes(&self) -> bool {
        true
    }

    async fn on_init(&mut self, context: &WebPartContext) -> WebPartResult<()> {
        // A failed reload must not leave the previous lists behind.
        self.options.clear();
        let options = self.load_options(context).await?;
        info!("Web part initialized with {} lists", options.len());
        self.options = options;
        Ok(())
    }

    fn property_pane_configuration(
        &self,
        _properties: &WebPartProperties,
    ) -> PropertyPaneConfiguration {
        debug!("Building property pane with {} lists", self.options.len());
        PropertyPaneConfiguration::single_group(
            &self.strings.property_pane_description,
            &self.strings.basic_group_name,
            vec![
                PropertyPaneField::text_field(DESCRIPTION, &self.strings.description_field_label),
                PropertyPaneField::label(LABEL_FIELD, "Label text"),
                PropertyPaneField::text_field(TEXTBOX_FIELD, "Textbox label"),
                PropertyPaneField::multiline_text_field(
                    MULTILINE_TEXTBOX_FIELD,
                    "Multi-line Textbox label",
                ),
                PropertyPaneField::checkbox(CHECKBOX_FIELD, "Checkbox text"),
                PropertyPaneField::dropdown(
                    DROPDOWN_FIELD,
                    "Dropdown label",
                    Self::fixed_dropdown_options(),
                ),
                PropertyPaneField::link(LINK_FIELD, "Link text", DOCS_URL, "_blank"),
                PropertyPaneField::slider(SLIDER_FIELD, "Slider label", SLIDER_MIN, SLIDER_MAX),
                PropertyPaneField::toggle(TOGGLE_FIELD, "Toggle label", "On", "Off"),
                PropertyPaneField::dynamic_dropdown(
                    LIST_NAME,
                    "Select a list",
                    self.options.clone(),
                ),
            ],
        )
    }

    fn render(&self, properties: &WebPartProperties) -> String {
        render_html(properties, &self.styles)
    }

    fn validate_property(&self, name: &str, properties: &WebPartProperties) -> WebPartResult<()> {
        match name {
            SLIDER_FIELD => {
                let value = properties.slider_field;
                if !(SLIDER_MIN..=SLIDER_MAX).contains(&value) {
                    return Err(WebPartError::OutOfRange {
                        property: SLIDER_FIELD.to_string(),
                        value,
                        min: SLIDER_MIN,
                        max: SLIDER_MAX,
                    });
                }
            }
            LIST_NAME => {
                if let Some(value) = &properties.list_name {
                    if !self.options.iter().any(|o| &o.key == value) {
                        return Err(WebPartError::ListNotLoaded {
                            value: value.clone(),
                        });
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn reconcile_properties(&self, properties: &mut WebPartProperties) -> bool {
        let stale = properties
            .list_name
            .as_ref()
            .is_some_and(|key| !self.options.iter().any(|o| &o.key == key));
        if stale {
            warn!("Dropping list selection {:?}: not among loaded lists", properties.list_name);
            properties.list_name = None;
        }
        stale
    }
}
