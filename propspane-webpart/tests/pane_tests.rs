//! Property pane content and reactive editing.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use propspane_schema::{DropdownOption, FieldKind, FieldType, OptionSource};
use propspane_webpart::schema::PropertyPaneConfiguration;
use propspane_webpart::{
    ClientSideWebPart, PaneChange, PaneStrings, PropsWebPart, WebPartContext, WebPartHost,
    WebPartManifest, WebPartProperties, WebPartResult,
};
use serde_json::json;

async fn initialized_web_part() -> PropsWebPart {
    let mut web_part = PropsWebPart::new();
    web_part.on_init(&WebPartContext::local()).await.unwrap();
    web_part
}

// ── Pane content ────────────────────────────────────────────────

#[tokio::test]
async fn one_page_one_group_with_localized_names() {
    let web_part = initialized_web_part().await;
    let pane = web_part.property_pane_configuration(&WebPartProperties::default());

    assert_eq!(pane.pages.len(), 1);
    assert_eq!(pane.pages[0].header.description, "Description");
    assert_eq!(pane.pages[0].groups.len(), 1);
    assert_eq!(pane.pages[0].groups[0].group_name, "Group Name");
}

#[tokio::test]
async fn fields_are_declared_in_order_with_kinds() {
    let web_part = initialized_web_part().await;
    let pane = web_part.property_pane_configuration(&WebPartProperties::default());

    let fields: Vec<(&str, FieldType)> = pane
        .fields()
        .map(|f| (f.target_property.as_str(), f.field_type()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("description", FieldType::Text),
            ("labelField", FieldType::Label),
            ("textboxField", FieldType::Text),
            ("multilineTextboxField", FieldType::MultilineText),
            ("checkboxField", FieldType::Checkbox),
            ("dropdownField", FieldType::Dropdown),
            ("linkField", FieldType::Link),
            ("sliderField", FieldType::Slider),
            ("toggleField", FieldType::Toggle),
            ("listName", FieldType::DynamicDropdown),
        ]
    );
}

#[tokio::test]
async fn fixed_dropdown_declares_three_options() {
    let web_part = initialized_web_part().await;
    let pane = web_part.property_pane_configuration(&WebPartProperties::default());
    let dropdown = pane.field("dropdownField").unwrap();

    assert_eq!(
        dropdown.options().unwrap(),
        &[
            DropdownOption::new("1", "Option 1"),
            DropdownOption::new("2", "Option 2"),
            DropdownOption::new("3", "Option 3"),
        ]
    );
    assert!(dropdown.selected_key().is_none());
}

#[tokio::test]
async fn link_and_toggle_parameters() {
    let web_part = initialized_web_part().await;
    let pane = web_part.property_pane_configuration(&WebPartProperties::default());

    assert_eq!(
        pane.field("linkField").unwrap().kind,
        FieldKind::Link {
            text: "Link text".into(),
            href: "https://dev.office.com/sharepoint/docs/spfx".into(),
            target: "_blank".into(),
        }
    );
    assert_eq!(
        pane.field("toggleField").unwrap().kind,
        FieldKind::Toggle {
            label: "Toggle label".into(),
            on_text: "On".into(),
            off_text: "Off".into(),
        }
    );
}

#[tokio::test]
async fn slider_bounds_do_not_depend_on_value() {
    let web_part = initialized_web_part().await;
    for value in [-5, 0, 50, 100, 400] {
        let props = WebPartProperties {
            slider_field: value,
            ..Default::default()
        };
        let pane = web_part.property_pane_configuration(&props);
        match &pane.field("sliderField").unwrap().kind {
            FieldKind::Slider { min, max, .. } => assert_eq!((*min, *max), (0, 100)),
            other => panic!("expected slider, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn list_field_uses_loaded_options_and_first_key() {
    let web_part = initialized_web_part().await;
    let pane = web_part.property_pane_configuration(&WebPartProperties::default());

    assert_eq!(
        pane.field("listName").unwrap().kind,
        FieldKind::Dropdown {
            label: "Select a list".into(),
            options: vec![
                DropdownOption::new("1", "Mock List 1"),
                DropdownOption::new("2", "Mock List 2"),
            ],
            selected_key: Some("1".into()),
            source: OptionSource::Dynamic,
        }
    );
}

#[tokio::test]
async fn building_twice_is_identical() {
    let web_part = initialized_web_part().await;
    let props = WebPartProperties {
        description: "same".into(),
        ..Default::default()
    };
    let first = web_part.property_pane_configuration(&props);
    let second = web_part.property_pane_configuration(&props);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn injected_strings_reach_the_pane() {
    let web_part = PropsWebPart::new().with_strings(PaneStrings {
        property_pane_description: "Beschreibung".into(),
        basic_group_name: "Gruppe".into(),
        description_field_label: "Beschreibungsfeld".into(),
    });
    let pane = web_part.property_pane_configuration(&WebPartProperties::default());

    assert_eq!(pane.pages[0].header.description, "Beschreibung");
    assert_eq!(pane.pages[0].groups[0].group_name, "Gruppe");
    assert_eq!(
        pane.field("description").unwrap().kind,
        FieldKind::TextField {
            label: "Beschreibungsfeld".into(),
            multiline: false,
        }
    );
}

#[test]
fn props_web_part_uses_apply_button_mode() {
    let web_part = PropsWebPart::new();
    assert!(web_part.disable_reactive_property_changes());
    assert_eq!(web_part.data_version().to_string(), "1.0");
    assert_eq!(web_part.manifest().alias, "SpFxPropsWebPart");
}

// ── Reactive mode ───────────────────────────────────────────────

/// Same web part, with edits applied as they happen.
struct Reactive(PropsWebPart);

#[async_trait]
impl ClientSideWebPart for Reactive {
    type Properties = WebPartProperties;

    fn manifest(&self) -> WebPartManifest {
        self.0.manifest()
    }

    async fn on_init(&mut self, context: &WebPartContext) -> WebPartResult<()> {
        self.0.on_init(context).await
    }

    fn property_pane_configuration(
        &self,
        properties: &WebPartProperties,
    ) -> PropertyPaneConfiguration {
        self.0.property_pane_configuration(properties)
    }

    fn render(&self, properties: &WebPartProperties) -> String {
        self.0.render(properties)
    }

    fn validate_property(&self, name: &str, properties: &WebPartProperties) -> WebPartResult<()> {
        self.0.validate_property(name, properties)
    }

    fn reconcile_properties(&self, properties: &mut WebPartProperties) -> bool {
        self.0.reconcile_properties(properties)
    }
}

#[tokio::test]
async fn reactive_edits_commit_immediately() {
    let mut host =
        WebPartHost::with_defaults(Reactive(PropsWebPart::new()), WebPartContext::local());
    host.initialize().await.unwrap();

    let change = host
        .on_property_pane_field_changed("dropdownField", json!("3"))
        .unwrap();
    assert_eq!(change, PaneChange::Applied);
    assert!(!host.has_pending_changes());
    assert!(host.render().unwrap().contains("Dropdown selected value: 3"));
}

#[tokio::test]
async fn reactive_edits_are_still_validated() {
    let mut host =
        WebPartHost::with_defaults(Reactive(PropsWebPart::new()), WebPartContext::local());
    host.initialize().await.unwrap();

    assert!(host.on_property_pane_field_changed("sliderField", json!(-1)).is_err());
    assert_eq!(host.properties().slider_field, 0);
}
