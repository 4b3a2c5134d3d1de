use proptest::prelude::*;
use propspane_webpart::{
    DropdownChoice, WebPartProperties, WebPartStyles, escape_html, render_html,
};

fn render(props: &WebPartProperties) -> String {
    render_html(props, &WebPartStyles::default())
}

// ── Escaping ────────────────────────────────────────────────────

#[test]
fn description_markup_is_escaped() {
    let props = WebPartProperties {
        description: "<b>hi</b>".into(),
        ..Default::default()
    };
    let html = render(&props);
    assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    assert!(!html.contains("<b>hi</b>"));
}

#[test]
fn description_script_injection_does_not_survive() {
    let props = WebPartProperties {
        description: r#""><script>alert('x')</script>"#.into(),
        ..Default::default()
    };
    let html = render(&props);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&quot;&gt;&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

#[test]
fn other_text_fields_are_embedded_literally() {
    let props = WebPartProperties {
        textbox_field: "a & b".into(),
        multiline_textbox_field: "line one\nline two".into(),
        ..Default::default()
    };
    let html = render(&props);
    assert!(html.contains("Textbox value: a & b"));
    assert!(html.contains("Multi-line Textbox value: line one\nline two"));
}

// ── Scalar values ───────────────────────────────────────────────

#[test]
fn scalars_render_as_literal_strings() {
    let props = WebPartProperties {
        checkbox_field: true,
        dropdown_field: DropdownChoice::Two,
        slider_field: 42,
        toggle_field: false,
        ..Default::default()
    };
    let html = render(&props);
    assert!(html.contains("Checkbox checked: true"));
    assert!(html.contains("Dropdown selected value: 2"));
    assert!(html.contains("Slider value: 42"));
    assert!(html.contains("Toggle on: false"));
}

#[test]
fn default_description_and_learn_more_link() {
    let html = render(&WebPartProperties::default());
    assert!(html.contains("SpFxProps"));
    assert!(html.contains(r#"<a href="https://aka.ms/spfx""#));
    assert!(html.contains("Learn more"));
}

#[test]
fn styles_are_injected_as_class_names() {
    let styles = WebPartStyles {
        root: "root_1a2b".into(),
        button: "button_3c4d".into(),
        ..Default::default()
    };
    let html = render_html(&WebPartProperties::default(), &styles);
    assert!(html.starts_with(r#"<div class="root_1a2b">"#));
    assert!(html.contains(r#"class="button_3c4d""#));
}

#[test]
fn render_is_pure() {
    let props = WebPartProperties {
        description: "same <input>".into(),
        ..Default::default()
    };
    assert_eq!(render(&props), render(&props));
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn escaped_text_has_no_markup_chars(input in ".*") {
        let escaped = escape_html(&input);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    #[test]
    fn escaping_clean_text_is_identity(input in "[a-zA-Z0-9 .,;:!?-]*") {
        let escaped = escape_html(&input);
        prop_assert_eq!(escaped.as_ref(), input.as_str());
    }

    #[test]
    fn rendered_description_never_injects_tags(description in ".*") {
        let props = WebPartProperties { description: description.clone(), ..Default::default() };
        let html = render(&props);
        let escaped = escape_html(&description);
        let expected = format!("<p class=\"ms-font-l ms-fontColor-white\">{}</p>", escaped);
        prop_assert!(html.contains(&expected));
    }
}
