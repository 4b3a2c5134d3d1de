//! HTML output of the web part.

use crate::properties::WebPartProperties;
use crate::resources::WebPartStyles;
use std::borrow::Cow;

const LEARN_MORE_URL: &str = "https://aka.ms/spfx";

/// Escapes `& < > " '` as HTML entities. Borrows when nothing needs escaping.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Renders the web part body.
///
/// Only `description` is escaped. The remaining values are written in their
/// literal string form.
pub fn render_html(properties: &WebPartProperties, styles: &WebPartStyles) -> String {
    format!(
        r#"<div class="{root}">
  <div class="{container}">
    <div class="ms-Grid-row ms-bgColor-themeDark ms-fontColor-white {row}">
      <div class="ms-Grid-col ms-u-lg10 ms-u-xl8 ms-u-xlPush2 ms-u-lgPush1">
        <span class="ms-font-xl ms-fontColor-white">Welcome to SPFx!</span>
        <p class="ms-font-l ms-fontColor-white">Customize SharePoint experiences using Web Parts.</p>
        <p class="ms-font-l ms-fontColor-white">{description}</p>
        <a href="{learn_more}" class="{button}">
          <span class="{label}">Learn more</span>
        </a>

        <p class="ms-font-l ms-fontColor-white">Textbox value: {textbox}</p>
        <p class="ms-font-l ms-fontColor-white">Multi-line Textbox value: {multiline}</p>
        <p class="ms-font-l ms-fontColor-white">Checkbox checked: {checkbox}</p>
        <p class="ms-font-l ms-fontColor-white">Dropdown selected value: {dropdown}</p>
        <p class="ms-font-l ms-fontColor-white">Slider value: {slider}</p>
        <p class="ms-font-l ms-fontColor-white">Toggle on: {toggle}</p>
      </div>
    </div>
  </div>
</div>"#,
        root = styles.root,
        container = styles.container,
        row = styles.row,
        button = styles.button,
        label = styles.label,
        learn_more = LEARN_MORE_URL,
        description = escape_html(&properties.description),
        textbox = properties.textbox_field,
        multiline = properties.multiline_textbox_field,
        checkbox = properties.checkbox_field,
        dropdown = properties.dropdown_field,
        slider = properties.slider_field,
        toggle = properties.toggle_field,
    )
}
