//! Property pane descriptor types.
//!
//! A web part declares its user-editable configuration as a
//! [`PropertyPaneConfiguration`]: pages containing named groups containing an
//! ordered list of [`PropertyPaneField`]s. The host's side panel renders the
//! descriptor; this crate only defines its shape and ergonomic constructors.
//!
//! # Example
//!
//! ```
//! use propspane_schema::{DropdownOption, PropertyPaneConfiguration, PropertyPaneField};
//!
//! let pane = PropertyPaneConfiguration::single_group(
//!     "Description",
//!     "Group Name",
//!     vec![
//!         PropertyPaneField::text_field("description", "Description Field"),
//!         PropertyPaneField::slider("sliderField", "Slider label", 0, 100),
//!         PropertyPaneField::dynamic_dropdown(
//!             "listName",
//!             "Select a list",
//!             vec![DropdownOption::new("1", "Mock List 1")],
//!         ),
//!     ],
//! );
//!
//! assert_eq!(pane.field("listName").unwrap().selected_key(), Some("1"));
//! ```

mod field;
mod pane;

pub use field::{DropdownOption, FieldKind, FieldType, OptionSource, PropertyPaneField};
pub use pane::{PageHeader, PropertyPaneConfiguration, PropertyPaneGroup, PropertyPanePage};
