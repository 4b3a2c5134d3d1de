//! Selectable list loading for web part dropdowns.
//!
//! The web part asks one [`ListSource`] for its options during
//! initialization. Which source is used depends on the [`EnvironmentType`]:
//! - `Local`: [`MockListSource`] returns two fixed placeholder lists
//! - `Connected`: [`SharePointListSource`] issues a single
//!   `GET <site>/_api/web/lists?$filter=Hidden eq false`
//!
//! There is no retry, caching or pagination. A failed load is returned to the
//! caller as a [`ListsError`].

mod environment;
mod error;
mod mock;
mod sharepoint;
mod source;

pub use environment::EnvironmentType;
pub use error::{ListsError, ListsResult};
pub use mock::MockListSource;
pub use sharepoint::SharePointListSource;
pub use source::{ListSource, select_list_source};

pub use propspane_schema::DropdownOption;
