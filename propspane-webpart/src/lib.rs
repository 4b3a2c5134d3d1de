//! Configurable web part with a property pane.
//!
//! Web parts implement [`ClientSideWebPart`]; the hosting runtime drives them
//! through a [`WebPartHost`], which owns the configuration and the lifecycle
//! state.
//!
//! # Lifecycle
//!
//! 1. **Initialize**: [`WebPartHost::initialize`] runs the web part's data
//!    load once (`Uninitialized -> Ready | Failed`)
//! 2. **Property pane**: [`WebPartHost::property_pane_configuration`] builds
//!    the side panel descriptor from whatever data is currently loaded
//! 3. **Render**: [`WebPartHost::render`] produces markup from the committed
//!    configuration, once `Ready`
//!
//! # Example
//!
//! ```
//! use propspane_webpart::{PropsWebPart, WebPartContext, WebPartHost};
//!
//! # tokio_test_block_on(async {
//! let mut host = WebPartHost::with_defaults(PropsWebPart::new(), WebPartContext::local());
//! host.initialize().await.unwrap();
//!
//! let pane = host.property_pane_configuration();
//! assert_eq!(pane.field("listName").unwrap().selected_key(), Some("1"));
//! assert!(host.render().unwrap().contains("SpFxProps"));
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

mod context;
mod error;
mod host;
mod lifecycle;
pub mod properties;
mod props_web_part;
mod render;
mod resources;
mod version;
mod web_part;

pub use context::{PageContext, WebPartContext};
pub use error::{WebPartError, WebPartResult};
pub use host::{PaneChange, PersistedProperties, WebPartHost};
pub use lifecycle::LifecycleState;
pub use properties::{DropdownChoice, WebPartProperties};
pub use props_web_part::PropsWebPart;
pub use render::{escape_html, render_html};
pub use resources::{PaneStrings, WebPartStyles};
pub use version::Version;
pub use web_part::{ClientSideWebPart, WebPartManifest};

pub use propspane_lists::{EnvironmentType, ListSource, ListsError};
pub use propspane_schema as schema;
