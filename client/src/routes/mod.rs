//! Route table, lazy view cache, and navigation controller.
//!
//! ARCHITECTURE
//! ============
//! `table` is the static declaration every other layer reads from. `lazy`
//! holds views that are loaded on first visit. `nav` composes both with a
//! `Viewport` into an engine-independent controller; the Leptos layer in
//! `app` binds the same table to `leptos_router`.

pub mod lazy;
pub mod nav;
pub mod table;

pub use lazy::LazyViews;
pub use nav::{Activation, NavigationError, Navigator, ViewLoadError, ViewLoader};
pub use table::{BASE_PATH, ROUTES, RouteDescriptor, RouteName, RouteTableError};
