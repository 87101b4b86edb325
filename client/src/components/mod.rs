//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the gallery chrome around the routed outlet and hook
//! navigation side effects into `leptos_router`.

pub mod nav_bar;
pub mod scroll_reset;
