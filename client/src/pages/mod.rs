//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `showcase` renders any gallery route from its lazily loaded view;
//! `not_found` is the fallback for locations outside the table.

pub mod not_found;
pub mod showcase;
