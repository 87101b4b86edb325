//! Scroll reset after each completed navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside `<Router>`. Whenever the location settles on a
//! declared route, including the first load, the window scrolls back to the
//! origin. The whole location is tracked, so a query or fragment change is a
//! navigation too. Unmatched locations leave the scroll position alone.

#[cfg(test)]
#[path = "scroll_reset_test.rs"]
mod scroll_reset_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::table;
use crate::util::scroll::{self, Viewport, WindowViewport};

#[component]
pub fn ScrollReset() -> impl IntoView {
    let location = use_location();
    let (pathname, search, hash) = (location.pathname, location.search, location.hash);

    Effect::new(move || {
        search.track();
        hash.track();
        reset_if_routed(&WindowViewport, &pathname.get());
    });
}

/// Reset `viewport` when `pathname` resolves to a declared route. Returns
/// whether a reset happened.
fn reset_if_routed(viewport: &impl Viewport, pathname: &str) -> bool {
    let routed = table::resolve_href(pathname).is_some();
    if routed {
        scroll::reset(viewport);
    }
    routed
}
