//! Top navigation listing every gallery route.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::table::{self, ROUTES, RouteName};

/// One link per route, in table order. The link for the current location
/// is marked active.
#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    let links = ROUTES
        .iter()
        .map(|route| {
            let name = route.name;
            let active = move || is_active(&pathname.get(), name);
            view! {
                <a
                    href=table::href_for(name)
                    class=move || link_class(active())
                    aria-current=move || active().then_some("page")
                >
                    {route.label}
                </a>
            }
        })
        .collect_view();

    view! { <nav class="nav-bar">{links}</nav> }
}

fn is_active(pathname: &str, name: RouteName) -> bool {
    table::resolve_href(pathname).is_some_and(|route| route.name == name)
}

fn link_class(active: bool) -> &'static str {
    if active { "nav-bar__link nav-bar__link--active" } else { "nav-bar__link" }
}
