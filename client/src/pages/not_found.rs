//! Fallback page for locations that match no declared route.

use leptos::prelude::*;

use crate::routes::table::{RouteName, href_for};

/// Not-found notice. Under SSR the response status is set to 404.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"This address is not part of the gallery."</p>
            <a href=href_for(RouteName::Home) class="not-found__home">
                "Back to the gallery"
            </a>
        </section>
    }
}
