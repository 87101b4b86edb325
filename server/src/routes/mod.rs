//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gallery uses history-mode URLs, so every path under `BASE_PATH` must
//! return the app shell rather than a server 404. Declared routes are
//! rendered by `leptos_routes`; anything else falls through to
//! `file_and_error_handler`, which serves a static file if one exists and
//! otherwise renders the shell (the client shows its not-found page).

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use client::routes::table::{self, ROUTES, RouteName, RouteTableError, href_for};

/// Routes that live outside the Leptos app: root redirect and health probe.
pub fn shell_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(redirect_to_gallery))
        .route("/healthz", get(healthz))
}

/// Full application: Leptos SSR under the base prefix plus static assets.
///
/// # Errors
///
/// Returns the first violation if the route table is inconsistent.
pub fn app(options: LeptosOptions) -> Result<Router, RouteTableError> {
    table::validate(&ROUTES)?;
    let routes = generate_route_list(client::app::App);
    let pkg_dir = PathBuf::from(&*options.site_root).join(&*options.site_pkg_dir);

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(options);

    Ok(shell_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn redirect_to_gallery() -> Redirect {
    Redirect::temporary(&href_for(RouteName::Home))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
