//! Gallery page that renders a lazily loaded view.
//!
//! DESIGN
//! ======
//! The view is fetched through the session `ViewCache`, so the factory for a
//! route only runs on the first visit. While the load is pending the
//! `Suspense` fallback is shown in the outlet.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::ViewCache;
use crate::routes::LazyViews;
use crate::routes::nav::{ViewLoadError, ViewLoader};
use crate::routes::table::RouteName;
use crate::views::{CatalogLoader, ViewModule};

/// Page for one gallery route.
#[component]
pub fn ShowcasePage(name: RouteName) -> impl IntoView {
    let cache = expect_context::<ViewCache>();
    let module = LocalResource::new(move || {
        let cache = Arc::clone(&cache);
        async move { load_view(&cache, &CatalogLoader, name).await }
    });

    view! {
        <section class="showcase" data-route=name.as_str()>
            <Suspense fallback=move || view! { <p class="showcase__loading">"Loading..."</p> }>
                {move || {
                    module
                        .get()
                        .map(|loaded| match loaded {
                            Ok(module) => view! { <ViewBody module/> }.into_any(),
                            Err(err) => {
                                view! { <p class="showcase__error">{error_notice(&err)}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

/// Load a view through the shared cache. Failures are returned, not cached.
async fn load_view<L>(cache: &LazyViews<ViewModule>, loader: &L, name: RouteName) -> Result<Arc<ViewModule>, ViewLoadError>
where
    L: ViewLoader<View = ViewModule>,
{
    cache.get_or_load(name, |n| loader.load(n)).await
}

fn error_notice(err: &ViewLoadError) -> String {
    format!("Could not load {}: {}", err.name, err.reason)
}

#[component]
fn ViewBody(module: Arc<ViewModule>) -> impl IntoView {
    let demos = module
        .demos
        .iter()
        .map(|demo| {
            view! {
                <li class="showcase__demo" id=demo.slug>
                    <h3>{demo.title}</h3>
                    <p class="showcase__technique">{demo.technique}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="showcase__header">
            <h1>{module.title}</h1>
            <p>{module.tagline}</p>
        </header>
        <ul class="showcase__demos">{demos}</ul>
    }
}
