//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, scroll_reset::ScrollReset};
use crate::pages::{not_found::NotFoundPage, showcase::ShowcasePage};
use crate::routes::LazyViews;
use crate::routes::table::{BASE_SEGMENT, RouteName};
use crate::views::ViewModule;

/// Session-wide cache of loaded views, shared through context.
pub type ViewCache = Arc<LazyViews<ViewModule>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every gallery route lives under the `BASE_PATH` segment. Unmatched paths
/// render `NotFoundPage`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context::<ViewCache>(Arc::new(LazyViews::new()));

    view! {
        <Stylesheet id="leptos" href="/pkg/motion-gallery.css"/>
        <Title text="Motion Gallery"/>

        <Router>
            <ScrollReset/>
            <NavBar/>
            <main class="gallery">
                <Routes fallback=NotFoundPage>
                    <Route
                        path=StaticSegment(BASE_SEGMENT)
                        view=|| view! { <ShowcasePage name=RouteName::Home/> }
                    />
                    <Route
                        path=(StaticSegment(BASE_SEGMENT), StaticSegment(RouteName::SvgAnimations.segment()))
                        view=|| view! { <ShowcasePage name=RouteName::SvgAnimations/> }
                    />
                    <Route
                        path=(StaticSegment(BASE_SEGMENT), StaticSegment(RouteName::GsapExamples.segment()))
                        view=|| view! { <ShowcasePage name=RouteName::GsapExamples/> }
                    />
                    <Route
                        path=(StaticSegment(BASE_SEGMENT), StaticSegment(RouteName::CanvasExamples.segment()))
                        view=|| view! { <ShowcasePage name=RouteName::CanvasExamples/> }
                    />
                    <Route
                        path=(StaticSegment(BASE_SEGMENT), StaticSegment(RouteName::ThreeJsExamples.segment()))
                        view=|| view! { <ShowcasePage name=RouteName::ThreeJsExamples/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
