//! Engine-independent navigation controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Navigator` is the route table in executable form: it resolves an
//! app-relative route path (or a full history-mode href), loads the matched
//! view once, activates it, records the href under `BASE_PATH`, then resets
//! the viewport scroll to the origin. The Leptos layer drives the browser
//! through `leptos_router` but uses the same table, cache, and scroll hook,
//! so both paths behave alike.
//!
//! ERROR HANDLING
//! ==============
//! A failed navigation leaves the previous activation, history, and scroll
//! position untouched. Load failures are not cached; the next navigation to
//! the same route tries again.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use super::lazy::LazyViews;
use super::table::{self, RouteDescriptor, RouteName};
use crate::util::scroll::{self, Viewport};

/// Produces the view for a route. Called at most once per route per
/// successful load.
pub trait ViewLoader {
    type View;

    fn load(&self, name: RouteName) -> impl Future<Output = Result<Self::View, ViewLoadError>>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to load view {name}: {reason}")]
pub struct ViewLoadError {
    pub name: RouteName,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches {href}")]
    NotFound { href: String },
    #[error(transparent)]
    Load(#[from] ViewLoadError),
    #[error("no earlier history entry")]
    NoHistory,
}

/// A completed navigation: which route is active, at which href, with
/// which loaded view.
pub struct Activation<V> {
    pub route: &'static RouteDescriptor,
    pub href: String,
    pub view: Arc<V>,
}

impl<V> Activation<V> {
    pub fn name(&self) -> RouteName {
        self.route.name
    }
}

impl<V> Clone for Activation<V> {
    fn clone(&self) -> Self {
        Self { route: self.route, href: self.href.clone(), view: Arc::clone(&self.view) }
    }
}

impl<V> fmt::Debug for Activation<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation")
            .field("name", &self.route.name)
            .field("href", &self.href)
            .finish_non_exhaustive()
    }
}

pub struct Navigator<L: ViewLoader, V: Viewport> {
    loader: L,
    viewport: V,
    views: LazyViews<L::View>,
    current: Option<Activation<L::View>>,
    history: Vec<String>,
}

impl<L: ViewLoader, V: Viewport> Navigator<L, V> {
    pub fn new(loader: L, viewport: V) -> Self {
        Self { loader, viewport, views: LazyViews::new(), current: None, history: Vec::new() }
    }

    pub fn current(&self) -> Option<&Activation<L::View>> {
        self.current.as_ref()
    }

    /// Hrefs of completed navigations, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_loaded(&self, name: RouteName) -> bool {
        self.views.is_loaded(name)
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Navigate to an app-relative route path such as `/gsap` or `/`. The
    /// recorded href carries the [`table::BASE_PATH`] prefix.
    ///
    /// # Errors
    ///
    /// `NotFound` when no route matches, `Load` when the view fails to load.
    pub async fn navigate(&mut self, path: &str) -> Result<&Activation<L::View>, NavigationError> {
        let Some(route) = table::resolve_path(path) else {
            log::warn!("no route matches {path}");
            return Err(NavigationError::NotFound { href: path.to_owned() });
        };
        self.enter(route, table::join_base(path)).await
    }

    /// Navigate to a full browser href such as `/motion-gallery/gsap`. Hrefs
    /// outside the base prefix never match.
    ///
    /// # Errors
    ///
    /// `NotFound` when no route matches, `Load` when the view fails to load.
    pub async fn navigate_href(&mut self, href: &str) -> Result<&Activation<L::View>, NavigationError> {
        let Some(route) = table::resolve_href(href) else {
            log::warn!("no route matches {href}");
            return Err(NavigationError::NotFound { href: href.to_owned() });
        };
        self.enter(route, href.to_owned()).await
    }

    /// Navigate by route name; lands on the same view as its path.
    ///
    /// # Errors
    ///
    /// `Load` when the view fails to load.
    pub async fn navigate_to(&mut self, name: RouteName) -> Result<&Activation<L::View>, NavigationError> {
        let route = table::find_by_name(name);
        self.enter(route, table::href_for(name)).await
    }

    /// Return to the previous history entry. Scroll is reset here too.
    ///
    /// # Errors
    ///
    /// `NoHistory` when there is no earlier entry, `Load` when the view
    /// fails to load.
    pub async fn back(&mut self) -> Result<&Activation<L::View>, NavigationError> {
        let Some(previous) = self.history.len().checked_sub(2).map(|i| self.history[i].clone()) else {
            return Err(NavigationError::NoHistory);
        };
        let Some(route) = table::resolve_href(&previous) else {
            return Err(NavigationError::NotFound { href: previous });
        };
        let view = self.load(route).await?;
        self.history.pop();
        Ok(self.complete(route, previous, view))
    }

    async fn enter(&mut self, route: &'static RouteDescriptor, href: String) -> Result<&Activation<L::View>, NavigationError> {
        let view = self.load(route).await?;
        self.history.push(href.clone());
        Ok(self.complete(route, href, view))
    }

    async fn load(&self, route: &'static RouteDescriptor) -> Result<Arc<L::View>, NavigationError> {
        let view = self
            .views
            .get_or_load(route.name, |name| self.loader.load(name))
            .await
            .inspect_err(|err| log::warn!("{err}"))?;
        Ok(view)
    }

    fn complete(&mut self, route: &'static RouteDescriptor, href: String, view: Arc<L::View>) -> &Activation<L::View> {
        scroll::reset(&self.viewport);
        log::debug!("navigated to {} ({href})", route.name);
        self.current.insert(Activation { route, href, view })
    }
}

impl<L: ViewLoader, V: Viewport + fmt::Debug> fmt::Debug for Navigator<L, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("current", &self.current.as_ref().map(Activation::name))
            .field("history", &self.history)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}
