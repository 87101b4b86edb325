//! Static route table for the gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is declared once at compile time and never changes. Both the
//! engine-independent `Navigator` and the Leptos `<Routes>` declaration read
//! paths, names, and view factories from here.
//!
//! MATCHING
//! ========
//! Locations are addressed in history mode under `BASE_PATH`. Before lookup
//! the query string and fragment are dropped and a single trailing slash is
//! tolerated. Matching on the remaining path is exact and case-sensitive.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::views::{self, ViewModule};

/// Deployment mount point every route is addressed under.
pub const BASE_PATH: &str = "/motion-gallery";

/// Path segment form of [`BASE_PATH`], for `leptos_router` segments.
pub const BASE_SEGMENT: &str = "motion-gallery";

/// Deferred view factory. Only invoked on first navigation to its route.
pub type ViewFactory = fn() -> ViewModule;

/// Symbolic route names used for programmatic navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RouteName {
    Home,
    SvgAnimations,
    GsapExamples,
    CanvasExamples,
    ThreeJsExamples,
}

impl RouteName {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::SvgAnimations,
        Self::GsapExamples,
        Self::CanvasExamples,
        Self::ThreeJsExamples,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::SvgAnimations => "SvgAnimations",
            Self::GsapExamples => "GsapExamples",
            Self::CanvasExamples => "CanvasExamples",
            Self::ThreeJsExamples => "ThreeJsExamples",
        }
    }

    /// Path below [`BASE_PATH`] without the leading slash (`""` for home).
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::SvgAnimations => "svg-animations",
            Self::GsapExamples => "gsap",
            Self::CanvasExamples => "canvas",
            Self::ThreeJsExamples => "threejs",
        }
    }

    /// Slot index into per-route storage, in table order.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = RouteTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| RouteTableError::UnknownName(s.to_owned()))
    }
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: RouteName,
    pub label: &'static str,
    pub component: ViewFactory,
}

impl PartialEq for RouteDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.name == other.name
    }
}

impl Eq for RouteDescriptor {}

/// The gallery routes, in declaration order.
pub static ROUTES: [RouteDescriptor; RouteName::COUNT] = [
    RouteDescriptor {
        path: "/",
        name: RouteName::Home,
        label: "Home",
        component: views::home,
    },
    RouteDescriptor {
        path: "/svg-animations",
        name: RouteName::SvgAnimations,
        label: "SVG",
        component: views::svg_animations,
    },
    RouteDescriptor {
        path: "/gsap",
        name: RouteName::GsapExamples,
        label: "GSAP",
        component: views::gsap_examples,
    },
    RouteDescriptor {
        path: "/canvas",
        name: RouteName::CanvasExamples,
        label: "Canvas",
        component: views::canvas_examples,
    },
    RouteDescriptor {
        path: "/threejs",
        name: RouteName::ThreeJsExamples,
        label: "Three.js",
        component: views::threejs_examples,
    },
];

/// Violations of the route table invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),
    #[error("duplicate route name: {0}")]
    DuplicateName(RouteName),
    #[error("route path must start with '/': {0}")]
    RelativePath(&'static str),
    #[error("unknown route name: {0}")]
    UnknownName(String),
}

/// Check that paths are absolute and that paths and names are unique.
pub fn validate(table: &[RouteDescriptor]) -> Result<(), RouteTableError> {
    for (i, route) in table.iter().enumerate() {
        if !route.path.starts_with('/') {
            return Err(RouteTableError::RelativePath(route.path));
        }
        for earlier in &table[..i] {
            if earlier.path == route.path {
                return Err(RouteTableError::DuplicatePath(route.path));
            }
            if earlier.name == route.name {
                return Err(RouteTableError::DuplicateName(route.name));
            }
        }
    }
    Ok(())
}

/// Drop query and fragment, collapse a trailing slash, default to `/`.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let path = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
    if path.is_empty() { "/" } else { path }
}

/// Resolve an app-relative path (already stripped of [`BASE_PATH`]).
pub fn resolve_path(path: &str) -> Option<&'static RouteDescriptor> {
    let path = normalize(path);
    ROUTES.iter().find(|route| route.path == path)
}

/// Strip [`BASE_PATH`] from a full href. Hrefs outside the base yield `None`.
pub fn strip_base(href: &str) -> Option<&str> {
    let rest = href.strip_prefix(BASE_PATH)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with(['/', '?', '#']) {
        Some(rest)
    } else {
        None
    }
}

/// Resolve a full history-mode href such as `/motion-gallery/gsap`.
pub fn resolve_href(href: &str) -> Option<&'static RouteDescriptor> {
    strip_base(href).and_then(resolve_path)
}

pub fn find_by_name(name: RouteName) -> &'static RouteDescriptor {
    &ROUTES[name.index()]
}

/// Prefix an app-relative path with [`BASE_PATH`]. Home maps to the bare
/// base path.
pub fn join_base(path: &str) -> String {
    match path {
        "" | "/" => BASE_PATH.to_owned(),
        path => format!("{BASE_PATH}{path}"),
    }
}

/// History-mode href for a named route.
pub fn href_for(name: RouteName) -> String {
    join_base(find_by_name(name).path)
}
