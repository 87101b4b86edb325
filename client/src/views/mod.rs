//! View catalog: the deferred factories behind each route.
//!
//! DESIGN
//! ======
//! Each factory builds the page content for one route. Factories are only
//! reached through `CatalogLoader`, which the lazy cache invokes on the first
//! visit to a route.


use serde::Serialize;

use crate::routes::nav::{ViewLoadError, ViewLoader};
use crate::routes::table::{self, RouteName};

/// One demo listed on a gallery page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DemoEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub technique: &'static str,
}

/// Loaded content of a routed view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewModule {
    pub name: RouteName,
    pub title: &'static str,
    pub tagline: &'static str,
    pub demos: Vec<DemoEntry>,
}

const fn demo(slug: &'static str, title: &'static str, technique: &'static str) -> DemoEntry {
    DemoEntry { slug, title, technique }
}

pub fn home() -> ViewModule {
    ViewModule {
        name: RouteName::Home,
        title: "Motion Gallery",
        tagline: "A tour of web animation techniques, one page per toolkit.",
        demos: vec![
            demo("svg", "SVG animations", "Declarative paths and SMIL"),
            demo("gsap", "GSAP examples", "Timelines and tweens"),
            demo("canvas", "Canvas examples", "Immediate-mode 2D drawing"),
            demo("threejs", "Three.js examples", "WebGL scenes"),
        ],
    }
}

pub fn svg_animations() -> ViewModule {
    ViewModule {
        name: RouteName::SvgAnimations,
        title: "SVG Animations",
        tagline: "Vector shapes animated with CSS and SMIL.",
        demos: vec![
            demo("line-draw", "Line drawing", "stroke-dasharray / stroke-dashoffset"),
            demo("morph", "Shape morph", "<animate> on the d attribute"),
            demo("orbit", "Orbiting dots", "<animateMotion> along a path"),
            demo("pulse", "Pulse ring", "CSS transform keyframes"),
        ],
    }
}

pub fn gsap_examples() -> ViewModule {
    ViewModule {
        name: RouteName::GsapExamples,
        title: "GSAP Examples",
        tagline: "Tweens, timelines and scroll-driven motion.",
        demos: vec![
            demo("stagger", "Staggered grid", "gsap.from with stagger"),
            demo("timeline", "Sequenced timeline", "gsap.timeline labels"),
            demo("scroll-trigger", "Scroll reveal", "ScrollTrigger scrub"),
            demo("text-split", "Letter cascade", "SplitText chars"),
        ],
    }
}

pub fn canvas_examples() -> ViewModule {
    ViewModule {
        name: RouteName::CanvasExamples,
        title: "Canvas Examples",
        tagline: "Frame-by-frame drawing on a 2D context.",
        demos: vec![
            demo("particles", "Particle field", "requestAnimationFrame loop"),
            demo("waves", "Sine waves", "Path2D redrawn per frame"),
            demo("bounce", "Bouncing balls", "Velocity and collision"),
        ],
    }
}

pub fn threejs_examples() -> ViewModule {
    ViewModule {
        name: RouteName::ThreeJsExamples,
        title: "Three.js Examples",
        tagline: "Hardware-accelerated 3D scenes.",
        demos: vec![
            demo("cube", "Spinning cube", "Mesh rotation per frame"),
            demo("galaxy", "Particle galaxy", "BufferGeometry points"),
            demo("terrain", "Wireframe terrain", "Displaced PlaneGeometry"),
        ],
    }
}

/// Loads views from the route table's factories.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatalogLoader;

impl ViewLoader for CatalogLoader {
    type View = ViewModule;

    async fn load(&self, name: RouteName) -> Result<ViewModule, ViewLoadError> {
        let view = (table::find_by_name(name).component)();
        if view.name == name {
            Ok(view)
        } else {
            Err(ViewLoadError { name, reason: format!("factory produced {}", view.name) })
        }
    }
}
