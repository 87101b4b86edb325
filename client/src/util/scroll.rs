//! Viewport scroll state and the reset-on-navigation hook.
//!
//! Reads and writes `window` scroll offsets in the browser. Outside the
//! browser (SSR, native tests) `WindowViewport` does nothing, matching the
//! other browser-only helpers.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use serde::{Deserialize, Serialize};

/// Scroll offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub top: f64,
    pub left: f64,
}

impl ScrollPosition {
    pub const ORIGIN: Self = Self { top: 0.0, left: 0.0 };

    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }
}

/// Something with a scroll offset that navigation can reset.
pub trait Viewport {
    fn scroll_to(&self, position: ScrollPosition);
    fn position(&self) -> ScrollPosition;
}

/// Runs after every completed navigation: back to the top-left corner.
/// No per-route override and no restoring of earlier offsets.
pub fn reset(viewport: &impl Viewport) {
    viewport.scroll_to(ScrollPosition::ORIGIN);
}

/// The browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to(&self, position: ScrollPosition) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(position.left, position.top);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::trace!("scroll_to {position:?} outside the browser");
        }
    }

    fn position(&self) -> ScrollPosition {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return ScrollPosition::ORIGIN;
            };
            ScrollPosition {
                top: window.scroll_y().unwrap_or_default(),
                left: window.scroll_x().unwrap_or_default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            ScrollPosition::ORIGIN
        }
    }
}
