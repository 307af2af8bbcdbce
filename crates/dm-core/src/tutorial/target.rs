//! Spotlight target geometry.
//!
//! Decides whether a measured element sits too close to the viewport edges
//! and where to scroll so it lands in the upper part of the screen.

use serde::{Deserialize, Serialize};

/// On-screen bounding box of a UI element, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Zero height means the element has not been laid out yet.
    pub fn is_laid_out(&self) -> bool {
        self.height > 0.0
    }
}

/// Visible area of the scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub height: f64,
    pub scroll_offset: f64,
}

/// Thresholds for auto-scrolling a target into view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollPolicy {
    /// Elements whose top is above this line are likely under the status bar.
    pub near_top: f64,
    /// Distance from the viewport bottom treated as obscured (tab bar, home indicator).
    pub near_bottom: f64,
    /// Where the element should land, as a fraction of the viewport height.
    pub focus_fraction: f64,
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self {
            near_top: 100.0,
            near_bottom: 150.0,
            focus_fraction: 0.25,
        }
    }
}

impl ScrollPolicy {
    pub fn needs_scroll(&self, rect: &Rect, viewport: &Viewport) -> bool {
        rect.y < self.near_top || rect.bottom() > viewport.height - self.near_bottom
    }

    /// Scroll offset that puts the element's top at `focus_fraction` of the viewport.
    pub fn scroll_target(&self, rect: &Rect, viewport: &Viewport) -> f64 {
        let offset = viewport.scroll_offset + rect.y - viewport.height * self.focus_fraction;
        offset.max(0.0)
    }
}
