use async_trait::async_trait;

use crate::tutorial::{Rect, Viewport};

/// A mounted UI element that can report where it is on screen.
#[async_trait]
pub trait ElementMeasurePort: Send + Sync {
    /// `None` until the element has been laid out.
    async fn measure(&self) -> Option<Rect>;
}

/// Scroll container hosting tutorial targets.
#[async_trait]
pub trait ScrollPort: Send + Sync {
    async fn viewport(&self) -> Viewport;

    /// Start scrolling to `offset`; returns once the scroll has been issued.
    async fn scroll_to(&self, offset: f64);
}
