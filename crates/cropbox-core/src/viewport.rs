//! Zoom and pan state of the scrollable image surface.
//!
//! The surface itself (scroll physics, pinch handling, rendering) belongs to
//! the UI layer. The crop session keeps this mirror of its state so zoom,
//! offset and the crop box can be updated together.

use crate::geometry::{EdgeInsets, Point, Rect, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom_scale: f64,
    pub min_zoom_scale: f64,
    pub max_zoom_scale: f64,
    /// Scroll position of the surface's top-left corner.
    pub content_offset: Point,
    /// Size of the surface at the current zoom scale.
    pub content_size: Size,
    /// Insets of the crop box from the viewport's sides.
    pub content_inset: EdgeInsets,
}

impl ViewportState {
    /// A surface showing `content_size` at zoom 1.
    pub fn new(content_size: Size, min_zoom_scale: f64, max_zoom_scale: f64) -> Self {
        Self {
            zoom_scale: 1.0,
            min_zoom_scale,
            max_zoom_scale,
            content_offset: Point::ZERO,
            content_size,
            content_inset: EdgeInsets::default(),
        }
    }

    /// Zoom to `scale`, clamped to the zoom limits. The content size follows
    /// the zoom proportionally.
    ///
    /// Returns the factor actually applied (new scale / old scale).
    pub fn set_zoom_scale(&mut self, scale: f64) -> f64 {
        let clamped = scale.clamp(self.min_zoom_scale, self.max_zoom_scale);
        let factor = clamped / self.zoom_scale;
        self.zoom_scale = clamped;
        self.content_size = self.content_size * factor;
        factor
    }

    /// Multiply the zoom by `factor`, subject to the zoom limits.
    pub fn zoom_by(&mut self, factor: f64) -> f64 {
        self.set_zoom_scale(self.zoom_scale * factor)
    }

    /// Zoom by `factor` so the content under viewport point `from` ends up
    /// under viewport point `to`.
    ///
    /// Returns the factor actually applied after clamping.
    pub fn zoom_around(&mut self, factor: f64, from: Point, to: Point) -> f64 {
        let anchor = from + self.content_offset;
        let applied = self.zoom_by(factor);
        self.content_offset = anchor.scaled(applied) - to;
        applied
    }

    /// Set the lower zoom limit, widening the upper limit if needed. The
    /// zoom itself is not touched.
    pub fn set_min_zoom_scale(&mut self, scale: f64) {
        self.min_zoom_scale = scale;
        if self.max_zoom_scale < scale {
            self.max_zoom_scale = scale;
        }
    }

    /// Clamp the offset to the range where the surface covers `crop_box`.
    ///
    /// This is where a scroll view whose insets match the crop box comes to
    /// rest. An axis on which the surface is smaller than the box is left
    /// alone.
    pub fn clamp_offset_to_cover(&mut self, crop_box: Rect) {
        let min_x = -crop_box.min_x();
        let max_x = self.content_size.width - crop_box.max_x();
        if min_x <= max_x {
            self.content_offset.x = self.content_offset.x.clamp(min_x, max_x);
        }

        let min_y = -crop_box.min_y();
        let max_y = self.content_size.height - crop_box.max_y();
        if min_y <= max_y {
            self.content_offset.y = self.content_offset.y.clamp(min_y, max_y);
        }
    }

    /// Where the zoomed surface sits in viewport space.
    pub fn image_frame(&self) -> Rect {
        Rect::from_origin_size(
            Point::new(-self.content_offset.x, -self.content_offset.y),
            self.content_size,
        )
    }
}
