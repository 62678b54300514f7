//! Rectangle geometry for the crop box.
//!
//! This module holds the pure half of the crop tool: value types for points,
//! sizes and rectangles, plus the operations that keep a crop box valid while
//! it is dragged, re-fitted and finally mapped onto image pixels. Nothing in
//! here knows about gestures or the viewport.
//!
//! # Coordinate Spaces
//!
//! - **Viewport space**: the on-screen canvas, origin top-left, independent
//!   of zoom and pan. The crop box lives here.
//! - **Content space**: the zoomable surface. Its size is the rotated image
//!   size multiplied by the zoom scale.
//! - **Image-pixel space**: the upright decoded image after rotation.
//!
//! All rectangles use a top-left origin with y growing downwards. Aspect
//! ratios are expressed as height / width.

mod aspect;
mod edge;
mod pixel;

pub use aspect::{clamp_aspect_ratio, fit_rect_to_content_area, ratio_in_bounds};
pub use edge::{hit_test_edge, resize_from_edge, Edge, ResizeLimits};
pub use pixel::image_crop_rect;

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point (or displacement) in any of the coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Width and height exchanged.
    pub fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Height divided by width.
    pub fn ratio(&self) -> f64 {
        self.height / self.width
    }
}

impl Mul<f64> for Size {
    type Output = Size;

    fn mul(self, factor: f64) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }
}

/// An axis-aligned rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// A rectangle of `size` whose center is `center`.
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Height divided by width.
    pub fn ratio(&self) -> f64 {
        self.size.ratio()
    }

    pub fn is_valid(&self) -> bool {
        self.origin.x.is_finite() && self.origin.y.is_finite() && self.size.is_valid()
    }

    /// Half-open containment: the min edges are inside, the max edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Whether `other` lies inside this rectangle, allowing `tolerance` of
    /// floating-point slack on every side.
    pub fn contains_rect(&self, other: &Rect, tolerance: f64) -> bool {
        other.min_x() >= self.min_x() - tolerance
            && other.min_y() >= self.min_y() - tolerance
            && other.max_x() <= self.max_x() + tolerance
            && other.max_y() <= self.max_y() + tolerance
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    /// Negative values grow the rectangle.
    pub fn inset_by(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width - 2.0 * dx,
            self.size.height - 2.0 * dy,
        )
    }

    pub fn offset_by(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width,
            self.size.height,
        )
    }
}

/// Distances from each side of an enclosing frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Insets of `inner` measured from the sides of `outer`.
    pub fn between(outer: &Rect, inner: &Rect) -> Self {
        Self::new(
            inner.min_y() - outer.min_y(),
            inner.min_x() - outer.min_x(),
            outer.max_y() - inner.max_y(),
            outer.max_x() - inner.max_x(),
        )
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }
}
