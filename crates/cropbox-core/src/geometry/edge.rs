//! Edge hit-testing and edge-drag resizing of the crop box.
//!
//! A drag moves only the sides named by the active [`Edge`]; corner edges
//! move two sides. Every side is applied provisionally against the candidate
//! built so far and kept only if the result still satisfies the ratio and
//! padding constraints. Sides are judged independently, so during a corner
//! drag one axis can stick while the other keeps following the pointer.

use super::aspect::ratio_in_bounds;
use super::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// The part of the crop box grabbed by a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Edge {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Edge {
    pub const fn moves_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    pub const fn moves_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }

    pub const fn moves_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    pub const fn moves_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }
}

/// Constraints applied to every side moved by [`resize_from_edge`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeLimits {
    /// Smallest allowed height / width.
    pub min_ratio: f64,
    /// Largest allowed height / width.
    pub max_ratio: f64,
    /// The canvas the crop box is drawn in (viewport space).
    pub container: Rect,
    /// Distance the box must keep from every side of `container`.
    pub padding: f64,
}

impl ResizeLimits {
    fn accepts_ratio(&self, candidate: &Rect) -> bool {
        candidate.size.is_valid()
            && ratio_in_bounds(candidate.ratio(), self.min_ratio, self.max_ratio)
    }
}

/// Classify `point` against the nine hot regions of `hot_rect`.
///
/// `hot_rect` is the crop box outset by `hot_unit / 2` on every side. The
/// four `hot_unit` corner squares are checked first (top-left, top-right,
/// bottom-left, bottom-right), then the edge strips (top, left, right,
/// bottom). Anything else, including the box interior, is [`Edge::None`].
pub fn hit_test_edge(point: Point, hot_rect: Rect, hot_unit: f64) -> Edge {
    let corner = Size::new(hot_unit, hot_unit);
    let far_x = hot_rect.width() - hot_unit;
    let far_y = hot_rect.height() - hot_unit;

    let top_left = Rect::from_origin_size(hot_rect.origin, corner);
    let corners = [
        (top_left, Edge::TopLeft),
        (top_left.offset_by(far_x, 0.0), Edge::TopRight),
        (top_left.offset_by(0.0, far_y), Edge::BottomLeft),
        (top_left.offset_by(far_x, far_y), Edge::BottomRight),
    ];
    if let Some((_, edge)) = corners.iter().find(|(rect, _)| rect.contains(point)) {
        return *edge;
    }

    let strips = [
        (
            Rect::new(hot_rect.min_x(), hot_rect.min_y(), hot_rect.width(), hot_unit),
            Edge::Top,
        ),
        (
            Rect::new(hot_rect.min_x(), hot_rect.min_y(), hot_unit, hot_rect.height()),
            Edge::Left,
        ),
        (
            Rect::new(
                hot_rect.max_x() - hot_unit,
                hot_rect.min_y(),
                hot_unit,
                hot_rect.height(),
            ),
            Edge::Right,
        ),
        (
            Rect::new(
                hot_rect.min_x(),
                hot_rect.max_y() - hot_unit,
                hot_rect.width(),
                hot_unit,
            ),
            Edge::Bottom,
        ),
    ];
    strips
        .iter()
        .find(|(rect, _)| rect.contains(point))
        .map_or(Edge::None, |(_, edge)| *edge)
}

/// Resize the crop box by dragging `edge` by `delta` since the gesture began.
///
/// `begin` is the box at pointer-down and `current` the box committed by the
/// previous frame. Each moved side is recomputed from `begin + delta` on top
/// of the candidate so far; a side whose result violates `limits` keeps its
/// value from `current`. Vertical sides are evaluated before horizontal ones.
pub fn resize_from_edge(
    edge: Edge,
    begin: Rect,
    current: Rect,
    delta: Point,
    limits: &ResizeLimits,
) -> Rect {
    debug_assert!(begin.is_valid(), "degenerate begin rect: {begin:?}");
    debug_assert!(current.is_valid(), "degenerate current rect: {current:?}");

    let min_x = limits.container.min_x() + limits.padding;
    let min_y = limits.container.min_y() + limits.padding;
    let max_x = limits.container.max_x() - limits.padding;
    let max_y = limits.container.max_y() - limits.padding;

    let mut candidate = current;

    if edge.moves_top() {
        let mut moved = candidate;
        moved.origin.y = begin.origin.y + delta.y;
        moved.size.height = begin.size.height - delta.y;
        if limits.accepts_ratio(&moved) && moved.min_y() >= min_y {
            candidate = moved;
        } else {
            tracing::debug!(?edge, "top edge move rejected");
        }
    }

    if edge.moves_bottom() {
        let mut moved = candidate;
        moved.size.height = begin.size.height + delta.y;
        if limits.accepts_ratio(&moved) && moved.max_y() <= max_y {
            candidate = moved;
        } else {
            tracing::debug!(?edge, "bottom edge move rejected");
        }
    }

    if edge.moves_left() {
        let mut moved = candidate;
        moved.origin.x = begin.origin.x + delta.x;
        moved.size.width = begin.size.width - delta.x;
        if limits.accepts_ratio(&moved) && moved.min_x() >= min_x {
            candidate = moved;
        } else {
            tracing::debug!(?edge, "left edge move rejected");
        }
    }

    if edge.moves_right() {
        let mut moved = candidate;
        moved.size.width = begin.size.width + delta.x;
        if limits.accepts_ratio(&moved) && moved.max_x() <= max_x {
            candidate = moved;
        } else {
            tracing::debug!(?edge, "right edge move rejected");
        }
    }

    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOT: f64 = 32.0;

    fn limits() -> ResizeLimits {
        ResizeLimits {
            min_ratio: 9.0 / 32.0,
            max_ratio: 32.0 / 9.0,
            container: Rect::new(0.0, 0.0, 375.0, 700.0),
            padding: 20.0,
        }
    }

    fn hot_rect(crop_box: Rect) -> Rect {
        crop_box.inset_by(-HOT / 2.0, -HOT / 2.0)
    }

    // =========================================================================
    // Hit testing
    // =========================================================================

    #[test]
    fn test_hit_corner_beats_edges() {
        let crop_box = Rect::new(100.0, 100.0, 200.0, 200.0);
        let hot = hot_rect(crop_box);

        // Every point of the top-left 32x32 square is a corner hit
        for dx in [0.0, 10.0, 31.9] {
            for dy in [0.0, 10.0, 31.9] {
                let point = Point::new(hot.min_x() + dx, hot.min_y() + dy);
                assert_eq!(hit_test_edge(point, hot, HOT), Edge::TopLeft);
            }
        }
    }

    #[test]
    fn test_hit_all_corners() {
        let hot = hot_rect(Rect::new(100.0, 100.0, 200.0, 200.0));

        assert_eq!(hit_test_edge(Point::new(300.0, 100.0), hot, HOT), Edge::TopRight);
        assert_eq!(hit_test_edge(Point::new(100.0, 300.0), hot, HOT), Edge::BottomLeft);
        assert_eq!(hit_test_edge(Point::new(300.0, 300.0), hot, HOT), Edge::BottomRight);
    }

    #[test]
    fn test_hit_edges_straddle_border() {
        let hot = hot_rect(Rect::new(100.0, 100.0, 200.0, 200.0));

        // Just outside and just inside the visible top border
        assert_eq!(hit_test_edge(Point::new(200.0, 90.0), hot, HOT), Edge::Top);
        assert_eq!(hit_test_edge(Point::new(200.0, 110.0), hot, HOT), Edge::Top);
        assert_eq!(hit_test_edge(Point::new(95.0, 200.0), hot, HOT), Edge::Left);
        assert_eq!(hit_test_edge(Point::new(305.0, 200.0), hot, HOT), Edge::Right);
        assert_eq!(hit_test_edge(Point::new(200.0, 305.0), hot, HOT), Edge::Bottom);
    }

    #[test]
    fn test_hit_interior_and_outside_are_none() {
        let hot = hot_rect(Rect::new(100.0, 100.0, 200.0, 200.0));

        assert_eq!(hit_test_edge(Point::new(200.0, 200.0), hot, HOT), Edge::None);
        assert_eq!(hit_test_edge(Point::new(10.0, 10.0), hot, HOT), Edge::None);
        assert_eq!(hit_test_edge(Point::new(200.0, 400.0), hot, HOT), Edge::None);
    }

    #[test]
    fn test_edge_sides() {
        assert!(Edge::TopLeft.moves_top() && Edge::TopLeft.moves_left());
        assert!(!Edge::TopLeft.moves_bottom() && !Edge::TopLeft.moves_right());
        assert!(Edge::Bottom.moves_bottom() && !Edge::Bottom.is_corner());
        assert!(Edge::BottomRight.is_corner());
        assert!(!Edge::None.moves_top() && !Edge::None.moves_left());
    }

    // =========================================================================
    // Resizing
    // =========================================================================

    #[test]
    fn test_bottom_right_drag_rejects_width_beyond_container() {
        let begin = Rect::new(20.0, 100.0, 335.0, 400.0);
        let result = resize_from_edge(
            Edge::BottomRight,
            begin,
            begin,
            Point::new(50.0, 50.0),
            &limits(),
        );

        // 20 + 385 > 375 - 20, so the width stays; the height follows
        assert_eq!(result.width(), 335.0);
        assert_eq!(result.height(), 450.0);
        assert_eq!(result.origin, begin.origin);
    }

    #[test]
    fn test_top_drag_moves_origin_and_height() {
        let begin = Rect::new(20.0, 100.0, 335.0, 400.0);
        let result = resize_from_edge(Edge::Top, begin, begin, Point::new(0.0, 30.0), &limits());

        assert_eq!(result, Rect::new(20.0, 130.0, 335.0, 370.0));
    }

    #[test]
    fn test_top_drag_rejected_above_padding() {
        let begin = Rect::new(20.0, 30.0, 335.0, 400.0);
        let result = resize_from_edge(Edge::Top, begin, begin, Point::new(0.0, -20.0), &limits());

        assert_eq!(result, begin);
    }

    #[test]
    fn test_left_drag_rejected_past_padding() {
        let begin = Rect::new(40.0, 100.0, 300.0, 400.0);
        let result = resize_from_edge(Edge::Left, begin, begin, Point::new(-30.0, 0.0), &limits());

        assert_eq!(result, begin);

        let result = resize_from_edge(Edge::Left, begin, begin, Point::new(-15.0, 0.0), &limits());
        assert_eq!(result, Rect::new(25.0, 100.0, 315.0, 400.0));
    }

    #[test]
    fn test_rejected_move_keeps_previous_frame_value() {
        let begin = Rect::new(20.0, 100.0, 300.0, 400.0);
        let current = Rect::new(20.0, 100.0, 320.0, 400.0);

        // Right edge to 20 + 360 = 380 is beyond 355; keep the previous frame's width
        let result = resize_from_edge(Edge::Right, begin, current, Point::new(60.0, 0.0), &limits());
        assert_eq!(result, current);
    }

    #[test]
    fn test_corner_axes_are_independent() {
        // Height shrinking to 20 would make ratio 20/200 < 9/32: rejected.
        // Width growth is fine and must still apply.
        let begin = Rect::new(100.0, 100.0, 200.0, 100.0);
        let result = resize_from_edge(
            Edge::BottomRight,
            begin,
            begin,
            Point::new(20.0, -80.0),
            &limits(),
        );

        assert_eq!(result.height(), 100.0);
        assert_eq!(result.width(), 220.0);
    }

    #[test]
    fn test_drag_through_zero_is_rejected() {
        let begin = Rect::new(100.0, 100.0, 100.0, 100.0);
        let result = resize_from_edge(Edge::Bottom, begin, begin, Point::new(0.0, -150.0), &limits());
        assert_eq!(result, begin);

        let result = resize_from_edge(Edge::Left, begin, begin, Point::new(100.0, 0.0), &limits());
        assert_eq!(result, begin);
    }

    #[test]
    fn test_none_edge_is_identity() {
        let begin = Rect::new(100.0, 100.0, 100.0, 100.0);
        let result = resize_from_edge(Edge::None, begin, begin, Point::new(40.0, 40.0), &limits());
        assert_eq!(result, begin);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
