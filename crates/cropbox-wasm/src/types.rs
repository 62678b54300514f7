//! WASM-compatible wrapper types for crop state.
//!
//! These mirror the core geometry and viewport types with flat, getter-only
//! fields so TypeScript can read them without knowing the Rust layout.

use cropbox_core::{Edge, GestureOutcome, RatioPreset, Rect, ViewportState};
use wasm_bindgen::prelude::*;

/// A rectangle for JavaScript, in viewport points or image pixels depending
/// on where it came from.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsRect {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<Rect> for JsRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.min_x(),
            y: rect.min_y(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// The zoomable surface's state, flattened for JavaScript.
///
/// The UI applies `offset_x`/`offset_y` and `zoom_scale` to its scroll view
/// and uses the insets so the view can scroll the image edges up to the crop
/// box.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsViewport {
    inner: ViewportState,
}

#[wasm_bindgen]
impl JsViewport {
    #[wasm_bindgen(getter)]
    pub fn zoom_scale(&self) -> f64 {
        self.inner.zoom_scale
    }

    #[wasm_bindgen(getter)]
    pub fn min_zoom_scale(&self) -> f64 {
        self.inner.min_zoom_scale
    }

    #[wasm_bindgen(getter)]
    pub fn max_zoom_scale(&self) -> f64 {
        self.inner.max_zoom_scale
    }

    #[wasm_bindgen(getter)]
    pub fn offset_x(&self) -> f64 {
        self.inner.content_offset.x
    }

    #[wasm_bindgen(getter)]
    pub fn offset_y(&self) -> f64 {
        self.inner.content_offset.y
    }

    #[wasm_bindgen(getter)]
    pub fn content_width(&self) -> f64 {
        self.inner.content_size.width
    }

    #[wasm_bindgen(getter)]
    pub fn content_height(&self) -> f64 {
        self.inner.content_size.height
    }

    #[wasm_bindgen(getter)]
    pub fn inset_top(&self) -> f64 {
        self.inner.content_inset.top
    }

    #[wasm_bindgen(getter)]
    pub fn inset_left(&self) -> f64 {
        self.inner.content_inset.left
    }

    #[wasm_bindgen(getter)]
    pub fn inset_bottom(&self) -> f64 {
        self.inner.content_inset.bottom
    }

    #[wasm_bindgen(getter)]
    pub fn inset_right(&self) -> f64 {
        self.inner.content_inset.right
    }
}

impl From<ViewportState> for JsViewport {
    fn from(inner: ViewportState) -> Self {
        Self { inner }
    }
}

/// Convert a u8 preset value to the core RatioPreset enum.
///
/// Values:
/// - 0 = Free
/// - 1 = 1:1
/// - 2 = 3:4
/// - 3 = 4:3
///
/// Any other value defaults to Free.
pub(crate) fn preset_from_u8(value: u8) -> RatioPreset {
    match value {
        1 => RatioPreset::Scale1to1,
        2 => RatioPreset::Scale3to4,
        3 => RatioPreset::Scale4to3,
        _ => RatioPreset::Free,
    }
}

/// Name reported to JavaScript for a grabbed edge.
pub(crate) fn edge_name(edge: Edge) -> &'static str {
    match edge {
        Edge::None => "none",
        Edge::Top => "top",
        Edge::Bottom => "bottom",
        Edge::Left => "left",
        Edge::Right => "right",
        Edge::TopLeft => "top_left",
        Edge::TopRight => "top_right",
        Edge::BottomLeft => "bottom_left",
        Edge::BottomRight => "bottom_right",
    }
}

/// Name reported to JavaScript for a pointer move.
///
/// `"pass_through"` tells the UI to let its scroll view pan instead.
pub(crate) fn outcome_name(outcome: GestureOutcome) -> &'static str {
    match outcome {
        GestureOutcome::Resized(_) => "resized",
        GestureOutcome::Rejected => "rejected",
        GestureOutcome::PassThrough => "pass_through",
        GestureOutcome::Ignored => "ignored",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropbox_core::{EdgeInsets, Point, Size};

    #[test]
    fn test_preset_from_u8() {
        assert_eq!(preset_from_u8(0), RatioPreset::Free);
        assert_eq!(preset_from_u8(1), RatioPreset::Scale1to1);
        assert_eq!(preset_from_u8(2), RatioPreset::Scale3to4);
        assert_eq!(preset_from_u8(3), RatioPreset::Scale4to3);
        assert_eq!(preset_from_u8(4), RatioPreset::Free);
        assert_eq!(preset_from_u8(255), RatioPreset::Free);
    }

    #[test]
    fn test_js_rect_from_rect() {
        let rect = JsRect::from(Rect::new(20.0, 100.0, 335.0, 400.0));
        assert_eq!(rect.x(), 20.0);
        assert_eq!(rect.y(), 100.0);
        assert_eq!(rect.width(), 335.0);
        assert_eq!(rect.height(), 400.0);
    }

    #[test]
    fn test_js_viewport_flattens_state() {
        let mut state = ViewportState::new(Size::new(800.0, 600.0), 0.5, 4.0);
        state.content_offset = Point::new(-20.0, -100.0);
        state.content_inset = EdgeInsets::new(100.0, 20.0, 200.0, 20.0);
        let viewport = JsViewport::from(state);

        assert_eq!(viewport.zoom_scale(), 1.0);
        assert_eq!(viewport.min_zoom_scale(), 0.5);
        assert_eq!(viewport.max_zoom_scale(), 4.0);
        assert_eq!(viewport.offset_x(), -20.0);
        assert_eq!(viewport.offset_y(), -100.0);
        assert_eq!(viewport.content_width(), 800.0);
        assert_eq!(viewport.content_height(), 600.0);
        assert_eq!(viewport.inset_top(), 100.0);
        assert_eq!(viewport.inset_bottom(), 200.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(edge_name(Edge::BottomRight), "bottom_right");
        assert_eq!(edge_name(Edge::None), "none");
        assert_eq!(outcome_name(GestureOutcome::PassThrough), "pass_through");
        assert_eq!(
            outcome_name(GestureOutcome::Resized(Rect::new(0.0, 0.0, 1.0, 1.0))),
            "resized"
        );
    }
}
