//! Crop session controller.
//!
//! A [`CropSession`] owns one crop box and the mirror of the zoomable
//! surface's state, and keeps the two consistent while the user drags box
//! edges, picks a ratio preset or rotates the image.
//!
//! # Gesture State Machine
//!
//! ```text
//! Idle --pointer down--> Dragging(edge)      edge from hit-testing, maybe None
//! Dragging(edge) --pointer move--> Dragging(edge)   resize, or pan pass-through
//! Dragging(edge) --pointer up--> Idle        re-fit box, settle zoom and offset
//! ```
//!
//! Every mutation is applied to the session state immediately. Listeners on
//! the crop box and viewport run synchronously, once per change. Any easing
//! the UI layer draws between two states is cosmetic and never read back.

mod snapshot;

pub use snapshot::{CropHistory, CropInfo};

use crate::config::CropConfig;
use crate::error::{CropError, Result};
use crate::geometry::{
    fit_rect_to_content_area, hit_test_edge, image_crop_rect, resize_from_edge, Edge, EdgeInsets,
    Point, Rect, ResizeLimits, Size,
};
use crate::observable::Observable;
use crate::preset::{ratio_adjusted_rect, RatioPreset};
use crate::rotation::{remap_point_quarter_turn, swap_if_quarter_turn, Rotation};
use crate::viewport::ViewportState;
use tracing::{debug, info, warn};

const RATIO_TOLERANCE: f64 = 1e-9;
const FRAME_TOLERANCE: f64 = 1e-6;

/// Where the single tracked pointer is in its gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        edge: Edge,
        begin_point: Point,
        begin_box: Rect,
    },
}

/// What a pointer move did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// The crop box changed to this rectangle.
    Resized(Rect),
    /// Every side the edge moves was rejected; the box is unchanged.
    Rejected,
    /// No edge is grabbed; the move belongs to the viewport's panning.
    PassThrough,
    /// No gesture in progress, or the pointer left the image.
    Ignored,
}

#[derive(Debug)]
pub struct CropSession {
    config: CropConfig,
    bounds: Rect,
    image_size: Size,
    rotation: Rotation,
    preset: RatioPreset,
    crop_box: Observable<Rect>,
    viewport: Observable<ViewportState>,
    gesture: GestureState,
    history: CropHistory,
}

impl CropSession {
    /// Start a session for an image of `image_size` pixels shown in a canvas
    /// of `canvas` points. The canvas origin is the viewport origin, which is
    /// also where the scroll offset is measured from.
    ///
    /// The box starts as wide as the padded canvas with the image's aspect
    /// ratio, vertically centered, and the zoom is set so the image exactly
    /// covers it.
    pub fn new(config: CropConfig, canvas: Size, image_size: Size) -> Result<Self> {
        config.validate()?;
        if !canvas.is_valid() {
            return Err(CropError::DegenerateRect {
                width: canvas.width,
                height: canvas.height,
            });
        }
        if !image_size.is_valid() {
            return Err(CropError::DegenerateRect {
                width: image_size.width,
                height: image_size.height,
            });
        }
        let bounds = Rect::from_origin_size(Point::ZERO, canvas);
        if !bounds.inset_by(config.padding, config.padding).is_valid() {
            return Err(CropError::InvalidConfig(format!(
                "padding {} leaves no room in a {}x{} canvas",
                config.padding,
                bounds.width(),
                bounds.height()
            )));
        }

        let width = bounds.width() - 2.0 * config.padding;
        let height = width * image_size.ratio();
        let initial = Rect::new(
            config.padding,
            (bounds.height() - height) / 2.0,
            width,
            height,
        );
        let crop_box = fit_rect_to_content_area(
            initial,
            bounds,
            config.padding,
            config.min_ratio,
            config.max_ratio,
        );

        let mut viewport =
            ViewportState::new(image_size, config.min_zoom_scale, config.max_zoom_scale);
        let scale = (crop_box.width() / image_size.width).max(crop_box.height() / image_size.height);
        viewport.set_min_zoom_scale(scale);
        viewport.set_zoom_scale(scale);
        viewport.content_offset = Point::new(
            (viewport.content_size.width - crop_box.width()) / 2.0 - crop_box.min_x(),
            (viewport.content_size.height - crop_box.height()) / 2.0 - crop_box.min_y(),
        );
        viewport.content_inset = EdgeInsets::between(&bounds, &crop_box);

        debug!(?crop_box, zoom = scale, "crop session started");

        Ok(Self {
            config,
            bounds,
            image_size,
            rotation: Rotation::Degree0,
            preset: RatioPreset::Free,
            crop_box: Observable::new(crop_box),
            viewport: Observable::new(viewport),
            gesture: GestureState::Idle,
            history: CropHistory::new(),
        })
    }

    /// Start a session and resume from the last entry of `history`.
    pub fn with_history(
        config: CropConfig,
        canvas: Size,
        image_size: Size,
        history: impl Into<CropHistory>,
    ) -> Result<Self> {
        let mut session = Self::new(config, canvas, image_size)?;
        session.restore(history)?;
        Ok(session)
    }

    // =========================================================================
    // State access
    // =========================================================================

    pub fn crop_box_frame(&self) -> Rect {
        self.crop_box.value()
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport.value()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn preset(&self) -> RatioPreset {
        self.preset
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture
    }

    pub fn history(&self) -> &CropHistory {
        &self.history
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// The canvas in viewport space; its origin is always zero.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The canvas inset by the configured padding.
    pub fn content_bounds(&self) -> Rect {
        self.bounds.inset_by(self.config.padding, self.config.padding)
    }

    /// Image pixel size in the current orientation.
    pub fn rotated_image_size(&self) -> Size {
        swap_if_quarter_turn(self.rotation, self.image_size)
    }

    /// Edge dragging is only available while no fixed ratio is selected.
    pub fn is_box_interaction_enabled(&self) -> bool {
        self.preset.is_free()
    }

    /// Call `listener` with the crop box now and after every change.
    pub fn subscribe_crop_box<F>(&mut self, listener: F)
    where
        F: FnMut(&Rect) + 'static,
    {
        self.crop_box.subscribe(listener);
    }

    /// Call `listener` with the viewport state now and after every change.
    pub fn subscribe_viewport<F>(&mut self, listener: F)
    where
        F: FnMut(&ViewportState) + 'static,
    {
        self.viewport.subscribe(listener);
    }

    /// Mirror a pan or pinch performed by the scrollable surface.
    pub fn sync_viewport(&mut self, content_offset: Point, zoom_scale: f64) {
        let mut viewport = self.viewport.value();
        viewport.set_zoom_scale(zoom_scale);
        viewport.content_offset = content_offset;
        self.commit_state(self.crop_box.value(), viewport);
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Begin tracking a pointer. Returns the edge it grabbed.
    ///
    /// A second pointer while one is already tracked is ignored.
    pub fn on_pointer_down(&mut self, point: Point) -> Edge {
        if let GestureState::Dragging { edge, .. } = self.gesture {
            debug!("additional pointer ignored");
            return edge;
        }

        let crop_box = self.crop_box.value();
        let edge = if self.is_box_interaction_enabled() {
            let hot_unit = self.config.hot_area_unit;
            let hot_rect = crop_box.inset_by(-hot_unit / 2.0, -hot_unit / 2.0);
            hit_test_edge(point, hot_rect, hot_unit)
        } else {
            Edge::None
        };

        debug!(?edge, x = point.x, y = point.y, "pointer down");
        self.gesture = GestureState::Dragging {
            edge,
            begin_point: point,
            begin_box: crop_box,
        };
        edge
    }

    /// Feed a pointer position to the active gesture.
    pub fn on_pointer_move(&mut self, point: Point) -> GestureOutcome {
        let GestureState::Dragging {
            edge,
            begin_point,
            begin_box,
        } = self.gesture
        else {
            return GestureOutcome::Ignored;
        };

        if edge == Edge::None {
            return GestureOutcome::PassThrough;
        }

        let viewport = self.viewport.value();
        if !viewport.image_frame().contains(point) {
            debug!(x = point.x, y = point.y, "pointer outside image ignored");
            return GestureOutcome::Ignored;
        }

        let current = self.crop_box.value();
        let resized = resize_from_edge(
            edge,
            begin_box,
            current,
            point - begin_point,
            &self.resize_limits(),
        );
        if resized == current {
            return GestureOutcome::Rejected;
        }

        self.commit_state(resized, viewport);
        GestureOutcome::Resized(resized)
    }

    /// End the gesture. After an edge drag the box is re-fitted to the
    /// canvas and the viewport settled around it; returns whether that
    /// happened.
    pub fn on_pointer_up(&mut self) -> bool {
        let gesture = std::mem::take(&mut self.gesture);
        match gesture {
            GestureState::Dragging { edge, .. } if edge != Edge::None => {
                self.finalize_resize();
                true
            }
            _ => false,
        }
    }

    /// Grow the box back to fill the canvas, zooming so it keeps showing the
    /// same part of the image.
    fn finalize_resize(&mut self) {
        let crop_box = self.crop_box.value();
        let area = self.content_bounds();
        let factor = (area.width() / crop_box.width()).min(area.height() / crop_box.height());

        let fitted = self.fit(crop_box);
        let mut viewport = self.viewport.value();
        self.settle(&mut viewport, fitted, crop_box.center(), factor);

        debug!(?fitted, zoom = viewport.zoom_scale, "resize finalized");
        self.commit_state(fitted, viewport);
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Select a ratio preset. Fixed presets reshape the box around its
    /// center and re-fit it; the free preset keeps the box as it is.
    pub fn update_ratio(&mut self, preset: RatioPreset) {
        self.preset = preset;
        self.cancel_gesture();
        let crop_box = self.crop_box.value();
        let Some(adjusted) = ratio_adjusted_rect(crop_box, preset) else {
            info!("free ratio selected");
            return;
        };

        let fitted = self.fit(adjusted);
        let mut viewport = self.viewport.value();
        self.settle(&mut viewport, fitted, crop_box.center(), 1.0);

        info!(preset = preset.label(), ?fitted, "ratio updated");
        self.commit_state(fitted, viewport);
    }

    /// Rotate the image a quarter turn clockwise.
    pub fn rotate_by_90(&mut self) {
        self.cancel_gesture();
        let old_box = self.crop_box.value();
        let mut viewport = self.viewport.value();
        let old_content = viewport.content_size;

        self.rotation = self.rotation.next();
        viewport.content_size = old_content.swapped();

        // Keep the content under the box center there while the surface turns
        let focus = viewport.content_offset + old_box.center();
        let remapped = remap_point_quarter_turn(focus, old_content);
        viewport.content_offset = remapped - old_box.center();

        let new_box = self.fit(Rect::centered_at(old_box.center(), old_box.size.swapped()));
        let factor = (new_box.width() / old_box.height()).max(new_box.height() / old_box.width());
        self.settle(&mut viewport, new_box, old_box.center(), factor);

        info!(
            rotation = self.rotation.degrees(),
            zoom = viewport.zoom_scale,
            "rotated"
        );
        self.commit_state(new_box, viewport);
    }

    /// Rotate clockwise by a multiple of 90 degrees. Negative values turn
    /// counter-clockwise. Anything else is rejected without changing state.
    pub fn rotate_by(&mut self, degrees: i32) -> Result<()> {
        if degrees % 90 != 0 {
            warn!(degrees, "rejected rotation that is not a quarter turn");
            return Err(CropError::InvalidRotation { degrees });
        }
        for _ in 0..degrees.rem_euclid(360) / 90 {
            self.rotate_by_90();
        }
        Ok(())
    }

    /// The crop rectangle in image pixels for the current state.
    pub fn image_crop_rect(&self) -> Rect {
        let viewport = self.viewport.value();
        image_crop_rect(
            viewport.content_offset,
            viewport.content_inset,
            viewport.content_size,
            self.crop_box.value().size,
            self.rotated_image_size(),
        )
    }

    /// Snapshot the current state and append it to the history.
    pub fn push_crop_info(&mut self) -> CropInfo {
        let viewport = self.viewport.value();
        let info = CropInfo {
            min_zoom_scale: viewport.min_zoom_scale,
            zoom_scale: viewport.zoom_scale,
            content_offset: viewport.content_offset,
            content_size: viewport.content_size,
            crop_box_frame: self.crop_box.value(),
            rotation: self.rotation,
        };
        self.history.push(info);
        info
    }

    /// Finish the edit: record a snapshot and return it with the pixel
    /// rectangle to extract.
    pub fn commit(&mut self) -> (Rect, CropInfo) {
        let rect = self.image_crop_rect();
        let info = self.push_crop_info();
        info!(?rect, rotation = info.rotation.degrees(), "crop committed");
        (rect, info)
    }

    /// Adopt `history` and restore its last entry. An empty history leaves
    /// the session untouched.
    pub fn restore(&mut self, history: impl Into<CropHistory>) -> Result<()> {
        let history = history.into();
        if let Some(last) = history.last().copied() {
            self.restore_from_crop_info(&last)?;
        }
        self.history = history;
        Ok(())
    }

    /// Put the session back into the state captured by `info`.
    ///
    /// Fields are applied in dependency order: rotation, content size, crop
    /// box, zoom limits and zoom, then the offset.
    pub fn restore_from_crop_info(&mut self, info: &CropInfo) -> Result<()> {
        if let Err(err) = validate_crop_info(info).and_then(|()| self.check_frame(info)) {
            warn!(%err, "crop info rejected");
            return Err(err);
        }

        let mut viewport = self.viewport.value();
        self.rotation = info.rotation;
        viewport.content_size = info.content_size;
        let crop_box = info.crop_box_frame;
        viewport.set_min_zoom_scale(info.min_zoom_scale);
        viewport.zoom_scale = info.zoom_scale;
        viewport.content_offset = info.content_offset;

        self.cancel_gesture();
        info!(rotation = info.rotation.degrees(), "crop info restored");
        self.commit_state(crop_box, viewport);
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Drop a drag in progress; its begin box no longer matches the state.
    fn cancel_gesture(&mut self) {
        if let GestureState::Dragging { edge, .. } = std::mem::take(&mut self.gesture) {
            debug!(?edge, "gesture cancelled");
        }
    }

    fn resize_limits(&self) -> ResizeLimits {
        ResizeLimits {
            min_ratio: self.config.min_ratio,
            max_ratio: self.config.max_ratio,
            container: self.bounds,
            padding: self.config.padding,
        }
    }

    fn fit(&self, rect: Rect) -> Rect {
        fit_rect_to_content_area(
            rect,
            self.bounds,
            self.config.padding,
            self.config.min_ratio,
            self.config.max_ratio,
        )
    }

    /// Reject a snapshot box this canvas could never have produced, such as
    /// one saved under a different canvas size.
    fn check_frame(&self, info: &CropInfo) -> Result<()> {
        let frame = info.crop_box_frame;
        let ratio = frame.ratio();
        let ratio_ok = ratio >= self.config.min_ratio - RATIO_TOLERANCE
            && ratio <= self.config.max_ratio + RATIO_TOLERANCE;
        if !ratio_ok {
            return Err(CropError::InvalidCropInfo(format!(
                "crop box ratio {ratio} outside [{}, {}]",
                self.config.min_ratio, self.config.max_ratio
            )));
        }
        if !self.content_bounds().contains_rect(&frame, FRAME_TOLERANCE) {
            return Err(CropError::InvalidCropInfo(format!(
                "crop box {frame:?} outside the padded canvas {:?}",
                self.content_bounds()
            )));
        }
        Ok(())
    }

    /// Zoom at which the rotated image exactly covers `crop_box`.
    fn min_zoom_for(&self, crop_box: Rect) -> f64 {
        let image = self.rotated_image_size();
        (crop_box.width() / image.width).max(crop_box.height() / image.height)
    }

    /// Zoom by `factor` (at least up to the new minimum) carrying the content
    /// under `focus` to the center of `crop_box`, then let the offset come to
    /// rest where the image covers the box.
    fn settle(&self, viewport: &mut ViewportState, crop_box: Rect, focus: Point, factor: f64) {
        let min_zoom = self.min_zoom_for(crop_box);
        viewport.set_min_zoom_scale(min_zoom);

        let target = (viewport.zoom_scale * factor).max(min_zoom);
        viewport.zoom_around(target / viewport.zoom_scale, focus, crop_box.center());
        viewport.clamp_offset_to_cover(crop_box);
    }

    /// Write a new box and viewport, notifying listeners of whichever changed.
    fn commit_state(&mut self, crop_box: Rect, mut viewport: ViewportState) {
        debug_assert!(crop_box.is_valid(), "degenerate crop box: {crop_box:?}");
        viewport.content_inset = EdgeInsets::between(&self.bounds, &crop_box);

        if crop_box != self.crop_box.value() {
            self.crop_box.set(crop_box);
        }
        if viewport != self.viewport.value() {
            self.viewport.set(viewport);
        }
    }
}

fn validate_crop_info(info: &CropInfo) -> Result<()> {
    let frame = info.crop_box_frame;
    if !frame.is_valid() {
        return Err(CropError::DegenerateRect {
            width: frame.width(),
            height: frame.height(),
        });
    }
    if !info.content_size.is_valid() {
        return Err(CropError::DegenerateRect {
            width: info.content_size.width,
            height: info.content_size.height,
        });
    }
    let zoom_ok = info.min_zoom_scale.is_finite()
        && info.min_zoom_scale > 0.0
        && info.zoom_scale.is_finite()
        && info.zoom_scale > 0.0;
    let offset_ok = info.content_offset.x.is_finite() && info.content_offset.y.is_finite();
    if !(zoom_ok && offset_ok) {
        return Err(CropError::InvalidCropInfo(format!(
            "unusable zoom {} (min {}) or offset {:?}",
            info.zoom_scale, info.min_zoom_scale, info.content_offset
        )));
    }
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Action {
        Drag { corner: u8, dx: f64, dy: f64 },
        Ratio(RatioPreset),
        Rotate,
        Pan { dx: f64, dy: f64 },
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            (0u8..8, -300.0f64..300.0, -300.0f64..300.0)
                .prop_map(|(corner, dx, dy)| Action::Drag { corner, dx, dy }),
            prop_oneof![
                Just(RatioPreset::Free),
                Just(RatioPreset::Scale1to1),
                Just(RatioPreset::Scale3to4),
                Just(RatioPreset::Scale4to3),
            ]
            .prop_map(Action::Ratio),
            Just(Action::Rotate),
            (-200.0f64..200.0, -200.0f64..200.0).prop_map(|(dx, dy)| Action::Pan { dx, dy }),
        ]
    }

    /// Pointer position on the border of the box for one of eight grips.
    fn grip(crop_box: Rect, index: u8) -> Point {
        let xs = [crop_box.min_x(), crop_box.mid_x(), crop_box.max_x()];
        let ys = [crop_box.min_y(), crop_box.mid_y(), crop_box.max_y()];
        let cells = [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)];
        let (col, row) = cells[index as usize % cells.len()];
        Point::new(xs[col], ys[row])
    }

    proptest! {
        /// Property: Whatever the user does, the committed box keeps its
        /// aspect bounds and stays inside the padded canvas.
        #[test]
        fn prop_session_preserves_box_invariants(
            (width, height) in (100.0f64..5000.0, 100.0f64..5000.0),
            actions in prop::collection::vec(action_strategy(), 1..25),
        ) {
            let mut session = CropSession::new(
                CropConfig::default(),
                Size::new(375.0, 700.0),
                Size::new(width, height),
            ).unwrap();

            for action in actions {
                match action {
                    Action::Drag { corner, dx, dy } => {
                        let start = grip(session.crop_box_frame(), corner);
                        session.on_pointer_down(start);
                        session.on_pointer_move(Point::new(start.x + dx / 2.0, start.y + dy / 2.0));
                        session.on_pointer_move(Point::new(start.x + dx, start.y + dy));
                        session.on_pointer_up();
                    }
                    Action::Ratio(preset) => session.update_ratio(preset),
                    Action::Rotate => session.rotate_by_90(),
                    Action::Pan { dx, dy } => {
                        let viewport = session.viewport();
                        let offset = viewport.content_offset + Point::new(dx, dy);
                        session.sync_viewport(offset, viewport.zoom_scale);
                    }
                }

                let crop_box = session.crop_box_frame();
                let config = session.config();
                prop_assert!(crop_box.is_valid());
                let ratio = crop_box.ratio();
                prop_assert!(ratio >= config.min_ratio - 1e-9 && ratio <= config.max_ratio + 1e-9);
                prop_assert!(session.content_bounds().contains_rect(&crop_box, 1e-6));
            }
        }

        /// Property: Four quarter turns restore rotation and pixel dimensions.
        #[test]
        fn prop_four_rotations_restore_orientation(
            (width, height) in (100.0f64..5000.0, 100.0f64..5000.0),
        ) {
            let mut session = CropSession::new(
                CropConfig::default(),
                Size::new(375.0, 700.0),
                Size::new(width, height),
            ).unwrap();
            let rotation = session.rotation();
            let image = session.rotated_image_size();

            for _ in 0..4 {
                session.rotate_by_90();
            }

            prop_assert_eq!(session.rotation(), rotation);
            prop_assert_eq!(session.rotated_image_size(), image);
        }
    }
}
