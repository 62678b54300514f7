//! Crop session WASM bindings.
//!
//! `JsCropSession` wraps the core `CropSession` so the UI layer can forward
//! pointer events, pick presets and rotate, then read back the crop box,
//! the viewport state and finally the pixel rectangle to extract.

use crate::types::{edge_name, outcome_name, preset_from_u8, JsRect, JsViewport};
use cropbox_core::{
    CropConfig, CropError, CropHistory, CropInfo, CropSession, Point, Rect, Size,
};
use wasm_bindgen::prelude::*;

fn to_js_error(err: CropError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Crop session wrapper for JavaScript
#[wasm_bindgen]
pub struct JsCropSession {
    inner: CropSession,
}

#[wasm_bindgen]
impl JsCropSession {
    /// Start a session for an image shown in a canvas of the given size.
    ///
    /// # Arguments
    /// * `viewport_width`, `viewport_height` - Canvas size in points
    /// * `image_width`, `image_height` - Source image size in pixels
    /// * `config` - Optional partial `CropConfig` object; missing fields use
    ///   their defaults
    #[wasm_bindgen(constructor)]
    pub fn new(
        viewport_width: f64,
        viewport_height: f64,
        image_width: f64,
        image_height: f64,
        config: JsValue,
    ) -> Result<JsCropSession, JsValue> {
        let config: CropConfig = if config.is_undefined() || config.is_null() {
            CropConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        Self::build(
            config,
            Size::new(viewport_width, viewport_height),
            Size::new(image_width, image_height),
        )
        .map_err(to_js_error)
    }

    /// Start tracking a pointer. Returns the grabbed edge name
    /// (`"none"`, `"top"`, `"bottom_right"`, ...).
    pub fn pointer_down(&mut self, x: f64, y: f64) -> String {
        edge_name(self.inner.on_pointer_down(Point::new(x, y))).to_string()
    }

    /// Feed a pointer position. Returns `"resized"`, `"rejected"`,
    /// `"pass_through"` or `"ignored"`.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> String {
        outcome_name(self.inner.on_pointer_move(Point::new(x, y))).to_string()
    }

    /// End the gesture. Returns true when the box was re-fitted.
    pub fn pointer_up(&mut self) -> bool {
        self.inner.on_pointer_up()
    }

    /// Mirror a pan or pinch performed by the UI's scroll view.
    pub fn sync_viewport(&mut self, offset_x: f64, offset_y: f64, zoom_scale: f64) {
        self.inner
            .sync_viewport(Point::new(offset_x, offset_y), zoom_scale);
    }

    /// Current crop box in viewport points
    pub fn crop_box(&self) -> JsRect {
        self.inner.crop_box_frame().into()
    }

    /// Current zoom, offset and insets
    pub fn viewport(&self) -> JsViewport {
        self.inner.viewport().into()
    }

    /// Current rotation in degrees (0, 90, 180 or 270)
    pub fn rotation(&self) -> i32 {
        self.inner.rotation().degrees()
    }

    /// Whether edge dragging is enabled (only with the free preset)
    pub fn box_interaction_enabled(&self) -> bool {
        self.inner.is_box_interaction_enabled()
    }

    /// Select a ratio preset: 0 = Free, 1 = 1:1, 2 = 3:4, 3 = 4:3.
    /// Any other value selects Free.
    pub fn update_ratio(&mut self, preset: u8) {
        self.inner.update_ratio(preset_from_u8(preset));
    }

    /// Rotate a quarter turn clockwise
    pub fn rotate_by_90(&mut self) {
        self.inner.rotate_by_90();
    }

    /// Rotate by a multiple of 90 degrees
    pub fn rotate_by(&mut self, degrees: i32) -> Result<(), JsValue> {
        self.inner.rotate_by(degrees).map_err(to_js_error)
    }

    /// Pixel rectangle of the source image (after rotation) under the box
    pub fn image_crop_rect(&self) -> JsRect {
        self.inner.image_crop_rect().into()
    }

    /// Record a snapshot and return it with the pixel rectangle.
    ///
    /// # Example (TypeScript)
    /// ```typescript
    /// const result = session.commit();
    /// const { x, y, width, height } = result.rect;
    /// localStorage.setItem(key, JSON.stringify(session.history()));
    /// ```
    pub fn commit(&mut self) -> JsCommit {
        let (rect, info) = self.inner.commit();
        JsCommit { rect, info }
    }

    /// All committed snapshots, oldest first, as plain objects
    pub fn history(&self) -> Result<js_sys::Array, JsValue> {
        let array = js_sys::Array::new();
        for info in self.inner.history().iter() {
            let value =
                serde_wasm_bindgen::to_value(info).map_err(|e| JsValue::from_str(&e.to_string()))?;
            array.push(&value);
        }
        Ok(array)
    }

    /// Adopt a history produced by `history()` and restore its last entry.
    pub fn restore(&mut self, history: JsValue) -> Result<(), JsValue> {
        let entries: Vec<CropInfo> = serde_wasm_bindgen::from_value(history).map_err(|e| {
            let message = JsValue::from_str(&format!("Unreadable crop history: {e}"));
            web_sys::console::warn_1(&message);
            message
        })?;
        self.inner
            .restore(CropHistory::from(entries))
            .map_err(to_js_error)
    }

    /// Call `callback` with the crop box (a `JsRect`) now and on every change
    pub fn on_crop_box_change(&mut self, callback: js_sys::Function) {
        self.inner.subscribe_crop_box(move |rect| {
            let value = JsValue::from(JsRect::from(*rect));
            if let Err(err) = callback.call1(&JsValue::NULL, &value) {
                web_sys::console::warn_1(&err);
            }
        });
    }

    /// Call `callback` with the viewport (a `JsViewport`) now and on every change
    pub fn on_viewport_change(&mut self, callback: js_sys::Function) {
        self.inner.subscribe_viewport(move |viewport| {
            let value = JsValue::from(JsViewport::from(*viewport));
            if let Err(err) = callback.call1(&JsValue::NULL, &value) {
                web_sys::console::warn_1(&err);
            }
        });
    }
}

impl JsCropSession {
    /// Build a session without touching any JavaScript values.
    pub(crate) fn build(
        config: CropConfig,
        viewport: Size,
        image: Size,
    ) -> Result<Self, CropError> {
        let inner = CropSession::new(config, viewport, image)?;
        Ok(Self { inner })
    }
}

/// Result of committing a crop
#[wasm_bindgen]
pub struct JsCommit {
    rect: Rect,
    info: CropInfo,
}

#[wasm_bindgen]
impl JsCommit {
    /// Pixel rectangle to extract from the rotated image
    #[wasm_bindgen(getter)]
    pub fn rect(&self) -> JsRect {
        self.rect.into()
    }

    /// Rotation to apply to the source image before extracting, in degrees
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> i32 {
        self.info.rotation.degrees()
    }

    /// Serialize the snapshot for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.info).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
