//! Cropbox WASM - WebAssembly bindings for the crop session
//!
//! This crate exposes the cropbox-core crop session to JavaScript/TypeScript
//! UI code, which owns rendering, scrolling and the actual pixel crop.
//!
//! # Module Structure
//!
//! - `session` - `JsCropSession` gesture, preset, rotation and commit bindings
//! - `types` - WASM-compatible wrapper types for rectangles and viewport state
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropSession } from '@cropbox/wasm';
//!
//! await init();
//!
//! const session = new JsCropSession(375, 700, image.width, image.height);
//! session.on_crop_box_change((rect) => drawOverlay(rect));
//!
//! canvas.onpointerdown = (e) => session.pointer_down(e.offsetX, e.offsetY);
//! canvas.onpointermove = (e) => {
//!   if (session.pointer_move(e.offsetX, e.offsetY) === 'pass_through') {
//!     panScrollView(e);
//!   }
//! };
//! canvas.onpointerup = () => session.pointer_up();
//!
//! const { rect } = session.commit();
//! ```

use wasm_bindgen::prelude::*;

mod session;
mod types;

// Re-export public types
pub use session::{JsCommit, JsCropSession};
pub use types::{JsRect, JsViewport};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
