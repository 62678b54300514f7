//! Cropbox Core - Crop box geometry and crop session control
//!
//! This crate provides the interactive half of a photo crop tool: a crop
//! rectangle drawn over a zoomable, pannable image, kept valid while the user
//! drags its edges, picks an aspect ratio preset or rotates the image, and
//! finally mapped to a pixel rectangle in the source image.
//!
//! Pixel work (decoding, rotating and cropping the image itself) is left to
//! the caller; everything here is pure geometry and state.

pub mod config;
pub mod error;
pub mod geometry;
pub mod observable;
pub mod preset;
pub mod rotation;
pub mod session;
pub mod viewport;

pub use config::CropConfig;
pub use error::{CropError, Result};
pub use geometry::{Edge, EdgeInsets, Point, Rect, Size};
pub use observable::Observable;
pub use preset::RatioPreset;
pub use rotation::Rotation;
pub use session::{CropHistory, CropInfo, CropSession, GestureOutcome, GestureState};
pub use viewport::ViewportState;
