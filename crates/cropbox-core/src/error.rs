//! Error types for crop session operations.

use thiserror::Error;

/// Errors reported at the crop session's API boundary.
///
/// Rejected edge moves and pointer events outside the image are part of
/// normal gesture handling and are never reported through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CropError {
    /// A rotation value that is not a quarter turn.
    #[error("Invalid rotation: {degrees} degrees (expected 0, 90, 180 or 270)")]
    InvalidRotation { degrees: i32 },

    /// A rectangle or size with a non-positive or non-finite dimension.
    #[error("Degenerate rectangle: {width}x{height}")]
    DegenerateRect { width: f64, height: f64 },

    /// Configuration that can never produce a valid crop box.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A snapshot that cannot be restored.
    #[error("Invalid crop info: {0}")]
    InvalidCropInfo(String),
}

pub type Result<T> = std::result::Result<T, CropError>;
