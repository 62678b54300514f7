//! Quarter-turn rotation state.
//!
//! [`Rotation`] is the only record of how the image is turned. Anything that
//! needs orientation-dependent dimensions goes through [`is_quarter_turn`]
//! and [`swap_if_quarter_turn`] rather than matching on the four cases.

use crate::error::{CropError, Result};
use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Clockwise rotation of the image in 90 degree steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    Degree0,
    Degree90,
    Degree180,
    Degree270,
}

impl Rotation {
    /// Parse a degree value. 360 wraps to 0; anything else that is not one of
    /// 0, 90, 180 or 270 is rejected.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        match degrees {
            0 | 360 => Ok(Self::Degree0),
            90 => Ok(Self::Degree90),
            180 => Ok(Self::Degree180),
            270 => Ok(Self::Degree270),
            _ => Err(CropError::InvalidRotation { degrees }),
        }
    }

    pub const fn degrees(self) -> i32 {
        match self {
            Self::Degree0 => 0,
            Self::Degree90 => 90,
            Self::Degree180 => 180,
            Self::Degree270 => 270,
        }
    }

    pub fn radians(self) -> f64 {
        match self {
            Self::Degree0 => 0.0,
            Self::Degree90 => FRAC_PI_2,
            Self::Degree180 => PI,
            Self::Degree270 => PI * 1.5,
        }
    }

    /// The next clockwise quarter turn (270 wraps to 0).
    pub const fn next(self) -> Self {
        match self {
            Self::Degree0 => Self::Degree90,
            Self::Degree90 => Self::Degree180,
            Self::Degree180 => Self::Degree270,
            Self::Degree270 => Self::Degree0,
        }
    }
}

impl TryFrom<i32> for Rotation {
    type Error = CropError;

    fn try_from(degrees: i32) -> Result<Self> {
        Self::from_degrees(degrees)
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> i32 {
        rotation.degrees()
    }
}

/// Whether the rotation turns the image on its side.
pub const fn is_quarter_turn(rotation: Rotation) -> bool {
    matches!(rotation, Rotation::Degree90 | Rotation::Degree270)
}

/// `size` with width and height exchanged when `rotation` is a quarter turn.
pub fn swap_if_quarter_turn(rotation: Rotation, size: Size) -> Size {
    if is_quarter_turn(rotation) {
        size.swapped()
    } else {
        size
    }
}

/// Map a content-space point through one clockwise quarter turn of a surface
/// whose pre-rotation size is `content_size`: `(x, y) -> (H - y, x)`.
pub fn remap_point_quarter_turn(point: Point, content_size: Size) -> Point {
    Point::new(content_size.height - point.y, point.x)
}
