//! Aspect-ratio presets offered by the crop tool.

use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RatioPreset {
    #[default]
    Free,
    Scale1to1,
    Scale3to4,
    Scale4to3,
}

impl RatioPreset {
    pub const ALL: [RatioPreset; 4] = [
        Self::Free,
        Self::Scale1to1,
        Self::Scale3to4,
        Self::Scale4to3,
    ];

    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Scale1to1 => "1:1",
            Self::Scale3to4 => "3:4",
            Self::Scale4to3 => "4:3",
        }
    }

    /// Width:height proportions, or `None` for the free preset.
    pub const fn size(self) -> Option<Size> {
        match self {
            Self::Free => None,
            Self::Scale1to1 => Some(Size::new(1.0, 1.0)),
            Self::Scale3to4 => Some(Size::new(3.0, 4.0)),
            Self::Scale4to3 => Some(Size::new(4.0, 3.0)),
        }
    }
}

/// Reshape `rect` to the preset's proportions around its current center.
///
/// The width is kept and the height becomes `width / (w / h)`. Returns
/// `None` for the free preset, which leaves the box as it is.
pub fn ratio_adjusted_rect(rect: Rect, preset: RatioPreset) -> Option<Rect> {
    let proportions = preset.size()?;
    let aspect = proportions.width / proportions.height;
    let size = Size::new(rect.width(), rect.width() / aspect);
    Some(Rect::centered_at(rect.center(), size))
}
