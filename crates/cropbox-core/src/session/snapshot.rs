//! Commit snapshots and the per-image edit history.

use crate::geometry::{Point, Rect, Size};
use crate::rotation::Rotation;
use serde::{Deserialize, Serialize};

/// Full viewport, crop box and rotation state at one commit.
///
/// Created only on commit and never mutated afterwards; it shares nothing
/// with the live session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropInfo {
    pub min_zoom_scale: f64,
    pub zoom_scale: f64,
    pub content_offset: Point,
    pub content_size: Size,
    pub crop_box_frame: Rect,
    pub rotation: Rotation,
}

/// Ordered, append-only list of commits for one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CropHistory {
    entries: Vec<CropInfo>,
}

impl CropHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, info: CropInfo) {
        self.entries.push(info);
    }

    pub fn last(&self) -> Option<&CropInfo> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropInfo> {
        self.entries.iter()
    }

    /// Drop everything but the most recent entry.
    pub fn truncate_to_last(&mut self) {
        let keep_from = self.entries.len().saturating_sub(1);
        self.entries.drain(..keep_from);
    }

    pub fn as_slice(&self) -> &[CropInfo] {
        &self.entries
    }
}

impl From<Vec<CropInfo>> for CropHistory {
    fn from(entries: Vec<CropInfo>) -> Self {
        Self { entries }
    }
}

impl From<CropHistory> for Vec<CropInfo> {
    fn from(history: CropHistory) -> Self {
        history.entries
    }
}
