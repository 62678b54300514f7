//! Crop tool configuration.

use crate::error::{CropError, Result};
use serde::{Deserialize, Serialize};

/// Tunables for a crop session.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial object from the UI layer is enough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Minimum distance between the crop box and the canvas sides.
    pub padding: f64,
    /// Side of the square hot regions used for edge hit-testing.
    pub hot_area_unit: f64,
    /// Smallest allowed crop box height / width.
    pub min_ratio: f64,
    /// Largest allowed crop box height / width.
    pub max_ratio: f64,
    /// Lower zoom limit before the crop box imposes its own.
    pub min_zoom_scale: f64,
    /// Upper zoom limit.
    pub max_zoom_scale: f64,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            padding: 20.0,
            hot_area_unit: 32.0,
            min_ratio: 9.0 / 32.0,
            max_ratio: 32.0 / 9.0,
            min_zoom_scale: 1.0,
            max_zoom_scale: 10.0,
        }
    }
}

impl CropConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values that can never yield a valid crop box.
    pub fn validate(&self) -> Result<()> {
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(CropError::InvalidConfig(format!(
                "padding must be a non-negative number, got {}",
                self.padding
            )));
        }
        if !(self.hot_area_unit.is_finite() && self.hot_area_unit > 0.0) {
            return Err(CropError::InvalidConfig(format!(
                "hot_area_unit must be positive, got {}",
                self.hot_area_unit
            )));
        }
        if !(self.min_ratio > 0.0 && self.min_ratio <= self.max_ratio && self.max_ratio.is_finite())
        {
            return Err(CropError::InvalidConfig(format!(
                "ratio bounds must satisfy 0 < min <= max, got [{}, {}]",
                self.min_ratio, self.max_ratio
            )));
        }
        if !(self.min_zoom_scale > 0.0
            && self.min_zoom_scale <= self.max_zoom_scale
            && self.max_zoom_scale.is_finite())
        {
            return Err(CropError::InvalidConfig(format!(
                "zoom bounds must satisfy 0 < min <= max, got [{}, {}]",
                self.min_zoom_scale, self.max_zoom_scale
            )));
        }
        Ok(())
    }
}
