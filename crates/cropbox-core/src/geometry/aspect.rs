//! Aspect-ratio clamping and best-fit placement of the crop box.
//!
//! # Algorithm
//!
//! The fit step keeps the box's (clamped) aspect ratio and makes it as large
//! as the padded content area allows:
//!
//! ```text
//! area  = bounds inset by padding on every side
//! ratio = clamp(box.h / box.w, min, max)
//! if area.h / area.w < ratio  -> height = area.h, width = height / ratio
//! else                        -> width  = area.w, height = width * ratio
//! ```
//!
//! The result is centered in the area, so it touches at least one pair of
//! padded edges.

use super::{Point, Rect, Size};

/// Whether `ratio` (height / width) lies in `[min_ratio, max_ratio]`.
///
/// NaN is never in bounds, so a zero-by-zero rectangle is rejected too.
#[inline]
pub fn ratio_in_bounds(ratio: f64, min_ratio: f64, max_ratio: f64) -> bool {
    ratio >= min_ratio && ratio <= max_ratio
}

/// Clamp a rectangle's height / width ratio into `[min_ratio, max_ratio]`.
///
/// Width and center are preserved; only the height changes, and only when
/// the ratio was out of bounds.
pub fn clamp_aspect_ratio(rect: Rect, min_ratio: f64, max_ratio: f64) -> Rect {
    debug_assert!(rect.is_valid(), "degenerate crop rect: {rect:?}");
    debug_assert!(min_ratio <= max_ratio);

    let ratio = rect.ratio();
    if ratio_in_bounds(ratio, min_ratio, max_ratio) {
        return rect;
    }

    let clamped = ratio.clamp(min_ratio, max_ratio);
    let size = Size::new(rect.width(), rect.width() * clamped);
    Rect::centered_at(rect.center(), size)
}

/// Largest rectangle with `rect`'s clamped aspect ratio that fits in
/// `bounds` inset by `padding`, centered in that area.
pub fn fit_rect_to_content_area(
    rect: Rect,
    bounds: Rect,
    padding: f64,
    min_ratio: f64,
    max_ratio: f64,
) -> Rect {
    debug_assert!(rect.is_valid(), "degenerate crop rect: {rect:?}");

    let area = bounds.inset_by(padding, padding);
    debug_assert!(area.is_valid(), "padding {padding} consumes {bounds:?}");

    let box_ratio = rect.ratio().clamp(min_ratio, max_ratio);
    let area_ratio = area.ratio();

    let size = if area_ratio < box_ratio {
        Size::new(area.height() / box_ratio, area.height())
    } else {
        Size::new(area.width(), area.width() * box_ratio)
    };

    Rect::centered_at(Point::new(area.mid_x(), area.mid_y()), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const MIN: f64 = 9.0 / 32.0;
    const MAX: f64 = 32.0 / 9.0;

    fn canvas() -> Rect {
        Rect::new(0.0, 0.0, 375.0, 700.0)
    }

    #[test]
    fn test_clamp_keeps_valid_ratio() {
        let rect = Rect::new(20.0, 100.0, 335.0, 400.0);
        assert_eq!(clamp_aspect_ratio(rect, MIN, MAX), rect);
    }

    #[test]
    fn test_clamp_too_tall() {
        let rect = Rect::new(0.0, 0.0, 10.0, 100.0);
        let clamped = clamp_aspect_ratio(rect, MIN, MAX);

        assert_eq!(clamped.width(), 10.0);
        assert_relative_eq!(clamped.height(), 10.0 * MAX);
        assert_relative_eq!(clamped.mid_y(), 50.0);
        assert_relative_eq!(clamped.mid_x(), 5.0);
    }

    #[test]
    fn test_clamp_too_wide() {
        let rect = Rect::new(0.0, 0.0, 100.0, 10.0);
        let clamped = clamp_aspect_ratio(rect, MIN, MAX);

        assert_eq!(clamped.width(), 100.0);
        assert_relative_eq!(clamped.height(), 100.0 * MIN);
        assert_relative_eq!(clamped.center().y, 5.0);
    }

    #[test]
    fn test_fit_wide_box_maximizes_width() {
        // 4:3 landscape box in a portrait canvas
        let rect = Rect::new(50.0, 50.0, 40.0, 30.0);
        let fitted = fit_rect_to_content_area(rect, canvas(), 20.0, MIN, MAX);

        assert_relative_eq!(fitted.min_x(), 20.0);
        assert_relative_eq!(fitted.width(), 335.0);
        assert_relative_eq!(fitted.height(), 335.0 * 0.75);
        assert_relative_eq!(fitted.mid_y(), 350.0);
    }

    #[test]
    fn test_fit_tall_box_maximizes_height() {
        let rect = Rect::new(0.0, 0.0, 100.0, 300.0);
        let fitted = fit_rect_to_content_area(rect, canvas(), 20.0, MIN, MAX);

        assert_relative_eq!(fitted.min_y(), 20.0);
        assert_relative_eq!(fitted.height(), 660.0);
        assert_relative_eq!(fitted.width(), 220.0);
        assert_relative_eq!(fitted.mid_x(), 187.5);
    }

    #[test]
    fn test_fit_box_slightly_taller_than_area_stays_inside() {
        // Ratio just above the padded area's ratio must still respect the
        // horizontal padding.
        let area_ratio = 660.0 / 335.0;
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0 * (area_ratio + 0.01));
        let fitted = fit_rect_to_content_area(rect, canvas(), 20.0, MIN, MAX);

        assert!(canvas().inset_by(20.0, 20.0).contains_rect(&fitted, 1e-9));
    }

    #[test]
    fn test_fit_respects_bounds_origin() {
        let bounds = Rect::new(100.0, 50.0, 400.0, 400.0);
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let fitted = fit_rect_to_content_area(rect, bounds, 20.0, MIN, MAX);

        assert_eq!(fitted, Rect::new(120.0, 70.0, 360.0, 360.0));
    }

    #[test]
    fn test_fit_clamps_extreme_ratio() {
        let rect = Rect::new(0.0, 0.0, 1000.0, 10.0);
        let fitted = fit_rect_to_content_area(rect, canvas(), 20.0, MIN, MAX);

        assert_relative_eq!(fitted.ratio(), MIN);
    }

    #[test]
    fn test_ratio_in_bounds_rejects_nan() {
        assert!(ratio_in_bounds(1.0, MIN, MAX));
        assert!(ratio_in_bounds(MIN, MIN, MAX));
        assert!(ratio_in_bounds(MAX, MIN, MAX));
        assert!(!ratio_in_bounds(f64::NAN, MIN, MAX));
        assert!(!ratio_in_bounds(-1.0, MIN, MAX));
        assert!(!ratio_in_bounds(f64::INFINITY, MIN, MAX));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
