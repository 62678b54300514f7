//! Mapping the on-screen crop box onto image pixels.

use super::{EdgeInsets, Point, Rect, Size};

/// Compute the crop rectangle in image-pixel space.
///
/// # Arguments
///
/// * `content_offset` - Scroll offset of the zoomable surface
/// * `content_inset` - Insets of the crop box from the viewport's sides
/// * `content_size` - Size of the zoomable surface at the current zoom
/// * `box_size` - Size of the crop box in viewport space
/// * `image_size` - Pixel size of the image after rotation
///
/// # Returns
///
/// The pixel rectangle to extract. Its origin is clamped to be
/// non-negative and its size never exceeds the image.
///
/// ```text
/// scale  = min(image.w / content.w, image.h / content.h)
/// origin = (offset + inset.top_left) * (image / content)
/// size   = min(box * scale, image)
/// ```
pub fn image_crop_rect(
    content_offset: Point,
    content_inset: EdgeInsets,
    content_size: Size,
    box_size: Size,
    image_size: Size,
) -> Rect {
    debug_assert!(content_size.is_valid(), "degenerate content size: {content_size:?}");
    debug_assert!(image_size.is_valid(), "degenerate image size: {image_size:?}");

    let scale_x = image_size.width / content_size.width;
    let scale_y = image_size.height / content_size.height;
    let scale = scale_x.min(scale_y);

    let visible = content_offset + content_inset.top_left();
    let origin_x = (visible.x * scale_x).max(0.0);
    let origin_y = (visible.y * scale_y).max(0.0);

    let width = (box_size.width * scale).min(image_size.width);
    let height = (box_size.height * scale).min(image_size.height);

    Rect::new(origin_x, origin_y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_resolution_image() {
        let rect = image_crop_rect(
            Point::new(100.0, 100.0),
            EdgeInsets::new(50.0, 50.0, 50.0, 50.0),
            Size::new(1000.0, 1000.0),
            Size::new(300.0, 300.0),
            Size::new(2000.0, 2000.0),
        );

        assert_eq!(rect, Rect::new(300.0, 300.0, 600.0, 600.0));
    }

    #[test]
    fn test_negative_origin_clamped() {
        // Scrolled past the top-left while bouncing
        let rect = image_crop_rect(
            Point::new(-80.0, -90.0),
            EdgeInsets::new(20.0, 20.0, 20.0, 20.0),
            Size::new(500.0, 500.0),
            Size::new(100.0, 100.0),
            Size::new(1000.0, 1000.0),
        );

        assert_eq!(rect.origin, Point::ZERO);
        assert_eq!(rect.size, Size::new(200.0, 200.0));
    }

    #[test]
    fn test_size_capped_at_image() {
        let rect = image_crop_rect(
            Point::new(-20.0, -100.0),
            EdgeInsets::new(100.0, 20.0, 200.0, 20.0),
            Size::new(335.0, 400.0),
            Size::new(335.0, 400.0),
            Size::new(670.0, 800.0),
        );

        assert_eq!(rect, Rect::new(0.0, 0.0, 670.0, 800.0));

        let rect = image_crop_rect(
            Point::ZERO,
            EdgeInsets::default(),
            Size::new(100.0, 100.0),
            Size::new(150.0, 50.0),
            Size::new(100.0, 100.0),
        );
        assert_eq!(rect.size, Size::new(100.0, 50.0));
    }

    #[test]
    fn test_non_uniform_scale_uses_smaller_factor_for_size() {
        let rect = image_crop_rect(
            Point::new(10.0, 10.0),
            EdgeInsets::default(),
            Size::new(100.0, 200.0),
            Size::new(50.0, 50.0),
            Size::new(400.0, 400.0),
        );

        // Per-axis origin scaling, min scale (2) for the size
        assert_eq!(rect, Rect::new(40.0, 20.0, 100.0, 100.0));
    }
}
