use image::RgbaImage;
use tracing::debug;

use crate::types::BoundingBox;

const ALPHA: usize = 3;

/// Smallest box containing every pixel whose alpha is non-zero.
///
/// Returns `None` for zero-area images and for images where every pixel is
/// fully transparent.
pub fn content_bbox(img: &RgbaImage) -> Option<BoundingBox> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let row_len = width as usize * 4;
    let mut left = width as usize;
    let mut right = 0usize;
    let mut top: Option<usize> = None;
    let mut bottom = 0usize;

    // Scan row by row over the raw buffer to avoid per-pixel bounds checks
    for (y, row) in img.as_raw().chunks_exact(row_len).enumerate() {
        let Some(first) = row.chunks_exact(4).position(|px| px[ALPHA] != 0) else {
            continue;
        };
        let last = row
            .chunks_exact(4)
            .rposition(|px| px[ALPHA] != 0)
            .unwrap_or(first);

        left = left.min(first);
        right = right.max(last + 1);
        top.get_or_insert(y);
        bottom = y + 1;
    }

    let top = top?;
    let bbox = BoundingBox::new(left as u32, top as u32, right as u32, bottom as u32);
    debug!("Content bbox {} within {}x{}", bbox, width, height);
    Some(bbox)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn transparent(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
    }

    #[test]
    fn test_fully_transparent_has_no_bbox() {
        assert_eq!(content_bbox(&transparent(8, 5)), None);
    }

    #[test]
    fn test_zero_area_has_no_bbox() {
        assert_eq!(content_bbox(&RgbaImage::new(0, 0)), None);
        assert_eq!(content_bbox(&RgbaImage::new(0, 4)), None);
    }

    #[test]
    fn test_single_pixel() {
        let mut img = transparent(6, 4);
        img.put_pixel(3, 2, Rgba([255, 0, 0, 255]));
        assert_eq!(content_bbox(&img), Some(BoundingBox::new(3, 2, 4, 3)));
    }

    #[test]
    fn test_scattered_pixels_span_extremes() {
        let mut img = transparent(10, 10);
        img.put_pixel(7, 1, Rgba([1, 2, 3, 1]));
        img.put_pixel(2, 5, Rgba([1, 2, 3, 200]));
        img.put_pixel(4, 8, Rgba([1, 2, 3, 255]));
        assert_eq!(content_bbox(&img), Some(BoundingBox::new(2, 1, 8, 9)));
    }

    #[test]
    fn test_color_without_alpha_is_blank() {
        let mut img = transparent(4, 4);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 0]));
        img.put_pixel(2, 2, Rgba([9, 9, 9, 10]));
        assert_eq!(content_bbox(&img), Some(BoundingBox::new(2, 2, 3, 3)));
    }

    #[test]
    fn test_opaque_image_is_full_extent() {
        let img = RgbaImage::from_pixel(5, 3, Rgba([0, 0, 0, 255]));
        assert_eq!(content_bbox(&img), Some(BoundingBox::full(5, 3)));
    }
}
