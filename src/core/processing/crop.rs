use image::{RgbaImage, imageops};
use tracing::info;

use crate::core::processing::bbox::content_bbox;
use crate::types::BoundingBox;

/// Copy the `bbox` region of `img` into a new buffer of `bbox` size.
pub fn crop_to_bbox(img: &RgbaImage, bbox: BoundingBox) -> RgbaImage {
    imageops::crop_imm(img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}

/// Trim fully transparent margins from `img`.
///
/// Returns `None` when the image has no visible pixel. When the content
/// already spans the full extent the buffer is returned as is.
pub fn trim_transparent(img: RgbaImage) -> Option<(RgbaImage, BoundingBox)> {
    let bbox = content_bbox(&img)?;
    let (width, height) = img.dimensions();

    if bbox.covers(width, height) {
        info!("No transparent margin on {}x{} image", width, height);
        return Some((img, bbox));
    }

    info!(
        "Cropping {}x{} -> {}x{} at {}",
        width,
        height,
        bbox.width(),
        bbox.height(),
        bbox
    );
    Some((crop_to_bbox(&img, bbox), bbox))
}
