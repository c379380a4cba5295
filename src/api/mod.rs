//! High-level, ergonomic library API: crop an image file in place or into a
//! separate output, or trim an already decoded image in memory. Prefer these
//! entrypoints over the low-level `core` and `io` modules.
use std::path::Path;

use image::{DynamicImage, RgbaImage};
use tracing::{info, warn};

use crate::core::params::CropParams;
use crate::core::processing::crop::trim_transparent;
use crate::error::Result;
use crate::io::{load_rgba, save_rgba};
use crate::types::{BoundingBox, CropOutcome};

/// Crop `path` to its visible content and overwrite it.
///
/// A fully transparent image is reported as [`CropOutcome::Empty`] and the
/// file is left untouched. No backup of the original is kept.
pub fn crop_to_content(path: &Path) -> Result<CropOutcome> {
    crop_to_path(path, path)
}

/// Crop `input` to its visible content and write the result to `output`.
///
/// `output` may equal `input`. Nothing is written when the image is empty.
pub fn crop_to_path(input: &Path, output: &Path) -> Result<CropOutcome> {
    let img = load_rgba(input)?;
    let (original_width, original_height) = img.dimensions();

    let Some((cropped, bbox)) = trim_transparent(img) else {
        warn!("{:?} has no visible pixels; nothing written", input);
        return Ok(CropOutcome::Empty);
    };

    save_rgba(&cropped, output)?;
    info!("Cropped {:?} -> {:?}", input, output);

    Ok(CropOutcome::Cropped {
        bbox,
        width: cropped.width(),
        height: cropped.height(),
        original_width,
        original_height,
    })
}

/// Crop `input` according to `params`.
pub fn crop_with_params(input: &Path, params: &CropParams) -> Result<CropOutcome> {
    crop_to_path(input, params.output_for(input))
}

/// Normalize `img` to RGBA and trim its transparent margins (no disk I/O).
pub fn crop_image(img: DynamicImage) -> Option<(RgbaImage, BoundingBox)> {
    trim_transparent(img.into_rgba8())
}
