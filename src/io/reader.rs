use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Load `path` and normalize it to 8-bit RGBA.
///
/// The file is read fully into memory and closed before decoding. The
/// container format is detected from the content, falling back to the
/// extension when the signature is not recognized.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let bytes = fs::read(path).map_err(|e| Error::from_read(path, e))?;
    debug!("Read {} bytes from {:?}", bytes.len(), path);

    let img = decode(path, &bytes)?;
    info!(
        "Loaded {:?}: {}x{} {:?}",
        path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.into_rgba8())
}

fn decode(path: &Path, bytes: &[u8]) -> Result<DynamicImage> {
    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| Error::from_read(path, e))?;

    if reader.format().is_none() {
        if let Ok(format) = ImageFormat::from_path(path) {
            reader.set_format(format);
        }
    }

    reader.decode().map_err(|source| Error::UnsupportedFormat {
        path: path.to_path_buf(),
        source,
    })
}
