use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Permissions for a newly created target, matching a plain file create
/// under the usual 022 umask.
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// Write `img` to `path`, choosing the encoder from the path's extension.
///
/// The image is encoded into a temporary file next to the target which then
/// replaces it, so a failed save never leaves a truncated target behind. An
/// existing target keeps its permissions and symlinks are resolved, so the
/// file a link points to is the one replaced.
///
/// The target's directory must be writable: a writable file inside a
/// read-only directory cannot be saved and fails as [`Error::Write`].
pub fn save_rgba(img: &RgbaImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let existing = fs::metadata(path).ok();
    let target: PathBuf = match existing {
        Some(_) => fs::canonicalize(path).map_err(|e| Error::write_io(path, e))?,
        None => path.to_path_buf(),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".autocrop-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| Error::write_io(path, e))?;
    debug!("Encoding {:?} into {:?}", format, tmp.path());

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        img.write_to(&mut writer, format)
            .map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
        writer.flush().map_err(|e| Error::write_io(path, e))?;
    }

    let permissions = match existing {
        Some(meta) => Some(meta.permissions()),
        None => new_file_permissions(),
    };
    if let Some(permissions) = permissions {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::write_io(path, e))?;
    }

    tmp.persist(&target)
        .map_err(|e| Error::write_io(path, e.error))?;
    info!("Saved {}x{} image to {:?}", img.width(), img.height(), target);
    Ok(())
}
