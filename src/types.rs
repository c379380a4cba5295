//! Shared types used across autocrop.
//! Includes `BoundingBox`, the `CropOutcome` of a crop run and the flat,
//! serializable `CropReport` used by the CLI.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, Result};

/// Axis-aligned pixel rectangle; `right` and `bottom` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box spanning a whole `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// True when the box covers the entire `width` x `height` extent.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        *self == Self::full(width, height)
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Terminal, non-error outcome of a crop run.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CropOutcome {
    /// Content found and the result was saved. `width`/`height` are the saved dimensions.
    Cropped {
        bbox: BoundingBox,
        width: u32,
        height: u32,
        original_width: u32,
        original_height: u32,
    },
    /// No visible pixel; nothing was written.
    Empty,
}

impl CropOutcome {
    /// True when the saved image is smaller than the source.
    pub fn is_trimmed(&self) -> bool {
        match self {
            CropOutcome::Cropped {
                width,
                height,
                original_width,
                original_height,
                ..
            } => width != original_width || height != original_height,
            CropOutcome::Empty => false,
        }
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            CropOutcome::Cropped { width, height, .. } => Some((*width, *height)),
            CropOutcome::Empty => None,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStatus {
    Cropped,
    Empty,
    Error,
}

/// Flat record of one crop run, suitable for printing or JSON output.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropReport {
    pub path: String,
    pub status: CropStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CropReport {
    pub fn from_result(path: &Path, result: &Result<CropOutcome>) -> Self {
        let mut report = Self {
            path: path.display().to_string(),
            status: CropStatus::Error,
            width: None,
            height: None,
            bbox: None,
            error_kind: None,
            message: None,
        };
        match result {
            Ok(CropOutcome::Cropped {
                bbox,
                width,
                height,
                ..
            }) => {
                report.status = CropStatus::Cropped;
                report.width = Some(*width);
                report.height = Some(*height);
                report.bbox = Some(*bbox);
            }
            Ok(CropOutcome::Empty) => report.status = CropStatus::Empty,
            Err(e) => {
                report.error_kind = Some(e.kind());
                report.message = Some(e.to_string());
            }
        }
        report
    }

    /// The one-line, human-readable form printed by the CLI.
    pub fn to_line(&self) -> String {
        match self.status {
            CropStatus::Cropped => format!("Successfully cropped {}", self.path),
            CropStatus::Empty => "Image is empty or fully transparent.".to_string(),
            CropStatus::Error => format!(
                "Error processing {}: {}",
                self.path,
                self.message.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}
