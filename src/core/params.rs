use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Crop options suitable for config files and presets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropParams {
    /// Where to write the cropped image; None overwrites the input in place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl CropParams {
    pub fn in_place() -> Self {
        Self::default()
    }

    pub fn to_output<P: Into<PathBuf>>(output: P) -> Self {
        Self {
            output: Some(output.into()),
        }
    }

    /// Target path for a crop of `input`.
    pub fn output_for<'a>(&'a self, input: &'a Path) -> &'a Path {
        self.output.as_deref().unwrap_or(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_for_defaults_to_input() {
        let input = Path::new("logo.png");
        assert_eq!(CropParams::in_place().output_for(input), input);
        assert_eq!(
            CropParams::to_output("out/logo.png").output_for(input),
            Path::new("out/logo.png")
        );
    }

    #[test]
    fn test_missing_output_deserializes_to_in_place() {
        let params: CropParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, CropParams::in_place());
    }
}
