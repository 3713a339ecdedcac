use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use crate::utils::OptimizerError;

/// Extensions of images eligible for conversion, in scan order.
pub const SOURCE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    JPEG,
    PNG,
    WebP,
}

/// How source extensions are compared against file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionMatch {
    /// Lowercase or fully uppercase only: `.png` and `.PNG` match, `.Png` does not.
    #[default]
    Exact,
    /// Any letter case.
    CaseInsensitive,
}

impl ExtensionMatch {
    /// Check whether `ext` (without the leading dot) equals `candidate` under this mode.
    ///
    /// `candidate` is expected in lowercase, as listed in [`SOURCE_EXTENSIONS`].
    pub fn matches(&self, ext: &str, candidate: &str) -> bool {
        match self {
            Self::Exact => ext == candidate || ext == candidate.to_uppercase(),
            Self::CaseInsensitive => ext.eq_ignore_ascii_case(candidate),
        }
    }
}

impl ImageFormat {
    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
            Self::WebP => &["webp"],
        }
    }

    /// Get the primary extension for this format
    pub fn primary_extension(&self) -> &str {
        self.extensions()[0]
    }

    /// Whether files of this format are picked up for conversion
    pub fn is_source(&self) -> bool {
        matches!(self, Self::JPEG | Self::PNG)
    }
}

impl FromStr for ImageFormat {
    type Err = OptimizerError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::JPEG),
            "png" => Ok(Self::PNG),
            "webp" => Ok(Self::WebP),
            _ => Err(OptimizerError::format(format!(
                "Unsupported image format: {}", ext
            ))),
        }
    }
}

/// Get format from file extension
pub fn format_from_extension(path: &Path) -> Result<ImageFormat, OptimizerError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| OptimizerError::format(
            format!("File has no extension: {}", path.display())
        ))?;

    ImageFormat::from_str(ext)
}
