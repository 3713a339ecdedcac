//! Image task definition and creation.

use std::path::{Path, PathBuf};
use crate::utils::{ImageFormat, OptimizerResult, modified_time};

/// A single source image paired with the WebP file it converts into.
#[derive(Debug, Clone)]
pub struct ImageTask {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// `<stem>.webp` next to the source
    pub output_path: PathBuf,
}

impl ImageTask {
    /// Derives the target path by replacing the source extension with `.webp`.
    pub fn from_source(input_path: impl Into<PathBuf>) -> Self {
        let input_path = input_path.into();
        let output_path = input_path.with_extension(ImageFormat::WebP.primary_extension());
        Self { input_path, output_path }
    }

    /// File name of the source, for log lines.
    pub fn file_name(&self) -> String {
        display_name(&self.input_path)
    }

    /// Returns true when the target exists and was modified strictly after the source.
    pub fn is_up_to_date(&self) -> OptimizerResult<bool> {
        if !self.output_path.exists() {
            return Ok(false);
        }
        Ok(modified_time(&self.output_path)? > modified_time(&self.input_path)?)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
