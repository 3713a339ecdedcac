//! Sequential WebP conversion of a list of image tasks.
//!
//! Each source is decoded, encoded and written before the next one is
//! touched. A failing file is logged and recorded; it never stops the batch.

use std::fs;
use image::ImageReader;
use tracing::{debug, info, warn};

use crate::core::{ConversionReport, FileOutcome, ImageTask, OptimizationResult};
use crate::utils::{OptimizerError, OptimizerResult, get_file_size};

use super::encoder::encode_webp;

/// Converts image tasks to WebP at a fixed quality.
pub struct WebpExecutor {
    quality: i32,
}

impl WebpExecutor {
    pub fn new(quality: i32) -> Self {
        Self { quality }
    }

    /// Processes all `tasks` in order and folds every outcome into one report.
    pub fn execute_batch(&self, tasks: &[ImageTask]) -> ConversionReport {
        let mut report = ConversionReport::default();
        for task in tasks {
            report.record(self.process(task));
        }
        report
    }

    /// Converts one task unless its target is already newer than the source.
    pub fn process(&self, task: &ImageTask) -> FileOutcome {
        let file_name = task.file_name();

        let outcome = task.is_up_to_date().and_then(|current| {
            if current {
                Ok(None)
            } else {
                optimize_single(task, self.quality).map(Some)
            }
        });

        match outcome {
            Ok(None) => {
                info!("Skipping {file_name} (WebP already up to date)");
                FileOutcome::Skipped { source: task.input_path.clone() }
            }
            Ok(Some(result)) => FileOutcome::Converted(result),
            Err(error) => {
                warn!("Error converting {file_name}: {error}");
                FileOutcome::Failed { source: task.input_path.clone(), error }
            }
        }
    }
}

/// Decodes, encodes and writes one image, then reads both sizes back from disk.
fn optimize_single(task: &ImageTask, quality: i32) -> OptimizerResult<OptimizationResult> {
    let file_name = task.file_name();

    // The reader owns the source handle and is consumed by decode()
    let reader = ImageReader::open(&task.input_path)?.with_guessed_format()?;
    info!("Converting {file_name} to WebP...");
    let image = reader.decode()?;
    debug!("Loaded '{}': {}×{} {:?}", file_name, image.width(), image.height(), image.color());

    let encoded = encode_webp(&image, quality)?;
    drop(image);

    fs::write(&task.output_path, &encoded).map_err(|e| {
        OptimizerError::io(format!("Failed to write '{}': {e}", task.output_path.display()))
    })?;

    let original_size = get_file_size(&task.input_path)?;
    let optimized_size = get_file_size(&task.output_path)?;
    let result = OptimizationResult::new(
        task.input_path.clone(),
        task.output_path.clone(),
        original_size,
        optimized_size,
    );

    debug!(
        "'{}' → {} bytes saved ({:.1}%)",
        file_name,
        result.saved_bytes,
        result.compression_ratio
    );

    Ok(result)
}
