//! Batch entry point: scan a directory and convert stale sources to WebP.

use tracing::{debug, info};
use crate::core::{ConversionReport, ImageTask, OptimizerConfig};
use crate::processing::WebpExecutor;
use crate::utils::{OptimizerResult, list_source_images};

/// Converts every PNG/JPEG in `config.directory` whose WebP sibling is missing or stale.
///
/// Per-file failures are logged and collected in the report. The only error
/// returned is a failure to list the directory.
///
/// # Returns
/// The aggregated [`ConversionReport`]. The scan start and the two summary
/// lines are logged at info level.
pub fn optimize_images(config: &OptimizerConfig) -> OptimizerResult<ConversionReport> {
    info!("Optimizing images in {}...", config.directory.display());

    let tasks: Vec<ImageTask> = list_source_images(&config.directory, config.extension_match)?
        .into_iter()
        .map(ImageTask::from_source)
        .collect();
    debug!("{} candidates at quality {}", tasks.len(), config.quality);

    let executor = WebpExecutor::new(config.quality);
    let report = executor.execute_batch(&tasks);

    info!("Done! Converted {} images.", report.converted);
    info!("Total space saved: {:.2} MB", report.saved_megabytes());
    debug!("{} skipped, {} failed", report.skipped, report.failed());

    Ok(report)
}
