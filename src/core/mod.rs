//! Core types shared by the batch converter.
//!
//! - [`OptimizerConfig`]: directory, quality and extension matching for a run
//! - [`ImageTask`]: a source image and its WebP target
//! - [`OptimizationResult`]: sizes and savings for one converted image
//! - [`FileOutcome`] / [`ConversionReport`]: per-file and aggregated results

mod types;
mod task;

pub use types::{
    ConversionReport, DEFAULT_QUALITY, FailedConversion, FileOutcome, OptimizationResult,
    OptimizerConfig,
};
pub use task::ImageTask;
