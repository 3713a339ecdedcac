// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;

// Public exports for external consumers
pub use crate::core::{
    ConversionReport, DEFAULT_QUALITY, FailedConversion, FileOutcome, ImageTask,
    OptimizationResult, OptimizerConfig,
};
pub use utils::{ExtensionMatch, ImageFormat, OptimizerError, OptimizerResult};
pub use commands::*;

// The command-line tool in main.rs is a thin wrapper around optimize_images().
