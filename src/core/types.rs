//! Core types for conversion settings and results.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::utils::{ExtensionMatch, OptimizerError};

/// Quality used when none is given.
pub const DEFAULT_QUALITY: i32 = 80;

/// Settings for one batch run.
///
/// `quality` is not range-checked here; the encoder rejects values outside
/// `0..=100` per file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerConfig {
    /// Directory scanned for source images (not recursed into)
    pub directory: PathBuf,
    /// Lossy WebP quality, 0 (smallest) to 100 (best)
    #[serde(default = "default_quality")]
    pub quality: i32,
    /// How source extensions are matched
    #[serde(default)]
    pub extension_match: ExtensionMatch,
}

fn default_quality() -> i32 {
    DEFAULT_QUALITY
}

impl OptimizerConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            quality: DEFAULT_QUALITY,
            extension_match: ExtensionMatch::default(),
        }
    }

    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_extension_match(mut self, extension_match: ExtensionMatch) -> Self {
        self.extension_match = extension_match;
        self
    }
}

/// Result of converting one source image.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Path to the source image
    pub original_path: PathBuf,
    /// Path to the written WebP file
    pub optimized_path: PathBuf,
    /// Source size in bytes
    pub original_size: u64,
    /// WebP size in bytes
    pub optimized_size: u64,
    /// Bytes saved (negative if the WebP is larger)
    pub saved_bytes: i64,
    /// Saved bytes as a percentage of the source size
    pub compression_ratio: f64,
}

impl OptimizationResult {
    pub fn new(original_path: PathBuf, optimized_path: PathBuf, original_size: u64, optimized_size: u64) -> Self {
        let saved_bytes = original_size as i64 - optimized_size as i64;
        let compression_ratio = if original_size > 0 {
            saved_bytes as f64 / original_size as f64 * 100.0
        } else {
            0.0
        };

        Self {
            original_path,
            optimized_path,
            original_size,
            optimized_size,
            saved_bytes,
            compression_ratio,
        }
    }
}

/// What happened to a single candidate during a batch.
#[derive(Debug)]
pub enum FileOutcome {
    Converted(OptimizationResult),
    /// Target was already newer than the source
    Skipped { source: PathBuf },
    Failed { source: PathBuf, error: OptimizerError },
}

/// A source image whose conversion failed.
#[derive(Debug, Serialize)]
pub struct FailedConversion {
    pub path: PathBuf,
    pub error: OptimizerError,
}

/// Aggregated outcome of a batch run.
///
/// Only successful conversions contribute to `converted` and `saved_bytes`.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub converted: usize,
    pub skipped: usize,
    /// Sum of `original - new` over converted files; never clamped
    pub saved_bytes: i64,
    pub results: Vec<OptimizationResult>,
    pub failures: Vec<FailedConversion>,
}

impl ConversionReport {
    /// Folds one file's outcome into the running totals.
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Converted(result) => {
                self.converted += 1;
                self.saved_bytes += result.saved_bytes;
                self.results.push(result);
            }
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed { source, error } => {
                self.failures.push(FailedConversion { path: source, error });
            }
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Saved space in megabytes (1024 * 1024 bytes).
    pub fn saved_megabytes(&self) -> f64 {
        self.saved_bytes as f64 / 1024.0 / 1024.0
    }

    pub fn was_converted(&self, source: &Path) -> bool {
        self.results.iter().any(|r| r.original_path == source)
    }
}
