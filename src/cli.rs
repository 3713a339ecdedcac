//! Command-line arguments and report output.

use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use webp_optimizer::{ExtensionMatch, OptimizerConfig, DEFAULT_QUALITY, optimize_images};

/// Convert the PNG and JPEG images in a directory to WebP.
///
/// Only files whose .webp sibling is missing or older than the source are converted.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Directory containing the images (not searched recursively)
    pub directory: PathBuf,

    /// Lossy WebP quality, 0 (smallest) to 100 (best)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY, allow_negative_numbers = true)]
    pub quality: i32,

    /// Match .png/.jpg/.jpeg in any letter case, not just lower or upper
    #[arg(long)]
    pub ignore_case: bool,

    /// Print the final report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Log per-file details
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn to_config(&self) -> OptimizerConfig {
        let extension_match = if self.ignore_case {
            ExtensionMatch::CaseInsensitive
        } else {
            ExtensionMatch::Exact
        };

        OptimizerConfig::new(&self.directory)
            .with_quality(self.quality)
            .with_extension_match(extension_match)
    }

    /// Filter directives for the tracing subscriber.
    pub fn log_directives(&self) -> &'static str {
        if self.verbose {
            "warn,webp_optimizer=debug"
        } else {
            "warn,webp_optimizer=info"
        }
    }
}

pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = args.to_config();
    let report = optimize_images(&config)
        .with_context(|| format!("Failed to scan {}", config.directory.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    }

    Ok(())
}
