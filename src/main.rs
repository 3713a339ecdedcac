// Entry point for the webp-optimizer command-line tool.
// The conversion itself lives in the library (lib.rs); this binary only
// parses arguments, sets up logging and prints the report.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

fn main() -> anyhow::Result<()> {
    let args = cli::CliArgs::parse();

    // Keep stdout clean for the JSON report
    let writer = if args.json {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log_directives()))
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(writer)
        .compact()                // Use compact formatter instead of pretty
        .init();

    cli::run(args)
}
