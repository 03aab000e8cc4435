//! Command-line interface for gofuncctx.

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use crate::extract::{self, ExtractConfig, NoopObserver, RecordObserver, WindowConfig};
use crate::report::{self, DiagnosticWriter};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Turn a Go source file into per-function context records.
///
/// Prints one JSON array on stdout with a record per function or method:
/// its signature, receiver/parameter/return type context and the bodies of
/// neighboring functions.
#[derive(Parser)]
#[command(name = "gofuncctx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Go source file to analyze
    pub path: PathBuf,

    /// Neighboring bodies kept before and after each function
    #[arg(short, long, default_value_t = extract::DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,

    /// Name prefix of test functions whose bodies are skipped
    #[arg(long, default_value = extract::DEFAULT_TEST_PREFIX)]
    pub test_prefix: String,

    /// Do not print per-function diagnostics on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Pipeline settings from the flags.
    pub fn config(&self) -> ExtractConfig {
        ExtractConfig {
            window: WindowConfig {
                size: self.window_size,
            },
            test_prefix: self.test_prefix.clone(),
        }
    }
}

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Run one extraction and print the result.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    let config = cli.config();

    let mut diagnostics = DiagnosticWriter::stderr();
    let mut noop = NoopObserver;
    let observer: &mut dyn RecordObserver = if cli.quiet {
        &mut noop
    } else {
        &mut diagnostics
    };

    let records = extract::extract_file(&cli.path, &config, observer)?;

    let stdout = std::io::stdout();
    report::write_json(&mut stdout.lock(), &records)?;

    Ok(EXIT_SUCCESS)
}
