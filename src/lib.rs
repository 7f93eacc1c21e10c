//! `project-scanner` is a library and command-line tool that walks a project
//! directory and writes a single plain-text overview report.
//!
//! The report has four sections: the scan configuration, an ASCII tree of the
//! directory, the full content of every eligible source file with its size,
//! line count and MD5 fingerprint, and a summary of the run.
//!
//! A run is one sequential pass:
//! 1.  **Discover**: walk the root, render the tree and pick the eligible files.
//! 2.  **Process**: read each eligible file and append its block.
//! 3.  **Summarize**: write the statistics gathered along the way.
//!
//! Failures on individual entries never abort the run. They are collected in
//! [`ScanStatistics`] and listed in the summary.
//!
//! # Example: Library Usage
//!
//! ```
//! use project_scanner::{run, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let project = tempdir().unwrap();
//! let reports = tempdir().unwrap();
//! fs::write(project.path().join("main.rs"), "fn main() {}\n").unwrap();
//! let report = reports.path().join("overview.txt");
//!
//! let config = ConfigBuilder::new()
//!     .root_directory(project.path().to_str().unwrap())
//!     .output_file(report.to_str().unwrap())
//!     .project_name("Demo")
//!     .build()
//!     .unwrap();
//!
//! let stats = run(&config, None).unwrap();
//! assert_eq!(stats.files_included, 1);
//!
//! let text = fs::read_to_string(&report).unwrap();
//! assert!(text.starts_with("# Demo Project Overview\n"));
//! assert!(text.contains("FILE: main.rs\n"));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod progress;
pub mod stats;

// Re-export key public types for easier use as a library
pub use config::{ConfigBuilder, ScanConfig};
pub use discovery::{discover, WalkOutcome};
pub use errors::{Error, Result};
pub use filtering::{IgnorePattern, PathFilter};
pub use output::format_file_size;
pub use processing::count_lines;
pub use stats::{LargestFiles, ScanStatistics};

use crate::errors::io_error_with_path;
use crate::output::writer::{create_output_writer, remove_existing_output};
use crate::progress::{NoOpProgress, ProgressReporter};
use log::debug;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

/// Lifecycle of a single run. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScanPhase {
    Initializing,
    Scanning,
    Finalized,
}

/// Timestamp format of the `Generated:` header line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Runs a complete scan and writes the report to `config.output_path`.
///
/// Any report left at that path is removed first. The returned statistics
/// are finalized and match what the summary section shows.
///
/// # Errors
/// Returns [`Error::Io`] when the report cannot be removed, created or
/// written. Problems with individual files or directories are recorded in
/// the returned statistics instead.
pub fn run(
    config: &ScanConfig,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<ScanStatistics> {
    let started = Instant::now();
    let mut phase = ScanPhase::Initializing;
    debug!("Scan phase: {:?}", phase);

    let output_path = config.output_path.as_path();
    let write_err = |e: std::io::Error| io_error_with_path(e, output_path);
    let mut stats = ScanStatistics::new();

    remove_existing_output(output_path)?;
    let mut writer = create_output_writer(output_path)?;

    let generated_at = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    output::header::write_header(&mut writer, config, &generated_at).map_err(write_err)?;

    phase = advance(phase, ScanPhase::Scanning);
    let outcome = discover(config, &mut stats);
    output::tree::write_tree_section(&mut writer, &config.project_name, &outcome.tree)
        .map_err(write_err)?;
    output::write_contents_heading(&mut writer).map_err(write_err)?;

    let reporter: Arc<dyn ProgressReporter> = progress.unwrap_or_else(|| Arc::new(NoOpProgress));
    processing::process_files(
        &outcome.files,
        config,
        &mut stats,
        &mut writer,
        reporter.as_ref(),
    )
    .map_err(write_err)?;

    stats.finalize(started.elapsed());
    phase = advance(phase, ScanPhase::Finalized);
    debug_assert_eq!(phase, ScanPhase::Finalized);
    output::summary::write_summary(&mut writer, &stats).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    debug!(
        "Report written to {} in {} ms",
        output_path.display(),
        stats.elapsed_millis()
    );
    Ok(stats)
}

fn advance(from: ScanPhase, to: ScanPhase) -> ScanPhase {
    debug_assert!(to > from, "scan phase moved backwards: {:?} -> {:?}", from, to);
    debug!("Scan phase: {:?} -> {:?}", from, to);
    to
}
