// src/main.rs

use anyhow::Result;
use clap::Parser;
use project_scanner::cli::Cli;
use project_scanner::config::ConfigBuilder;
#[cfg(feature = "progress")]
use project_scanner::progress::IndicatifProgress;
use project_scanner::progress::ProgressReporter;
use project_scanner::run;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG overrides the crate default.
    let default_directive = if cfg!(debug_assertions) {
        "project_scanner=debug"
    } else {
        "project_scanner=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    log::info!("Starting project-scanner v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    // --- Configuration ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    // Show a progress bar only for verbose runs on an interactive stderr.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if config.verbose && atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    // --- Execution ---
    match run(&config, progress_reporter) {
        Ok(stats) => {
            log::info!(
                "Wrote {}: {} files included, {} skipped, {} errors, {} warnings",
                config.output_path.display(),
                stats.files_included,
                stats.files_skipped,
                stats.errors.len(),
                stats.warnings.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
