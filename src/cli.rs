// src/cli.rs

use clap::Parser;

/// Scans a project directory and writes a single plain-text overview.
///
/// project-scanner walks the directory tree, renders it as an ASCII tree,
/// embeds the content of every source/markup/config file together with its
/// size, line count and MD5 fingerprint, and finishes with a summary report of
/// file counts, sizes, type distribution, errors and warnings.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to scan.
    #[arg(default_value = ".")]
    pub root_directory: String,

    // --- Output ---
    /// Write the report to this file [default: <ROOT>/_<NAME>Overview.txt].
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,

    /// Project name used in headings and in the default report file name.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub project_name: Option<String>,

    // --- Filtering Options ---
    /// Replace the built-in ignore patterns (exact name, directory, or '*' wildcard; repeatable).
    #[arg(short = 'i', long = "ignore", value_name = "PATTERN", num_args = 1..)]
    pub ignored_patterns: Option<Vec<String>>,

    /// Add ignore patterns on top of the built-in (or replaced) list (repeatable).
    #[arg(short = 'I', long = "add-ignore", value_name = "PATTERN", num_args = 1..)]
    pub extra_ignored_patterns: Option<Vec<String>>,

    /// Replace the accepted content extensions (case-insensitive, leading dot optional, repeatable).
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub accepted_extensions: Option<Vec<String>>,

    /// Maximum file size whose content is included (e.g., "10MiB", "512k").
    #[arg(short = 'm', long = "max-size", value_name = "BYTES")]
    pub max_size: Option<String>,

    // --- Report Options ---
    /// Do not compute MD5 fingerprints for included files.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_hash: bool,

    /// Only log warnings and the final result, not per-file progress.
    #[arg(short = 'q', long, action = clap::ArgAction::SetTrue)]
    pub quiet: bool,
}
