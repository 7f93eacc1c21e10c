//! Defines the `ScanConfig` struct that drives a scan.
//!
//! A `ScanConfig` is built once per run by [`ConfigBuilder`], which merges the
//! built-in defaults with caller overrides, and is read-only afterwards.

use crate::filtering::IgnorePattern;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
pub mod path_resolve;

pub use parsing::{normalize_extensions, parse_max_size};

/// Settings for a single scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// The canonicalized directory to scan.
    pub root_directory: PathBuf,
    /// Name used in report headings and the default report file name.
    pub project_name: String,
    /// Absolute path of the report file, with its parent directory canonicalized
    /// when it exists.
    pub output_path: PathBuf,
    /// Exclusion patterns, compiled, in the order they were given.
    pub ignored_patterns: Vec<IgnorePattern>,
    /// Lowercase extensions with a leading dot, e.g. `.rs`.
    pub accepted_extensions: BTreeSet<String>,
    /// Files larger than this many bytes are skipped with a warning.
    pub max_file_size: u64,
    /// Whether an MD5 fingerprint is written for every included file.
    pub include_hashes: bool,
    /// Whether per-file progress is logged at info level.
    pub verbose: bool,
}

impl ScanConfig {
    /// Whether `path` is the report file itself.
    ///
    /// Only the exact path is reserved, so a report written outside the root
    /// never hides project files that happen to share its name.
    pub fn is_reserved_output(&self, path: &Path) -> bool {
        path == self.output_path
    }

    /// The ignore patterns as originally written.
    pub fn ignored_pattern_strings(&self) -> Vec<&str> {
        self.ignored_patterns.iter().map(|p| p.as_str()).collect()
    }
}
