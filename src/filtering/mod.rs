// src/filtering/mod.rs

//! Decides, per path, whether it is ignored and whether its content is
//! embedded in the report.
//!
//! The standalone predicates are exposed publicly so they can be reused
//! outside of a full scan; [`PathFilter`] combines them against a
//! [`ScanConfig`].

mod extension;
mod pattern;
mod size;

pub use extension::{has_accepted_extension, is_hidden_file, normalized_extension, type_label};
pub use pattern::IgnorePattern;
pub use size::passes_size_filter;

use crate::config::ScanConfig;
use crate::output::formatter::format_file_size;
use crate::stats::ScanStatistics;
use log::trace;
use std::path::{Component, Path};

/// Expresses `path` relative to `root` with `/` separators on every platform.
///
/// Returns an empty string for the root itself. Paths outside the root are
/// rendered as-is, with separators normalized.
///
/// # Examples
///
/// ```
/// use project_scanner::filtering::relative_path;
/// use std::path::Path;
///
/// let rel = relative_path(Path::new("/project/src/lib.rs"), Path::new("/project"));
/// assert_eq!(rel, "src/lib.rs");
/// ```
pub fn relative_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// The path filter for one scan.
#[derive(Debug, Clone, Copy)]
pub struct PathFilter<'a> {
    config: &'a ScanConfig,
}

impl<'a> PathFilter<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Root-relative, `/`-separated form of `path`.
    pub fn relative_path(&self, path: &Path) -> String {
        relative_path(path, &self.config.root_directory)
    }

    /// Whether `path` is the report file or any ignore pattern matches it.
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.config.is_reserved_output(path) {
            trace!("'{}' is the report file", path.display());
            return true;
        }
        let relative = self.relative_path(path);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        self.is_ignored_relative(&relative, &file_name)
    }

    /// Like [`Self::is_ignored`] for an already computed relative path.
    pub fn is_ignored_relative(&self, relative_path: &str, file_name: &str) -> bool {
        let hit = self
            .config
            .ignored_patterns
            .iter()
            .find(|p| p.matches(relative_path, file_name));
        if let Some(pattern) = hit {
            trace!("'{}' ignored by pattern '{}'", relative_path, pattern.as_str());
        }
        hit.is_some()
    }

    /// Whether the content of the file at `path` (of `size` bytes) belongs in
    /// the report.
    ///
    /// An otherwise eligible file that exceeds the size cap is recorded as a
    /// warning in `stats`; nothing else has side effects.
    pub fn is_content_eligible(&self, path: &Path, size: u64, stats: &mut ScanStatistics) -> bool {
        if self.is_ignored(path) {
            return false;
        }
        if !has_accepted_extension(path, &self.config.accepted_extensions) || is_hidden_file(path) {
            return false;
        }
        if !passes_size_filter(size, self.config.max_file_size) {
            stats.add_warning(format!(
                "Skipped '{}': {} exceeds the {} size limit",
                self.relative_path(path),
                format_file_size(size),
                format_file_size(self.config.max_file_size)
            ));
            return false;
        }
        true
    }
}
