//! Walks the scan root, renders the directory tree and collects the files
//! whose content goes into the report.
use crate::config::ScanConfig;
use crate::constants::TREE_SIZE_SUFFIX_LIMIT;
use crate::core_types::{DirectoryEntry, FileInfo};
use crate::filtering::PathFilter;
use crate::output::formatter::format_file_size;
use crate::output::tree::tree_prefix;
use crate::stats::ScanStatistics;
use log::debug;
use std::fs::{self, Metadata};
use std::io;
use walkdir::DirEntry;

mod walker;

use walker::build_walker;

/// The result of walking the scan root.
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    /// Tree lines below the `<ProjectName>/` root line, each ending in `\n`.
    pub tree: String,
    /// Content-eligible files in traversal order.
    pub files: Vec<FileInfo>,
}

/// Walks `config.root_directory` depth-first.
///
/// Symbolic links are stat-ed through the link, so a link's target decides
/// its size and whether it is listed as a directory.
///
/// Every non-directory entry whose metadata can be read is either returned in
/// [`WalkOutcome::files`] or counted as skipped in `stats`. A directory that
/// cannot be read adds one entry to `stats.errors`; an entry whose metadata
/// cannot be read adds one entry to `stats.warnings`. Neither stops the walk.
///
/// # Examples
///
/// ```
/// use project_scanner::{discover, ConfigBuilder, ScanStatistics};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// fs::create_dir(temp.path().join("src")).unwrap();
/// fs::write(temp.path().join("src/lib.rs"), "pub fn a() {}\n").unwrap();
///
/// let config = ConfigBuilder::new()
///     .root_directory(temp.path().to_str().unwrap())
///     .build()
///     .unwrap();
/// let mut stats = ScanStatistics::new();
/// let outcome = discover(&config, &mut stats);
///
/// assert_eq!(outcome.tree, "└── src/\n    └── lib.rs (14.00 B)\n");
/// assert_eq!(outcome.files[0].relative_path, "src/lib.rs");
/// ```
pub fn discover(config: &ScanConfig, stats: &mut ScanStatistics) -> WalkOutcome {
    let filter = PathFilter::new(config);
    let mut entries: Vec<DirectoryEntry> = Vec::new();
    let mut files: Vec<FileInfo> = Vec::new();

    let mut walker = build_walker(&config.root_directory, filter);
    while let Some(result) = walker.next() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                record_walk_error(&err, filter, stats);
                continue;
            }
        };

        let path = entry.path();
        let metadata = match entry_metadata(&entry) {
            Ok(metadata) => metadata,
            Err(err) => {
                stats.add_warning(format!(
                    "Failed to stat '{}': {}",
                    filter.relative_path(path),
                    err
                ));
                if entry.file_type().is_dir() {
                    walker.skip_current_dir();
                }
                continue;
            }
        };

        // A link to a directory is listed like a directory but never descended into.
        let is_dir = metadata.is_dir();
        if is_dir {
            if entry.path_is_symlink() && filter.is_ignored(path) {
                continue;
            }
        } else {
            if filter.is_ignored(path) {
                stats.record_skipped();
                continue;
            }
            if filter.is_content_eligible(path, metadata.len(), stats) {
                files.push(FileInfo {
                    absolute_path: path.to_path_buf(),
                    relative_path: filter.relative_path(path),
                    size: metadata.len(),
                });
            } else {
                stats.record_skipped();
            }
        }

        entries.push(DirectoryEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: path.to_path_buf(),
            is_dir,
            size: if is_dir { 0 } else { metadata.len() },
            depth: entry.depth(),
        });
    }

    debug!(
        "Discovery complete: {} tree entries, {} eligible files",
        entries.len(),
        files.len()
    );
    WalkOutcome {
        tree: render_tree(&entries),
        files,
    }
}

/// Metadata of `entry`, following the link when the entry is a symlink so
/// size checks see the file that will actually be read.
fn entry_metadata(entry: &DirEntry) -> io::Result<Metadata> {
    if entry.path_is_symlink() {
        fs::metadata(entry.path())
    } else {
        entry.metadata().map_err(io::Error::from)
    }
}

/// Records a directory the walker could not read.
fn record_walk_error(err: &walkdir::Error, filter: PathFilter<'_>, stats: &mut ScanStatistics) {
    let location = err
        .path()
        .map(|p| filter.relative_path(p))
        .unwrap_or_default();
    stats.add_error(format!("Failed to read directory '{}': {}", location, err));
}

/// Renders pre-order entries as ASCII tree lines.
///
/// Entries must be in depth-first order with every directory directly
/// followed by its descendants, as produced by the walker.
pub fn render_tree(entries: &[DirectoryEntry]) -> String {
    let is_last = last_sibling_flags(entries);
    let mut tree = String::new();
    let mut ancestors: Vec<bool> = Vec::new();

    for (entry, &last) in entries.iter().zip(&is_last) {
        ancestors.truncate(entry.depth.saturating_sub(1));
        tree.push_str(&tree_prefix(&ancestors, last));
        tree.push_str(&entry.name);
        if entry.is_dir {
            tree.push('/');
        } else if entry.size < TREE_SIZE_SUFFIX_LIMIT {
            tree.push_str(&format!(" ({})", format_file_size(entry.size)));
        }
        tree.push('\n');
        ancestors.push(last);
    }
    tree
}

/// For each entry, whether no later sibling follows it.
fn last_sibling_flags(entries: &[DirectoryEntry]) -> Vec<bool> {
    let mut flags = vec![false; entries.len()];
    // sibling_follows[d]: a later entry at depth d exists with no shallower entry in between.
    let mut sibling_follows: Vec<bool> = Vec::new();

    for (i, entry) in entries.iter().enumerate().rev() {
        let depth = entry.depth;
        if sibling_follows.len() <= depth {
            sibling_follows.resize(depth + 1, false);
        }
        flags[i] = !sibling_follows[depth];
        sibling_follows[depth] = true;
        sibling_follows.truncate(depth + 1);
    }
    flags
}
