//! Defines core data structures used throughout the scan pipeline.
//!
//! `DirectoryEntry` values are produced by the walker and dropped once the
//! tree text is rendered; `FileInfo` values describe the content-eligible files
//! handed to the file processor.

use std::path::PathBuf;

/// A filesystem node visited during the walk.
///
/// # Examples
///
/// ```
/// use project_scanner::core_types::DirectoryEntry;
/// use std::path::PathBuf;
///
/// let entry = DirectoryEntry {
///     name: "main.rs".to_string(),
///     path: PathBuf::from("/project/src/main.rs"),
///     is_dir: false,
///     size: 42,
///     depth: 2,
/// };
/// assert!(!entry.is_dir);
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// The entry's file name.
    pub name: String,
    /// The absolute path on disk.
    pub path: PathBuf,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Size in bytes from the entry's metadata.
    pub size: u64,
    /// Depth below the scan root; direct children of the root have depth 1.
    pub depth: usize,
}

/// A content-eligible file, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// The absolute path on disk.
    pub absolute_path: PathBuf,
    /// The path relative to the scan root, always with `/` separators.
    pub relative_path: String,
    /// Size in bytes at discovery time.
    pub size: u64,
}
