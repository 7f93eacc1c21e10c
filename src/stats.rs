// src/stats.rs

//! The statistics accumulator owned by a single scan run.

use crate::constants::LARGEST_FILES_CAPACITY;
use std::collections::BTreeMap;
use std::time::Duration;

/// A bounded list of the largest files seen, sorted by descending size.
///
/// Insertion appends, re-sorts and truncates to [`LARGEST_FILES_CAPACITY`].
///
/// # Examples
///
/// ```
/// use project_scanner::stats::LargestFiles;
///
/// let mut largest = LargestFiles::default();
/// largest.insert("small.rs", 10);
/// largest.insert("big.rs", 500);
/// assert_eq!(largest.entries()[0], ("big.rs".to_string(), 500));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LargestFiles {
    entries: Vec<(String, u64)>,
}

impl LargestFiles {
    pub fn insert(&mut self, relative_path: impl Into<String>, size: u64) {
        self.entries.push((relative_path.into(), size));
        // Stable sort keeps earlier files first among equal sizes.
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries.truncate(LARGEST_FILES_CAPACITY);
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counters, sums and messages accumulated over one scan.
///
/// Created empty when a run starts, mutated through `&mut` by the walker and
/// the file processor, and finalized once with the elapsed time.
#[derive(Debug, Clone, Default)]
pub struct ScanStatistics {
    pub files_included: usize,
    pub files_skipped: usize,
    pub total_bytes: u64,
    pub total_lines: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Included files per type label (`RS`, `MD`, `NONE`, ...).
    pub extension_counts: BTreeMap<String, usize>,
    pub largest_files: LargestFiles,
    /// Set by [`ScanStatistics::finalize`]; `None` while the scan is running.
    pub elapsed: Option<Duration>,
}

impl ScanStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successfully processed file.
    pub fn record_included(&mut self, relative_path: &str, type_label: &str, size: u64, lines: usize) {
        self.files_included += 1;
        self.total_bytes += size;
        self.total_lines += lines;
        *self
            .extension_counts
            .entry(type_label.to_string())
            .or_insert(0) += 1;
        self.largest_files.insert(relative_path, size);
    }

    pub fn record_skipped(&mut self) {
        self.files_skipped += 1;
    }

    pub fn add_error(&mut self, message: String) {
        log::warn!("{}", message);
        self.errors.push(message);
    }

    pub fn add_warning(&mut self, message: String) {
        log::warn!("{}", message);
        self.warnings.push(message);
    }

    /// Stores the elapsed time. Only the first call has an effect.
    pub fn finalize(&mut self, elapsed: Duration) {
        if self.elapsed.is_none() {
            self.elapsed = Some(elapsed);
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Elapsed wall-clock time in milliseconds, 0 before finalization.
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.map_or(0, |d| d.as_millis())
    }

    /// Type labels with their counts, most frequent first, ties by label.
    pub fn extension_distribution(&self) -> Vec<(&str, usize)> {
        let mut distribution: Vec<(&str, usize)> = self
            .extension_counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        distribution
    }
}
