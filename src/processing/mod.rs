//! Reads content-eligible files, derives their metadata and appends their
//! blocks to the report.
//!
//! Files are handled strictly one after another in traversal order. A file
//! that cannot be stat-ed or read is recorded in the statistics and skipped;
//! only a failure to write the report stops processing.

use crate::config::ScanConfig;
use crate::core_types::FileInfo;
use crate::filtering::type_label;
use crate::output::{write_file_block, FileBlock};
use crate::progress::ProgressReporter;
use crate::stats::ScanStatistics;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};

mod counter;
mod hash;

pub use counter::count_lines;
pub use hash::md5_hex;

/// A file's content together with the metadata shown in its block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub relative_path: String,
    pub type_label: String,
    pub size: u64,
    pub lines: usize,
    pub hash: Option<String>,
    pub content: String,
}

impl ProcessedFile {
    pub fn as_block(&self) -> FileBlock<'_> {
        FileBlock {
            relative_path: &self.relative_path,
            type_label: &self.type_label,
            size: self.size,
            lines: self.lines,
            hash: self.hash.as_deref(),
            content: &self.content,
        }
    }
}

/// Stats and reads one file and derives its line count, type label and,
/// when enabled, its MD5 fingerprint.
///
/// Invalid UTF-8 is replaced lossily in the text; the hash always covers the
/// raw bytes.
pub fn read_file(file: &FileInfo, config: &ScanConfig) -> io::Result<ProcessedFile> {
    let metadata = fs::metadata(&file.absolute_path)?;
    let bytes = fs::read(&file.absolute_path)?;
    let hash = config.include_hashes.then(|| md5_hex(&bytes));
    let content = String::from_utf8_lossy(&bytes).into_owned();

    Ok(ProcessedFile {
        relative_path: file.relative_path.clone(),
        type_label: type_label(&file.absolute_path),
        size: metadata.len(),
        lines: count_lines(&content),
        hash,
        content,
    })
}

/// Processes every file in order, appending one block per readable file.
///
/// # Errors
/// Returns the I/O error if writing to `writer` fails. Read failures are
/// recorded in `stats.errors` instead.
pub fn process_files(
    files: &[FileInfo],
    config: &ScanConfig,
    stats: &mut ScanStatistics,
    writer: &mut dyn Write,
    progress: &dyn ProgressReporter,
) -> io::Result<()> {
    progress.set_length(files.len() as u64);
    for (index, file) in files.iter().enumerate() {
        if config.verbose {
            info!("Processing {}", file.relative_path);
        } else {
            debug!("Processing {}", file.relative_path);
        }
        progress.set_message(file.relative_path.clone());

        match read_file(file, config) {
            Ok(processed) => {
                write_file_block(writer, &processed.as_block())?;
                stats.record_included(
                    &processed.relative_path,
                    &processed.type_label,
                    processed.size,
                    processed.lines,
                );
            }
            Err(err) => {
                stats.add_error(format!("Failed to read '{}': {}", file.relative_path, err));
                stats.record_skipped();
            }
        }
        progress.set_position(index as u64 + 1);
    }
    progress.finish();
    Ok(())
}
