// src/output/writer.rs

//! Manages the report file on disk.

use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

/// Deletes a report left over from a previous run.
///
/// A missing file is not an error; any other failure is.
pub fn remove_existing_output(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed previous report at {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error_with_path(e, path)),
    }
}

/// Creates the report file and wraps it in a `BufWriter`.
///
/// # Errors
/// Returns an error if the file cannot be created.
pub fn create_output_writer(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(BufWriter::new(file))
}
