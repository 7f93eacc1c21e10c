// src/output/mod.rs

//! Renders the sections of the report.
//!
//! The report is written in one pass, in this order: header, directory tree,
//! file contents, summary. Each writer here produces one section; the
//! orchestration lives in [`crate::run`].

use std::io::{self, Write};

pub mod file_block;
pub mod formatter;
pub mod header;
pub mod summary;
pub mod tree;
pub mod writer; // Manages the report file

pub use file_block::{write_file_block, FileBlock};
pub use formatter::format_file_size;

/// Writes the heading that introduces the file blocks.
pub(crate) fn write_contents_heading(writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "## 3. File Contents")?;
    writeln!(writer)?;
    Ok(())
}
