use crate::constants::FILE_BLOCK_SEPARATOR;
use crate::output::formatter::format_file_size;
use log::trace;
use std::io::{self, Write};

/// Everything needed to render one file's section of the report.
#[derive(Debug, Clone, Copy)]
pub struct FileBlock<'a> {
    pub relative_path: &'a str,
    pub type_label: &'a str,
    pub size: u64,
    pub lines: usize,
    /// Lowercase hex MD5, omitted from the block when `None`.
    pub hash: Option<&'a str>,
    pub content: &'a str,
}

/// Writes a single file's header block and content to the writer.
///
/// The layout is: separator, `FILE:` line, `Type | Size | Lines` line,
/// optional `MD5:` line, separator, blank line, the raw content and a
/// trailing newline.
pub fn write_file_block(writer: &mut dyn Write, block: &FileBlock<'_>) -> io::Result<()> {
    trace!("Writing block for '{}'", block.relative_path);
    writeln!(writer, "{}", FILE_BLOCK_SEPARATOR)?;
    writeln!(writer, "FILE: {}", block.relative_path)?;
    writeln!(
        writer,
        "Type: {} | Size: {} | Lines: {}",
        block.type_label,
        format_file_size(block.size),
        block.lines
    )?;
    if let Some(hash) = block.hash {
        writeln!(writer, "MD5: {}", hash)?;
    }
    writeln!(writer, "{}", FILE_BLOCK_SEPARATOR)?;
    writeln!(writer)?;
    writer.write_all(block.content.as_bytes())?;
    writeln!(writer)?;
    Ok(())
}
