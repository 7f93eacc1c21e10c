// src/output/header.rs

use crate::config::ScanConfig;
use crate::output::formatter::format_file_size;
use std::io::{self, Write};

/// Writes the report title and the `Scan Configuration` section.
pub(crate) fn write_header(
    writer: &mut dyn Write,
    config: &ScanConfig,
    generated_at: &str,
) -> io::Result<()> {
    writeln!(writer, "# {} Project Overview", config.project_name)?;
    writeln!(writer)?;
    writeln!(writer, "Generated: {}", generated_at)?;
    writeln!(writer, "Root: {}", config.root_directory.display())?;
    writeln!(writer)?;
    writeln!(writer, "## 1. Scan Configuration")?;
    writeln!(writer)?;

    let extensions: Vec<&str> = config.accepted_extensions.iter().map(|e| e.as_str()).collect();
    writeln!(writer, "- **Accepted Extensions:** {}", join_or_none(&extensions))?;
    writeln!(
        writer,
        "- **Ignored Patterns:** {}",
        join_or_none(&config.ignored_pattern_strings())
    )?;
    writeln!(
        writer,
        "- **Max File Size:** {}",
        format_file_size(config.max_file_size)
    )?;
    writeln!(
        writer,
        "- **Content Hashes:** {}",
        if config.include_hashes { "MD5" } else { "disabled" }
    )?;
    writeln!(writer)?;
    Ok(())
}

fn join_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
