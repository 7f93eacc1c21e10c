// src/output/summary.rs

use crate::output::formatter::{format_file_size, format_percentage, format_seconds};
use crate::stats::ScanStatistics;
use log::debug;
use std::io::{self, Write};
use std::time::Duration;

/// Writes the `Summary Report` section from finalized statistics.
pub fn write_summary(writer: &mut dyn Write, stats: &ScanStatistics) -> io::Result<()> {
    debug!(
        "Writing summary: {} included, {} skipped",
        stats.files_included, stats.files_skipped
    );
    writeln!(writer)?;
    writeln!(writer, "## 4. Summary Report")?;
    writeln!(writer)?;
    writeln!(writer, "- **Files Processed:** {}", stats.files_included)?;
    writeln!(writer, "- **Files Skipped:** {}", stats.files_skipped)?;
    writeln!(writer, "- **Total Size:** {}", format_file_size(stats.total_bytes))?;
    writeln!(writer, "- **Total Lines:** {}", stats.total_lines)?;
    writeln!(
        writer,
        "- **Processing Time:** {} seconds",
        format_seconds(stats.elapsed.unwrap_or(Duration::ZERO))
    )?;

    writeln!(writer)?;
    writeln!(writer, "### File Types")?;
    let distribution = stats.extension_distribution();
    if distribution.is_empty() {
        writeln!(writer, "- (none)")?;
    }
    for (label, count) in distribution {
        writeln!(
            writer,
            "- **{}:** {} files ({}%)",
            label,
            count,
            format_percentage(count, stats.files_included)
        )?;
    }

    if !stats.largest_files.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "### Largest Files")?;
        for (rank, (path, size)) in stats.largest_files.entries().iter().enumerate() {
            writeln!(writer, "{}. {} ({})", rank + 1, path, format_file_size(*size))?;
        }
    }

    write_messages(writer, "Errors", &stats.errors)?;
    write_messages(writer, "Warnings", &stats.warnings)?;
    Ok(())
}

fn write_messages(writer: &mut dyn Write, title: &str, messages: &[String]) -> io::Result<()> {
    if messages.is_empty() {
        return Ok(());
    }
    writeln!(writer)?;
    writeln!(writer, "### {} ({})", title, messages.len())?;
    for message in messages {
        writeln!(writer, "- {}", message)?;
    }
    Ok(())
}
