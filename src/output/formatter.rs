// src/output/formatter.rs

use crate::constants::SIZE_UNITS;
use std::time::Duration;

/// Formats a byte count with two decimals, dividing by 1024 per unit step
/// across `B`, `KB`, `MB` and `GB`.
///
/// # Examples
///
/// ```
/// use project_scanner::format_file_size;
///
/// assert_eq!(format_file_size(0), "0.00 B");
/// assert_eq!(format_file_size(1500), "1.46 KB");
/// assert_eq!(format_file_size(10 * 1024 * 1024), "10.00 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, SIZE_UNITS[unit])
}

/// Seconds with two decimals, e.g. `1.25`.
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}

/// `part` as a percentage of `whole` with one decimal; `0.0` when `whole` is 0.
pub fn format_percentage(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", part as f64 * 100.0 / whole as f64)
}
