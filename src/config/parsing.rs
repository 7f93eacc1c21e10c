// src/config/parsing.rs

use crate::errors::ConfigError;
use byte_unit::Byte;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Parses a human-readable size such as `10MiB`, `512k` or `2048` into bytes.
///
/// # Examples
///
/// ```
/// use project_scanner::config::parse_max_size;
///
/// assert_eq!(parse_max_size("2MiB").unwrap(), 2 * 1024 * 1024);
/// assert_eq!(parse_max_size("1024").unwrap(), 1024);
/// ```
pub fn parse_max_size(value: &str) -> Result<u64, ConfigError> {
    Byte::from_str(value.trim())
        .map(|b| b.as_u64())
        .map_err(|e| ConfigError::InvalidSize {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Normalizes extensions to lowercase with a single leading dot.
///
/// Empty entries are dropped, so `["RS", ".md", ""]` becomes `{".md", ".rs"}`.
pub fn normalize_extensions<I, S>(exts: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    exts.into_iter()
        .filter_map(|ext| {
            let trimmed = ext.as_ref().trim().trim_start_matches('.');
            if trimmed.is_empty() {
                None
            } else {
                Some(format!(".{}", trimmed.to_lowercase()))
            }
        })
        .collect()
}
