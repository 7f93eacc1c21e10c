// src/filtering/extension.rs

use crate::constants::NO_EXTENSION_LABEL;
use std::collections::BTreeSet;
use std::path::Path;

/// Returns the lowercase extension with a leading dot, e.g. `.rs`.
///
/// Dotfiles such as `.env` have no extension.
pub fn normalized_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

/// Checks whether the file's extension is in `accepted` (case-insensitive).
///
/// # Examples
///
/// ```
/// use project_scanner::filtering::has_accepted_extension;
/// use std::collections::BTreeSet;
/// use std::path::Path;
///
/// let accepted: BTreeSet<String> = [".rs".to_string()].into_iter().collect();
/// assert!(has_accepted_extension(Path::new("src/MAIN.RS"), &accepted));
/// assert!(!has_accepted_extension(Path::new("Makefile"), &accepted));
/// ```
pub fn has_accepted_extension(path: &Path, accepted: &BTreeSet<String>) -> bool {
    normalized_extension(path).is_some_and(|ext| accepted.contains(&ext))
}

/// The label used in file headers and the type distribution: the uppercase
/// extension without its dot, or `NONE`.
pub fn type_label(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_uppercase())
        .unwrap_or_else(|| NO_EXTENSION_LABEL.to_string())
}

/// Whether the file name starts with a dot.
pub fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
