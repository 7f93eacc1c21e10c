// src/config/path_resolve.rs

use crate::errors::{io_error_with_path, ConfigError, Result};
use std::path::{Path, PathBuf};

/// Resolves the scan root to an absolute, canonicalized directory path.
pub fn resolve_root(root: &str) -> Result<PathBuf> {
    let resolved = PathBuf::from(root)
        .canonicalize()
        .map_err(|e| io_error_with_path(e, root))?;
    if !resolved.is_dir() {
        return Err(ConfigError::InvalidValue {
            option: "ROOT".to_string(),
            reason: format!("'{}' is not a directory", root),
        }
        .into());
    }
    Ok(resolved)
}

/// Makes an output path absolute against the current working directory.
///
/// The file itself does not need to exist yet. When its parent directory
/// exists, the parent is canonicalized so the path compares equal to the
/// same file reached through the canonical scan root.
pub fn resolve_output_path(output: &str) -> Result<PathBuf> {
    let path = Path::new(output);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| io_error_with_path(e, "."))?;
        cwd.join(path)
    };
    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => match parent.canonicalize() {
            Ok(parent) => Ok(parent.join(name)),
            Err(_) => Ok(absolute),
        },
        _ => Ok(absolute),
    }
}

/// The default report path: `<root>/_<ProjectName>Overview.txt`.
pub fn default_output_path(root: &Path, project_name: &str) -> PathBuf {
    root.join(format!("_{}Overview.txt", project_name))
}

/// The project name derived from the root directory's last component.
pub fn project_name_from_root(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Project".to_string())
}
