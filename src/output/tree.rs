// src/output/tree.rs

use crate::constants::{TREE_BRANCH, TREE_LAST_BRANCH, TREE_PIPE, TREE_SPACE};
use std::io::{self, Write};

/// Builds the prefix for one tree line.
///
/// `ancestors_last` holds, for every ancestor level below the root, whether
/// that ancestor was the last child at its level; `is_last` refers to the entry
/// itself.
///
/// # Examples
///
/// ```
/// use project_scanner::output::tree::tree_prefix;
///
/// assert_eq!(tree_prefix(&[], false), "├── ");
/// assert_eq!(tree_prefix(&[false, true], true), "│       └── ");
/// ```
pub fn tree_prefix(ancestors_last: &[bool], is_last: bool) -> String {
    let mut prefix = String::with_capacity((ancestors_last.len() + 1) * TREE_PIPE.len());
    for &ancestor_last in ancestors_last {
        prefix.push_str(if ancestor_last { TREE_SPACE } else { TREE_PIPE });
    }
    prefix.push_str(if is_last { TREE_LAST_BRANCH } else { TREE_BRANCH });
    prefix
}

/// Writes the `Directory Structure` section: the heading, the synthetic
/// `<ProjectName>/` root line and the rendered tree lines.
pub(crate) fn write_tree_section(
    writer: &mut dyn Write,
    project_name: &str,
    tree: &str,
) -> io::Result<()> {
    writeln!(writer, "## 2. Directory Structure")?;
    writeln!(writer)?;
    writeln!(writer, "{}/", project_name)?;
    writer.write_all(tree.as_bytes())?;
    writeln!(writer)?;
    Ok(())
}
