use crate::filtering::PathFilter;
use log::debug;
use std::path::Path;
use walkdir::{DirEntry, FilterEntry, IntoIter, WalkDir};

/// The walker type produced by [`build_walker`].
pub(super) type Walker<'a> = FilterEntry<IntoIter, Box<dyn FnMut(&DirEntry) -> bool + 'a>>;

/// Configures a depth-first walk below `root`.
///
/// Within each directory, subdirectories come first, then files, each group
/// ordered by name. Ignored directories are pruned so their contents are never
/// read; ignored files are still yielded so the caller can count them.
/// Symbolic links are not followed.
pub(super) fn build_walker<'a>(root: &Path, filter: PathFilter<'a>) -> Walker<'a> {
    debug!("Building walker for {}", root.display());
    let prune: Box<dyn FnMut(&DirEntry) -> bool + 'a> =
        Box::new(move |entry| !(entry.file_type().is_dir() && filter.is_ignored(entry.path())));

    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by(|a, b| {
            b.file_type()
                .is_dir()
                .cmp(&a.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(prune)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_walker_order_and_pruning() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir_all(temp.path().join("b_dir/inner"))?;
        fs::create_dir_all(temp.path().join("node_modules/pkg"))?;
        fs::write(temp.path().join("node_modules/pkg/index.js"), "x")?;
        fs::write(temp.path().join("a.txt"), "a")?;
        fs::write(temp.path().join("B.txt"), "b")?;
        fs::write(temp.path().join("b_dir/z.txt"), "z")?;

        let config = ConfigBuilder::new()
            .root_directory(temp.path().to_str().unwrap())
            .ignored_patterns(vec!["node_modules".to_string()])
            .build()?;
        let filter = PathFilter::new(&config);

        let names: Vec<String> = build_walker(&config.root_directory, filter)
            .filter_map(|e| e.ok())
            .map(|e| filter.relative_path(e.path()))
            .collect();

        // The report file does not exist yet, so only the fixture is listed.
        assert_eq!(names, vec!["b_dir", "b_dir/inner", "b_dir/z.txt", "B.txt", "a.txt"]);
        Ok(())
    }
}
