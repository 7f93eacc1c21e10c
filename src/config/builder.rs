// src/config/builder.rs

use super::parsing::{normalize_extensions, parse_max_size};
use super::path_resolve::{
    default_output_path, project_name_from_root, resolve_output_path, resolve_root,
};
use super::ScanConfig;
use crate::cli::Cli;
use crate::constants::{DEFAULT_ACCEPTED_EXTENSIONS, DEFAULT_IGNORED_PATTERNS, DEFAULT_MAX_FILE_SIZE};
use crate::errors::{ConfigError, Result};
use crate::filtering::IgnorePattern;
use log::debug;

/// Builds a [`ScanConfig`] from built-in defaults plus optional overrides.
///
/// Every setter is optional; anything left unset falls back to the defaults
/// in [`crate::constants`].
///
/// # Examples
///
/// ```no_run
/// use project_scanner::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .root_directory(".")
///     .accepted_extensions(vec!["rs".to_string(), "toml".to_string()])
///     .include_hashes(false)
///     .build()
///     .unwrap();
/// assert!(config.accepted_extensions.contains(".rs"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    root_directory: Option<String>,
    output_file: Option<String>,
    project_name: Option<String>,
    ignored_patterns: Option<Vec<String>>,
    extra_ignored_patterns: Option<Vec<String>>,
    accepted_extensions: Option<Vec<String>>,
    max_file_size: Option<u64>,
    max_size: Option<String>,
    include_hashes: Option<bool>,
    verbose: Option<bool>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps the parsed command line onto a builder.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            root_directory: Some(cli.root_directory),
            output_file: cli.output_file,
            project_name: cli.project_name,
            ignored_patterns: cli.ignored_patterns,
            extra_ignored_patterns: cli.extra_ignored_patterns,
            accepted_extensions: cli.accepted_extensions,
            max_file_size: None,
            max_size: cli.max_size,
            include_hashes: Some(!cli.no_hash),
            verbose: Some(!cli.quiet),
        }
    }

    pub fn root_directory(mut self, path: impl Into<String>) -> Self {
        self.root_directory = Some(path.into());
        self
    }

    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Replaces the default ignore patterns.
    pub fn ignored_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignored_patterns = Some(patterns);
        self
    }

    /// Appends patterns to the default (or replaced) ignore patterns.
    pub fn extra_ignored_patterns(mut self, patterns: Vec<String>) -> Self {
        self.extra_ignored_patterns = Some(patterns);
        self
    }

    pub fn accepted_extensions(mut self, extensions: Vec<String>) -> Self {
        self.accepted_extensions = Some(extensions);
        self
    }

    /// Sets the size cap in bytes. Takes precedence over [`Self::max_size`].
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = Some(bytes);
        self
    }

    /// Sets the size cap from a human-readable string such as `10MiB`.
    pub fn max_size(mut self, size: impl Into<String>) -> Self {
        self.max_size = Some(size.into());
        self
    }

    pub fn include_hashes(mut self, enabled: bool) -> Self {
        self.include_hashes = Some(enabled);
        self
    }

    pub fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = Some(enabled);
        self
    }

    /// Resolves paths, compiles patterns and applies defaults.
    ///
    /// # Errors
    /// Fails if the root cannot be resolved or is not a directory, if a size
    /// or project name is invalid, or if a wildcard pattern does not compile.
    pub fn build(self) -> Result<ScanConfig> {
        let root_directory = resolve_root(self.root_directory.as_deref().unwrap_or("."))?;

        let project_name = match self.project_name {
            Some(name) if name.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    option: "--name".to_string(),
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
            Some(name) => name,
            None => project_name_from_root(&root_directory),
        };

        let output_path = match self.output_file.as_deref() {
            Some(output) => resolve_output_path(output)?,
            None => default_output_path(&root_directory, &project_name),
        };

        let max_file_size = match (self.max_file_size, self.max_size.as_deref()) {
            (Some(bytes), _) => bytes,
            (None, Some(size)) => parse_max_size(size)?,
            (None, None) => DEFAULT_MAX_FILE_SIZE,
        };

        let mut pattern_strings: Vec<String> = self.ignored_patterns.unwrap_or_else(|| {
            DEFAULT_IGNORED_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect()
        });
        pattern_strings.extend(self.extra_ignored_patterns.unwrap_or_default());
        let ignored_patterns = pattern_strings
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| IgnorePattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let accepted_extensions = match self.accepted_extensions {
            Some(exts) => normalize_extensions(exts),
            None => normalize_extensions(DEFAULT_ACCEPTED_EXTENSIONS.iter()),
        };

        let config = ScanConfig {
            root_directory,
            project_name,
            output_path,
            ignored_patterns,
            accepted_extensions,
            max_file_size,
            include_hashes: self.include_hashes.unwrap_or(true),
            verbose: self.verbose.unwrap_or(true),
        };
        debug!("Configuration built: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_applied() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let config = ConfigBuilder::new()
            .root_directory(temp.path().to_str().unwrap())
            .build()?;

        let dir_name = temp.path().file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(config.project_name, dir_name);
        assert_eq!(
            config.output_path,
            config.root_directory.join(format!("_{}Overview.txt", dir_name))
        );
        assert_eq!(config.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert!(config.include_hashes);
        assert!(config.verbose);
        assert!(config.accepted_extensions.contains(".rs"));
        let patterns = config.ignored_pattern_strings();
        assert!(patterns.contains(&"node_modules"));
        // The report is reserved by its exact path, not through a pattern.
        assert!(config.is_reserved_output(&config.output_path));
        let nested = config.root_directory.join("docs").join(format!("_{}Overview.txt", dir_name));
        assert!(!config.is_reserved_output(&nested));
        Ok(())
    }

    #[test]
    fn test_overrides_replace_defaults() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let output = temp.path().join("out.txt");
        let config = ConfigBuilder::new()
            .root_directory(temp.path().to_str().unwrap())
            .output_file(output.to_str().unwrap())
            .project_name("Demo")
            .ignored_patterns(vec!["vendor".to_string()])
            .extra_ignored_patterns(vec!["*.snap".to_string()])
            .accepted_extensions(vec!["TXT".to_string()])
            .max_size("1KiB")
            .include_hashes(false)
            .verbose(false)
            .build()?;

        assert_eq!(config.project_name, "Demo");
        assert_eq!(config.output_path, temp.path().canonicalize()?.join("out.txt"));
        assert_eq!(config.ignored_pattern_strings(), vec!["vendor", "*.snap"]);
        assert_eq!(config.accepted_extensions.len(), 1);
        assert!(config.accepted_extensions.contains(".txt"));
        assert_eq!(config.max_file_size, 1024);
        assert!(!config.include_hashes);
        assert!(!config.verbose);
        Ok(())
    }

    #[test]
    fn test_max_file_size_takes_precedence() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let config = ConfigBuilder::new()
            .root_directory(temp.path().to_str().unwrap())
            .max_size("1MiB")
            .max_file_size(7)
            .build()?;
        assert_eq!(config.max_file_size, 7);
        Ok(())
    }

    #[test]
    fn test_empty_project_name_rejected() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = ConfigBuilder::new()
            .root_directory(temp.path().to_str().unwrap())
            .project_name("  ")
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_size_rejected() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = ConfigBuilder::new()
            .root_directory(temp.path().to_str().unwrap())
            .max_size("lots")
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidSize { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_from_cli() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.rs"), "fn a() {}")?;
        let root = temp.path().to_str().unwrap();
        let cli = Cli::parse_from(["project-scanner", root, "--no-hash", "-q", "-m", "100"]);
        let config = ConfigBuilder::from_cli(cli).build()?;
        assert!(!config.include_hashes);
        assert!(!config.verbose);
        assert_eq!(config.max_file_size, 100);
        Ok(())
    }
}
