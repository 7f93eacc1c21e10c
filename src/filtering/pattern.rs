// src/filtering/pattern.rs

use crate::errors::ConfigError;
use regex::Regex;

/// A single ignore pattern, compiled once when the config is built.
///
/// A pattern containing `*` is a wildcard: each `*` matches any run of
/// characters, everything else is literal, and the resulting regex is searched
/// anywhere in the root-relative path. Any other pattern is a literal name that
/// matches when one of these holds:
///
/// - the relative path equals the pattern,
/// - the relative path starts with `pattern/`,
/// - the relative path contains `/pattern/`,
/// - the file name equals the pattern.
///
/// Wildcard parts are matched literally, so `*.log` matches `app.log` and
/// `x.logger.js` but not `src/catalog`, where a plain `*` to `.*` rewrite
/// would let `.` match any character. Reports produced by such a rewrite
/// can therefore ignore more files than this one does.
///
/// # Examples
///
/// ```
/// use project_scanner::filtering::IgnorePattern;
///
/// let node_modules = IgnorePattern::new("node_modules").unwrap();
/// assert!(node_modules.matches("node_modules/pkg/index.js", "index.js"));
/// assert!(node_modules.matches("web/node_modules/pkg/index.js", "index.js"));
/// assert!(!node_modules.matches("src/node_modules.rs", "node_modules.rs"));
///
/// let snapshots = IgnorePattern::new("*.snap").unwrap();
/// assert!(snapshots.matches("tests/snapshots/a.snap", "a.snap"));
///
/// let logs = IgnorePattern::new("*.log").unwrap();
/// assert!(!logs.matches("src/catalog", "catalog"));
/// ```
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    source: String,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Wildcard(Regex),
    Literal {
        dir_prefix: String,
        dir_infix: String,
    },
}

impl IgnorePattern {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let matcher = if pattern.contains('*') {
            let regex_source = pattern
                .split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*");
            let regex = Regex::new(&regex_source).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            Matcher::Wildcard(regex)
        } else {
            Matcher::Literal {
                dir_prefix: format!("{}/", pattern),
                dir_infix: format!("/{}/", pattern),
            }
        };
        Ok(Self {
            source: pattern.to_string(),
            matcher,
        })
    }

    /// The pattern as originally written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Tests a root-relative, `/`-separated path and its file name.
    pub fn matches(&self, relative_path: &str, file_name: &str) -> bool {
        match &self.matcher {
            Matcher::Wildcard(regex) => regex.is_match(relative_path),
            Matcher::Literal {
                dir_prefix,
                dir_infix,
            } => {
                relative_path == self.source
                    || relative_path.starts_with(dir_prefix.as_str())
                    || relative_path.contains(dir_infix.as_str())
                    || file_name == self.source
            }
        }
    }
}
