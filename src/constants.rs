// src/constants.rs

/// Patterns excluded from every scan unless the caller replaces the list.
/// The report file name is appended to this list when the config is built.
pub const DEFAULT_IGNORED_PATTERNS: &[&str] = &[
    // --- VCS ---
    ".git",
    ".svn",
    ".hg",
    // --- Dependencies & build output ---
    "node_modules",
    "target",
    "dist",
    "build",
    "coverage",
    ".cache",
    "__pycache__",
    // --- Lockfiles & licenses ---
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.lock",
    "LICENSE",
    "LICENSE.md",
    // --- Editor & OS noise ---
    ".idea",
    ".vscode",
    ".DS_Store",
];

/// Extensions (lowercase, with leading dot) whose content is embedded in the report.
pub const DEFAULT_ACCEPTED_EXTENSIONS: &[&str] = &[
    ".rs", ".toml", ".md", ".txt", ".json", ".yaml", ".yml", ".js", ".mjs", ".cjs", ".ts",
    ".jsx", ".tsx", ".html", ".htm", ".css", ".scss", ".py", ".sh", ".go", ".c", ".h", ".cpp",
    ".hpp", ".java", ".xml", ".sql", ".ini", ".cfg",
];

/// Files larger than this are skipped with a warning.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Files below this size get a size suffix in the directory tree.
pub const TREE_SIZE_SUFFIX_LIMIT: u64 = 1024 * 1024;

/// Capacity of the largest-files shortlist kept in the statistics.
pub const LARGEST_FILES_CAPACITY: usize = 10;

/// Line drawn above and below every file header block.
pub const FILE_BLOCK_SEPARATOR: &str =
    "================================================================================";

/// Type label for files without an extension.
pub const NO_EXTENSION_LABEL: &str = "NONE";

/// Units used by `format_file_size`, smallest first.
pub const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB"];

// --- Tree glyphs ---
pub const TREE_BRANCH: &str = "├── ";
pub const TREE_LAST_BRANCH: &str = "└── ";
pub const TREE_PIPE: &str = "│   ";
pub const TREE_SPACE: &str = "    ";
