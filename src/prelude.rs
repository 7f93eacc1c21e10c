//! The `project_scanner` prelude for convenient library usage.
//!
//! Re-exports the types and functions most programs need to configure and
//! run a scan.
//!
//! # Example
//!
//! ```no_run
//! use project_scanner::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let config = ConfigBuilder::new().root_directory(".").build()?;
//! let stats = run(&config, None)?;
//! println!("{} files included", stats.files_included);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{ConfigBuilder, ScanConfig};
pub use crate::core_types::{DirectoryEntry, FileInfo};
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::filtering::{
    has_accepted_extension, is_hidden_file, passes_size_filter, type_label, IgnorePattern,
    PathFilter,
};
pub use crate::output::format_file_size;
pub use crate::processing::{count_lines, md5_hex};
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::stats::{LargestFiles, ScanStatistics};
pub use crate::{discover, run, ScanPhase, WalkOutcome};
