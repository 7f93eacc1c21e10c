// src/progress.rs

//! Reports how far the content phase of a scan has progressed.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// Receives progress updates while file blocks are written.
///
/// Positions count processed files; the message is the relative path of the
/// file currently being read.
///
/// # Examples
///
/// ```
/// use project_scanner::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// struct LastPath {
///     path: Mutex<String>,
/// }
/// impl ProgressReporter for LastPath {
///     fn set_length(&self, _len: u64) {}
///     fn set_position(&self, _pos: u64) {}
///     fn set_message(&self, msg: String) {
///         *self.path.lock().unwrap() = msg;
///     }
///     fn finish(&self) {}
/// }
///
/// let reporter = LastPath { path: Mutex::new(String::new()) };
/// reporter.set_message("src/main.rs".to_string());
/// assert_eq!(*reporter.path.lock().unwrap(), "src/main.rs");
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Sets the number of files that will be processed.
    fn set_length(&self, len: u64);
    /// Sets how many files have been processed so far.
    fn set_position(&self, pos: u64);
    /// Names the file currently being processed.
    fn set_message(&self, msg: String);
    /// Finishes reporting and hides any bar.
    fn finish(&self);
}

/// A `ProgressReporter` that does nothing. Used when no bar is wanted.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_length(&self, _len: u64) {}
    fn set_position(&self, _pos: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self) {}
}

/// A terminal progress bar backed by `indicatif`.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        // The template is a literal; fall back to the default style rather than panic.
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
