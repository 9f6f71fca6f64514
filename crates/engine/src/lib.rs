// crates/engine/src/lib.rs
//! Line counting over glob patterns.
//!
//! [`LineCounter`] folds an ordered list of [`Pattern`]s into a [`Tally`]:
//! every pattern is resolved through a [`FileSystemScanner`], every match is
//! read through a [`SourceReader`], and each counted file is reported to a
//! [`ReportSink`] as it is produced.

pub mod config;
pub mod counter;
pub mod error;
pub mod memory;
pub mod pattern;
pub mod report;
pub mod scanner;
pub mod stats;

pub use counter::{LineCounter, count_lines};
pub use error::{EngineError, ReadError, Result};
pub use pattern::Pattern;
pub use report::ReportSink;
pub use scanner::{DiskReader, FileSystemScanner, GlobScanner, SourceReader};
pub use stats::{PatternSum, Tally};

use crate::config::Config;

/// Run a full count against the real filesystem.
///
/// # Errors
///
/// Returns the first [`ReadError`] hit while reading a matched file, or a
/// [`EngineError::Report`] if the sink fails to write.
pub fn run(config: &Config, sink: &mut dyn ReportSink) -> Result<Tally> {
    let scanner = GlobScanner::new(config.scan.clone());
    let reader = DiskReader;
    LineCounter::new(&scanner, &reader).count_all(&config.patterns, sink)
}
