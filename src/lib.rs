// src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;
use crate::presentation::PlainTextReport;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Counts every pattern in `args` and writes the report to stdout.
///
/// # Errors
///
/// Returns the first unreadable file, or an output failure.
pub fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    let mut report = PlainTextReport::new(std::io::stdout().lock());
    line_tally_engine::run(&config, &mut report)?;
    Ok(())
}
