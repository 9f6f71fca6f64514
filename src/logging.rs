// src/logging.rs
use tracing_subscriber::filter::LevelFilter;

/// Maps `-v` repetitions onto a log level. Warnings are always shown.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the stderr subscriber. `log` records from the engine are
/// forwarded through the subscriber's log bridge.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for(verbosity))
        .with_target(false)
        .without_time()
        .try_init()
}
