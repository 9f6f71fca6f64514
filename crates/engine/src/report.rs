use crate::stats::Tally;
use std::io;
use std::path::{Path, PathBuf};

/// Receives results as a count progresses.
pub trait ReportSink {
    /// Called once per matched file, right after it is counted.
    ///
    /// # Errors
    ///
    /// Propagates write failures of the underlying output.
    fn file_counted(&mut self, path: &Path, lines: usize) -> io::Result<()>;

    /// Called once after every pattern has been scanned.
    ///
    /// # Errors
    ///
    /// Propagates write failures of the underlying output.
    fn finished(&mut self, tally: &Tally) -> io::Result<()>;
}

/// Event captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    File { path: PathBuf, lines: usize },
    Finished { total: usize },
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl RecordingSink {
    #[must_use]
    pub fn files(&self) -> Vec<(PathBuf, usize)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::File { path, lines } => Some((path.clone(), *lines)),
                Event::Finished { .. } => None,
            })
            .collect()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.events.iter().any(|e| matches!(e, Event::Finished { .. }))
    }
}

impl ReportSink for RecordingSink {
    fn file_counted(&mut self, path: &Path, lines: usize) -> io::Result<()> {
        self.events.push(Event::File {
            path: path.to_path_buf(),
            lines,
        });
        Ok(())
    }

    fn finished(&mut self, tally: &Tally) -> io::Result<()> {
        self.events.push(Event::Finished {
            total: tally.total(),
        });
        Ok(())
    }
}
