use crate::error::{EngineError, Result};
use crate::pattern::Pattern;
use crate::report::ReportSink;
use crate::scanner::{FileSystemScanner, SourceReader};
use crate::stats::Tally;

/// Number of newline-separated segments in `text`.
///
/// This is the newline count plus one, so an empty file counts as 1 and a
/// trailing newline adds a segment. `\r\n`, a lone `\r` and `\n` each end a
/// segment.
#[must_use]
pub fn count_lines(text: &str) -> usize {
    let bytes = text.as_bytes();
    let lf = bytecount::count(bytes, b'\n');
    let cr = bytecount::count(bytes, b'\r');
    let crlf = if cr == 0 {
        0
    } else {
        bytes.windows(2).filter(|w| *w == b"\r\n").count()
    };
    lf + cr - crlf + 1
}

/// Folds patterns into per-pattern and total line counts.
pub struct LineCounter<'a> {
    scanner: &'a dyn FileSystemScanner,
    reader: &'a dyn SourceReader,
}

impl<'a> LineCounter<'a> {
    pub fn new(scanner: &'a dyn FileSystemScanner, reader: &'a dyn SourceReader) -> Self {
        Self { scanner, reader }
    }

    /// Counts every pattern in order, reporting each file as it is read.
    ///
    /// # Errors
    ///
    /// Stops at the first file that cannot be read. Files reported before
    /// that point stay reported; [`ReportSink::finished`] is not called.
    pub fn count_all(&self, patterns: &[Pattern], sink: &mut dyn ReportSink) -> Result<Tally> {
        let mut tally = Tally::new();
        for pattern in patterns {
            let sum = self.count_pattern(pattern, sink)?;
            tally.record(pattern, sum);
        }
        log::info!(
            "counted {} lines across {} patterns",
            tally.total(),
            tally.patterns().len()
        );
        sink.finished(&tally).map_err(EngineError::Report)?;
        Ok(tally)
    }

    fn count_pattern(&self, pattern: &Pattern, sink: &mut dyn ReportSink) -> Result<usize> {
        let files = self.scanner.resolve(pattern);
        log::debug!("{pattern}: {} matching files", files.len());

        files.iter().try_fold(0, |sum, path| {
            let lines = count_lines(&self.reader.read_text(path)?);
            log::trace!("{}: {lines}", path.display());
            sink.file_counted(path, lines).map_err(EngineError::Report)?;
            Ok(sum + lines)
        })
    }
}
