// src/presentation.rs
use line_tally_engine::{ReportSink, Tally};
use std::io::{self, Write};
use std::path::Path;

/// Plain-text report.
///
/// One `<path>\t:<count>` line per file as it is counted, then a blank line,
/// one `<sum>: <pattern>` line per pattern and the grand total.
pub struct PlainTextReport<W: Write> {
    out: W,
}

impl<W: Write> PlainTextReport<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for PlainTextReport<W> {
    fn file_counted(&mut self, path: &Path, lines: usize) -> io::Result<()> {
        writeln!(self.out, "{}\t:{lines}", path.display())
    }

    fn finished(&mut self, tally: &Tally) -> io::Result<()> {
        writeln!(self.out)?;
        for entry in tally.patterns() {
            writeln!(self.out, "{}: {}", entry.sum, entry.pattern)?;
        }
        writeln!(self.out, "{}", tally.total())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use line_tally_engine::Pattern;

    #[test]
    fn renders_files_then_sums_then_total() {
        let mut report = PlainTextReport::new(Vec::new());
        report.file_counted(Path::new("./src/a.ts"), 12).unwrap();
        report.file_counted(Path::new("./src/b.tsx"), 3).unwrap();

        let mut tally = Tally::new();
        tally.record(&Pattern::from("./src/**/*.ts"), 12);
        tally.record(&Pattern::from("./src/**/*.tsx"), 3);
        report.finished(&tally).unwrap();

        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(
            text,
            "./src/a.ts\t:12\n./src/b.tsx\t:3\n\n12: ./src/**/*.ts\n3: ./src/**/*.tsx\n15\n"
        );
    }

    #[test]
    fn empty_tally_prints_blank_line_and_zero() {
        let mut report = PlainTextReport::new(Vec::new());
        report.finished(&Tally::new()).unwrap();
        assert_eq!(String::from_utf8(report.into_inner()).unwrap(), "\n0\n");
    }
}
