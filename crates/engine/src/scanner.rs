use crate::config::ScanOptions;
use crate::error::ReadError;
use crate::pattern::{PathMatcher, Pattern, Target};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves a pattern to the files it names.
///
/// Resolution never fails: a pattern that is malformed or matches nothing
/// yields an empty list.
pub trait FileSystemScanner {
    fn resolve(&self, pattern: &Pattern) -> Vec<PathBuf>;
}

/// Loads a matched file as text.
pub trait SourceReader {
    /// # Errors
    ///
    /// Returns a [`ReadError`] if the file cannot be read or is not UTF-8.
    fn read_text(&self, path: &Path) -> Result<String, ReadError>;
}

/// Resolves patterns against the real filesystem.
#[derive(Debug, Clone, Default)]
pub struct GlobScanner {
    options: ScanOptions,
}

impl GlobScanner {
    #[must_use]
    pub const fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    fn walk(&self, base: &str, matcher: &PathMatcher, max_depth: Option<usize>) -> Vec<PathBuf> {
        let root = if base.is_empty() { Path::new(".") } else { Path::new(base) };
        if !root.is_dir() {
            log::debug!("base directory '{}' does not exist", root.display());
            return Vec::new();
        }

        let mut builder = WalkBuilder::new(root);
        // Dot-names are filtered per glob segment by the matcher.
        builder
            .standard_filters(false)
            .follow_links(self.options.follow_links)
            .max_depth(max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut matches = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("skipping unreadable entry: {e}");
                    continue;
                }
            };
            let is_file = entry.file_type().is_some_and(|ft| {
                ft.is_file() || (ft.is_symlink() && entry.path().is_file())
            });
            if !is_file {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(root) else {
                continue;
            };
            if matcher.is_match(rel, self.options.include_hidden) {
                // 空のベースは "./" を付けずに報告する
                let path = if base.is_empty() {
                    rel.to_path_buf()
                } else {
                    entry.into_path()
                };
                matches.push(path);
            }
        }
        matches
    }
}

impl FileSystemScanner for GlobScanner {
    fn resolve(&self, pattern: &Pattern) -> Vec<PathBuf> {
        match pattern.target() {
            Target::Literal(raw) => {
                let path = PathBuf::from(raw);
                if !raw.is_empty() && fs::symlink_metadata(&path).is_ok() {
                    vec![path]
                } else {
                    Vec::new()
                }
            }
            Target::Glob { base, .. } => {
                let Some(matcher) = pattern.matcher() else {
                    return Vec::new();
                };
                self.walk(base, &matcher, pattern.max_depth())
            }
        }
    }
}

/// Reads whole files from disk and requires them to be UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskReader;

impl SourceReader for DiskReader {
    fn read_text(&self, path: &Path) -> Result<String, ReadError> {
        let bytes = fs::read(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|e| ReadError::Decode {
            path: path.to_path_buf(),
            source: e.utf8_error(),
        })
    }
}
