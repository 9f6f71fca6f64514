//! In-memory filesystem used to drive [`LineCounter`](crate::LineCounter)
//! without touching disk.

use crate::error::ReadError;
use crate::pattern::{Pattern, Target};
use crate::scanner::{FileSystemScanner, SourceReader};
use std::collections::BTreeMap;
use std::io;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
enum Entry {
    Text(String),
    Bytes(Vec<u8>),
    /// Listed by `resolve` but gone by the time it is read.
    Vanished,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<PathBuf, Entry>,
    include_hidden: bool,
}

impl MemoryFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(normalize(Path::new(path)), Entry::Text(contents.to_owned()));
        self
    }

    #[must_use]
    pub fn with_bytes(mut self, path: &str, contents: &[u8]) -> Self {
        self.files.insert(normalize(Path::new(path)), Entry::Bytes(contents.to_vec()));
        self
    }

    #[must_use]
    pub fn with_vanished(mut self, path: &str) -> Self {
        self.files.insert(normalize(Path::new(path)), Entry::Vanished);
        self
    }

    #[must_use]
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Replaces a file's contents in place.
    pub fn write(&mut self, path: &str, contents: &str) {
        self.files.insert(normalize(Path::new(path)), Entry::Text(contents.to_owned()));
    }

    /// Drops a file as if it were deleted.
    pub fn remove(&mut self, path: &str) {
        self.files.remove(&normalize(Path::new(path)));
    }
}

impl FileSystemScanner for MemoryFs {
    fn resolve(&self, pattern: &Pattern) -> Vec<PathBuf> {
        match pattern.target() {
            Target::Literal(raw) => {
                let path = Path::new(raw);
                if self.files.contains_key(&normalize(path)) {
                    vec![path.to_path_buf()]
                } else {
                    Vec::new()
                }
            }
            Target::Glob { base, .. } => {
                let Some(matcher) = pattern.matcher() else {
                    return Vec::new();
                };
                let base_key = normalize(Path::new(base));
                self.files
                    .keys()
                    .filter_map(|key| key.strip_prefix(&base_key).ok())
                    .filter(|rel| matcher.is_match(rel, self.include_hidden))
                    .map(|rel| Path::new(base).join(rel))
                    .collect()
            }
        }
    }
}

impl SourceReader for MemoryFs {
    fn read_text(&self, path: &Path) -> Result<String, ReadError> {
        let missing = || ReadError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        match self.files.get(&normalize(path)) {
            Some(Entry::Text(text)) => Ok(text.clone()),
            Some(Entry::Bytes(bytes)) => {
                std::str::from_utf8(bytes)
                    .map(str::to_owned)
                    .map_err(|source| ReadError::Decode {
                        path: path.to_path_buf(),
                        source,
                    })
            }
            Some(Entry::Vanished) | None => Err(missing()),
        }
    }
}

/// Drops `.` components so `./src/a.ts` and `src/a.ts` share a key.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
