use globset::{GlobBuilder, GlobMatcher};
use std::borrow::Cow;
use std::fmt;
use std::path::{Component, Path};

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// A glob expression as supplied by the caller.
///
/// `*` and `?` stay within one path component, `**` spans any number of
/// directories (including none).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(String);

/// How a pattern is resolved against a filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// No metacharacters: the pattern names one path.
    Literal(&'a str),
    /// Walk `base` and match descendants against `glob`.
    Glob { base: &'a str, glob: &'a str },
}

impl Pattern {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits off the literal directory prefix that precedes the first
    /// metacharacter.
    #[must_use]
    pub fn target(&self) -> Target<'_> {
        let raw = self.0.as_str();
        let Some(meta) = raw.find(GLOB_META) else {
            return Target::Literal(raw);
        };
        match raw[..meta].rfind('/') {
            Some(0) => Target::Glob {
                base: "/",
                glob: &raw[1..],
            },
            Some(slash) => Target::Glob {
                base: &raw[..slash],
                glob: &raw[slash + 1..],
            },
            None => Target::Glob { base: "", glob: raw },
        }
    }

    /// Compiles the glob part of the pattern.
    ///
    /// Returns `None` for literal patterns and for globs that fail to
    /// compile; the latter are logged and simply match nothing.
    #[must_use]
    pub fn matcher(&self) -> Option<PathMatcher> {
        let Target::Glob { glob, .. } = self.target() else {
            return None;
        };
        match GlobBuilder::new(glob).literal_separator(true).build() {
            Ok(compiled) => Some(PathMatcher {
                glob: compiled.compile_matcher(),
                segments: glob.split('/').filter(|s| !s.is_empty()).map(str::to_owned).collect(),
            }),
            Err(e) => {
                log::warn!("pattern '{}' matches nothing: {e}", self.0);
                None
            }
        }
    }

    /// Walk depth needed below the base, `None` when `**` makes it unbounded.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        match self.target() {
            Target::Literal(_) => Some(0),
            Target::Glob { glob, .. } if glob.contains("**") => None,
            Target::Glob { glob, .. } => Some(glob.split('/').filter(|c| !c.is_empty()).count()),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Pattern {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Compiled glob part of a [`Pattern`], matched against base-relative paths.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    glob: GlobMatcher,
    segments: Vec<String>,
}

impl PathMatcher {
    /// Matches `rel` against the glob.
    ///
    /// Unless `include_hidden` is set, a dot-name only matches a glob segment
    /// that itself starts with `.`; `**` never spans a dot-name.
    #[must_use]
    pub fn is_match(&self, rel: &Path, include_hidden: bool) -> bool {
        if !self.glob.is_match(rel) {
            return false;
        }
        if include_hidden {
            return true;
        }
        let names: Vec<Cow<'_, str>> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy()),
                _ => None,
            })
            .collect();
        dot_names_allowed(&self.segments, &names)
    }
}

fn dot_names_allowed(segments: &[String], names: &[Cow<'_, str>]) -> bool {
    let Some((segment, rest)) = segments.split_first() else {
        return names.is_empty();
    };
    if segment == "**" {
        if dot_names_allowed(rest, names) {
            return true;
        }
        return match names.split_first() {
            Some((name, tail)) if !name.starts_with('.') => dot_names_allowed(segments, tail),
            _ => false,
        };
    }
    match names.split_first() {
        Some((name, tail)) => {
            (!name.starts_with('.') || segment.starts_with('.')) && dot_names_allowed(rest, tail)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_recursive_pattern_at_first_wildcard() {
        let p = Pattern::from("./src/**/*.ts");
        assert_eq!(
            p.target(),
            Target::Glob {
                base: "./src",
                glob: "**/*.ts"
            }
        );
        assert_eq!(p.max_depth(), None);
    }

    #[test]
    fn bare_glob_has_empty_base() {
        let p = Pattern::from("*.txt");
        assert_eq!(p.target(), Target::Glob { base: "", glob: "*.txt" });
        assert_eq!(p.max_depth(), Some(1));
    }

    #[test]
    fn absolute_root_glob_keeps_root_base() {
        let p = Pattern::from("/*.rs");
        assert_eq!(p.target(), Target::Glob { base: "/", glob: "*.rs" });
    }

    #[test]
    fn pattern_without_metacharacters_is_literal() {
        let p = Pattern::from("src/main.rs");
        assert_eq!(p.target(), Target::Literal("src/main.rs"));
        assert!(p.matcher().is_none());
    }

    #[test]
    fn wildcard_in_middle_component_bounds_depth() {
        let p = Pattern::from("crates/*/src/lib.rs");
        assert_eq!(
            p.target(),
            Target::Glob {
                base: "crates",
                glob: "*/src/lib.rs"
            }
        );
        assert_eq!(p.max_depth(), Some(3));
    }

    #[test]
    fn star_does_not_cross_directories() {
        let m = Pattern::from("src/*.ts").matcher().unwrap();
        assert!(m.is_match(Path::new("a.ts"), false));
        assert!(!m.is_match(Path::new("nested/a.ts"), false));
    }

    #[test]
    fn double_star_matches_zero_or_more_directories() {
        let m = Pattern::from("./src/**/*.ts").matcher().unwrap();
        assert!(m.is_match(Path::new("a.ts"), false));
        assert!(m.is_match(Path::new("x/y/a.ts"), false));
        assert!(!m.is_match(Path::new("a.tsx"), false));
    }

    #[test]
    fn braces_select_alternatives() {
        let p = Pattern::from("src/**/*.{ts,tsx}");
        assert_eq!(
            p.target(),
            Target::Glob {
                base: "src",
                glob: "**/*.{ts,tsx}"
            }
        );
        let m = p.matcher().unwrap();
        assert!(m.is_match(Path::new("a.ts"), false));
        assert!(m.is_match(Path::new("b/c.tsx"), false));
        assert!(!m.is_match(Path::new("d.js"), false));
    }

    #[test]
    fn broken_glob_yields_no_matcher() {
        assert!(Pattern::from("src/[a.ts").matcher().is_none());
    }

    #[test]
    fn wildcards_skip_dot_names() {
        let m = Pattern::from("src/**/*.ts").matcher().unwrap();
        assert!(!m.is_match(Path::new(".eslintrc.ts"), false));
        assert!(!m.is_match(Path::new(".cache/x.ts"), false));
        assert!(!m.is_match(Path::new("a/.cache/x.ts"), false));
        assert!(m.is_match(Path::new("a/.cache/x.ts"), true));
    }

    #[test]
    fn dotted_segment_matches_dot_file() {
        let m = Pattern::from("src/.*.ts").matcher().unwrap();
        assert!(m.is_match(Path::new(".eslintrc.ts"), false));
        assert!(!m.is_match(Path::new("app.ts"), false));
    }

    #[test]
    fn dotted_segment_matches_dot_directory() {
        let m = Pattern::from("src/.*/*.ts").matcher().unwrap();
        assert!(m.is_match(Path::new(".config/a.ts"), false));
        assert!(!m.is_match(Path::new(".config/.b.ts"), false));
        assert!(!m.is_match(Path::new("config/a.ts"), false));
    }

    #[test]
    fn double_star_before_dotted_segment() {
        let m = Pattern::from("**/.*").matcher().unwrap();
        assert!(m.is_match(Path::new("a/b/.env"), false));
        assert!(!m.is_match(Path::new(".git/.env"), false));
    }
}
