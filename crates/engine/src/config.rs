use crate::pattern::Pattern;
use derive_builder::Builder;

/// Patterns scanned when the caller supplies none.
pub const DEFAULT_PATTERNS: [&str; 2] = ["./src/**/*.ts", "./src/**/*.tsx"];

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ScanOptions {
    /// Let wildcards match names starting with `.`.
    #[builder(default)]
    pub include_hidden: bool,
    /// Descend into symlinked directories. Loops are detected by the walker.
    #[builder(default = "true")]
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include_hidden: false,
            follow_links: true,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "default_patterns()")]
    pub patterns: Vec<Pattern>,
    #[builder(default)]
    pub scan: ScanOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            scan: ScanOptions::default(),
        }
    }
}

#[must_use]
pub fn default_patterns() -> Vec<Pattern> {
    DEFAULT_PATTERNS.iter().copied().map(Pattern::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_falls_back_to_default_patterns() {
        let config = ConfigBuilder::default().build().unwrap();
        assert_eq!(config.patterns, default_patterns());
        assert_eq!(config.scan, ScanOptions::default());
        assert!(config.scan.follow_links);
    }

    #[test]
    fn builder_keeps_explicit_patterns() {
        let config = ConfigBuilder::default()
            .patterns(vec![Pattern::from("docs/*.md")])
            .scan(ScanOptionsBuilder::default().include_hidden(true).build().unwrap())
            .build()
            .unwrap();
        assert_eq!(config.patterns, vec![Pattern::from("docs/*.md")]);
        assert!(config.scan.include_hidden);
        assert!(config.scan.follow_links);
    }
}
