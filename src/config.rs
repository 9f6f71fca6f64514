// src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use line_tally_engine::config::{Config, ConfigBuilder, ScanOptions, ScanOptionsBuilder};
use line_tally_engine::Pattern;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let scan = ScanOptionsBuilder::default()
            .include_hidden(args.hidden)
            .follow_links(!args.no_follow_links)
            .build()?;

        let patterns: Vec<Pattern> = args.patterns.into_iter().map(Pattern::from).collect();

        Ok(ConfigBuilder::default().patterns(patterns).scan(scan).build()?)
    }
}
