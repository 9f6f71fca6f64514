use clap::{ArgAction, Parser};
use line_tally_engine::config::DEFAULT_PATTERNS;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line_tally",
    version = crate::VERSION,
    about = "グロブパターンごとの行数集計ツール"
)]
pub struct Args {
    /// 集計対象のグロブパターン (`**` で再帰的にマッチ)
    #[arg(value_name = "PATTERN", default_values = DEFAULT_PATTERNS)]
    pub patterns: Vec<String>,

    /// ワイルドカードをドットで始まる名前にもマッチさせる
    #[arg(long)]
    pub hidden: bool,

    /// ディレクトリのシンボリックリンクをたどらない
    #[arg(long)]
    pub no_follow_links: bool,

    /// 診断ログを詳細にする (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_scan_default_patterns() {
        let args = Args::try_parse_from(["line_tally"]).unwrap();
        assert_eq!(args.patterns, vec!["./src/**/*.ts", "./src/**/*.tsx"]);
        assert!(!args.hidden);
        assert!(!args.no_follow_links);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn explicit_patterns_replace_defaults() {
        let args = Args::try_parse_from(["line_tally", "docs/*.md", "src/**/*.rs"]).unwrap();
        assert_eq!(args.patterns, vec!["docs/*.md", "src/**/*.rs"]);
    }

    #[test]
    fn flags_parse() {
        let args = Args::try_parse_from(["line_tally", "-vv", "--hidden", "--no-follow-links", "*.txt"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(args.hidden);
        assert!(args.no_follow_links);
        assert_eq!(args.patterns, vec!["*.txt"]);
    }
}
