use clap::Parser;
use line_tally::args::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = line_tally::logging::init(args.verbose) {
        eprintln!("Logging disabled: {e}");
    }

    match line_tally::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run aborted: {e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
