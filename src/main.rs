use std::process::ExitCode;

use clap::Parser;
use clap_verbosity_flag::Verbosity;

use kaikki_fetch::commands;

/// Download the kaikki.org Wiktionary extract into data/words.jsonl
#[derive(Parser)]
#[clap(name = "kaikki-fetch")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    match commands::fetch::fetch_dataset().map_err(anyhow::Error::from) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
