use std::process::ExitCode;

use clap::Parser;
use md_to_anki::cli::Args;
use md_to_anki::Outcome;

/// Conventional exit status for a run stopped by SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    md_to_anki::init_tracing();

    match md_to_anki::run(args).await {
        Ok(Outcome::Exported(_)) => ExitCode::SUCCESS,
        Ok(Outcome::Interrupted) => ExitCode::from(EXIT_INTERRUPTED),
        Err(error) => {
            tracing::error!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}
