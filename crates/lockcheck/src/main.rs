//! lockcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use lockcheck::prelude::*;
use lockcheck::{backends, run_session, Cli, TerminalPrompter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the inventory
    let default_filter = if cli.verbose {
        "lockcheck=debug"
    } else {
        "lockcheck=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut prompter = TerminalPrompter::new();
    let mut out = anstream::stdout();

    match run_session(&mut prompter, &mut out, &cli.presets(), backends::connect).await {
        Ok(summary) => {
            tracing::debug!(
                listed = summary.listed,
                offered = summary.offered(),
                deleted = summary.deleted,
                failed = summary.failed,
                "session finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            aeprintln!("{} {}", p_r("Error:"), err);
            ExitCode::FAILURE
        }
    }
}
