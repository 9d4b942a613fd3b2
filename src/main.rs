//! Fair RPS
//!
//! Provably fair generalized rock-paper-scissors on the command line.
//! One round per invocation: the computer commits to a move under a fresh
//! HMAC key, the human picks from the menu, and the key is revealed so
//! the commitment can be checked.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fair_rps::cli::Session;
use fair_rps::core::moves::MoveSet;
use fair_rps::VERSION;

/// Command line arguments.
#[derive(Parser)]
#[command(name = "fair-rps", version, about = "Provably fair generalized rock-paper-scissors")]
struct Args {
    /// Move names: an odd number of them (at least 3), unique ignoring case.
    /// Example: fair-rps Rock Paper Scissors
    moves: Vec<String>,
}

fn main() -> ExitCode {
    // Logging goes to stderr so the game protocol on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    debug!(version = VERSION, "fair-rps starting");

    // Bad move lists exit before any session state (key, computer choice)
    // is created.
    let moves = MoveSet::new(args.moves)?;
    let session = Session::start(&moves)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.play(stdin.lock(), stdout.lock())?;
    Ok(())
}
