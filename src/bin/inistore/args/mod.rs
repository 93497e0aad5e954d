//! Command-line front end for the INI store.
//!
//! Values and dumps go to stdout. Outcomes and errors are logged to stderr
//! through `tracing`; set `RUST_LOG` to change the level (default `info`).

mod error;
mod execute;
mod types;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

pub use types::Args;

pub fn run() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    match args.execute(&mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_lookup() => {
            warn!("{e}");
            e.exit_code()
        }
        Err(e) => {
            error!("{e}");
            e.exit_code()
        }
    }
}
