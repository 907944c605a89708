//! qrgen CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: set up logging, parse args, run the
//! generation under a panic guard, and exit with the matching status.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    cli::logging::init();
    cli::logging::install_panic_hook();

    let args = cli::CliArgs::parse_normalized();
    ExitCode::from(cli::guarded(move || cli::run(args)))
}
