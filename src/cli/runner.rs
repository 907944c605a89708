use std::io::Write;
use std::panic::{self, UnwindSafe};

use clap::CommandFactory;
use tracing::{debug, error, info};

use qrgen::QrParams;

use super::args::CliArgs;
use super::errors::AppError;

/// Resolve the parsed flags and write the QR image.
pub fn run(args: CliArgs) -> Result<(), AppError> {
    let params = QrParams::resolve(
        &args.quality,
        &args.content,
        args.output.as_deref(),
        args.size,
    )?;

    if !args.rest.is_empty() {
        debug!(ignored = ?args.rest, "ignoring trailing arguments");
    }

    info!(
        quality = %params.quality,
        recovery_level = %params.recovery_level(),
        content_len = params.content.len(),
        output = %params.output.display(),
        size = params.size,
        "starting qr generation"
    );

    qrgen::generate(&params).map_err(AppError::Generation)?;

    info!(
        output = %params.output.display(),
        content = %params.content,
        "qrcode generated successfully"
    );
    Ok(())
}

/// Log a terminal failure and return its exit status. Missing input also
/// prints usage to stderr.
pub fn report(err: &AppError) -> u8 {
    match err {
        AppError::MissingArgument { .. } => {
            error!("{}", err);
            print_usage();
        }
        AppError::Generation(source) => {
            error!(error = %source, "failed to write qrcode");
        }
    }
    err.exit_code()
}

/// Run `f` under the fault guard and return the process exit status.
/// A panic is logged by the panic hook and maps to 1.
pub fn guarded<F>(f: F) -> u8
where
    F: FnOnce() -> Result<(), AppError> + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(Ok(())) => 0,
        Ok(Err(err)) => report(&err),
        Err(_) => 1,
    }
}

fn print_usage() {
    let help = CliArgs::command().render_help();
    let mut stderr = std::io::stderr();
    let _ = writeln!(stderr, "{}", help);
}
