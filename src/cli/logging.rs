use std::any::Any;
use std::io::IsTerminal;
use std::panic;

use tracing::error;
use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber. Events go to stderr; the filter
/// defaults to `info` and honours `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Replace the default panic output with a structured error event.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        log_panic(&panic_message(info.payload()), &location);
    }));
}

fn log_panic(message: &str, location: &str) {
    error!(panic = %message, %location, "panic recovered");
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
