//! Command Line Interface (CLI) layer for qrgen.
//!
//! Defines argument parsing (`args`), error types and exit statuses
//! (`errors`), subscriber and panic-hook setup (`logging`), and the
//! orchestration logic (`runner`). Embedders should call `qrgen::api`
//! directly instead.
pub mod args;
pub mod errors;
pub mod logging;
pub mod runner;

pub use args::CliArgs;
pub use runner::{guarded, run};
