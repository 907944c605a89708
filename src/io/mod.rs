//! I/O layer: `writers` turn rendered symbols into PNG bytes and files.
pub mod writers;
