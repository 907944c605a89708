//! Crate-level error type and `Result` alias.
//! Wraps encoder, image and I/O failures, and provides semantic variants
//! for argument validation and unsupported image sizes.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("QR encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Image size {size} resolves to a {side}px side, above the supported maximum")]
    InvalidSize { size: i32, side: u64 },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn missing(arg: &str) -> Self {
        Error::MissingArgument {
            arg: arg.to_string(),
        }
    }
}
