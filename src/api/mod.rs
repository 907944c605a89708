//! High-level library API: encode text into a QR image, PNG bytes, or a PNG
//! file on disk. Prefer these entrypoints over the lower-level `core` and
//! `io` modules when embedding qrgen.
use std::path::Path;

use image::GrayImage;
use qrcode::QrCode;

use crate::core::params::QrParams;
use crate::core::render::render_symbol;
use crate::error::Result;
use crate::io::writers::png::{encode_gray_png, write_png_bytes};
use crate::types::RecoveryLevel;

/// Build the symbol for `content` and rasterize it at `size` pixels.
pub fn encode_image(content: &str, level: RecoveryLevel, size: i32) -> Result<GrayImage> {
    let code = QrCode::with_error_correction_level(content, level.ec_level())?;
    render_symbol(&code, size)
}

/// Encode `content` into PNG bytes.
pub fn encode_png(content: &str, level: RecoveryLevel, size: i32) -> Result<Vec<u8>> {
    let img = encode_image(content, level, size)?;
    encode_gray_png(&img)
}

/// Encode `content` and write the PNG to `output`.
///
/// Nothing is written when encoding fails.
pub fn write_qr_file(content: &str, level: RecoveryLevel, size: i32, output: &Path) -> Result<()> {
    let bytes = encode_png(content, level, size)?;
    write_png_bytes(output, &bytes)
}

/// Write the QR image described by resolved `params`.
pub fn generate(params: &QrParams) -> Result<()> {
    write_qr_file(
        &params.content,
        params.recovery_level(),
        params.size,
        &params.output,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn higher_levels_never_shrink_the_symbol() {
        let content = "https://example.com/some/longer/path?with=query";
        let low = encode_image(content, RecoveryLevel::Low, 0).unwrap();
        let highest = encode_image(content, RecoveryLevel::Highest, 0).unwrap();
        assert!(highest.width() >= low.width());
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = encode_png("hello", RecoveryLevel::Medium, 300).unwrap();
        let b = encode_png("hello", RecoveryLevel::Medium, 300).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn content_beyond_capacity_fails() {
        let content = "x".repeat(3000);
        let err = encode_png(&content, RecoveryLevel::Highest, 1024).unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }

    #[test]
    fn failed_encoding_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        let content = "x".repeat(3000);
        assert!(write_qr_file(&content, RecoveryLevel::Highest, 64, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn generate_writes_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.png");
        let output = path.to_string_lossy().into_owned();
        let params = QrParams::resolve("low", "hello", Some(&output), 256).unwrap();

        generate(&params).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (256, 256));
    }
}
