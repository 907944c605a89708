use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use image::{GrayImage, ImageFormat};

use crate::error::Result;

/// Encode a grayscale image as PNG bytes.
pub fn encode_gray_png(img: &GrayImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Create (or truncate) `output` and write `bytes` to it. The file is closed
/// before returning.
pub fn write_png_bytes(output: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn encodes_png_signature() {
        let img = GrayImage::from_pixel(8, 8, Luma([255]));
        let bytes = encode_gray_png(&img).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn writes_and_truncates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr.png");
        std::fs::write(&path, vec![1u8; 4096]).unwrap();

        let img = GrayImage::from_pixel(4, 4, Luma([0]));
        let bytes = encode_gray_png(&img).unwrap();
        write_png_bytes(&path, &bytes).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), bytes);
        let decoded = image::open(&path).unwrap().to_luma8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("qr.png");
        let err = write_png_bytes(&path, b"x").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
