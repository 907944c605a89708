use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};

use crate::error::{Error, Result};

/// Light modules surrounding the symbol on every side.
pub const QUIET_ZONE: usize = 4;

/// Largest image side the rasterizer will allocate. The 8-bit buffer for a
/// side this long is 256 MiB; larger requests fail with `InvalidSize` before
/// any allocation.
pub const MAX_IMAGE_SIDE: u64 = 16_384;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Resolve the requested size into a pixel side for a symbol whose width
/// (quiet zone included) is `natural` modules.
///
/// Positive sizes are taken literally, negative sizes count pixels per module,
/// and anything smaller than `natural` grows to `natural`.
pub fn resolve_side(size: i32, natural: usize) -> Result<u32> {
    let natural = natural as u64;
    let requested = if size < 0 {
        u64::from(size.unsigned_abs()) * natural
    } else {
        size as u64
    };
    let side = requested.max(natural);
    if side > MAX_IMAGE_SIDE {
        return Err(Error::InvalidSize { size, side });
    }
    Ok(side as u32)
}

/// Rasterize `code` into a square grayscale image, sampling the nearest module
/// for every pixel.
pub fn render_symbol(code: &QrCode, size: i32) -> Result<GrayImage> {
    let width = code.width();
    let natural = width + 2 * QUIET_ZONE;
    let side = resolve_side(size, natural)?;
    let colors = code.to_colors();

    let module_at = |pixel: u32| -> Option<usize> {
        let module = (u64::from(pixel) * natural as u64 / u64::from(side)) as usize;
        module
            .checked_sub(QUIET_ZONE)
            .filter(|&m| m < width)
    };

    Ok(GrayImage::from_fn(side, side, |x, y| {
        match (module_at(x), module_at(y)) {
            (Some(mx), Some(my)) if colors[my * width + mx] == Color::Dark => DARK,
            _ => LIGHT,
        }
    }))
}
