//! Materializes a module matrix into a fixed-size monochrome image.

use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};

use crate::error::EncodeError;

const DARK: Luma<u8> = Luma([0u8]); // Black
const LIGHT: Luma<u8> = Luma([255u8]); // White

/// Draws `code` into an image of exactly `width` x `height` pixels.
///
/// The module grid, framed by `quiet_zone` light modules on each side, is
/// scaled by the largest whole number of pixels per module that fits the
/// requested geometry, then centered. The remaining margin is light, so the
/// effective quiet zone is never narrower than requested.
///
/// The caller has already rejected zero dimensions.
pub(crate) fn rasterize(
    code: &QrCode,
    width: u32,
    height: u32,
    quiet_zone: u32,
) -> Result<GrayImage, EncodeError> {
    let modules = code.width() as u32;
    // A quiet zone wide enough to overflow cannot fit any raster.
    let framed = match quiet_zone.checked_mul(2).and_then(|q| q.checked_add(modules)) {
        Some(framed) => framed,
        None => return Err(EncodeError::RasterTooSmall { width, height, modules: u32::MAX }),
    };
    let scale = (width / framed).min(height / framed);
    if scale == 0 {
        return Err(EncodeError::RasterTooSmall { width, height, modules: framed });
    }

    let left = (width - modules * scale) / 2;
    let top = (height - modules * scale) / 2;

    let mut img = GrayImage::from_pixel(width, height, LIGHT);
    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = left + (i as u32 % modules) * scale;
        let y = top + (i as u32 / modules) * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(x + dx, y + dy, DARK);
            }
        }
    }
    Ok(img)
}
