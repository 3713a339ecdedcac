//! Lossy WebP encoding through libwebp.

use image::DynamicImage;
use webp::Encoder;
use crate::utils::{OptimizerError, OptimizerResult};

/// Lowest quality libwebp accepts.
pub const MIN_QUALITY: i32 = 0;
/// Highest quality libwebp accepts.
pub const MAX_QUALITY: i32 = 100;

/// Encodes `image` as lossy WebP at `quality`.
///
/// RGB8 and RGBA8 buffers go straight to the encoder. Other layouts are
/// widened to RGBA8 when they carry alpha and to RGB8 otherwise.
pub fn encode_webp(image: &DynamicImage, quality: i32) -> OptimizerResult<Vec<u8>> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(OptimizerError::encode(format!(
            "Invalid quality value: {quality}. Must be between {MIN_QUALITY} and {MAX_QUALITY}"
        )));
    }

    let (width, height) = (image.width(), image.height());
    match image {
        DynamicImage::ImageRgb8(rgb) => encode_pixels(rgb.as_raw(), false, width, height, quality),
        DynamicImage::ImageRgba8(rgba) => encode_pixels(rgba.as_raw(), true, width, height, quality),
        other if other.color().has_alpha() => {
            let rgba = other.to_rgba8();
            encode_pixels(rgba.as_raw(), true, width, height, quality)
        }
        other => {
            let rgb = other.to_rgb8();
            encode_pixels(rgb.as_raw(), false, width, height, quality)
        }
    }
}

fn encode_pixels(pixels: &[u8], alpha: bool, width: u32, height: u32, quality: i32) -> OptimizerResult<Vec<u8>> {
    let encoder = if alpha {
        Encoder::from_rgba(pixels, width, height)
    } else {
        Encoder::from_rgb(pixels, width, height)
    };

    let memory = encoder
        .encode_simple(false, quality as f32)
        .map_err(|e| OptimizerError::encode(format!("WebP encoding failed: {e:?}")))?;

    Ok(memory.to_vec())
}
