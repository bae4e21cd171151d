//! Pixel format conversion for display surfaces.

use std::error::Error;
use std::fmt;

pub const RGB_BYTES: usize = 3;
pub const RGBA_BYTES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    PartialPixel { src_len: usize },
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialPixel { src_len } => {
                write!(f, "rgb length {} is not a multiple of {}", src_len, RGB_BYTES)
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "rgba length {} does not match expected {}", actual, expected)
            }
        }
    }
}

impl Error for PixelFormatError {}

#[must_use]
pub fn rgba_len_for_rgb(rgb_len: usize) -> usize {
    (rgb_len / RGB_BYTES) * RGBA_BYTES
}

/// Expands packed RGB into an opaque RGBA destination of matching pixel count.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % RGB_BYTES != 0 {
        return Err(PixelFormatError::PartialPixel { src_len: src.len() });
    }

    let expected = rgba_len_for_rgb(src.len());
    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src
        .chunks_exact(RGB_BYTES)
        .zip(dst.chunks_exact_mut(RGBA_BYTES))
    {
        dst_pixel[..RGB_BYTES].copy_from_slice(src_pixel);
        dst_pixel[RGB_BYTES] = u8::MAX;
    }

    Ok(())
}
