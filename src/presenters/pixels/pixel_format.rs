//! Pixel format conversion helpers for presentation adapters.

use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameSizeError {
    Mismatch { expected: usize, actual: usize },
}

impl fmt::Display for FrameSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch { expected, actual } => {
                write!(
                    f,
                    "frame length {} does not match expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for FrameSizeError {}

/// Copies the RGB pixel buffer into an RGBA frame, setting alpha to 255.
///
/// `dst` must hold exactly four bytes per pixel of `buffer`.
pub fn copy_pixel_buffer_to_rgba(buffer: &PixelBuffer, dst: &mut [u8]) -> Result<(), FrameSizeError> {
    let expected = buffer.width() as usize * buffer.height() as usize * 4;

    if dst.len() != expected {
        return Err(FrameSizeError::Mismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in buffer.buffer().chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
