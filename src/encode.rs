//! One-shot encoding of canonical RGB buffers.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::RasterError;
use crate::info::ImageFormat;

/// Builder for an encode operation.
///
/// Input is always the canonical format: top-down rows of 8-bit RGB,
/// `width * height * 3` bytes. Convert other layouts with
/// [`crate::convert_row`] first.
pub struct EncodeRequest {
    format: ImageFormat,
}

impl EncodeRequest {
    /// Encode to an uncompressed 24-bit BMP.
    #[cfg(feature = "bmp")]
    pub fn bmp() -> Self {
        Self {
            format: ImageFormat::Bmp,
        }
    }

    /// Encode to GRAW.
    #[cfg(feature = "graw")]
    pub fn graw() -> Self {
        Self {
            format: ImageFormat::Graw,
        }
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, RasterError> {
        match self.format {
            #[cfg(feature = "bmp")]
            ImageFormat::Bmp => crate::bmp::encode_bmp(pixels, width, height, stop),
            #[cfg(feature = "graw")]
            ImageFormat::Graw => crate::graw::encode_graw(pixels, width, height, stop),
            #[allow(unreachable_patterns)]
            format => Err(RasterError::UnsupportedVariant(alloc::format!(
                "{format:?} support is not enabled"
            ))),
        }
    }
}
