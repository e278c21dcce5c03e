//! BMP (Windows/OS/2 device-independent bitmap) decoder and encoder.
//!
//! Decoding covers the five historical header layouts (v2, OS/2 v2, v3, the
//! NT bitfield variant, v4), bit depths 1/4/8/16/24/32, palettes, channel
//! bit-masks, and the RLE4/RLE8/RLE24 compression schemes. Encoding always
//! produces an uncompressed 24-bit file.
//!
//! Scanline access goes through [`BmpImage`] / [`BmpWriter`]; whole-image
//! one-shot calls are [`decode_bmp`] and [`encode_bmp`].

mod decode;
mod encode;
mod header;
mod utils;

pub use decode::BmpImage;
pub use encode::BmpWriter;

use alloc::vec::Vec;

use enough::Stop;

use crate::decode::DecodeOutput;
use crate::error::RasterError;
use crate::limits::Limits;

/// Decode a BMP held in `data` to canonical top-down RGB rows.
pub fn decode_bmp<'a>(data: &'a [u8], stop: impl Stop) -> Result<DecodeOutput<'a>, RasterError> {
    decode(data, None, &stop)
}

/// Encode canonical top-down RGB rows (`width * height * 3` bytes) to an
/// uncompressed 24-bit BMP.
pub fn encode_bmp(
    pixels: &[u8],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<Vec<u8>, RasterError> {
    encode::encode_rows(pixels, width, height, &stop)
}

pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, RasterError> {
    let image = BmpImage::open(data)?;
    let (width, height) = (image.width(), image.height());
    if let Some(limits) = limits {
        limits.check_dimensions(width, height)?;
        let out_bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or(RasterError::DimensionsTooLarge { width, height })?;
        limits.check_alloc(out_bytes)?;
    }
    stop.check()?;
    let pixels = image.into_pixels(stop)?;
    Ok(DecodeOutput::owned(pixels, width, height))
}

/// Header-only probe: dimensions without touching pixel data.
pub(crate) fn probe(data: &[u8]) -> Result<(u32, u32), RasterError> {
    let image = BmpImage::open(data)?;
    Ok((image.width(), image.height()))
}
