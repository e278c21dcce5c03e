//! One-shot decoding: request builder and decoded output.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::RasterError;
use crate::info::ImageFormat;
use crate::limits::Limits;

/// Decode an image of any supported format to canonical RGB rows.
pub fn decode<'a>(data: &'a [u8], stop: impl Stop) -> Result<DecodeOutput<'a>, RasterError> {
    DecodeRequest::new(data).decode(stop)
}

/// Builder for a decode operation.
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or row store exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Detect the format from magic bytes and decode.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput<'a>, RasterError> {
        match ImageFormat::detect(self.data) {
            #[cfg(feature = "bmp")]
            Some(ImageFormat::Bmp) => crate::bmp::decode(self.data, self.limits, &stop),
            #[cfg(feature = "graw")]
            Some(ImageFormat::Graw) => crate::graw::decode(self.data, self.limits, &stop),
            #[allow(unreachable_patterns)]
            Some(format) => Err(RasterError::UnsupportedVariant(alloc::format!(
                "{format:?} support is not enabled"
            ))),
            None => Err(RasterError::UnrecognizedFormat),
        }
    }
}

/// Decoded image: canonical 8-bit RGB rows, top-down, three bytes per pixel.
///
/// Pixels may borrow from the input (GRAW) or be owned (BMP).
#[derive(Clone, Debug)]
pub struct DecodeOutput<'a> {
    pixels: Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
}

impl<'a> DecodeOutput<'a> {
    pub(crate) fn owned(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels: Cow::Owned(pixels),
            width,
            height,
        }
    }

    pub(crate) fn borrowed(pixels: &'a [u8], width: u32, height: u32) -> Self {
        Self {
            pixels: Cow::Borrowed(pixels),
            width,
            height,
        }
    }

    /// All rows, concatenated top-down.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One scanline (row 0 = visual top).
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[u8] {
        let stride = self.width as usize * 3;
        &self.pixels[row * stride..][..stride]
    }

    /// Whether the pixel data is borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    /// Take ownership of the pixel data (copies if borrowed).
    pub fn into_owned(self) -> DecodeOutput<'static> {
        DecodeOutput {
            pixels: Cow::Owned(self.pixels.into_owned()),
            width: self.width,
            height: self.height,
        }
    }

    /// View the pixel data as typed RGB values.
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> &[rgb::RGB8] {
        use rgb::AsPixels as _;
        self.pixels().as_pixels()
    }

    /// Zero-copy 2D view of the pixel data.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGB8> {
        imgref::ImgRef::new(self.as_rgb(), self.width as usize, self.height as usize)
    }
}
