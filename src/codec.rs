//! Uniform scanline access across formats.
//!
//! [`ImageCodec`] is the capability every format reader shares; [`Decoder`]
//! and [`Encoder`] are the closed sum types a dispatcher works with, selected
//! by magic bytes rather than runtime-wired callbacks.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::RasterError;
use crate::info::ImageFormat;

#[cfg(feature = "bmp")]
use crate::bmp::{BmpImage, BmpWriter};
#[cfg(feature = "graw")]
use crate::graw::{GrawImage, GrawWriter};

/// Scanline-level read access to a decoded image.
///
/// Scanlines are always canonical: 8-bit RGB, three bytes per pixel, row 0 at
/// the visual top.
pub trait ImageCodec {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scanline(&mut self, row: usize, stop: &dyn Stop) -> Result<&[u8], RasterError>;
}

#[cfg(feature = "bmp")]
impl ImageCodec for BmpImage<'_> {
    fn width(&self) -> u32 {
        BmpImage::width(self)
    }

    fn height(&self) -> u32 {
        BmpImage::height(self)
    }

    fn scanline(&mut self, row: usize, stop: &dyn Stop) -> Result<&[u8], RasterError> {
        BmpImage::scanline(self, row, stop)
    }
}

#[cfg(feature = "graw")]
impl ImageCodec for GrawImage<'_> {
    fn width(&self) -> u32 {
        GrawImage::width(self)
    }

    fn height(&self) -> u32 {
        GrawImage::height(self)
    }

    fn scanline(&mut self, row: usize, _stop: &dyn Stop) -> Result<&[u8], RasterError> {
        GrawImage::scanline(self, row)
    }
}

/// An opened image of any supported format.
#[non_exhaustive]
pub enum Decoder<'a> {
    #[cfg(feature = "bmp")]
    Bmp(BmpImage<'a>),
    #[cfg(feature = "graw")]
    Graw(GrawImage<'a>),
}

impl<'a> Decoder<'a> {
    /// Detect the format from magic bytes and parse the headers.
    pub fn open(data: &'a [u8]) -> Result<Self, RasterError> {
        match ImageFormat::detect(data) {
            #[cfg(feature = "bmp")]
            Some(ImageFormat::Bmp) => Ok(Decoder::Bmp(BmpImage::open(data)?)),
            #[cfg(feature = "graw")]
            Some(ImageFormat::Graw) => Ok(Decoder::Graw(GrawImage::open(data)?)),
            #[allow(unreachable_patterns)]
            Some(format) => Err(RasterError::UnsupportedVariant(alloc::format!(
                "{format:?} support is not enabled"
            ))),
            None => Err(RasterError::UnrecognizedFormat),
        }
    }

    pub fn format(&self) -> ImageFormat {
        match self {
            #[cfg(feature = "bmp")]
            Decoder::Bmp(_) => ImageFormat::Bmp,
            #[cfg(feature = "graw")]
            Decoder::Graw(_) => ImageFormat::Graw,
        }
    }
}

impl ImageCodec for Decoder<'_> {
    fn width(&self) -> u32 {
        match self {
            #[cfg(feature = "bmp")]
            Decoder::Bmp(image) => image.width(),
            #[cfg(feature = "graw")]
            Decoder::Graw(image) => image.width(),
        }
    }

    fn height(&self) -> u32 {
        match self {
            #[cfg(feature = "bmp")]
            Decoder::Bmp(image) => image.height(),
            #[cfg(feature = "graw")]
            Decoder::Graw(image) => image.height(),
        }
    }

    fn scanline(&mut self, row: usize, stop: &dyn Stop) -> Result<&[u8], RasterError> {
        match self {
            #[cfg(feature = "bmp")]
            Decoder::Bmp(image) => image.scanline(row, stop),
            #[cfg(feature = "graw")]
            Decoder::Graw(image) => ImageCodec::scanline(image, row, stop),
        }
    }
}

/// An image being written row by row, serialized on [`finish`](Self::finish).
#[non_exhaustive]
pub enum Encoder {
    #[cfg(feature = "bmp")]
    Bmp(BmpWriter),
    #[cfg(feature = "graw")]
    Graw(GrawWriter),
}

impl Encoder {
    /// Write an uncompressed 24-bit BMP.
    #[cfg(feature = "bmp")]
    pub fn bmp(width: u32, height: u32) -> Result<Self, RasterError> {
        Ok(Encoder::Bmp(BmpWriter::new(width, height)?))
    }

    /// Write a GRAW.
    #[cfg(feature = "graw")]
    pub fn graw(width: u32, height: u32) -> Result<Self, RasterError> {
        Ok(Encoder::Graw(GrawWriter::new(width, height)?))
    }

    pub fn width(&self) -> u32 {
        match self {
            #[cfg(feature = "bmp")]
            Encoder::Bmp(writer) => writer.width(),
            #[cfg(feature = "graw")]
            Encoder::Graw(writer) => writer.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            #[cfg(feature = "bmp")]
            Encoder::Bmp(writer) => writer.height(),
            #[cfg(feature = "graw")]
            Encoder::Graw(writer) => writer.height(),
        }
    }

    /// Store canonical RGB pixels as row `row` (row 0 = visual top).
    pub fn set_scanline(&mut self, row: usize, rgb: &[u8]) -> Result<(), RasterError> {
        match self {
            #[cfg(feature = "bmp")]
            Encoder::Bmp(writer) => writer.set_scanline(row, rgb),
            #[cfg(feature = "graw")]
            Encoder::Graw(writer) => writer.set_scanline(row, rgb),
        }
    }

    /// Serialize the image and release the row store.
    pub fn finish(self, stop: impl Stop) -> Result<Vec<u8>, RasterError> {
        match self {
            #[cfg(feature = "bmp")]
            Encoder::Bmp(writer) => writer.finish(&stop),
            #[cfg(feature = "graw")]
            Encoder::Graw(writer) => writer.finish(&stop),
        }
    }
}
