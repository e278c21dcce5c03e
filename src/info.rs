//! Image format detection and header-only probing.

use crate::error::RasterError;

/// Image format detected from magic bytes.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// BMP (Windows/OS/2 bitmap).
    Bmp,
    /// GRAW (text-header raw RGB rows).
    Graw,
}

impl ImageFormat {
    /// Detect the format from magic bytes. Returns `None` if unrecognized.
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"GRAW") {
            return Some(ImageFormat::Graw);
        }
        if data.starts_with(b"BM") {
            return Some(ImageFormat::Bmp);
        }
        None
    }
}

/// Basic image facts read from the headers alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl ImageInfo {
    /// Probe `data` without decoding any pixels.
    pub fn from_bytes(data: &[u8]) -> Result<Self, RasterError> {
        match ImageFormat::detect(data) {
            #[cfg(feature = "bmp")]
            Some(ImageFormat::Bmp) => {
                let (width, height) = crate::bmp::probe(data)?;
                Ok(Self {
                    width,
                    height,
                    format: ImageFormat::Bmp,
                })
            }
            #[cfg(feature = "graw")]
            Some(ImageFormat::Graw) => {
                let (width, height) = crate::graw::probe(data)?;
                Ok(Self {
                    width,
                    height,
                    format: ImageFormat::Graw,
                })
            }
            #[allow(unreachable_patterns)]
            Some(format) => Err(RasterError::UnsupportedVariant(alloc::format!(
                "{format:?} support is not enabled"
            ))),
            None => Err(RasterError::UnrecognizedFormat),
        }
    }
}
