//! GRAW: a trivial raw format with a fixed-width text header.
//!
//! Layout: `GRAW`, a 4-byte channel tag (`RGB `), a 4-byte encoding tag
//! (`N1  `), then `W` and `H` each followed by nine right-aligned ASCII
//! decimal digits — 32 header bytes total — and finally contiguous unpadded
//! RGB rows, top-down. Because the payload already is the canonical format,
//! decoding borrows straight from the input.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use crate::cursor::Cursor;
use crate::decode::DecodeOutput;
use crate::error::RasterError;
use crate::limits::Limits;

pub(crate) const HEADER_LEN: usize = 32;

/// Widest dimension the 9-digit header field can carry.
const MAX_DIMENSION: u32 = 999_999_999;

/// A GRAW opened for reading. Scanlines borrow from the input slice.
#[derive(Debug)]
pub struct GrawImage<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> GrawImage<'a> {
    pub fn open(data: &'a [u8]) -> Result<Self, RasterError> {
        let mut cur = Cursor::new(data);
        if cur.read_slice(4)? != b"GRAW" {
            return Err(RasterError::UnrecognizedFormat);
        }
        let channels = cur.read_array::<4>()?;
        if &channels != b"RGB " {
            return Err(RasterError::UnsupportedVariant(alloc::format!(
                "GRAW channel tag {:?}",
                core::str::from_utf8(&channels).unwrap_or("<non-ascii>")
            )));
        }
        let encoding = cur.read_array::<4>()?;
        if &encoding != b"N1  " {
            return Err(RasterError::UnsupportedVariant(alloc::format!(
                "GRAW encoding tag {:?}",
                core::str::from_utf8(&encoding).unwrap_or("<non-ascii>")
            )));
        }
        let width = read_dimension(&mut cur, b'W')?;
        let height = read_dimension(&mut cur, b'H')?;
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidHeader(alloc::format!(
                "invalid GRAW dimensions {width}x{height}"
            )));
        }

        let payload = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or(RasterError::DimensionsTooLarge { width, height })?;
        if data.len() < HEADER_LEN + payload {
            return Err(RasterError::TruncatedFile);
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow canonical RGB scanline `row` (row 0 = visual top) directly
    /// from the input.
    pub fn scanline(&self, row: usize) -> Result<&'a [u8], RasterError> {
        let height = self.height as usize;
        if row >= height {
            return Err(RasterError::RowOutOfRange { row, height });
        }
        let stride = self.width as usize * 3;
        Ok(&self.data[HEADER_LEN + row * stride..][..stride])
    }

    fn pixels(&self) -> &'a [u8] {
        let len = self.width as usize * self.height as usize * 3;
        &self.data[HEADER_LEN..][..len]
    }
}

fn read_dimension(cur: &mut Cursor<'_>, marker: u8) -> Result<u32, RasterError> {
    if cur.read_u8()? != marker {
        return Err(RasterError::InvalidHeader(alloc::format!(
            "missing GRAW '{}' marker",
            marker as char
        )));
    }
    let digits = cur.read_slice(9)?;
    let text = core::str::from_utf8(digits)
        .map_err(|_| RasterError::InvalidHeader("non-ASCII GRAW dimension".into()))?;
    text.trim()
        .parse::<u32>()
        .map_err(|_| RasterError::InvalidHeader(alloc::format!("bad GRAW dimension {text:?}")))
}

/// A GRAW being built row by row.
///
/// The full zeroed row store exists from the start, so unwritten rows come
/// out black.
pub struct GrawWriter {
    width: u32,
    height: u32,
    rows: Vec<u8>,
}

impl GrawWriter {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(RasterError::DimensionsTooLarge { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or(RasterError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            rows: vec![0u8; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Store canonical RGB pixels as row `row` (row 0 = visual top).
    pub fn set_scanline(&mut self, row: usize, rgb: &[u8]) -> Result<(), RasterError> {
        let height = self.height as usize;
        if row >= height {
            return Err(RasterError::RowOutOfRange { row, height });
        }
        let stride = self.width as usize * 3;
        if rgb.len() < stride {
            return Err(RasterError::BufferTooSmall {
                needed: stride,
                actual: rgb.len(),
            });
        }
        self.rows[row * stride..][..stride].copy_from_slice(&rgb[..stride]);
        Ok(())
    }

    /// Serialize header plus rows.
    pub fn finish(self, stop: &dyn Stop) -> Result<Vec<u8>, RasterError> {
        stop.check()?;
        let mut out = Vec::with_capacity(HEADER_LEN + self.rows.len());
        write_header(&mut out, self.width, self.height);
        out.extend_from_slice(&self.rows);
        Ok(out)
    }
}

fn write_header(out: &mut Vec<u8>, width: u32, height: u32) {
    out.extend_from_slice(b"GRAW");
    out.extend_from_slice(b"RGB ");
    out.extend_from_slice(b"N1  ");
    out.push(b'W');
    out.extend_from_slice(alloc::format!("{width:>9}").as_bytes());
    out.push(b'H');
    out.extend_from_slice(alloc::format!("{height:>9}").as_bytes());
}

/// Decode a GRAW held in `data`. Zero-copy: the output borrows the input.
pub fn decode_graw<'a>(data: &'a [u8], stop: impl Stop) -> Result<DecodeOutput<'a>, RasterError> {
    decode(data, None, &stop)
}

/// Encode canonical top-down RGB rows (`width * height * 3` bytes) to GRAW.
pub fn encode_graw(
    pixels: &[u8],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<Vec<u8>, RasterError> {
    stop.check()?;
    let mut writer = GrawWriter::new(width, height)?;
    let stride = width as usize * 3;
    let expected = stride * height as usize;
    if pixels.len() < expected {
        return Err(RasterError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }
    writer.rows.copy_from_slice(&pixels[..expected]);
    writer.finish(&stop)
}

pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, RasterError> {
    stop.check()?;
    let image = GrawImage::open(data)?;
    if let Some(limits) = limits {
        limits.check_dimensions(image.width, image.height)?;
    }
    Ok(DecodeOutput::borrowed(
        image.pixels(),
        image.width,
        image.height,
    ))
}

/// Header-only probe: dimensions without touching pixel data.
pub(crate) fn probe(data: &[u8]) -> Result<(u32, u32), RasterError> {
    let image = GrawImage::open(data)?;
    Ok((image.width, image.height))
}
