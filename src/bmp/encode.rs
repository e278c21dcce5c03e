//! BMP encoder: uncompressed 24-bit output only.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use super::header::V3_PIXEL_OFFSET;
use super::utils::padded_row_bytes;
use crate::error::RasterError;

/// A BMP being built row by row.
///
/// The canonical row store is allocated (zeroed) on the first scanline write;
/// [`finish`](Self::finish) serializes it. Rows never written stay black.
pub struct BmpWriter {
    width: u32,
    height: u32,
    rows: Option<Vec<u8>>,
}

impl BmpWriter {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidHeader(alloc::format!(
                "cannot encode a {width}x{height} BMP"
            )));
        }
        store_len(width, height)?;
        Ok(Self {
            width,
            height,
            rows: None,
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
        if self.rows.is_none() {
            self.rows = Some(vec![0u8; store_len(self.width, self.height)?]);
        }
        let Some(rows) = self.rows.as_mut() else {
            return Err(RasterError::InvalidData("row store unavailable".into()));
        };
        rows[row * stride..][..stride].copy_from_slice(&rgb[..stride]);
        Ok(())
    }

    /// Serialize the image. Equivalent to closing a write-mode handle.
    pub fn finish(self, stop: &dyn Stop) -> Result<Vec<u8>, RasterError> {
        match &self.rows {
            Some(rows) => encode_rows(rows, self.width, self.height, stop),
            None => {
                let rows = vec![0u8; store_len(self.width, self.height)?];
                encode_rows(&rows, self.width, self.height, stop)
            }
        }
    }
}

fn store_len(width: u32, height: u32) -> Result<usize, RasterError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or(RasterError::DimensionsTooLarge { width, height })
}

/// Encode a full canonical RGB buffer (top-down rows) to an uncompressed
/// 24-bit BMP: minimal v3 header, bottom-up BGR rows, rows padded to 4 bytes.
pub(crate) fn encode_rows(
    pixels: &[u8],
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, RasterError> {
    let w = width as usize;
    let h = height as usize;
    let expected = store_len(width, height)?;
    if pixels.len() < expected {
        return Err(RasterError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }

    let out_stride = padded_row_bytes(w, 24);
    let file_size = out_stride
        .checked_mul(h)
        .and_then(|n| n.checked_add(V3_PIXEL_OFFSET as usize))
        .ok_or(RasterError::DimensionsTooLarge { width, height })?;

    let mut out = Vec::with_capacity(file_size);

    // File header (14 bytes).
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&V3_PIXEL_OFFSET.to_le_bytes());

    // Info header (40 bytes). Positive height marks the rows bottom-up.
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&0u32.to_le_bytes()); // data size
    out.extend_from_slice(&1000i32.to_le_bytes()); // pixels per meter
    out.extend_from_slice(&1000i32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // colors important

    let pad = out_stride - w * 3;
    for row in (0..h).rev() {
        if row % 16 == 0 {
            stop.check()?;
        }
        let line = &pixels[row * w * 3..][..w * 3];
        for rgb in line.chunks_exact(3) {
            out.push(rgb[2]);
            out.push(rgb[1]);
            out.push(rgb[0]);
        }
        out.extend(core::iter::repeat_n(0u8, pad));
    }

    Ok(out)
}
