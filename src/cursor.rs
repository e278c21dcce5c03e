//! Bounds-checked byte cursor over an input slice.
//!
//! Every read advances the position by exactly the number of bytes the field
//! occupies on disk; any read past the end of the slice fails with
//! [`RasterError::TruncatedFile`] instead of returning garbage.

use crate::error::RasterError;

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn set_position(&mut self, pos: usize) -> Result<(), RasterError> {
        if pos > self.data.len() {
            return Err(RasterError::TruncatedFile);
        }
        self.pos = pos;
        Ok(())
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), RasterError> {
        let new_pos = self.pos.checked_add(n).ok_or(RasterError::TruncatedFile)?;
        self.set_position(new_pos)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, RasterError> {
        let b = *self.data.get(self.pos).ok_or(RasterError::TruncatedFile)?;
        self.pos += 1;
        Ok(b)
    }

    pub(crate) fn get_u16_le(&mut self) -> Result<u16, RasterError> {
        Ok(u16::from_le_bytes(self.read_array::<2>()?))
    }

    pub(crate) fn get_i16_le(&mut self) -> Result<i16, RasterError> {
        Ok(i16::from_le_bytes(self.read_array::<2>()?))
    }

    pub(crate) fn get_u32_le(&mut self) -> Result<u32, RasterError> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    pub(crate) fn get_i32_le(&mut self) -> Result<i32, RasterError> {
        Ok(i32::from_le_bytes(self.read_array::<4>()?))
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N], RasterError> {
        let slice = self.read_slice(N)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(slice);
        Ok(buf)
    }

    /// Borrow the next `n` bytes without copying.
    pub(crate) fn read_slice(&mut self, n: usize) -> Result<&'a [u8], RasterError> {
        let end = self.pos.checked_add(n).ok_or(RasterError::TruncatedFile)?;
        let slice = self
            .data
            .get(self.pos..end)
            .ok_or(RasterError::TruncatedFile)?;
        self.pos = end;
        Ok(slice)
    }
}
