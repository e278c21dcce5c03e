use crate::error::RasterError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (unlimited). Attach to a
/// [`crate::DecodeRequest`] to reject oversized images before the row store
/// is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes the decoded row store may occupy.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check_dimensions(&self, width: u32, height: u32) -> Result<(), RasterError> {
        if let Some(max_w) = self.max_width
            && u64::from(width) > max_w
        {
            return Err(RasterError::LimitExceeded(alloc::format!(
                "width {width} exceeds limit {max_w}"
            )));
        }
        if let Some(max_h) = self.max_height
            && u64::from(height) > max_h
        {
            return Err(RasterError::LimitExceeded(alloc::format!(
                "height {height} exceeds limit {max_h}"
            )));
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(RasterError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn check_alloc(&self, bytes: usize) -> Result<(), RasterError> {
        if let Some(max_mem) = self.max_memory_bytes
            && bytes as u64 > max_mem
        {
            return Err(RasterError::LimitExceeded(alloc::format!(
                "allocation of {bytes} bytes exceeds memory limit {max_mem}"
            )));
        }
        Ok(())
    }
}
