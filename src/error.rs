use alloc::string::String;
use enough::StopReason;

/// Errors from decoding and encoding raster images.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RasterError {
    /// The input claimed to be a BMP but the magic bytes are not `BM`.
    #[error("not a bitmap: bad magic bytes")]
    NotABitmap,

    /// No supported format matches the input's magic bytes.
    #[error("unrecognized image format")]
    UnrecognizedFormat,

    /// A header, palette, or scanline read ran past the end of the input.
    #[error("truncated file: unexpected end of input")]
    TruncatedFile,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Recognized but unimplemented variant (e.g. Huffman-compressed OS/2
    /// images, or an RLE scheme paired with a bit depth it doesn't support).
    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    /// An RLE control sequence left the row/column cursor outside the image.
    #[error("malformed RLE stream: {0}")]
    MalformedRle(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("row {row} out of range for image with {height} rows")]
    RowOutOfRange { row: usize, height: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for RasterError {
    fn from(r: StopReason) -> Self {
        RasterError::Cancelled(r)
    }
}
