//! # rasterbits
//!
//! BMP and GRAW image format decoder and encoder with scanline-level access
//! and a universal pixel-format conversion engine.
//!
//! ## Canonical Scanlines
//!
//! Every decoder presents pixel data the same way: 8-bit RGB, three bytes per
//! pixel, no alpha, with row 0 being the visual top of the image. On-disk
//! quirks — bottom-up row order, BGR byte order, palettes, packed sub-byte
//! indices, channel bit-masks, run-length compression — are resolved during
//! decode and never leak to the caller. Callers that want another in-memory
//! layout run a scanline through [`convert_row`] with a [`PixelFormat`]
//! descriptor of their choosing.
//!
//! ## Supported Formats
//!
//! ### BMP (`bmp` feature)
//! - Header versions: BITMAPCOREHEADER (v2), OS/2 v2, BITMAPINFOHEADER
//!   (Windows v3 and the NT bitfield variant), BITMAPV4HEADER
//! - Bit depths 1/4/8/16/24/32, palettes, arbitrary contiguous channel masks
//! - RLE4, RLE8, and OS/2 RLE24 compression
//! - Encoding of uncompressed 24-bit BMP
//!
//! ### GRAW (`graw` feature)
//! - Text-header raw format: fixed 32-byte header followed by contiguous
//!   unpadded RGB rows. Decoding is zero-copy.
//!
//! ## Non-Goals
//!
//! - JPEG/PNG (thin wrappers over compression libraries belong elsewhere)
//! - Interlaced or multi-frame images
//! - Color management (masks and gamma fields are consumed, not applied)
//!
//! ## Usage
//!
//! ```no_run
//! use rasterbits::{DecodeRequest, EncodeRequest, ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP/GRAW bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//!
//! // Decode to canonical RGB scanlines
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//! let top_row = decoded.row(0);
//!
//! // Re-encode as an uncompressed 24-bit BMP
//! # #[cfg(feature = "bmp")]
//! let bmp = EncodeRequest::bmp().encode(
//!     decoded.pixels(),
//!     decoded.width,
//!     decoded.height,
//!     Unstoppable,
//! )?;
//! # Ok::<(), rasterbits::RasterError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod convert;
mod cursor;
mod error;
mod info;
mod limits;
mod pixel;

#[cfg(feature = "bmp")]
pub mod bmp;

#[cfg(feature = "graw")]
pub mod graw;

#[cfg(any(feature = "bmp", feature = "graw"))]
mod codec;
#[cfg(any(feature = "bmp", feature = "graw"))]
mod decode;
#[cfg(any(feature = "bmp", feature = "graw"))]
mod encode;

// Re-exports
#[cfg(any(feature = "bmp", feature = "graw"))]
pub use codec::{Decoder, Encoder, ImageCodec};
pub use convert::{convert_row, read_pixel, read_pixel_f, write_pixel, write_pixel_f};
#[cfg(any(feature = "bmp", feature = "graw"))]
pub use decode::{DecodeOutput, DecodeRequest, decode};
#[cfg(any(feature = "bmp", feature = "graw"))]
pub use encode::EncodeRequest;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::RasterError;
pub use info::{ImageFormat, ImageInfo};
pub use limits::Limits;
pub use pixel::{ChannelEncoding, ChannelSet, PixelFormat};

#[cfg(feature = "bmp")]
pub use bmp::{BmpImage, BmpWriter, decode_bmp, encode_bmp};
#[cfg(feature = "graw")]
pub use graw::{GrawImage, GrawWriter, decode_graw, encode_graw};
