//! # unpremul
//!
//! *Straighten that alpha out.*
//!
//! Native imaging libraries like Cairo hand you premultiplied-alpha ARGB:
//! each pixel is one native-endian 32-bit word, alpha in the high byte,
//! color channels already scaled by alpha. Image tooling on the other side
//! of the fence wants straight-alpha RGBA bytes. This crate rewrites whole
//! buffers from the one to the other — undoing the premultiplication and
//! reordering channels in a single in-place sweep, with no allocation.
//!
//! SIMD-optimized for x86-64 AVX2, ARM NEON, and WASM SIMD128 with automatic
//! fallback to scalar code. Fully-opaque pixels (the overwhelming majority in
//! scanned and rendered imagery) reduce to a byte shuffle; everything else
//! takes the exact integer division path, so output is bit-identical across
//! all tiers.
//!
//! ## Core operations (always available)
//!
//! All functions in [`bytes`] (re-exported at the crate root) operate on raw
//! `&[u8]` / `&mut [u8]` slices: [`argb_to_rgba_inplace`], [`argb_to_rgba`],
//! and their strided forms for padded image buffers.
//!
//! ## Feature flags
//!
//! - **`rgb`** — Typed conversions producing [`rgb`] crate `Rgba<u8>` pixels
//!   via bytemuck.
//! - **`imgref`** — Whole-image conversions using [`imgref`] types
//!   (`ImgRef`, `ImgVec`). Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod bytes;

pub use bytes::*;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;

/// Buffer validation error, raised before any pixel is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    /// Buffer length is zero or not a multiple of the 4-byte pixel size.
    NotPixelAligned,
    /// Destination buffer holds fewer pixels than the source.
    PixelCountMismatch,
    /// Width, height, and stride are inconsistent with the buffer length.
    InvalidStride,
    /// Source and destination image dimensions differ.
    DimensionMismatch,
}

impl core::fmt::Display for SizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SizeError::NotPixelAligned => "buffer length is zero or not a multiple of 4",
            SizeError::PixelCountMismatch => "destination holds fewer pixels than source",
            SizeError::InvalidStride => "width/height/stride inconsistent with buffer length",
            SizeError::DimensionMismatch => "source and destination dimensions differ",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for SizeError {}
