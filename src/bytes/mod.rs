// ---------------------------------------------------------------------------
// Premultiplied ARGB → straight RGBA conversion with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers dispatch via incant! — contiguous (single call)
// and strided (loop over rows, single dispatch).
// ---------------------------------------------------------------------------

use crate::SizeError;
use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


const PIXEL_BYTES: usize = 4;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize) -> Result<(), SizeError> {
    if len == 0 || !len.is_multiple_of(PIXEL_BYTES) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

#[inline]
fn check_copy(src_len: usize, dst_len: usize) -> Result<(), SizeError> {
    if src_len == 0 || !src_len.is_multiple_of(PIXEL_BYTES) {
        return Err(SizeError::NotPixelAligned);
    }
    if dst_len < src_len {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
fn check_strided(len: usize, width: usize, height: usize, stride: usize) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row_bytes = width.checked_mul(PIXEL_BYTES).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Per-pixel core
// ===========================================================================

// A premultiplied pixel is one native-endian u32: alpha in bits 24-31, then
// red, green, blue. Straight RGBA output is a fixed byte sequence R,G,B,A
// regardless of host endianness, so the word is read native and the result
// written as explicit bytes. All endianness handling lives in these three
// functions.

// Caller has ruled out a == 0.
#[inline(always)]
fn straighten_u32(v: u32) -> [u8; 4] {
    let a = v >> 24;
    if a == 255 {
        [(v >> 16) as u8, (v >> 8) as u8, v as u8, 255]
    } else {
        [
            (((v >> 16) & 0xFF) * 255 / a) as u8,
            (((v >> 8) & 0xFF) * 255 / a) as u8,
            ((v & 0xFF) * 255 / a) as u8,
            a as u8,
        ]
    }
}

#[inline(always)]
fn unpremul_px(px: &mut [u8]) {
    let v = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
    if v >> 24 != 0 {
        px.copy_from_slice(&straighten_u32(v));
    }
}

#[inline(always)]
fn unpremul_px_copy(s: &[u8], d: &mut [u8]) {
    let v = u32::from_ne_bytes([s[0], s[1], s[2], s[3]]);
    if v >> 24 != 0 {
        d.copy_from_slice(&straighten_u32(v));
    } else {
        d.copy_from_slice(&s[..4]);
    }
}

// ===========================================================================
// Public API — contiguous
// ===========================================================================

/// Convert premultiplied ARGB words to straight RGBA bytes, in place.
///
/// Each 4-byte group is one native-endian 32-bit pixel with alpha in the
/// high byte and color channels premultiplied by alpha. After conversion the
/// group holds the bytes `R,G,B,A` with the color channels divided back out
/// (truncating `c * 255 / a`). Fully opaque pixels are repacked without
/// division; pixels with alpha 0 are left completely untouched, so
/// non-conforming input (nonzero color under zero alpha) passes through in
/// its original byte layout.
pub fn argb_to_rgba_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    incant!(unpremul_impl(buf), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

/// Convert premultiplied ARGB words into a straight RGBA destination buffer.
///
/// Byte-identical to [`argb_to_rgba_inplace`] run on a copy of `src`:
/// alpha-0 pixels are copied through unconverted.
pub fn argb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len())?;
    incant!(unpremul_copy_impl(src, dst), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

// ===========================================================================
// Public API — strided
// ===========================================================================

/// Convert premultiplied ARGB to straight RGBA in place for a strided image.
///
/// `stride` is the distance in bytes between the start of consecutive rows.
/// Must be ≥ `width × 4`. Padding bytes between rows are never read or
/// written. The buffer must be at least `(height - 1) * stride + width * 4`
/// bytes.
pub fn argb_to_rgba_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    incant!(
        unpremul_strided(buf, width, height, stride),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

/// Convert premultiplied ARGB to straight RGBA between strided buffers.
///
/// `src_stride` / `dst_stride` are the distances in bytes between the start
/// of consecutive rows in the source and destination buffers respectively.
/// Padding bytes between rows are never read or written.
pub fn argb_to_rgba_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) -> Result<(), SizeError> {
    check_strided(src.len(), width, height, src_stride)?;
    check_strided(dst.len(), width, height, dst_stride)?;
    incant!(
        unpremul_copy_strided(src, dst, width, height, src_stride, dst_stride),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}
