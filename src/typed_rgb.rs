//! Typed unpremultiply conversions using [`rgb`] crate pixel types via bytemuck.
//!
//! The premultiplied side stays `u32` — it is a native-endian word, not a
//! fixed byte order, so no `rgb` struct describes its memory layout. The
//! straight-alpha side is exactly `Rgba<u8>`.
//!
//! ```rust
//! use rgb::Rgba;
//! use unpremul::typed_rgb;
//!
//! // Opaque pixel: a=255, r=10, g=20, b=30.
//! let mut pixels: Vec<u32> = vec![0xFF0A141E; 100];
//! let rgba: &mut [Rgba<u8>] = typed_rgb::argb_to_rgba_mut(&mut pixels);
//! assert_eq!(rgba[0], Rgba { r: 10, g: 20, b: 30, a: 255 });
//! ```

use crate::SizeError;
use rgb::Rgba;

/// Unpremultiply a slice of premultiplied ARGB words in place, yielding RGBA pixels.
///
/// Returns a bytemuck-reinterpreted reference to the same memory. Pixels with
/// alpha 0 are left untouched (see [`crate::bytes::argb_to_rgba_inplace`]).
pub fn argb_to_rgba_mut(pixels: &mut [u32]) -> &mut [Rgba<u8>] {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    if !bytes.is_empty() {
        crate::bytes::argb_to_rgba_inplace(bytes).expect("u32 slice is always pixel-aligned");
    }
    bytemuck::cast_slice_mut(bytes)
}

/// Copy a slice of premultiplied ARGB words into `&mut [Rgba<u8>]`, unpremultiplying.
pub fn argb_to_rgba_buf(src: &[u32], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::bytes::argb_to_rgba(src_bytes, dst_bytes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::vec;

    #[test]
    fn mut_converts_and_reinterprets() {
        let mut pixels = vec![0xFF0A_141Eu32, 0x8040_2010, 0];
        let rgba = argb_to_rgba_mut(&mut pixels);
        assert_eq!(rgba[0], Rgba { r: 10, g: 20, b: 30, a: 255 });
        assert_eq!(rgba[1], Rgba { r: 127, g: 63, b: 31, a: 128 });
        assert_eq!(rgba[2], Rgba { r: 0, g: 0, b: 0, a: 0 });
    }

    #[test]
    fn buf_matches_mut() {
        let src = vec![0xFF01_0203u32, 0x7F10_2030];
        let mut dst = vec![Rgba::default(); 2];
        argb_to_rgba_buf(&src, &mut dst).unwrap();
        let mut inplace = src.clone();
        let expected = argb_to_rgba_mut(&mut inplace);
        assert_eq!(&dst[..], &expected[..]);
    }

    #[test]
    fn empty_slice_is_fine() {
        let pixels: &mut [u32] = &mut [];
        assert!(argb_to_rgba_mut(pixels).is_empty());
    }
}
