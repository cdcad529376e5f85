//! Whole-image unpremultiply conversions using [`imgref`] types.
//!
//! These functions handle strided image buffers using the SIMD-optimized
//! core operations row-by-row.
//!
//! # Consuming conversion (takes ownership)
//!
//! ```rust
//! use rgb::Rgba;
//! use ::imgref::ImgVec;
//! use unpremul::imgref;
//!
//! let img = ImgVec::new(vec![0xFF0A141Eu32; 4], 2, 2);
//! let rgba: ImgVec<Rgba<u8>> = imgref::unpremultiply(img);
//! assert_eq!(rgba.buf()[0], Rgba { r: 10, g: 20, b: 30, a: 255 });
//! ```
//!
//! # Copy conversion (caller provides destination)
//!
//! ```rust
//! use rgb::Rgba;
//! use ::imgref::{ImgVec, ImgRefMut};
//! use unpremul::imgref;
//!
//! let src = ImgVec::new(vec![0xFF0A141Eu32; 4], 2, 2);
//! let mut dst_buf = vec![Rgba::default(); 4];
//! let dst = ImgRefMut::new(&mut dst_buf, 2, 2);
//! imgref::convert_argb_to_rgba(src.as_ref(), dst).unwrap();
//! ```

use alloc::vec::Vec;

use ::imgref::{ImgRef, ImgRefMut, ImgVec};
use rgb::Rgba;

use crate::SizeError;

// ---------------------------------------------------------------------------
// Dimension check
// ---------------------------------------------------------------------------

fn check_dims(sw: usize, sh: usize, dw: usize, dh: usize) -> Result<(), SizeError> {
    if sw != dw || sh != dh {
        Err(SizeError::DimensionMismatch)
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-place conversion on ImgVec
// ---------------------------------------------------------------------------

/// Convert an `ImgVec<u32>` of premultiplied ARGB words to `ImgVec<Rgba<u8>>`.
///
/// Unpremultiplies row by row in the existing buffer, then repacks each word
/// into an `Rgba<u8>`. The stride is preserved; padding words between rows
/// are carried over untouched (still premultiplied ARGB). The word and pixel
/// types differ in alignment, so the final repack is an element-wise copy
/// rather than a vector reinterpret.
pub fn unpremultiply(mut img: ImgVec<u32>) -> ImgVec<Rgba<u8>> {
    let w = img.width();
    let h = img.height();
    let stride = img.stride();
    for row in img.rows_mut() {
        if row.is_empty() {
            continue;
        }
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(row);
        crate::bytes::argb_to_rgba_inplace(bytes).expect("row is always valid");
    }
    let buf: Vec<Rgba<u8>> = img
        .into_buf()
        .into_iter()
        .map(|word| {
            let [r, g, b, a] = word.to_ne_bytes();
            Rgba { r, g, b, a }
        })
        .collect();
    ImgVec::new_stride(buf, w, h, stride)
}

// ---------------------------------------------------------------------------
// Copy conversion
// ---------------------------------------------------------------------------

/// Convert `ImgRef<u32>` premultiplied ARGB into `ImgRefMut<Rgba<u8>>` by copying.
pub fn convert_argb_to_rgba(
    src: ImgRef<'_, u32>,
    mut dst: ImgRefMut<'_, Rgba<u8>>,
) -> Result<(), SizeError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        if src_row.is_empty() {
            continue;
        }
        let s: &[u8] = bytemuck::cast_slice(src_row);
        let d: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        crate::bytes::argb_to_rgba(s, d)?;
    }
    Ok(())
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
    fn unpremultiply_imgvec() {
        let img = ImgVec::new(vec![0xFF0A_141Eu32, 0x8040_2010, 0, 0x0101_0101], 2, 2);
        let out = unpremultiply(img);
        assert_eq!(out.buf()[0], Rgba { r: 10, g: 20, b: 30, a: 255 });
        assert_eq!(out.buf()[1], Rgba { r: 127, g: 63, b: 31, a: 128 });
        assert_eq!(out.buf()[2], Rgba { r: 0, g: 0, b: 0, a: 0 });
        assert_eq!(out.buf()[3], Rgba { r: 255, g: 255, b: 255, a: 1 });
    }

    #[test]
    fn convert_copy_matches_inplace() {
        let words = vec![0xFF00_0000u32, 0x8040_2010, 0x4020_1000, 0xFF10_2030];
        let src = ImgVec::new(words.clone(), 2, 2);
        let mut dst_buf = vec![Rgba::default(); 4];
        {
            let dst = ImgRefMut::new(&mut dst_buf, 2, 2);
            convert_argb_to_rgba(src.as_ref(), dst).unwrap();
        }
        let expected = unpremultiply(ImgVec::new(words, 2, 2));
        assert_eq!(dst_buf, *expected.buf());
    }

    #[test]
    fn dimension_mismatch() {
        let src = ImgVec::new(vec![0u32; 4], 2, 2);
        let mut dst_buf = vec![Rgba::default(); 2];
        let dst = ImgRefMut::new(&mut dst_buf, 2, 1);
        assert_eq!(
            convert_argb_to_rgba(src.as_ref(), dst),
            Err(SizeError::DimensionMismatch)
        );
    }
}
