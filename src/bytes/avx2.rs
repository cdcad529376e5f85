use archmage::prelude::*;
use safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

use super::{unpremul_px, unpremul_px_copy};

// ===========================================================================
// SIMD constants
// ===========================================================================

// Little-endian hosts store an ARGB word as bytes B,G,R,A. Straight RGBA
// wants R,G,B,A, so a register of fully-opaque pixels converts with a plain
// B↔R swap shuffle.
const ARGB_TO_RGBA_SHUF_AVX: [i8; 32] = [
    2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14, 13, 12, 15, 2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14,
    13, 12, 15,
];

const ALPHA_FF_MASK_AVX: [i8; 32] = [
    0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0,
    0, 0, -1,
];

// ===========================================================================
// x86-64 AVX2 — rite row implementations
// ===========================================================================

// Exact unpremultiplication divides per channel, which has no bit-exact
// vector form. The SIMD win is the dominant case: a register whose 8 pixels
// are all alpha=255 is a pure shuffle. Mixed registers fall back to the
// scalar per-pixel routine for that chunk.

#[rite]
pub(super) fn unpremul_row_v3(_token: X64V3Token, row: &mut [u8]) {
    let shuf = _mm256_loadu_si256(&ARGB_TO_RGBA_SHUF_AVX);
    let amask = _mm256_loadu_si256(&ALPHA_FF_MASK_AVX);
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let opaque = _mm256_cmpeq_epi8(_mm256_and_si256(v, amask), amask);
        if _mm256_movemask_epi8(opaque) == -1 {
            let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
            _mm256_storeu_si256(out, _mm256_shuffle_epi8(v, shuf));
        } else {
            for px in row[i..i + 32].chunks_exact_mut(4) {
                unpremul_px(px);
            }
        }
        i += 32;
    }
    for px in row[i..].chunks_exact_mut(4) {
        unpremul_px(px);
    }
}

#[rite]
pub(super) fn unpremul_copy_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8]) {
    let shuf = _mm256_loadu_si256(&ARGB_TO_RGBA_SHUF_AVX);
    let amask = _mm256_loadu_si256(&ALPHA_FF_MASK_AVX);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(s);
        let opaque = _mm256_cmpeq_epi8(_mm256_and_si256(v, amask), amask);
        if _mm256_movemask_epi8(opaque) == -1 {
            let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
            _mm256_storeu_si256(d, _mm256_shuffle_epi8(v, shuf));
        } else {
            for (s, d) in src[i..i + 32]
                .chunks_exact(4)
                .zip(dst[i..i + 32].chunks_exact_mut(4))
            {
                unpremul_px_copy(s, d);
            }
        }
        i += 32;
    }
    for (s, d) in src[i..].chunks_exact(4).zip(dst[i..].chunks_exact_mut(4)) {
        unpremul_px_copy(s, d);
    }
}

// x86-64 arcane contiguous wrappers
#[arcane]
pub(super) fn unpremul_impl_v3(t: X64V3Token, b: &mut [u8]) {
    unpremul_row_v3(t, b);
}
#[arcane]
pub(super) fn unpremul_copy_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8]) {
    unpremul_copy_row_v3(t, s, d);
}

// x86-64 arcane strided wrappers
#[arcane]
pub(super) fn unpremul_strided_v3(t: X64V3Token, buf: &mut [u8], w: usize, h: usize, stride: usize) {
    for y in 0..h {
        unpremul_row_v3(t, &mut buf[y * stride..][..w * 4]);
    }
}
#[arcane]
pub(super) fn unpremul_copy_strided_v3(
    t: X64V3Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        unpremul_copy_row_v3(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4]);
    }
}
