use archmage::prelude::*;

use super::{unpremul_px, unpremul_px_copy};

// ===========================================================================
// WASM SIMD128 — rite row implementations
// ===========================================================================

// Same shape as the AVX2 kernels at 16-byte granularity: a register of 4
// fully-opaque pixels is a pure B↔R swap shuffle, anything else takes the
// scalar per-pixel routine for that chunk.

#[rite]
pub(super) fn unpremul_row_wasm128(_token: Wasm128Token, row: &mut [u8]) {
    use core::arch::wasm32::{i8x16, i8x16_eq, i8x16_swizzle, u8x16_all_true, u32x4_splat, v128_and};
    let shuf = i8x16(2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14, 13, 12, 15);
    let amask = u32x4_splat(0xFF000000);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::wasm32::v128_load(arr);
        let opaque = i8x16_eq(v128_and(v, amask), amask);
        if u8x16_all_true(opaque) {
            let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
            safe_unaligned_simd::wasm32::v128_store(out, i8x16_swizzle(v, shuf));
        } else {
            for px in row[i..i + 16].chunks_exact_mut(4) {
                unpremul_px(px);
            }
        }
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        unpremul_px(px);
    }
}

#[rite]
pub(super) fn unpremul_copy_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8]) {
    use core::arch::wasm32::{i8x16, i8x16_eq, i8x16_swizzle, u8x16_all_true, u32x4_splat, v128_and};
    let shuf = i8x16(2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14, 13, 12, 15);
    let amask = u32x4_splat(0xFF000000);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::wasm32::v128_load(s);
        let opaque = i8x16_eq(v128_and(v, amask), amask);
        if u8x16_all_true(opaque) {
            let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
            safe_unaligned_simd::wasm32::v128_store(d, i8x16_swizzle(v, shuf));
        } else {
            for (s, d) in src[i..i + 16]
                .chunks_exact(4)
                .zip(dst[i..i + 16].chunks_exact_mut(4))
            {
                unpremul_px_copy(s, d);
            }
        }
        i += 16;
    }
    for (s, d) in src[i..].chunks_exact(4).zip(dst[i..].chunks_exact_mut(4)) {
        unpremul_px_copy(s, d);
    }
}

// WASM arcane contiguous wrappers
#[arcane]
pub(super) fn unpremul_impl_wasm128(t: Wasm128Token, b: &mut [u8]) {
    unpremul_row_wasm128(t, b);
}
#[arcane]
pub(super) fn unpremul_copy_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8]) {
    unpremul_copy_row_wasm128(t, s, d);
}

// WASM arcane strided wrappers
#[arcane]
pub(super) fn unpremul_strided_wasm128(
    t: Wasm128Token,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        unpremul_row_wasm128(t, &mut buf[y * stride..][..w * 4]);
    }
}
#[arcane]
pub(super) fn unpremul_copy_strided_wasm128(
    t: Wasm128Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        unpremul_copy_row_wasm128(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4]);
    }
}
