use archmage::prelude::*;

use super::{unpremul_px, unpremul_px_copy};

// ===========================================================================
// ARM NEON — rite row implementations
// ===========================================================================

// Same shape as the AVX2 kernels at 16-byte granularity: a register of 4
// fully-opaque pixels is a pure B↔R swap shuffle, anything else takes the
// scalar per-pixel routine for that chunk.

#[rite]
pub(super) fn unpremul_row_arm_v2(_token: Arm64V2Token, row: &mut [u8]) {
    use core::arch::aarch64::{vandq_u8, vceqq_u8, vminvq_u8, vqtbl1q_u8};
    let mask_bytes: [u8; 16] = [2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14, 13, 12, 15];
    let shuf = safe_unaligned_simd::aarch64::vld1q_u8(&mask_bytes);
    let ab: [u8; 16] = [0, 0, 0, 0xFF, 0, 0, 0, 0xFF, 0, 0, 0, 0xFF, 0, 0, 0, 0xFF];
    let amask = safe_unaligned_simd::aarch64::vld1q_u8(&ab);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(arr);
        let opaque = vceqq_u8(vandq_u8(v, amask), amask);
        if vminvq_u8(opaque) == 0xFF {
            let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
            safe_unaligned_simd::aarch64::vst1q_u8(out, vqtbl1q_u8(v, shuf));
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
pub(super) fn unpremul_copy_row_arm_v2(_token: Arm64V2Token, src: &[u8], dst: &mut [u8]) {
    use core::arch::aarch64::{vandq_u8, vceqq_u8, vminvq_u8, vqtbl1q_u8};
    let mask_bytes: [u8; 16] = [2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14, 13, 12, 15];
    let shuf = safe_unaligned_simd::aarch64::vld1q_u8(&mask_bytes);
    let ab: [u8; 16] = [0, 0, 0, 0xFF, 0, 0, 0, 0xFF, 0, 0, 0, 0xFF, 0, 0, 0, 0xFF];
    let amask = safe_unaligned_simd::aarch64::vld1q_u8(&ab);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(s);
        let opaque = vceqq_u8(vandq_u8(v, amask), amask);
        if vminvq_u8(opaque) == 0xFF {
            let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
            safe_unaligned_simd::aarch64::vst1q_u8(d, vqtbl1q_u8(v, shuf));
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

// ARM arcane contiguous wrappers
#[arcane]
pub(super) fn unpremul_impl_arm_v2(t: Arm64V2Token, b: &mut [u8]) {
    unpremul_row_arm_v2(t, b);
}
#[arcane]
pub(super) fn unpremul_copy_impl_arm_v2(t: Arm64V2Token, s: &[u8], d: &mut [u8]) {
    unpremul_copy_row_arm_v2(t, s, d);
}

// ARM arcane strided wrappers
#[arcane]
pub(super) fn unpremul_strided_arm_v2(
    t: Arm64V2Token,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        unpremul_row_arm_v2(t, &mut buf[y * stride..][..w * 4]);
    }
}
#[arcane]
pub(super) fn unpremul_copy_strided_arm_v2(
    t: Arm64V2Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        unpremul_copy_row_arm_v2(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4]);
    }
}
