use archmage::prelude::*;

use super::{unpremul_px, unpremul_px_copy};

// ===========================================================================
// Scalar row implementations
// ===========================================================================

pub(super) fn unpremul_row_scalar(_token: ScalarToken, row: &mut [u8]) {
    for px in row.chunks_exact_mut(4) {
        unpremul_px(px);
    }
}

pub(super) fn unpremul_copy_row_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        unpremul_px_copy(s, d);
    }
}

// ===========================================================================
// Scalar contiguous wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn unpremul_impl_scalar(t: ScalarToken, b: &mut [u8]) {
    unpremul_row_scalar(t, b);
}
pub(super) fn unpremul_copy_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8]) {
    unpremul_copy_row_scalar(t, s, d);
}

// ===========================================================================
// Scalar strided wrappers
// ===========================================================================

pub(super) fn unpremul_strided_scalar(
    t: ScalarToken,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        unpremul_row_scalar(t, &mut buf[y * stride..][..w * 4]);
    }
}
pub(super) fn unpremul_copy_strided_scalar(
    t: ScalarToken,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        unpremul_copy_row_scalar(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4]);
    }
}
