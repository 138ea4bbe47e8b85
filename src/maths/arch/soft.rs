// Portable fallback: correctly rounded software FMA from the libm crate.

#[inline(always)]
pub(crate) fn fma_f64(a: f64, b: f64, c: f64) -> f64 {
    libm::fma(a, b, c)
}

#[inline(always)]
pub(crate) fn fma_f32(a: f32, b: f32, c: f32) -> f32 {
    libm::fmaf(a, b, c)
}

#[inline(always)]
pub(crate) fn fma_f64x2(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> [f64; 2] {
    [fma_f64(a[0], b[0], c[0]), fma_f64(a[1], b[1], c[1])]
}

#[inline(always)]
pub(crate) fn fma_f32x4(a: [f32; 4], b: [f32; 4], c: [f32; 4]) -> [f32; 4] {
    core::array::from_fn(|i| fma_f32(a[i], b[i], c[i]))
}
