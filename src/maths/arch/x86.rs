#[cfg(target_arch = "x86")]
use core::arch::x86::{
    _mm_cvtsd_f64, _mm_cvtss_f32, _mm_fmadd_pd, _mm_fmadd_ps, _mm_fmadd_sd, _mm_fmadd_ss,
    _mm_loadu_pd, _mm_loadu_ps, _mm_set_sd, _mm_set_ss, _mm_storeu_pd, _mm_storeu_ps,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    _mm_cvtsd_f64, _mm_cvtss_f32, _mm_fmadd_pd, _mm_fmadd_ps, _mm_fmadd_sd, _mm_fmadd_ss,
    _mm_loadu_pd, _mm_loadu_ps, _mm_set_sd, _mm_set_ss, _mm_storeu_pd, _mm_storeu_ps,
};

#[inline(always)]
pub(crate) fn fma_f64(a: f64, b: f64, c: f64) -> f64 {
    // SAFETY: module is only compiled with target_feature = "fma".
    unsafe { _mm_cvtsd_f64(_mm_fmadd_sd(_mm_set_sd(a), _mm_set_sd(b), _mm_set_sd(c))) }
}

#[inline(always)]
pub(crate) fn fma_f32(a: f32, b: f32, c: f32) -> f32 {
    // SAFETY: module is only compiled with target_feature = "fma".
    unsafe { _mm_cvtss_f32(_mm_fmadd_ss(_mm_set_ss(a), _mm_set_ss(b), _mm_set_ss(c))) }
}

/// Lane-wise `a * b + c` with a single rounding.
#[inline(always)]
pub(crate) fn fma_f64x2(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> [f64; 2] {
    let mut out = [0.0f64; 2];
    // SAFETY: module is only compiled with target_feature = "fma"; the
    // unaligned loads/stores read and write exactly two f64 lanes.
    unsafe {
        let r = _mm_fmadd_pd(
            _mm_loadu_pd(a.as_ptr()),
            _mm_loadu_pd(b.as_ptr()),
            _mm_loadu_pd(c.as_ptr()),
        );
        _mm_storeu_pd(out.as_mut_ptr(), r);
    }
    out
}

#[inline(always)]
pub(crate) fn fma_f32x4(a: [f32; 4], b: [f32; 4], c: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    // SAFETY: as above, four f32 lanes.
    unsafe {
        let r = _mm_fmadd_ps(
            _mm_loadu_ps(a.as_ptr()),
            _mm_loadu_ps(b.as_ptr()),
            _mm_loadu_ps(c.as_ptr()),
        );
        _mm_storeu_ps(out.as_mut_ptr(), r);
    }
    out
}
