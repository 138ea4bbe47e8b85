//! Fused multiply-add helper.
//!
//! Selects the hardware instruction at compile time when the target
//! guarantees it (aarch64, or x86 built with `target_feature = "fma"`) and
//! the `soft-fma` feature is off. Otherwise falls back to libm's correctly
//! rounded software routine.

use crate::maths::arch;

/// `a * b + c` rounded once.
#[inline(always)]
pub fn fma(a: f64, b: f64, c: f64) -> f64 {
    arch::fma_f64(a, b, c)
}

/// `a * b + c` rounded once, single precision.
#[inline(always)]
pub fn fmaf(a: f32, b: f32, c: f32) -> f32 {
    arch::fma_f32(a, b, c)
}
