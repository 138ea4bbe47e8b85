//! Lane-wise helpers shared by the vector routines.
//!
//! Broadcast constructors, scalar bit reinterpretation, mask reductions,
//! per-lane table lookups and the scalar fallback dispatcher. Everything here
//! is total and stateless.

#![allow(clippy::needless_range_loop)]

use super::types::{F32x4, F64x2, I32x4, I64x2, U32x2, U32x4, U64x2};

// ========= broadcast =========

#[inline(always)]
pub const fn v_f64(x: f64) -> F64x2 {
    F64x2::splat(x)
}
#[inline(always)]
pub const fn v_u64(x: u64) -> U64x2 {
    U64x2::splat(x)
}
#[inline(always)]
pub const fn v_s64(x: i64) -> I64x2 {
    I64x2::splat(x)
}

#[inline(always)]
pub const fn v_f32(x: f32) -> F32x4 {
    F32x4::splat(x)
}
#[inline(always)]
pub const fn v_u32(x: u32) -> U32x4 {
    U32x4::splat(x)
}
#[inline(always)]
pub const fn v_s32(x: i32) -> I32x4 {
    I32x4::splat(x)
}

// ========= bit helpers =========

#[inline(always)]
pub const fn bits_of(x: f64) -> u64 {
    x.to_bits()
}
#[inline(always)]
pub const fn double_of(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
pub const fn bits_of_f32(x: f32) -> u32 {
    x.to_bits()
}
#[inline(always)]
pub const fn float_of(u: u32) -> f32 {
    f32::from_bits(u)
}

// ========= fused steps =========

/// `acc + a * b`, one rounding.
#[inline(always)]
pub fn v_fma(acc: F64x2, a: F64x2, b: F64x2) -> F64x2 {
    a.mul_add(b, acc)
}

/// `acc - a * b`, one rounding.
#[inline(always)]
pub fn v_fms(acc: F64x2, a: F64x2, b: F64x2) -> F64x2 {
    (-a).mul_add(b, acc)
}

// ========= mask reductions =========
//
// Inputs are masks: every lane is either 0 or all-ones.

/// True if any lane of a 64-bit mask is set.
#[inline(always)]
pub fn v_any_u64(x: U64x2) -> bool {
    (x.0[0] | x.0[1]) != 0
}

/// True if every lane of a 64-bit mask is set.
#[inline(always)]
pub fn v_all_u64(x: U64x2) -> bool {
    (x.0[0] as i64).wrapping_add(x.0[1] as i64) == -2
}

/// True if any lane of a 32-bit mask is set.
#[inline(always)]
pub fn v_any_u32(x: U32x4) -> bool {
    let lo = ((x.0[1] as u64) << 32) | x.0[0] as u64;
    let hi = ((x.0[3] as u64) << 32) | x.0[2] as u64;
    (lo | hi) != 0
}

/// `v_any_u32` over a half-width (two-lane) mask.
#[inline(always)]
pub fn v_any_u32h(x: U32x2) -> bool {
    (((x.0[1] as u64) << 32) | x.0[0] as u64) != 0
}

// ========= table lookup =========
//
// Indices are caller-checked; an index past the table panics like slice
// indexing.

#[inline(always)]
pub fn v_lookup_f64(tab: &[f64], idx: U64x2) -> F64x2 {
    F64x2([tab[idx.0[0] as usize], tab[idx.0[1] as usize]])
}
#[inline(always)]
pub fn v_lookup_u64(tab: &[u64], idx: U64x2) -> U64x2 {
    U64x2([tab[idx.0[0] as usize], tab[idx.0[1] as usize]])
}
#[inline(always)]
pub fn v_lookup_f32(tab: &[f32], idx: U32x4) -> F32x4 {
    F32x4(core::array::from_fn(|i| tab[idx.0[i] as usize]))
}
#[inline(always)]
pub fn v_lookup_u32(tab: &[u32], idx: U32x4) -> U32x4 {
    U32x4(core::array::from_fn(|i| tab[idx.0[i] as usize]))
}

// ========= scalar fallback =========
//
// Lane i is f(x[i]) where p[i] is set, y[i] otherwise. f is never called for
// a clear lane.

#[inline(always)]
pub fn v_call_f64<F: FnMut(f64) -> f64>(mut f: F, x: F64x2, y: F64x2, p: U64x2) -> F64x2 {
    let mut out = y;
    for i in 0..F64x2::LANES {
        if p.0[i] != 0 {
            out.0[i] = f(x.0[i]);
        }
    }
    out
}

#[inline(always)]
pub fn v_call2_f64<F: FnMut(f64, f64) -> f64>(
    mut f: F,
    x1: F64x2,
    x2: F64x2,
    y: F64x2,
    p: U64x2,
) -> F64x2 {
    let mut out = y;
    for i in 0..F64x2::LANES {
        if p.0[i] != 0 {
            out.0[i] = f(x1.0[i], x2.0[i]);
        }
    }
    out
}

#[inline(always)]
pub fn v_call_f32<F: FnMut(f32) -> f32>(mut f: F, x: F32x4, y: F32x4, p: U32x4) -> F32x4 {
    let mut out = y;
    for i in 0..F32x4::LANES {
        if p.0[i] != 0 {
            out.0[i] = f(x.0[i]);
        }
    }
    out
}

#[inline(always)]
pub fn v_call2_f32<F: FnMut(f32, f32) -> f32>(
    mut f: F,
    x1: F32x4,
    x2: F32x4,
    y: F32x4,
    p: U32x4,
) -> F32x4 {
    let mut out = y;
    for i in 0..F32x4::LANES {
        if p.0[i] != 0 {
            out.0[i] = f(x1.0[i], x2.0[i]);
        }
    }
    out
}
