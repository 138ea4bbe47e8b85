//! Vector cos(x) over two f64 lanes.
//!
//! cos(|x|) is rewritten as (-1)^N sin(r) with N = rint((|x| + pi/2) / pi)
//! and r = |x| - (N - 1/2) pi in [-pi/2, pi/2]. The subtraction uses pi split
//! into three pieces so n*pi is carried to about 160 bits. sin(r) is an odd
//! degree-13 minimax polynomial; the (-1)^N factor is the parity of N moved
//! into the sign bit. Worst-case error is 3.3 ulp for |x| < 2^23.
//!
//! Lanes with |x| >= 2^23, NaN or Inf are neutralized on the fast path and
//! recomputed with scalar cos from the original input.

use super::helpers::{v_any_u64, v_call_f64, v_f64};
use super::types::{F64x2, U64x2};
use crate::maths::arch::{self, Fma};
use crate::maths::fastlibm;

struct Data {
    poly: [F64x2; 7],
    range_val: F64x2,
    shift: F64x2,
    inv_pi: F64x2,
    half_pi: F64x2,
    pi_1: F64x2,
    pi_2: F64x2,
    pi_3: F64x2,
}

const fn v2(bits: u64) -> F64x2 {
    F64x2::splat(f64::from_bits(bits))
}

static DATA: Data = Data {
    // sin(r) ~ r + r^3 * P(r^2) on [-pi/2, pi/2].
    poly: [
        v2(0xbfc5_5555_5555_547b), // -0x1.555555555547bp-3
        v2(0x3f81_1111_1110_8a4d), //  0x1.1111111108a4dp-7
        v2(0xbf2a_01a0_1993_6f27), // -0x1.a01a019936f27p-13
        v2(0x3ec7_1de3_7a97_d93e), //  0x1.71de37a97d93ep-19
        v2(0xbe5a_e633_9199_87c6), // -0x1.ae633919987c6p-26
        v2(0x3de6_0e27_7ae0_7cec), //  0x1.60e277ae07cecp-33
        v2(0xbd69_e954_0300_a100), // -0x1.9e9540300a1p-41
    ],
    range_val: v2(0x4160_0000_0000_0000), // 2^23
    shift: v2(0x4338_0000_0000_0000),     // 0x1.8p52
    inv_pi: v2(0x3fd4_5f30_6dc9_c883),
    half_pi: v2(0x3ff9_21fb_5444_2d18),
    pi_1: v2(0x4009_21fb_5444_2d18),
    pi_2: v2(0x3ca1_a626_3314_5c06),
    pi_3: v2(0x395c_1cd1_2902_4e09),
};

/// Largest |x| handled without the scalar fallback is just below this.
pub const RANGE_VAL: f64 = f64::from_bits(0x4160_0000_0000_0000);

/// Lanes whose |x| is out of the reduction's range. Compared as unsigned bit
/// patterns, so NaN and Inf (exponent all ones) are flagged too.
#[inline(always)]
fn special_lanes(r: F64x2) -> U64x2 {
    r.to_bits().simd_ge(DATA.range_val.to_bits())
}

#[cold]
#[inline(never)]
fn special_case(x: F64x2, y: F64x2, odd: U64x2, cmp: U64x2) -> F64x2 {
    let y = (y.to_bits() ^ odd).to_float();
    v_call_f64(fastlibm::cos, x, y, cmp)
}

/// cos of each lane of `x`.
///
/// Finite lanes with |x| < 2^23 are within 3.3 ulp. Every other lane is
/// bit-identical to [`fastlibm::cos`] of that lane.
///
/// On x86 builds without `target_feature = "fma"` the CPU is probed once and
/// a hardware-FMA copy of the kernel is used when available. Both copies
/// round every fused step once, so results do not depend on the path taken.
#[inline]
pub fn cos(x: F64x2) -> F64x2 {
    #[cfg(all(
        not(feature = "soft-fma"),
        any(target_arch = "x86_64", target_arch = "x86"),
        not(target_feature = "fma"),
        not(target_env = "sgx")
    ))]
    if let Some(token) = arch::detect_x86_fma() {
        // SAFETY: the token proves the CPU supports FMA3.
        return unsafe { cos_x86_fma(token, x) };
    }
    cos_with(arch::Static, x)
}

#[cfg(all(
    not(feature = "soft-fma"),
    any(target_arch = "x86_64", target_arch = "x86"),
    not(target_feature = "fma"),
    not(target_env = "sgx")
))]
#[target_feature(enable = "fma")]
unsafe fn cos_x86_fma(token: arch::X86Fma, x: F64x2) -> F64x2 {
    cos_with(token, x)
}

/// `acc + a * b`, one rounding.
#[inline(always)]
fn fma<M: Fma>(m: M, acc: F64x2, a: F64x2, b: F64x2) -> F64x2 {
    F64x2(m.f64x2(a.0, b.0, acc.0))
}

/// `acc - a * b`, one rounding.
#[inline(always)]
fn fms<M: Fma>(m: M, acc: F64x2, a: F64x2, b: F64x2) -> F64x2 {
    fma(m, acc, -a, b)
}

#[inline(always)]
fn cos_with<M: Fma>(m: M, x: F64x2) -> F64x2 {
    let d = &DATA;
    let c = &d.poly;

    let mut r = x.abs();
    let cmp = special_lanes(r);
    if v_any_u64(cmp) {
        // 1.0 raises no fenv exception below; these lanes are recomputed by
        // special_case.
        r = cmp.select(v_f64(1.0), r);
    }

    // n = rint((|x| + pi/2) / pi) - 0.5
    let mut n = fma(m, d.shift, d.inv_pi, r + d.half_pi);
    let odd = n.to_bits() << 63;
    n = n - d.shift;
    n = n - v_f64(0.5);

    // r = |x| - n*pi, in [-pi/2, pi/2]
    r = fms(m, r, d.pi_1, n);
    r = fms(m, r, d.pi_2, n);
    r = fms(m, r, d.pi_3, n);

    // sin(r)
    let r2 = r * r;
    let r3 = r2 * r;
    let r4 = r2 * r2;

    let t1 = fma(m, c[4], c[5], r2);
    let t2 = fma(m, c[2], c[3], r2);
    let t3 = fma(m, c[0], c[1], r2);

    let mut y = fma(m, t1, c[6], r4);
    y = fma(m, t2, y, r4);
    y = fma(m, t3, y, r4);
    y = fma(m, r, y, r3);

    if v_any_u64(cmp) {
        return special_case(x, y, odd, cmp);
    }
    (y.to_bits() ^ odd).to_float()
}

/// [`cos`] on a plain array.
#[inline]
pub fn cos_f64x2(x: [f64; 2]) -> [f64; 2] {
    cos(F64x2(x)).0
}
