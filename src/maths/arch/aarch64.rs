use core::arch::aarch64::{vfmaq_f32, vfmaq_f64, vld1q_f32, vld1q_f64, vst1q_f32, vst1q_f64};

#[inline(always)]
pub(crate) fn fma_f64(a: f64, b: f64, c: f64) -> f64 {
    let out: f64;
    // SAFETY: fmadd is part of the aarch64 base ISA.
    unsafe {
        core::arch::asm!(
            "fmadd {out:d}, {a:d}, {b:d}, {c:d}",
            out = out(vreg) out,
            a = in(vreg) a,
            b = in(vreg) b,
            c = in(vreg) c,
            options(pure, nomem, nostack)
        );
    }
    out
}

#[inline(always)]
pub(crate) fn fma_f32(a: f32, b: f32, c: f32) -> f32 {
    let out: f32;
    // SAFETY: fmadd is part of the aarch64 base ISA.
    unsafe {
        core::arch::asm!(
            "fmadd {out:s}, {a:s}, {b:s}, {c:s}",
            out = out(vreg) out,
            a = in(vreg) a,
            b = in(vreg) b,
            c = in(vreg) c,
            options(pure, nomem, nostack)
        );
    }
    out
}

/// Lane-wise `a * b + c` with a single rounding.
#[inline(always)]
pub(crate) fn fma_f64x2(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> [f64; 2] {
    let mut out = [0.0f64; 2];
    // SAFETY: NEON is mandatory on aarch64; loads/stores cover two lanes.
    unsafe {
        let r = vfmaq_f64(vld1q_f64(c.as_ptr()), vld1q_f64(a.as_ptr()), vld1q_f64(b.as_ptr()));
        vst1q_f64(out.as_mut_ptr(), r);
    }
    out
}

#[inline(always)]
pub(crate) fn fma_f32x4(a: [f32; 4], b: [f32; 4], c: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    // SAFETY: NEON is mandatory on aarch64; loads/stores cover four lanes.
    unsafe {
        let r = vfmaq_f32(vld1q_f32(c.as_ptr()), vld1q_f32(a.as_ptr()), vld1q_f32(b.as_ptr()));
        vst1q_f32(out.as_mut_ptr(), r);
    }
    out
}
