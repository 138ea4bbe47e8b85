// Architecture-specific fused multiply-add, scalar and lane-wise.
//
// Exactly one static backend is compiled in. Hardware backends are only
// selected when the FMA unit is guaranteed at compile time, so every entry
// point here is safe to call. x86 builds without that guarantee also carry a
// runtime-detected backend, reachable only through the `X86Fma` token.

#[cfg(all(
    not(feature = "soft-fma"),
    any(target_arch = "x86_64", target_arch = "x86"),
    target_feature = "fma"
))]
mod x86;
#[cfg(all(not(feature = "soft-fma"), target_arch = "aarch64"))]
mod aarch64;
#[cfg(not(any(
    all(
        not(feature = "soft-fma"),
        any(target_arch = "x86_64", target_arch = "x86"),
        target_feature = "fma"
    ),
    all(not(feature = "soft-fma"), target_arch = "aarch64")
)))]
mod soft;

#[cfg(all(
    not(feature = "soft-fma"),
    any(target_arch = "x86_64", target_arch = "x86"),
    target_feature = "fma"
))]
pub(crate) use x86::{fma_f32, fma_f32x4, fma_f64, fma_f64x2};

#[cfg(all(not(feature = "soft-fma"), target_arch = "aarch64"))]
pub(crate) use aarch64::{fma_f32, fma_f32x4, fma_f64, fma_f64x2};

#[cfg(not(any(
    all(
        not(feature = "soft-fma"),
        any(target_arch = "x86_64", target_arch = "x86"),
        target_feature = "fma"
    ),
    all(not(feature = "soft-fma"), target_arch = "aarch64")
)))]
pub(crate) use soft::{fma_f32, fma_f32x4, fma_f64, fma_f64x2};

/// True when `fma` and `fmaf` compile to a hardware instruction.
pub const HAS_FMA: bool = !cfg!(feature = "soft-fma")
    && (cfg!(target_arch = "aarch64")
        || cfg!(all(
            any(target_arch = "x86_64", target_arch = "x86"),
            target_feature = "fma"
        )));

#[cfg(all(
    not(feature = "soft-fma"),
    any(target_arch = "x86_64", target_arch = "x86"),
    not(target_feature = "fma"),
    not(target_env = "sgx")
))]
mod runtime;
#[cfg(all(
    not(feature = "soft-fma"),
    any(target_arch = "x86_64", target_arch = "x86"),
    not(target_feature = "fma"),
    not(target_env = "sgx")
))]
pub(crate) use runtime::{X86Fma, detect as detect_x86_fma};

/// Lane-wise fused multiply-add backend for the vector kernels.
pub(crate) trait Fma: Copy {
    /// `a * b + c` per lane, rounded once.
    fn f64x2(self, a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> [f64; 2];
}

/// The backend fixed at compile time.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Static;

impl Fma for Static {
    #[inline(always)]
    fn f64x2(self, a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> [f64; 2] {
        fma_f64x2(a, b, c)
    }
}

/// True when the vector kernels run on a hardware FMA, either fixed at compile
/// time or detected on this CPU.
pub fn hw_fma_available() -> bool {
    #[cfg(all(
        not(feature = "soft-fma"),
        any(target_arch = "x86_64", target_arch = "x86"),
        not(target_feature = "fma"),
        not(target_env = "sgx")
    ))]
    if detect_x86_fma().is_some() {
        return true;
    }
    HAS_FMA
}
