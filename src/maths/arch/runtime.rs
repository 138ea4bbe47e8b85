// Runtime FMA3 detection for x86 builds without `target_feature = "fma"`.
//
// CPUID is read once per process; the answer is cached in an atomic so the
// check on the hot path is a single relaxed load.

#[cfg(target_arch = "x86")]
use core::arch::x86::{
    __cpuid, __get_cpuid_max, _mm_fmadd_pd, _mm_loadu_pd, _mm_storeu_pd, _xgetbv,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __cpuid, __get_cpuid_max, _mm_fmadd_pd, _mm_loadu_pd, _mm_storeu_pd, _xgetbv,
};
use core::sync::atomic::{AtomicU8, Ordering};

use super::Fma;

const UNKNOWN: u8 = 0;
const ABSENT: u8 = 1;
const PRESENT: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(UNKNOWN);

// CPUID.1:ECX
const ECX_FMA: u32 = 1 << 12;
const ECX_OSXSAVE: u32 = 1 << 27;
const ECX_AVX: u32 = 1 << 28;
// XCR0: SSE and AVX register state enabled by the OS.
const XCR0_SSE_AVX: u64 = 0b110;

/// Proof that the running CPU executes FMA3. Only [`detect`] creates one.
#[derive(Clone, Copy, Debug)]
pub(crate) struct X86Fma(());

/// The FMA token if this CPU supports FMA3, cached after the first call.
#[inline]
pub(crate) fn detect() -> Option<X86Fma> {
    let state = match STATE.load(Ordering::Relaxed) {
        UNKNOWN => {
            let state = if probe() { PRESENT } else { ABSENT };
            STATE.store(state, Ordering::Relaxed);
            state
        }
        state => state,
    };
    (state == PRESENT).then_some(X86Fma(()))
}

#[cold]
fn probe() -> bool {
    // SAFETY: CPUID exists on every x86 target Rust supports outside SGX,
    // which is excluded by the module cfg.
    let (max_leaf, _) = unsafe { __get_cpuid_max(0) };
    if max_leaf < 1 {
        return false;
    }
    // SAFETY: as above; leaf 1 is within max_leaf.
    let ecx = unsafe { __cpuid(1) }.ecx;
    let wanted = ECX_FMA | ECX_OSXSAVE | ECX_AVX;
    if ecx & wanted != wanted {
        return false;
    }
    // SAFETY: OSXSAVE is set, so XGETBV is available.
    let xcr0 = unsafe { _xgetbv(0) };
    xcr0 & XCR0_SSE_AVX == XCR0_SSE_AVX
}

impl Fma for X86Fma {
    #[inline(always)]
    fn f64x2(self, a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> [f64; 2] {
        let mut out = [0.0f64; 2];
        // SAFETY: the token only exists once `probe` saw FMA3 with OS support;
        // the unaligned loads/stores cover exactly two f64 lanes.
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
}
