//! Scalar cos(x).
//!
//! fdlibm-grade cosine from the libm crate: Cody-Waite reduction for medium
//! arguments and Payne-Hanek for huge ones, with kernel polynomials on
//! |x| <= pi/4. Vector cos lanes with |x| >= 2^23, NaN or Inf end up here.

#[inline(always)]
pub fn cos(x: f64) -> f64 {
    libm::cos(x)
}
