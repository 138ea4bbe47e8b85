//! Scalar collaborators of the vector kernels.
//!
//! Vector routines defer their special lanes to the scalar functions here, so
//! these are the authoritative results for out-of-range, NaN and infinite
//! inputs. `fma` backs the portable lane arithmetic.

mod cos;
mod fma;

pub use cos::cos;
pub use crate::maths::arch::{HAS_FMA, hw_fma_available};
pub use fma::{fma, fmaf};
