//! Vector math routines and the lane primitives they are built from.
//!
//! Routines take and return fixed-width lane vectors. Lanes a routine cannot
//! handle on its fast path are recomputed with the matching scalar function
//! from [`crate::fastlibm`], so special inputs always agree with the scalar
//! result bit for bit.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod cos;
mod helpers;
mod types;

pub use cos::{RANGE_VAL as COS_RANGE_VAL, cos, cos_f64x2};
pub use helpers::{
    bits_of, bits_of_f32, double_of, float_of, v_all_u64, v_any_u32, v_any_u32h, v_any_u64,
    v_call_f32, v_call_f64, v_call2_f32, v_call2_f64, v_f32, v_f64, v_fma, v_fms, v_lookup_f32,
    v_lookup_f64, v_lookup_u32, v_lookup_u64, v_s32, v_s64, v_u32, v_u64,
};
pub use types::{F32x4, F64x2, I32x4, I64x2, U32x2, U32x4, U64x2};
