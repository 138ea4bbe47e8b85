//! Math modules.
//!
//! `vector` holds the lane-wise kernels and their primitives, `fastlibm` the
//! scalar functions they fall back to, and `arch` the per-target fused
//! multiply-add both layers share.

pub(crate) mod arch;
pub mod fastlibm;
pub mod vector;
