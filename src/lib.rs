#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::{fastlibm, vector};
pub use maths::vector::{F32x4, F64x2, I32x4, I64x2, U32x2, U32x4, U64x2, cos as vcos};
