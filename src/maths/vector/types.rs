//! Fixed-width lane vectors.
//!
//! Plain arrays with elementwise operators. Arithmetic is written as per-lane
//! loops the compiler vectorizes; only the fused multiply-add goes through
//! explicit intrinsics (see `maths::arch`). Comparisons produce integer masks
//! whose lanes are all-ones (true) or zero (false).

use core::ops::{Add, BitAnd, BitOr, BitXor, Index, IndexMut, Mul, Neg, Not, Shl, Shr, Sub};

use crate::maths::arch;

macro_rules! lane_vector {
    ($(#[$meta:meta])* $name:ident, $elem:ty, $lanes:literal, $align:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        #[repr(C, align($align))]
        pub struct $name(pub [$elem; $lanes]);

        impl $name {
            pub const LANES: usize = $lanes;

            /// Broadcast `v` into every lane.
            #[inline(always)]
            pub const fn splat(v: $elem) -> Self {
                Self([v; $lanes])
            }

            #[inline(always)]
            pub const fn from_array(a: [$elem; $lanes]) -> Self {
                Self(a)
            }

            #[inline(always)]
            pub const fn to_array(self) -> [$elem; $lanes] {
                self.0
            }

            #[inline(always)]
            fn map(self, f: impl Fn($elem) -> $elem) -> Self {
                Self(core::array::from_fn(|i| f(self.0[i])))
            }

            #[inline(always)]
            fn zip(self, rhs: Self, f: impl Fn($elem, $elem) -> $elem) -> Self {
                Self(core::array::from_fn(|i| f(self.0[i], rhs.0[i])))
            }
        }

        impl From<[$elem; $lanes]> for $name {
            #[inline(always)]
            fn from(a: [$elem; $lanes]) -> Self {
                Self(a)
            }
        }

        impl From<$name> for [$elem; $lanes] {
            #[inline(always)]
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl Index<usize> for $name {
            type Output = $elem;
            #[inline(always)]
            fn index(&self, i: usize) -> &$elem {
                &self.0[i]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline(always)]
            fn index_mut(&mut self, i: usize) -> &mut $elem {
                &mut self.0[i]
            }
        }
    };
}

// Comparison producing a mask vector. `$mask` must have the same lane count.
macro_rules! lane_compare {
    ($name:ident, $mask:ident, $melem:ty) => {
        impl $name {
            #[inline(always)]
            fn mask_from(f: impl Fn(usize) -> bool) -> $mask {
                $mask(core::array::from_fn(|i| if f(i) { <$melem>::MAX } else { 0 }))
            }

            #[inline(always)]
            pub fn simd_eq(self, rhs: Self) -> $mask {
                Self::mask_from(|i| self.0[i] == rhs.0[i])
            }

            #[inline(always)]
            pub fn simd_ne(self, rhs: Self) -> $mask {
                Self::mask_from(|i| self.0[i] != rhs.0[i])
            }

            #[inline(always)]
            pub fn simd_lt(self, rhs: Self) -> $mask {
                Self::mask_from(|i| self.0[i] < rhs.0[i])
            }

            #[inline(always)]
            pub fn simd_le(self, rhs: Self) -> $mask {
                Self::mask_from(|i| self.0[i] <= rhs.0[i])
            }

            #[inline(always)]
            pub fn simd_gt(self, rhs: Self) -> $mask {
                Self::mask_from(|i| self.0[i] > rhs.0[i])
            }

            #[inline(always)]
            pub fn simd_ge(self, rhs: Self) -> $mask {
                Self::mask_from(|i| self.0[i] >= rhs.0[i])
            }
        }
    };
}

macro_rules! float_ops {
    ($name:ident, $elem:ty, $bits:ident, $sign:expr, $fma:path) => {
        impl $name {
            /// Bit-identical view as unsigned integer lanes.
            #[inline(always)]
            pub fn to_bits(self) -> $bits {
                $bits(core::array::from_fn(|i| self.0[i].to_bits()))
            }

            /// Clear the sign bit of every lane.
            #[inline(always)]
            pub fn abs(self) -> Self {
                (self.to_bits() & $bits::splat(!$sign)).to_float()
            }

            /// `self * a + b` per lane with a single rounding.
            #[inline(always)]
            pub fn mul_add(self, a: Self, b: Self) -> Self {
                Self($fma(self.0, a.0, b.0))
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a + b)
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a - b)
            }
        }

        impl Mul for $name {
            type Output = Self;
            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a * b)
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline(always)]
            fn neg(self) -> Self {
                self.map(|a| -a)
            }
        }
    };
}

macro_rules! int_ops {
    ($name:ident) => {
        impl BitAnd for $name {
            type Output = Self;
            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a & b)
            }
        }

        impl BitOr for $name {
            type Output = Self;
            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a | b)
            }
        }

        impl BitXor for $name {
            type Output = Self;
            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a ^ b)
            }
        }

        impl Not for $name {
            type Output = Self;
            #[inline(always)]
            fn not(self) -> Self {
                self.map(|a| !a)
            }
        }

        impl Shl<u32> for $name {
            type Output = Self;
            #[inline(always)]
            fn shl(self, n: u32) -> Self {
                self.map(|a| a << n)
            }
        }

        impl Shr<u32> for $name {
            type Output = Self;
            #[inline(always)]
            fn shr(self, n: u32) -> Self {
                self.map(|a| a >> n)
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a.wrapping_add(b))
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a.wrapping_sub(b))
            }
        }
    };
}

lane_vector!(
    /// Two f64 lanes.
    F64x2, f64, 2, 16
);
lane_vector!(
    /// Two u64 lanes; also the mask type of 64-bit comparisons.
    U64x2, u64, 2, 16
);
lane_vector!(
    /// Two i64 lanes.
    I64x2, i64, 2, 16
);
lane_vector!(
    /// Four f32 lanes.
    F32x4, f32, 4, 16
);
lane_vector!(
    /// Four u32 lanes; also the mask type of 32-bit comparisons.
    U32x4, u32, 4, 16
);
lane_vector!(
    /// Four i32 lanes.
    I32x4, i32, 4, 16
);
lane_vector!(
    /// Two u32 lanes, the low half of a `U32x4`.
    U32x2, u32, 2, 8
);

float_ops!(F64x2, f64, U64x2, 1u64 << 63, arch::fma_f64x2);
float_ops!(F32x4, f32, U32x4, 1u32 << 31, arch::fma_f32x4);

macro_rules! reinterpret {
    ($bits:ident, $float:ident, $felem:ty, $signed:ident, $selem:ty, $uelem:ty) => {
        impl $bits {
            /// Bit-identical view as floating-point lanes.
            #[inline(always)]
            pub fn to_float(self) -> $float {
                $float(core::array::from_fn(|i| <$felem>::from_bits(self.0[i])))
            }

            #[inline(always)]
            pub fn to_signed(self) -> $signed {
                $signed(core::array::from_fn(|i| self.0[i] as $selem))
            }

            /// Bitwise select: lanes of `if_true` where `self` is set, else
            /// lanes of `if_false`. `self` must be a mask.
            #[inline(always)]
            pub fn select(self, if_true: $float, if_false: $float) -> $float {
                ((if_true.to_bits() & self) | (if_false.to_bits() & !self)).to_float()
            }
        }

        impl $signed {
            #[inline(always)]
            pub fn to_unsigned(self) -> $bits {
                $bits(core::array::from_fn(|i| self.0[i] as $uelem))
            }
        }
    };
}

reinterpret!(U64x2, F64x2, f64, I64x2, i64, u64);
reinterpret!(U32x4, F32x4, f32, I32x4, i32, u32);

impl U32x4 {
    /// Lanes 0 and 1.
    #[inline(always)]
    pub fn low_half(self) -> U32x2 {
        U32x2([self.0[0], self.0[1]])
    }
}

int_ops!(U64x2);
int_ops!(I64x2);
int_ops!(U32x4);
int_ops!(I32x4);
int_ops!(U32x2);

lane_compare!(F64x2, U64x2, u64);
lane_compare!(U64x2, U64x2, u64);
lane_compare!(I64x2, U64x2, u64);
lane_compare!(F32x4, U32x4, u32);
lane_compare!(U32x4, U32x4, u32);
lane_compare!(I32x4, U32x4, u32);
lane_compare!(U32x2, U32x2, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_views_round_trip_exactly() {
        let x = F64x2([-0.0, f64::from_bits(0x7ff8_0000_dead_beef)]);
        let bits = x.to_bits();
        assert_eq!(bits.0, [1u64 << 63, 0x7ff8_0000_dead_beef]);
        assert_eq!(bits.to_float().to_bits(), bits);
    }

    #[test]
    fn abs_clears_only_the_sign() {
        let x = F64x2([-2.5, f64::NEG_INFINITY]);
        assert_eq!(x.abs(), F64x2([2.5, f64::INFINITY]));
        let n = F64x2([-f64::NAN, 1.0]).abs();
        assert_eq!(n[0].to_bits(), f64::NAN.to_bits() & !(1u64 << 63));
        let y = F32x4([-1.0, 2.0, -0.0, -3.5]).abs();
        assert_eq!(y, F32x4([1.0, 2.0, 0.0, 3.5]));
        assert_eq!(y[2].to_bits(), 0);
    }

    #[test]
    fn compares_produce_full_masks() {
        let a = F64x2([1.0, f64::NAN]);
        let b = F64x2::splat(1.0);
        assert_eq!(a.simd_ge(b).0, [u64::MAX, 0]);
        assert_eq!(a.simd_ne(b).0, [0, u64::MAX]);
        let u = U64x2([3, u64::MAX]);
        assert_eq!(u.simd_ge(U64x2::splat(4)).0, [0, u64::MAX]);
        let i = I32x4([-1, 0, 1, 2]);
        assert_eq!(i.simd_lt(I32x4::splat(1)).0, [u32::MAX, u32::MAX, 0, 0]);
    }

    #[test]
    fn select_is_bitwise() {
        let m = U64x2([u64::MAX, 0]);
        let r = m.select(F64x2::splat(1.0), F64x2([7.0, -0.0]));
        assert_eq!(r[0], 1.0);
        assert_eq!(r[1].to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn mul_add_rounds_once() {
        let a = 1.0 + f64::from_bits(0x3e10_0000_0000_0000);
        let c = -(1.0 + f64::from_bits(0x3e20_0000_0000_0000));
        let r = F64x2::splat(a).mul_add(F64x2::splat(a), F64x2([c, 0.0]));
        assert_eq!(r[0], f64::from_bits(0x3c30_0000_0000_0000));
        assert_eq!(r[1], a * a);
    }

    #[test]
    fn integer_ops_wrap_and_shift() {
        let u = U64x2([u64::MAX, 5]) + U64x2::splat(1);
        assert_eq!(u.0, [0, 6]);
        assert_eq!((U64x2([1, 2]) << 63).0, [1u64 << 63, 0]);
        assert_eq!((U32x4::splat(0x8000_0000) >> 31).0, [1; 4]);
        assert_eq!(I64x2([-1, 1]).to_unsigned().to_signed(), I64x2([-1, 1]));
        assert_eq!(U32x4([1, 2, 3, 4]).low_half(), U32x2([1, 2]));
    }
}
