//! Floating-point abstraction so the cloth runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// The arithmetic the simulation needs from its scalar type.
///
/// Implemented for `f32` and `f64`. Square roots and absolute values go
/// through `libm` so the crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert a grid index or count.
    fn from_usize(v: usize) -> Self;
    /// True unless the value is NaN or infinite.
    fn is_finite(self) -> bool;

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f32 }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_usize(v: usize) -> Self { v as f64 }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_checks() {
        assert!(Float::is_finite(1.0f32));
        assert!(!Float::is_finite(f32::NAN));
        assert!(!Float::is_finite(f64::INFINITY));
    }

    #[test]
    fn large_indices_keep_f64_precision() {
        let index = (1usize << 24) + 1;
        assert_eq!(<f64 as Float>::from_usize(index), 16_777_217.0);
        assert_ne!(<f64 as Float>::from_f32(index as f32), 16_777_217.0);
    }

    #[test]
    fn near_zero_uses_magnitude() {
        assert!((-1e-12f64).is_near_zero(1e-10));
        assert!(!(-1e-3f64).is_near_zero(1e-10));
    }
}
