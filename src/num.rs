use core::f32::consts::PI as PI32;
use core::f64::consts::PI as PI64;

// Minimal float trait for generic filters (no_std, math via libm)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::fmt::Display
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    /// Narrow (or pass through) an `f64` constant.
    fn from_f64(x: f64) -> Self;
    /// Attempt to convert a `usize` into the floating-point type.
    /// Returns `None` if the value cannot be represented exactly.
    fn from_usize(x: usize) -> Option<Self>;
    fn cos(self) -> Self;
    fn log10(self) -> Self;
    fn is_finite(self) -> bool;
    fn pi() -> Self;
}

///
/// # Note
/// With `std` enabled, `f32::cos(self)` and `f32::log10(self)` resolve to the
/// standard library's inherent methods, not back into this trait, so the
/// `unconditional_recursion` lint is a false positive here. Without `std` the
/// same operations go through `libm`.
#[allow(unconditional_recursion)]
impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 24;
        if x < MAX_EXACT {
            Some(x as f32)
        } else {
            None
        }
    }
    #[inline(always)]
    fn cos(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::cos(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::cosf(self)
        }
    }
    #[inline(always)]
    fn log10(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::log10(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::log10f(self)
        }
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    fn pi() -> Self {
        PI32
    }
}

///
/// # Note
/// With `std` enabled, `f64::cos(self)` and `f64::log10(self)` resolve to the
/// standard library's inherent methods, not back into this trait, so the
/// `unconditional_recursion` lint is a false positive here. Without `std` the
/// same operations go through `libm`.
#[allow(unconditional_recursion)]
impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 53;
        if x < MAX_EXACT {
            Some(x as f64)
        } else {
            None
        }
    }
    #[inline(always)]
    fn cos(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::cos(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::cos(self)
        }
    }
    #[inline(always)]
    fn log10(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::log10(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::log10(self)
        }
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    fn pi() -> Self {
        PI64
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;

    #[test]
    fn from_usize_rejects_inexact() {
        assert_eq!(<f32 as Float>::from_usize(1 << 24), None);
        assert_eq!(<f32 as Float>::from_usize(8000), Some(8000.0));
        assert_eq!(<f64 as Float>::from_usize(1 << 53), None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_build_uses_inherent_math() {
        for x in [0.1f64, 0.785, 2.5, -3.0] {
            assert_eq!(Float::cos(x).to_bits(), f64::cos(x).to_bits());
            assert_eq!(Float::log10(x.abs()).to_bits(), f64::log10(x.abs()).to_bits());
        }
        assert_eq!(Float::cos(0.3f32).to_bits(), f32::cos(0.3).to_bits());
        assert_eq!(Float::log10(0.3f32).to_bits(), f32::log10(0.3).to_bits());
    }

    #[test]
    fn libm_tracks_inherent_math() {
        for x in [0.1f64, 0.785, 2.5, -3.0] {
            assert!((libm::cos(x) - Float::cos(x)).abs() < 1e-15);
            assert!((libm::log10(x.abs()) - Float::log10(x.abs())).abs() < 1e-15);
        }
    }

    #[test]
    fn reference_values() {
        assert!((Float::cos(0.0f64) - 1.0).abs() < 1e-15);
        assert!((Float::log10(1000.0f64) - 3.0).abs() < 1e-12);
        assert!((Float::log10(100.0f32) - 2.0).abs() < 1e-5);
    }
}
