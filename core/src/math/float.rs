//! Floating-point functions for `no_std` builds.
//!
//! `core` has no `sqrt`, `sin`, or `cos` for `f32`. With the `std` feature
//! the inherent methods are used; otherwise they come from `libm` or, failing
//! that, `micromath`. Without any of these features, which also disables
//! `fp`, only [`abs`][bits::abs] is available.
//!
//! Callers import the [`f32`] alias inside a function body and write
//! `f32::sqrt(x)`, which then resolves to whichever backend is enabled.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::{cosf as cos, fabsf as abs, sinf as sin, sqrtf as sqrt};
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext;

    #[inline]
    pub fn abs(x: f32) -> f32 {
        F32Ext::abs(x)
    }
    /// Returns the square root of `x`, refining the `micromath` estimate
    /// with one Newton step.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        let y = F32Ext::sqrt(x);
        if y > 0.0 { 0.5 * (y + x / y) } else { y }
    }
    #[inline]
    pub fn sin(x: f32) -> f32 {
        F32Ext::sin(x)
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        F32Ext::cos(x)
    }
}

/// Functions implemented directly on the bit representation.
pub mod bits {
    /// Returns the absolute value of `x` by clearing its sign bit.
    #[inline]
    pub fn abs(x: f32) -> f32 {
        f32::from_bits(x.to_bits() & !(1 << 31))
    }
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(not(feature = "fp"))]
pub use bits as f32;
