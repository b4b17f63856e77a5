//! Approximate equality of floating-point quantities.
//!
//! Geometric computations accumulate rounding error: rotating a point a
//! quarter turn yields a component like `-4.371139e-8` instead of zero, and
//! inverting a matrix twice rarely gives back the exact original. The
//! [`ApproxEq`] trait compares such values with a tolerance instead.

/// Default tolerance of [`ApproxEq::approx_eq`].
///
/// Looser if the only floating-point backend is the approximate
/// `micromath` one.
pub const EPSILON: f32 =
    if cfg!(all(feature = "mm", not(any(feature = "std", feature = "libm")))) {
        1e-3
    } else {
        1e-6
    };

/// Trait for testing approximate equality.
///
/// Two scalars `a` and `b` are approximately equal if
/// `|a - b| <= eps * max(1, |a|, |b|)`: the tolerance is absolute near zero
/// and relative to the magnitude of the larger value otherwise. Compound
/// values are approximately equal if all their components are.
pub trait ApproxEq {
    /// Returns whether `self` and `other` are approximately equal within
    /// the tolerance `eps`.
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool;

    /// Returns whether `self` and `other` are approximately equal within
    /// the default tolerance [`EPSILON`].
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, EPSILON)
    }
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        use super::float::f32;
        let scale = f32::abs(*self).max(f32::abs(*other)).max(1.0);
        // NaN fails the comparison
        f32::abs(self - other) <= eps * scale
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.approx_eq_eps(b, eps))
    }
}

impl<T: ApproxEq> ApproxEq for Option<T> {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.approx_eq_eps(b, eps),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Asserts that two values are approximately equal, as determined by
/// their [`ApproxEq`] impl. Both operands must impl `Debug` unless a
/// custom message is given.
///
/// # Panics
/// If the values are not approximately equal.
///
/// # Examples
/// ```
/// use graphics2d_core::{assert_approx_eq, prelude::*};
///
/// let m = Mat2::from_rows(vec2(3.0, 1.0), vec2(7.0, 2.5));
/// let inv = m.inverse().unwrap();
/// assert_approx_eq!(inv.inverse(), Some(m));
/// ```
/// A tolerance other than the default can be given before the optional
/// message:
/// ```
/// # use graphics2d_core::assert_approx_eq;
/// assert_approx_eq!(100.0_f32, 100.9, eps = 0.01);
/// assert_approx_eq!(0.0_f32, 0.004, eps = 0.01, "too far from zero");
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        $crate::assert_approx_eq!($a, $b, eps = $crate::math::approx::EPSILON)
    };
    ($a:expr, $b:expr, eps = $eps:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "`{:?}` not approximately equal to `{:?}` (eps = {:e})",
                a, b, $eps
            ),
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {
        $crate::assert_approx_eq!(
            $a, $b, eps = $crate::math::approx::EPSILON, $fmt $(, $args)*
        )
    };
    ($a:expr, $b:expr, eps = $eps:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq as _;
        match (&$a, &$b) {
            (a, b) => assert!(a.approx_eq_eps(b, $eps), $fmt $(, $args)*),
        }
    }};
}
