//! Affine transforms of the plane.
//!
//! An [`Affine2`] maps a point `x` to `A x + b`, where `A` is a 2x2 linear
//! part and `b` a translation. Transforms compose like functions: the
//! composition `t1 * t2` first applies `t2`, then `t1`.

use core::ops::{Mul, MulAssign};

use crate::math::approx::ApproxEq;
use crate::math::mat::{Apply, Mat2};
use crate::math::vec::Vec2;

/// An affine map of the plane, `x ↦ linear * x + translation`.
///
/// The default value is the identity transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Affine2 {
    /// The linear part of the transform.
    pub linear: Mat2,
    /// The translation part of the transform.
    pub translation: Vec2,
}

/// Returns a transform that translates by `t`.
pub const fn translate(t: Vec2) -> Affine2 {
    Affine2::new(Mat2::identity(), t)
}

/// Returns a transform that scales by `s.x()` horizontally and by `s.y()`
/// vertically.
pub const fn scale(s: Vec2) -> Affine2 {
    let [sx, sy] = s.0;
    Affine2::new(Mat2::diag(sx, sy), Vec2::ZERO)
}

/// Returns a shearing transform with shear factors `s.x()` and `s.y()`.
///
/// The linear part of the result is `[[1, sx], [sy, 1]]`.
pub const fn shear(s: Vec2) -> Affine2 {
    let [sx, sy] = s.0;
    Affine2::new(Mat2::new(1.0, sx, sy, 1.0), Vec2::ZERO)
}

/// Returns a counterclockwise rotation about the origin by `theta` radians.
///
/// In a y-down coordinate system such as image space, the rotation appears
/// clockwise.
#[cfg(feature = "fp")]
pub fn rotate(theta: f32) -> Affine2 {
    use super::float::f32;
    let (sin, cos) = (f32::sin(theta), f32::cos(theta));
    Affine2::new(Mat2::new(cos, -sin, sin, cos), Vec2::ZERO)
}

impl Affine2 {
    /// Returns a transform with the given linear part and translation.
    pub const fn new(linear: Mat2, translation: Vec2) -> Self {
        Self { linear, translation }
    }

    /// Returns the identity transform.
    pub const fn identity() -> Self {
        translate(Vec2::ZERO)
    }

    /// Returns the composition of `self` and `other`, a transform that
    /// first applies `other`, then `self`.
    ///
    /// Composition is associative but not commutative.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            linear: self.linear * other.linear,
            translation: self.linear * other.translation + self.translation,
        }
    }

    /// Returns the composition of `self` and `next`, a transform that
    /// first applies `self`, then `next`.
    ///
    /// `a.then(&b)` is equivalent to `b.compose(&a)`.
    pub fn then(&self, next: &Self) -> Self {
        next.compose(self)
    }

    /// Returns `self` conjugated by a translation, so that the result acts
    /// about `pivot` rather than the origin.
    ///
    /// For example, `rotate(a).about(c)` rotates by `a` around the point `c`.
    pub fn about(&self, pivot: Vec2) -> Self {
        translate(pivot).compose(self).compose(&translate(-pivot))
    }

    /// Returns the inverse of `self`, or `None` if the linear part of `self`
    /// is singular.
    pub fn inverse(&self) -> Option<Self> {
        let linear = self.linear.inverse()?;
        Some(Self {
            linear,
            translation: -(linear * self.translation),
        })
    }

    /// Inverts `self` in place.
    ///
    /// Returns whether the inversion succeeded. If the linear part of `self`
    /// is singular, returns false and leaves `self` unchanged.
    #[must_use]
    pub fn invert(&mut self) -> bool {
        self.inverse().map(|inv| *self = inv).is_some()
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Apply<Vec2> for Affine2 {
    type Output = Vec2;

    fn apply(&self, v: &Vec2) -> Vec2 {
        self.linear * *v + self.translation
    }
}

impl Mul for Affine2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl MulAssign for Affine2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.compose(&rhs);
    }
}

impl Mul<Vec2> for Affine2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.apply(&rhs)
    }
}

impl ApproxEq for Affine2 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.linear.approx_eq_eps(&other.linear, eps)
            && self.translation.approx_eq_eps(&other.translation, eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::math::vec::vec2;

    #[test]
    fn identity_is_default_and_neutral() {
        let t = translate(vec2(1.0, 2.0)) * scale(vec2(2.0, 3.0));
        assert_eq!(Affine2::default(), Affine2::identity());
        assert_eq!(t * Affine2::identity(), t);
        assert_eq!(Affine2::identity() * t, t);
        assert_eq!(Affine2::identity().apply(&vec2(3.0, -4.0)), vec2(3.0, -4.0));
    }

    #[test]
    fn translation() {
        let t = translate(vec2(3.0, -1.0));
        assert_eq!(t.apply(&vec2(1.0, 1.0)), vec2(4.0, 0.0));
        assert_eq!(t.linear, Mat2::identity());
    }

    #[test]
    fn scaling() {
        let t = scale(vec2(2.0, -0.5));
        assert_eq!(t.apply(&vec2(3.0, 4.0)), vec2(6.0, -2.0));
        assert_eq!(t.translation, Vec2::ZERO);
    }

    #[test]
    fn shearing() {
        let t = shear(vec2(1.0, 0.0));
        assert_eq!(t.apply(&vec2(1.0, 2.0)), vec2(3.0, 2.0));
        assert_eq!(t.linear, Mat2::new(1.0, 1.0, 0.0, 1.0));
    }

    #[cfg(feature = "fp")]
    #[test]
    fn rotation() {
        use core::f32::consts::{FRAC_PI_2, PI};
        let v = rotate(FRAC_PI_2).apply(&vec2(1.0, 0.0));
        assert_approx_eq!(v, vec2(0.0, 1.0));
        let v = rotate(PI).apply(&vec2(1.0, 2.0));
        assert_approx_eq!(v, vec2(-1.0, -2.0));
    }

    #[test]
    fn composition_applies_right_operand_first() {
        let t1 = translate(vec2(1.0, 0.0));
        let t2 = scale(vec2(2.0, 2.0));
        let x = vec2(1.0, 1.0);

        assert_eq!((t1 * t2).apply(&x), t1.apply(&t2.apply(&x)));
        assert_eq!((t1 * t2).apply(&x), vec2(3.0, 2.0));
        assert_eq!((t2 * t1).apply(&x), vec2(4.0, 2.0));
        assert_eq!(t2.then(&t1), t1.compose(&t2));
    }

    #[test]
    fn composition_is_associative() {
        let t1 = translate(vec2(1.0, -2.0));
        let t2 = shear(vec2(0.5, 0.25));
        let t3 = scale(vec2(2.0, 4.0));
        assert_approx_eq!((t1 * t2) * t3, t1 * (t2 * t3));
    }

    #[test]
    fn compose_assign() {
        let mut t = translate(vec2(1.0, 0.0));
        t *= scale(vec2(2.0, 2.0));
        assert_eq!(t, translate(vec2(1.0, 0.0)) * scale(vec2(2.0, 2.0)));
    }

    #[test]
    fn inverse_undoes_transform() {
        let t = translate(vec2(5.0, -3.0)) * shear(vec2(0.5, 0.0));
        let inv = t.inverse().unwrap();
        let x = vec2(2.0, 7.0);
        assert_approx_eq!(inv.apply(&t.apply(&x)), x);
        assert_approx_eq!(t * inv, Affine2::identity());
    }

    #[test]
    fn invert_singular_leaves_unchanged() {
        let mut t = scale(vec2(0.0, 1.0)) * translate(vec2(1.0, 1.0));
        let orig = t;
        assert!(t.inverse().is_none());
        assert!(!t.invert());
        assert_eq!(t, orig);

        let mut t = translate(vec2(1.0, 1.0));
        assert!(t.invert());
        assert_eq!(t, translate(vec2(-1.0, -1.0)));
    }

    #[test]
    fn about_pivot_fixes_pivot() {
        let c = vec2(10.0, 20.0);
        let t = scale(vec2(2.0, 3.0)).about(c);
        assert_eq!(t.apply(&c), c);
        assert_eq!(t.apply(&vec2(11.0, 21.0)), vec2(12.0, 23.0));
    }

    #[cfg(feature = "fp")]
    #[test]
    fn rotation_about_pivot() {
        use core::f32::consts::FRAC_PI_2;
        let t = rotate(FRAC_PI_2).about(vec2(1.0, 1.0));
        assert_approx_eq!(t.apply(&vec2(2.0, 1.0)), vec2(1.0, 2.0));
    }
}
