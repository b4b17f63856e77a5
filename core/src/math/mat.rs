//! 2x2 matrices and linear maps.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::approx::ApproxEq;
use crate::math::vec::{Vec2, vec2};

/// A generic matrix type, parametrized by its representation.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Matrix<Repr>(pub Repr);

/// A 2x2 matrix of `f32` elements, stored in row-major order.
///
/// A matrix maps vectors by left multiplication, `M * v`.
pub type Mat2 = Matrix<[[f32; 2]; 2]>;

/// Trait for mapping values through a linear or affine map.
pub trait Apply<T> {
    /// The result type of the mapping.
    type Output;

    /// Maps `t` through `self`.
    fn apply(&self, t: &T) -> Self::Output;
}

/// Smallest absolute determinant for which a matrix is considered invertible.
const SINGULAR_EPS: f32 = 1e-12;

impl Mat2 {
    /// Returns a matrix with the given elements, given row by row.
    #[inline]
    pub const fn new(m11: f32, m12: f32, m21: f32, m22: f32) -> Self {
        Self([[m11, m12], [m21, m22]])
    }

    /// Returns the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::diag(1.0, 1.0)
    }

    /// Returns the zero matrix.
    #[inline]
    pub const fn zero() -> Self {
        Self::diag(0.0, 0.0)
    }

    /// Returns a diagonal matrix with `a` and `b` on the diagonal.
    #[inline]
    pub const fn diag(a: f32, b: f32) -> Self {
        Self::new(a, 0.0, 0.0, b)
    }

    /// Returns a matrix with `r1` and `r2` as its rows.
    #[inline]
    pub const fn from_rows(r1: Vec2, r2: Vec2) -> Self {
        Self([r1.0, r2.0])
    }

    /// Returns a matrix with `c1` and `c2` as its columns.
    #[inline]
    pub const fn from_cols(c1: Vec2, c2: Vec2) -> Self {
        let ([a, c], [b, d]) = (c1.0, c2.0);
        Self::new(a, b, c, d)
    }

    /// Returns the outer product of `u` and `v`, that is, `u vᵀ`.
    #[inline]
    pub fn outer(u: Vec2, v: Vec2) -> Self {
        Self::from_rows(v * u.x(), v * u.y())
    }

    /// Returns the row vector of `self` with index `i`.
    ///
    /// # Panics
    /// If `i > 1`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec2 {
        self.0[i].into()
    }

    /// Returns the column vector of `self` with index `i`.
    ///
    /// # Panics
    /// If `i > 1`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec2 {
        vec2(self.0[0][i], self.0[1][i])
    }

    /// Replaces the row of `self` with index `i` by `r`.
    #[inline]
    pub fn set_row(&mut self, i: usize, r: Vec2) {
        self.0[i] = r.0;
    }

    /// Replaces the column of `self` with index `i` by `c`.
    #[inline]
    pub fn set_col(&mut self, i: usize, c: Vec2) {
        self.0[0][i] = c.x();
        self.0[1][i] = c.y();
    }

    /// Returns the transpose of `self`.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1))
    }

    /// Returns the sum of the diagonal elements of `self`.
    #[inline]
    pub fn trace(&self) -> f32 {
        self.0[0][0] + self.0[1][1]
    }

    /// Returns the determinant of `self`.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }

    /// Returns the Frobenius norm of `self`, the square root of the sum of
    /// the squares of its elements.
    #[cfg(feature = "fp")]
    pub fn norm(&self) -> f32 {
        use super::float::f32;
        let [[a, b], [c, d]] = self.0;
        f32::sqrt(a * a + b * b + c * c + d * d)
    }

    /// Returns the inverse of `self`, or `None` if `self` is singular.
    ///
    /// A matrix is considered singular if the absolute value of its
    /// determinant is less than 1e-12.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if (-SINGULAR_EPS..SINGULAR_EPS).contains(&det) {
            return None;
        }
        let [[a, b], [c, d]] = self.0;
        Some(Self::new(d, -b, -c, a) / det)
    }

    /// Inverts `self` in place.
    ///
    /// Returns whether the inversion succeeded. If `self` is singular,
    /// returns false and leaves `self` unchanged.
    #[must_use]
    pub fn invert(&mut self) -> bool {
        self.inverse().map(|inv| *self = inv).is_some()
    }
}

impl Apply<Vec2> for Mat2 {
    type Output = Vec2;

    fn apply(&self, v: &Vec2) -> Vec2 {
        vec2(self.row(0).dot(v), self.row(1).dot(v))
    }
}

//
// Operator impls
//

impl AddAssign for Mat2 {
    fn add_assign(&mut self, rhs: Self) {
        for (r, s) in self.0.iter_mut().zip(rhs.0) {
            r[0] += s[0];
            r[1] += s[1];
        }
    }
}
impl SubAssign for Mat2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}
impl MulAssign<f32> for Mat2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.0.iter_mut().flatten().for_each(|e| *e *= rhs);
    }
}
impl DivAssign<f32> for Mat2 {
    fn div_assign(&mut self, rhs: f32) {
        self.0.iter_mut().flatten().for_each(|e| *e /= rhs);
    }
}
impl MulAssign for Mat2 {
    fn mul_assign(&mut self, rhs: Self) {
        let c = [rhs.col(0), rhs.col(1)];
        for r in &mut self.0 {
            let row: Vec2 = (*r).into();
            *r = [row.dot(&c[0]), row.dot(&c[1])];
        }
    }
}

impl_op!(Add::add, Mat2, Mat2, +=);
impl_op!(Sub::sub, Mat2, Mat2, -=);
impl_op!(Mul::mul, Mat2, f32, *=);
impl_op!(Div::div, Mat2, f32, /=);
impl_op!(Mul::mul, Mat2, Mat2, *=);

impl Neg for Mat2 {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.apply(&rhs)
    }
}

impl Mul<Mat2> for f32 {
    type Output = Mat2;
    fn mul(self, rhs: Mat2) -> Mat2 {
        rhs * self
    }
}

//
// Foreign trait impls
//

impl<S: Debug, const N: usize> Debug for Matrix<[[S; N]; N]> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix[")?;
        for row in &self.0 {
            writeln!(f, "    {row:6.2?}")?;
        }
        write!(f, "]")
    }
}

impl<const N: usize, S> From<[[S; N]; N]> for Matrix<[[S; N]; N]> {
    fn from(els: [[S; N]; N]) -> Self {
        Self(els)
    }
}

impl ApproxEq for Mat2 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    const M: Mat2 = Mat2::new(1.0, 2.0, 3.0, 4.0);

    #[test]
    fn matrix_debug() {
        let expected = r#"Matrix[
    [  1.00,   2.00]
    [  3.00,   4.00]
]"#;
        assert_eq!(alloc::format!("{M:?}"), expected);
    }

    #[test]
    fn builders() {
        assert_eq!(Mat2::identity(), Mat2::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Mat2::zero(), Mat2::default());
        assert_eq!(Mat2::from_rows(vec2(1.0, 2.0), vec2(3.0, 4.0)), M);
        assert_eq!(Mat2::from_cols(vec2(1.0, 3.0), vec2(2.0, 4.0)), M);
        assert_eq!(
            Mat2::outer(vec2(1.0, 2.0), vec2(3.0, 4.0)),
            Mat2::new(3.0, 4.0, 6.0, 8.0)
        );
    }

    #[test]
    fn rows_and_cols() {
        assert_eq!(M.row(1), vec2(3.0, 4.0));
        assert_eq!(M.col(1), vec2(2.0, 4.0));

        let mut m = M;
        m.set_row(0, vec2(-1.0, -2.0));
        m.set_col(1, vec2(5.0, 6.0));
        assert_eq!(m, Mat2::new(-1.0, 5.0, 3.0, 6.0));
    }

    #[test]
    fn transpose_trace_determinant() {
        assert_eq!(M.transpose(), Mat2::new(1.0, 3.0, 2.0, 4.0));
        assert_eq!(M.trace(), 5.0);
        assert_eq!(M.determinant(), -2.0);
        assert_eq!(Mat2::identity().determinant(), 1.0);
    }

    #[cfg(feature = "fp")]
    #[test]
    fn frobenius_norm() {
        assert_approx_eq!(M.norm(), 5.477226);
        assert_eq!(Mat2::zero().norm(), 0.0);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(M + M, M * 2.0);
        assert_eq!(M - M, Mat2::zero());
        assert_eq!(-M, Mat2::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(2.0 * M, M * 2.0);
        assert_eq!(M / 2.0, Mat2::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn matrix_product() {
        let n = Mat2::new(0.0, 1.0, 1.0, 0.0);
        assert_eq!(M * n, Mat2::new(2.0, 1.0, 4.0, 3.0));
        assert_eq!(n * M, Mat2::new(3.0, 4.0, 1.0, 2.0));
        assert_eq!(M * Mat2::identity(), M);
    }

    #[test]
    fn matrix_vector_product() {
        assert_eq!(M * vec2(1.0, -1.0), vec2(-1.0, -1.0));
        assert_eq!(M.apply(&vec2(0.0, 1.0)), M.col(1));
    }

    #[test]
    fn inverse_of_invertible() {
        let inv = M.inverse().unwrap();
        assert_approx_eq!(inv, Mat2::new(-2.0, 1.0, 1.5, -0.5));
        assert_approx_eq!(M * inv, Mat2::identity());
        assert_approx_eq!(inv * M, Mat2::identity());
    }

    #[test]
    fn inverse_of_singular() {
        let s = Mat2::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(s.inverse(), None);
        assert_eq!(Mat2::zero().inverse(), None);
    }

    #[test]
    fn invert_in_place() {
        let mut m = Mat2::diag(2.0, 4.0);
        assert!(m.invert());
        assert_eq!(m, Mat2::diag(0.5, 0.25));

        let mut s = Mat2::new(1.0, 2.0, 2.0, 4.0);
        assert!(!s.invert());
        assert_eq!(s, Mat2::new(1.0, 2.0, 2.0, 4.0));
    }
}
