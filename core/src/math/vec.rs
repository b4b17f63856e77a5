//! Two-dimensional vectors.
//!
//! [`Vec2`] has `f32` components and is used for geometry; [`Vec2i`] has
//! `i32` components and is used for pixel coordinates. Both are aliases of
//! the generic [`Vector`] type and share its operator impls.

use core::fmt::{self, Debug, Formatter};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use crate::math::approx::ApproxEq;

/// Trait for the component types of vectors.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl Scalar for f32 {}
impl Scalar for i32 {}

/// A generic vector type, parametrized by its representation.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Vector<Repr>(pub Repr);

/// A 2-vector with `f32` components.
pub type Vec2 = Vector<[f32; 2]>;

/// A 2-vector with `i32` components.
pub type Vec2i = Vector<[i32; 2]>;

/// Returns a 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector([x, y])
}

/// Returns an integer 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2i(x: i32, y: i32) -> Vec2i {
    Vector([x, y])
}

//
// Inherent impls
//

impl<Sc: Scalar> Vector<[Sc; 2]> {
    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> Sc {
        self.0[0] * other.0[0] + self.0[1] * other.0[1]
    }
    /// Returns the squared Euclidean length of `self`.
    #[inline]
    pub fn len_sqr(&self) -> Sc {
        self.dot(self)
    }
    /// Returns `self` rotated 90° counterclockwise, that is, `(-y, x)`.
    #[inline]
    pub fn perp(&self) -> Self {
        Self([-self.0[1], self.0[0]])
    }
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = vec2(0.0, 0.0);

    /// Returns the Euclidean length of `self`.
    #[cfg(feature = "fp")]
    #[inline]
    pub fn len(&self) -> f32 {
        use super::float::f32;
        f32::sqrt(self.len_sqr())
    }
    /// Returns the Euclidean distance between `self` and `other`.
    #[cfg(feature = "fp")]
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).len()
    }
    /// Returns `self` scaled to unit length.
    ///
    /// The result is non-finite if `self` is the zero vector.
    #[cfg(feature = "fp")]
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.len()
    }
    /// Returns `self` rounded to the nearest integer coordinates.
    ///
    /// Each component is rounded as `(c + 0.5) as i32`, that is, halfway
    /// cases round up and the result is truncated towards zero.
    #[inline]
    pub fn round(&self) -> Vec2i {
        let [x, y] = self.0;
        vec2i((x + 0.5) as i32, (y + 0.5) as i32)
    }
}

impl Vec2i {
    /// Returns `self` converted to floating point.
    #[inline]
    pub fn to_f32(&self) -> Vec2 {
        vec2(self.0[0] as f32, self.0[1] as f32)
    }
}

//
// Operator impls
//

impl<Sc: Scalar> AddAssign for Vector<[Sc; 2]> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0[0] = self.0[0] + rhs.0[0];
        self.0[1] = self.0[1] + rhs.0[1];
    }
}
impl<Sc: Scalar> SubAssign for Vector<[Sc; 2]> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0[0] = self.0[0] - rhs.0[0];
        self.0[1] = self.0[1] - rhs.0[1];
    }
}
impl<Sc: Scalar> MulAssign<Sc> for Vector<[Sc; 2]> {
    #[inline]
    fn mul_assign(&mut self, rhs: Sc) {
        self.0[0] = self.0[0] * rhs;
        self.0[1] = self.0[1] * rhs;
    }
}
impl<Sc: Scalar> DivAssign<Sc> for Vector<[Sc; 2]> {
    #[inline]
    fn div_assign(&mut self, rhs: Sc) {
        self.0[0] = self.0[0] / rhs;
        self.0[1] = self.0[1] / rhs;
    }
}

impl_op!(Add::add, Vector<[Sc; 2]>, Self, +=, [Sc: Scalar]);
impl_op!(Sub::sub, Vector<[Sc; 2]>, Self, -=, [Sc: Scalar]);
impl_op!(Mul::mul, Vector<[Sc; 2]>, Sc, *=, [Sc: Scalar]);
impl_op!(Div::div, Vector<[Sc; 2]>, Sc, /=, [Sc: Scalar]);

impl<Sc: Scalar> Neg for Vector<[Sc; 2]> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1]])
    }
}

/// Scalar multiplication from the left, `s * v`.
impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Mul<Vec2i> for i32 {
    type Output = Vec2i;
    #[inline]
    fn mul(self, rhs: Vec2i) -> Vec2i {
        rhs * self
    }
}

//
// Foreign trait impls
//

impl<Repr> From<Repr> for Vector<Repr> {
    #[inline]
    fn from(els: Repr) -> Self {
        Self(els)
    }
}

impl<Sc, const N: usize> Index<usize> for Vector<[Sc; N]> {
    type Output = Sc;
    #[inline]
    fn index(&self, i: usize) -> &Sc {
        &self.0[i]
    }
}

impl<Sc, const N: usize> IndexMut<usize> for Vector<[Sc; N]> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Sc {
        &mut self.0[i]
    }
}

impl<Sc: Debug, const N: usize> Debug for Vector<[Sc; N]> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{N}{:?}", self.0)
    }
}

impl ApproxEq for Vec2 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}
