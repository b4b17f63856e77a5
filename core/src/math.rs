//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][self::vec], [matrices][mat], [affine transforms]
//! [transform] and [colors][color], as well as utilities such as
//! [approximate equality][approx] comparisons and a
//! [floating-point compatibility layer][float] for `no_std` targets.

pub use {
    approx::ApproxEq,
    color::{Color3, gray, rgb},
    mat::{Apply, Mat2},
    transform::{Affine2, scale, shear, translate},
    vec::{Vec2, Vec2i, vec2, vec2i},
};
#[cfg(feature = "fp")]
pub use transform::rotate;

/// Implements a binary operator trait in terms of an op-assign trait.
macro_rules! impl_op {
    ($trait:ident :: $method:ident, $self:ty, $rhs:ty, $op:tt) => {
        impl_op!($trait::$method, $self, $rhs, $op, []);
    };
    ($trait:ident :: $method:ident, $self:ty, $rhs:ty, $op:tt, [$($gen:tt)*]) => {
        impl<$($gen)*> $trait<$rhs> for $self {
            type Output = Self;
            #[inline]
            fn $method(mut self, rhs: $rhs) -> Self {
                self $op rhs; self
            }
        }
    };
}

pub mod approx;
pub mod color;
pub mod float;
pub mod mat;
pub mod transform;
pub mod vec;
