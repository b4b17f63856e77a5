//! Analytic geometry of lines in the plane.

use crate::math::mat::{Apply, Mat2};
use crate::math::vec::Vec2;

/// A line through two points, or a line segment between them.
///
/// The analytic operations treat `self` as an infinite line; the points
/// only determine its position and direction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Line2 {
    pub start: Vec2,
    pub end: Vec2,
}

/// Returns a line from `start` to `end`.
#[inline]
pub const fn line2(start: Vec2, end: Vec2) -> Line2 {
    Line2 { start, end }
}

/// Smallest direction component or length considered non-degenerate.
const DEGENERATE_EPS: f32 = 1e-8;

impl Line2 {
    /// Returns the direction vector of `self`, `end - start`.
    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.end - self.start
    }

    /// Returns the distance between the points of `self`.
    #[cfg(feature = "fp")]
    #[inline]
    pub fn len(&self) -> f32 {
        self.dir().len()
    }

    /// Returns the slope `m` and y-intercept `b` of `self`, such that every
    /// point `(x, y)` on the line satisfies `y = m x + b`.
    ///
    /// Returns `None` if `self` is vertical, that is, the absolute x
    /// difference of its points is less than 1e-8.
    ///
    /// # Examples
    /// ```
    /// use graphics2d_core::prelude::*;
    ///
    /// let l = line2(vec2(0.0, 1.0), vec2(2.0, 5.0));
    /// assert_eq!(l.slope_intercept(), Some((2.0, 1.0)));
    ///
    /// let vert = line2(vec2(3.0, 1.0), vec2(3.0, 5.0));
    /// assert_eq!(vert.slope_intercept(), None);
    /// ```
    pub fn slope_intercept(&self) -> Option<(f32, f32)> {
        let [dx, dy] = self.dir().0;
        if (-DEGENERATE_EPS..DEGENERATE_EPS).contains(&dx) {
            return None;
        }
        let m = dy / dx;
        Some((m, self.start.y() - m * self.start.x()))
    }

    /// Returns the Hesse normal form of `self`: a unit normal `n` and a
    /// distance `d` from the origin such that every point `x` on the line
    /// satisfies `n · x = d`.
    ///
    /// The normal is the direction of `self` rotated a quarter turn and
    /// normalized, negated if needed so that `d ≥ 0`.
    ///
    /// Returns `None` if the points of `self` are closer than 1e-8.
    #[cfg(feature = "fp")]
    pub fn hesse_normal(&self) -> Option<(Vec2, f32)> {
        let dir = self.dir();
        let len = dir.len();
        if len < DEGENERATE_EPS {
            return None;
        }
        let n = dir.perp() / len;
        let d = n.dot(&self.start);
        Some(if d < 0.0 { (-n, -d) } else { (n, d) })
    }

    /// Returns the point where `self` and `other` intersect, or `None` if
    /// the lines are parallel.
    ///
    /// Both lines are treated as infinite, so the intersection point may
    /// lie outside either segment.
    pub fn intersect(&self, other: &Self) -> Option<Vec2> {
        let (d1, d2) = (self.dir(), other.dir());
        // Solve start1 + t0 d1 = start2 - t1 d2
        let inv = Mat2::from_cols(d1, d2).inverse()?;
        let t = inv.apply(&(other.start - self.start));
        Some(self.start + d1 * t.x())
    }
}
