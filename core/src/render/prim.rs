//! Colored 2D primitives: points, lines, and polygons.

use alloc::vec::Vec;
use core::slice;

use crate::geom::{Line2, line2};
use crate::math::color::Color3;
use crate::math::mat::Apply;
use crate::math::transform::Affine2;
use crate::math::vec::{Vec2, Vec2i, vec2};

use super::raster;
use super::target::Target;

/// A colored shape that can be transformed and drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    /// The color the shape is drawn with.
    pub color: Color3,
    /// The geometry of the primitive.
    pub shape: Shape,
}

/// The geometry of a primitive, as a fixed number of vertices.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A single point, drawn as a small plus sign.
    Point(Vec2),
    /// A line segment between two points.
    Line([Vec2; 2]),
    /// A closed polygon outline with three or more vertices.
    Polygon(Vec<Vec2>),
}

impl Primitive {
    /// Returns a point primitive at `pos`.
    pub fn point(color: Color3, pos: Vec2) -> Self {
        Self { color, shape: Shape::Point(pos) }
    }

    /// Returns a line primitive from `start` to `end`.
    pub fn line(color: Color3, start: Vec2, end: Vec2) -> Self {
        Self { color, shape: Shape::Line([start, end]) }
    }

    /// Returns a polygon primitive with the given vertices.
    ///
    /// # Panics
    /// If there are fewer than three vertices.
    pub fn polygon(color: Color3, verts: impl Into<Vec<Vec2>>) -> Self {
        let verts = verts.into();
        assert!(
            verts.len() >= 3,
            "a polygon needs at least 3 vertices, got {}",
            verts.len()
        );
        Self { color, shape: Shape::Polygon(verts) }
    }

    /// Returns an axis-aligned rectangle primitive with the given opposite
    /// corners.
    ///
    /// The result is a four-vertex polygon with vertices `top_left`,
    /// `(bottom_right.x, top_left.y)`, `bottom_right`, and
    /// `(top_left.x, bottom_right.y)`, in that order.
    pub fn rect(color: Color3, top_left: Vec2, bottom_right: Vec2) -> Self {
        let ([l, t], [r, b]) = (top_left.0, bottom_right.0);
        Self::polygon(color, [top_left, vec2(r, t), bottom_right, vec2(l, b)])
    }

    /// Returns the vertices of `self`.
    pub fn vertices(&self) -> &[Vec2] {
        match &self.shape {
            Shape::Point(p) => slice::from_ref(p),
            Shape::Line(ps) => ps,
            Shape::Polygon(ps) => ps,
        }
    }

    /// Returns the vertices of `self` mutably.
    ///
    /// The number of vertices of a primitive cannot change.
    pub fn vertices_mut(&mut self) -> &mut [Vec2] {
        match &mut self.shape {
            Shape::Point(p) => slice::from_mut(p),
            Shape::Line(ps) => ps,
            Shape::Polygon(ps) => ps,
        }
    }

    /// Returns the number of vertices of `self`.
    pub fn num_vertices(&self) -> usize {
        self.vertices().len()
    }

    /// Returns the vertex of `self` with index `n`.
    ///
    /// # Panics
    /// If `n >= self.num_vertices()`.
    pub fn vertex(&self, n: usize) -> Vec2 {
        self.vertices()[n]
    }

    /// Replaces the vertex of `self` with index `n` by `v`.
    ///
    /// # Panics
    /// If `n >= self.num_vertices()`.
    pub fn set_vertex(&mut self, n: usize, v: Vec2) {
        self.vertices_mut()[n] = v;
    }

    /// Returns an iterator over the line segments drawn for `self`.
    ///
    /// A point has no edges, a line has one, and a polygon with `n`
    /// vertices has `n`, the last one connecting the last vertex back to
    /// the first.
    pub fn edges(&self) -> impl Iterator<Item = Line2> + '_ {
        let vs = self.vertices();
        let n = match &self.shape {
            Shape::Point(_) => 0,
            Shape::Line(_) => 1,
            Shape::Polygon(ps) => ps.len(),
        };
        (0..n).map(move |i| line2(vs[i], vs[(i + 1) % vs.len()]))
    }

    /// Maps every vertex of `self` through `tf` in place.
    ///
    /// The color is unaffected.
    pub fn apply_transform(&mut self, tf: &Affine2) {
        for v in self.vertices_mut() {
            *v = tf.apply(v);
        }
    }

    /// Draws `self` into `target`.
    pub fn draw(&self, target: &mut impl Target) {
        let color = self.color;
        let bounds = target.bounds();
        let mut plot = |p: Vec2i| target.plot(p.x(), p.y(), color);
        match &self.shape {
            Shape::Point(p) => raster::point(*p, &mut plot),
            _ => self.edges().for_each(|e| {
                let ends = [e.start, e.end];
                match bounds {
                    Some(b) => raster::line_clipped(ends, b, &mut plot),
                    None => raster::line(ends, &mut plot),
                }
            }),
        }
    }
}
