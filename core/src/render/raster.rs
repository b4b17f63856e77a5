//! Translation of vector shapes into discrete pixels.
//!
//! The rasterizers in this module are purely integer-based and aliased:
//! each shape is turned into a sequence of pixel positions, which are
//! passed to a callback in drawing order. Vertex positions are rounded
//! to the nearest pixel with `(c + 0.5) as i32`, so pixel `(x, y)` covers
//! the area from `x - 0.5` to `x + 0.5` horizontally, and similarly for y.
//!
//! [`point`] and [`line`] pass positions to the callback regardless of any
//! image bounds; it is up to the caller to clip them. [`line_clipped`]
//! only visits the part of a line that lies within given bounds, so its
//! cost does not depend on how far the line extends outside them.

use crate::math::vec::{Vec2, Vec2i, vec2i};

/// Rasterizes a point as a five-pixel "plus" sign.
///
/// Invokes `plot_fn` for the center pixel and its left, right, upper, and
/// lower neighbors, in that order. Neighbors not representable as `i32`
/// coordinates are skipped.
pub fn point<F>(pos: Vec2, mut plot_fn: F)
where
    F: FnMut(Vec2i),
{
    let [cx, cy] = pos.round().0;
    let offsets = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];
    for (dx, dy) in offsets {
        if let (Some(x), Some(y)) = (cx.checked_add(dx), cy.checked_add(dy)) {
            plot_fn(vec2i(x, y));
        }
    }
}

/// Rasterizes a one-pixel-thick line between two points using Bresenham's
/// algorithm.
///
/// Invokes `plot_fn` for each pixel drawn, starting from the rounded first
/// endpoint. Exactly `max(|dx|, |dy|) + 1` pixels are plotted, where `dx`
/// and `dy` are the differences of the rounded endpoints.
pub fn line<F>(ends: [Vec2; 2], plot_fn: F)
where
    F: FnMut(Vec2i),
{
    bresenham(ends, None, plot_fn);
}

/// Rasterizes a line like [`line`], but only plots the pixels within the
/// rectangle from `(0, 0)` to `(width - 1, height - 1)`, inclusive.
///
/// The plotted pixels, and their order, are exactly those that [`line`]
/// would plot within the rectangle.
pub fn line_clipped<F>(ends: [Vec2; 2], (width, height): (u32, u32), mut plot_fn: F)
where
    F: FnMut(Vec2i),
{
    let inside = |c: i32, ext: u32| u32::try_from(c).is_ok_and(|c| c < ext);
    bresenham(ends, Some((width, height)), |p| {
        if inside(p.x(), width) && inside(p.y(), height) {
            plot_fn(p)
        }
    });
}

/// Runs Bresenham's algorithm in 64-bit arithmetic, so that any pair of
/// `i32` endpoints works. If `clip` is given, the steps that fall outside
/// it along the major axis are skipped without visiting them.
fn bresenham<F>([start, end]: [Vec2; 2], clip: Option<(u32, u32)>, mut plot_fn: F)
where
    F: FnMut(Vec2i),
{
    let [x0, y0] = start.round().0.map(i64::from);
    let [x1, y1] = end.round().0.map(i64::from);

    let (dx, dy) = ((x1 - x0).abs(), (y1 - y0).abs());
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    // More wide than tall steps along x, otherwise along y
    let x_major = dx > dy;
    let (maj0, min0, d_maj, d_min, s_maj, s_min) = if x_major {
        (x0, y0, dx, dy, sx, sy)
    } else {
        (y0, x0, dy, dx, sy, sx)
    };

    let (mut first, mut last) = (0, d_maj);
    if let Some((w, h)) = clip {
        let ext = i64::from(if x_major { w } else { h });
        // Steps i for which maj0 + s_maj * i is in 0..ext
        let (lo, hi) = if s_maj > 0 {
            (-maj0, ext - 1 - maj0)
        } else {
            (maj0 - ext + 1, maj0)
        };
        first = first.max(lo);
        last = last.min(hi);
    }
    if first > last {
        return;
    }

    // Minor steps taken before step `first`, and the error term at it
    let k = if first == 0 {
        0
    } else {
        let (i, d_maj, d_min) = (first as i128, d_maj as i128, d_min as i128);
        ceil_div(2 * d_min * i - d_maj, 2 * d_maj)
    };
    let e = 2 * d_min as i128 * (first as i128 + 1)
        - d_maj as i128
        - 2 * d_maj as i128 * k;
    // |e| <= 2 * max(d_maj, d_min), which fits in i64
    let mut e = e as i64;

    let mut maj = maj0 + s_maj * first;
    let mut min = min0 + s_min * k as i64;
    for _ in first..=last {
        let (x, y) = if x_major { (maj, min) } else { (min, maj) };
        // Both are between the rounded endpoints
        plot_fn(vec2i(x as i32, y as i32));
        maj += s_maj;
        if e <= 0 {
            e += 2 * d_min;
        } else {
            min += s_min;
            e += 2 * (d_min - d_maj);
        }
    }
}

/// Returns `a / b` rounded towards positive infinity. `b` must be positive.
fn ceil_div(a: i128, b: i128) -> i128 {
    -(-a).div_euclid(b)
}
