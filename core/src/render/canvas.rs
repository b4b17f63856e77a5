//! A drawing canvas: an ordered collection of primitives and the image they
//! are drawn into.

use alloc::vec::Vec;

use crate::math::color::Color3;
use crate::math::transform::{Affine2, scale, translate};
use crate::math::vec::{Vec2, vec2};
use crate::util::image::{self, ColorModel, Image};

use super::prim::Primitive;

/// An RGB image together with the primitives drawn on it.
///
/// Primitives are kept in the order they were added; later primitives are
/// drawn over earlier ones. The image only reflects the primitives after a
/// call to [`Canvas::redraw`].
#[derive(Clone, Debug)]
pub struct Canvas {
    image: Image,
    prims: Vec<Primitive>,
    /// The color the image is cleared to before drawing.
    pub background: Color3,
}

impl Canvas {
    /// Returns a new empty canvas of the given size with a white
    /// background.
    ///
    /// # Errors
    /// If `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> image::Result<Self> {
        let mut canvas = Self {
            image: Image::new(width, height, ColorModel::Rgb)?,
            prims: Vec::new(),
            background: Color3::WHITE,
        };
        canvas.redraw();
        Ok(canvas)
    }

    /// Changes the size of the image and redraws it.
    ///
    /// # Errors
    /// If `width` or `height` is zero. In that case the image is left empty.
    pub fn resize(&mut self, width: u32, height: u32) -> image::Result<()> {
        self.image.init(width, height, ColorModel::Rgb)?;
        self.redraw();
        Ok(())
    }

    /// Returns the image of `self`.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Returns the primitives of `self` in drawing order.
    pub fn prims(&self) -> &[Primitive] {
        &self.prims
    }

    /// Returns the number of primitives in `self`.
    pub fn len(&self) -> usize {
        self.prims.len()
    }

    /// Returns whether `self` has no primitives.
    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    /// Returns the center point of the image.
    pub fn center(&self) -> Vec2 {
        let (w, h) = self.image.dims();
        vec2(0.5 * w as f32, 0.5 * h as f32)
    }

    /// Adds a primitive on top of the others.
    pub fn push(&mut self, prim: Primitive) {
        self.prims.push(prim);
    }

    /// Removes and returns the most recently added primitive, if any.
    pub fn undo(&mut self) -> Option<Primitive> {
        self.prims.pop()
    }

    /// Removes all primitives.
    pub fn clear(&mut self) {
        self.prims.clear();
    }

    /// Applies `tf` to every primitive.
    pub fn transform_all(&mut self, tf: &Affine2) {
        for p in &mut self.prims {
            p.apply_transform(tf);
        }
    }

    /// Translates every primitive by `offset`.
    pub fn pan(&mut self, offset: Vec2) {
        self.transform_all(&translate(offset));
    }

    /// Scales every primitive uniformly by `factor` about the image center.
    pub fn zoom(&mut self, factor: f32) {
        let tf = scale(vec2(factor, factor)).about(self.center());
        self.transform_all(&tf);
    }

    /// Rotates every primitive by `angle` radians about the image center.
    ///
    /// Positive angles rotate clockwise on screen, as y grows downwards.
    #[cfg(feature = "fp")]
    pub fn rotate(&mut self, angle: f32) {
        let tf = crate::math::transform::rotate(angle).about(self.center());
        self.transform_all(&tf);
    }

    /// Clears the image to the background color and draws every primitive.
    pub fn redraw(&mut self) {
        self.image.clear_color(self.background);
        for p in &self.prims {
            p.draw(&mut self.image);
        }
    }

    /// Draws `prim` over the image without adding it to `self`.
    ///
    /// The primitive disappears on the next redraw.
    pub fn draw_transient(&mut self, prim: &Primitive) {
        prim.draw(&mut self.image);
    }
}
