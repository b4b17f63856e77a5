//! Render targets.
//!
//! The typical render target is an [`Image`], but anything that can accept
//! colored pixels, such as a test recorder or a window framebuffer, can be
//! drawn into by implementing [`Target`].

use crate::math::color::Color3;
use crate::util::image::Image;

/// Trait for types that primitives can be drawn into.
pub trait Target {
    /// Sets the pixel at `(x, y)` to `color`.
    ///
    /// Positions outside the target must be ignored.
    fn plot(&mut self, x: i32, y: i32, color: Color3);

    /// Returns the width and height of the target, if it is bounded.
    ///
    /// Lines are clipped to these bounds before rasterization.
    fn bounds(&self) -> Option<(u32, u32)> {
        None
    }
}

impl Target for Image {
    /// Writes `color` to the pixel at `(x, y)` with a checked write.
    fn plot(&mut self, x: i32, y: i32, color: Color3) {
        self.set_pixel_checked(x, y, color);
    }
    fn bounds(&self) -> Option<(u32, u32)> {
        Some(self.dims())
    }
}

impl<T: Target + ?Sized> Target for &mut T {
    fn plot(&mut self, x: i32, y: i32, color: Color3) {
        (**self).plot(x, y, color);
    }
    fn bounds(&self) -> Option<(u32, u32)> {
        (**self).bounds()
    }
}
