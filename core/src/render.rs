//! Turning 2D primitives into raster images.
//!
//! [Primitives][prim] are colored points, lines, and polygons. They are
//! [rasterized][raster] into pixel positions and written to a
//! [target][target], typically an [`Image`][crate::util::image::Image].
//! A [canvas][canvas] keeps an ordered collection of primitives along with
//! the image they are drawn into.

pub mod canvas;
pub mod prim;
pub mod raster;
pub mod target;

pub use canvas::Canvas;
pub use prim::{Primitive, Shape};
pub use target::Target;
