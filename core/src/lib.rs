//! Core functionality of the `graphics2d` project.
//!
//! Includes a small 2D math library with vectors, matrices, affine
//! transforms and colors; analytic line geometry; an owned raster image
//! type; integer rasterization of points, lines and polygons; and reading
//! and writing of PNM (pixel-dump) image files.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring I/O or any floating-point functions
//!   not included in `core`, such as square roots and trigonometry.
//!   Enabled by default.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! * `image`:
//!   Enables loading and saving formats other than PNM through the
//!   [image](https://crates.io/crates/image) crate.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod geom;
pub mod math;
pub mod render;
pub mod util;

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::transform::rotate;
    pub use crate::math::{
        approx::ApproxEq,
        color::{Color3, gray, rgb},
        mat::{Apply, Mat2},
        transform::{Affine2, scale, shear, translate},
        vec::{Vec2, Vec2i, vec2, vec2i},
    };

    pub use crate::geom::{Line2, line2};

    pub use crate::render::{
        canvas::Canvas,
        prim::{Primitive, Shape},
        target::Target,
    };

    pub use crate::util::image::{ColorModel, Image};
}
