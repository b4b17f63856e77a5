//! Various utility types and functions.

pub mod image;
#[cfg(feature = "std")]
pub mod io;
pub mod pnm;
