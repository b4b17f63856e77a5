//! Colors and color models.

use core::fmt::{self, Debug, Formatter};

/// A generic color type, similar to [`Vector`][crate::math::vec::Vector].
///
/// Color components are also called *channels*.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color<Repr>(pub Repr);

/// A three-channel color with `u8` components.
///
/// The channels are interpreted according to the color model of the image
/// the color is written to; for RGB images they are red, green, and blue.
pub type Color3 = Color<[u8; 3]>;

/// Returns a new color with `r`, `g`, and `b` components.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color3 {
    Color([r, g, b])
}

/// Returns a new gray color with all components equal to `v`.
pub const fn gray(v: u8) -> Color3 {
    rgb(v, v, v)
}

impl Color3 {
    pub const BLACK: Self = gray(0);
    pub const GRAY: Self = gray(128);
    pub const WHITE: Self = gray(255);

    pub const RED: Self = rgb(255, 0, 0);
    pub const GREEN: Self = rgb(0, 255, 0);
    pub const BLUE: Self = rgb(0, 0, 255);

    pub const CYAN: Self = rgb(0, 255, 255);
    pub const MAGENTA: Self = rgb(255, 0, 255);
    pub const YELLOW: Self = rgb(255, 255, 0);

    /// Returns the red component of `self`.
    #[inline]
    pub const fn r(&self) -> u8 {
        self.0[0]
    }
    /// Returns the green component of `self`.
    #[inline]
    pub const fn g(&self) -> u8 {
        self.0[1]
    }
    /// Returns the blue component of `self`.
    #[inline]
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }
}

impl Debug for Color3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "Color3[{r:#04x}, {g:#04x}, {b:#04x}]")
    }
}

impl From<[u8; 3]> for Color3 {
    #[inline]
    fn from(els: [u8; 3]) -> Self {
        Self(els)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(Color3::GRAY, rgb(128, 128, 128));
        assert_eq!(Color3::CYAN, rgb(0, 255, 255));
        assert_eq!(Color3::default(), Color3::BLACK);
    }

    #[test]
    fn components() {
        let c = rgb(1, 2, 3);
        assert_eq!([c.r(), c.g(), c.b()], [1, 2, 3]);
        assert_eq!(Color3::from([1, 2, 3]), c);
    }

    #[test]
    fn rgb_u32() {
        assert_eq!(rgb(0x12, 0x34, 0x56).to_rgb_u32(), 0x00_12_34_56);
        assert_eq!(Color3::WHITE.to_rgb_u32(), 0x00_FF_FF_FF);
    }

    #[test]
    fn color_debug() {
        assert_eq!(
            alloc::format!("{:?}", rgb(0x12, 0xAB, 0)),
            "Color3[0x12, 0xab, 0x00]"
        );
    }
}
