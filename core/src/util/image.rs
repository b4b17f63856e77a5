//! Owned raster images.
//!
//! An [`Image`] is a contiguous buffer of bytes, laid out row by row from
//! the top, with the channels of each pixel interleaved. How many channels a
//! pixel has, and how they are interpreted, is determined by the image's
//! [`ColorModel`].

use alloc::{vec, vec::Vec};

use log::warn;

use crate::math::color::{Color3, gray, rgb};

/// The interpretation of the channels of an image.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ColorModel {
    /// No color model; the image holds no data.
    #[default]
    None,
    /// Grayscale, one channel per pixel.
    Gray,
    /// Red, green, and blue, three channels per pixel.
    Rgb,
    /// Hue, saturation, and value, three channels per pixel.
    Hsv,
}

impl ColorModel {
    /// Returns the number of channels per pixel in this model.
    pub const fn channels(self) -> usize {
        match self {
            Self::None => 0,
            Self::Gray => 1,
            Self::Rgb | Self::Hsv => 3,
        }
    }
}

/// Error constructing an image.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The width or the height is zero, or the image would not fit in
    /// memory.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDims { width: u32, height: u32 },
    /// The color model is [`ColorModel::None`].
    #[error("an image must have a color model")]
    NoColorModel,
    /// The length of the pixel data does not match the dimensions.
    #[error("expected {expected} bytes of pixel data, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Result of constructing an image.
pub type Result<T> = core::result::Result<T, Error>;

/// An owned raster image.
///
/// A default or [released][Image::release] image is *empty*: it has zero
/// dimensions, no color model, and no data.
///
/// Pixel coordinates are signed so that callers can pass positions that lie
/// outside the image to the checked accessors; `(0, 0)` is the top left
/// corner, with x growing to the right and y growing downwards.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    model: ColorModel,
    data: Vec<u8>,
}

impl Image {
    /// Returns a new zero-filled image with the given dimensions and model.
    ///
    /// # Errors
    /// If `width` or `height` is zero, or `model` is [`ColorModel::None`].
    pub fn new(width: u32, height: u32, model: ColorModel) -> Result<Self> {
        let mut img = Self::default();
        img.init(width, height, model)?;
        Ok(img)
    }

    /// Returns a new image with the given dimensions and model that takes
    /// ownership of `data`.
    ///
    /// # Errors
    /// If `width` or `height` is zero, `model` is [`ColorModel::None`], or
    /// the length of `data` is not `width * height * model.channels()`.
    pub fn from_raw(
        width: u32,
        height: u32,
        model: ColorModel,
        data: Vec<u8>,
    ) -> Result<Self> {
        let expected = byte_count(width, height, model)?;
        if data.len() != expected {
            return Err(Error::SizeMismatch { expected, actual: data.len() });
        }
        Ok(Self { width, height, model, data })
    }

    /// (Re)initializes `self` with the given dimensions and model, and
    /// fills the pixel data with zeros.
    ///
    /// The buffer is only reallocated if its length in bytes changes.
    ///
    /// # Errors
    /// If `width` or `height` is zero, or `model` is [`ColorModel::None`].
    /// In that case `self` is [released][Self::release].
    pub fn init(
        &mut self,
        width: u32,
        height: u32,
        model: ColorModel,
    ) -> Result<()> {
        let len = match byte_count(width, height, model) {
            Ok(len) => len,
            Err(e) => {
                warn!("cannot initialize image: {e}");
                self.release();
                return Err(e);
            }
        };
        if self.data.len() == len {
            self.data.fill(0);
        } else {
            self.data = vec![0; len];
        }
        self.width = width;
        self.height = height;
        self.model = model;
        Ok(())
    }

    /// Frees the pixel data of `self` and returns it to the empty state.
    pub fn release(&mut self) {
        *self = Self::default();
    }

    /// Returns whether `self` holds no pixel data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Returns the width of `self` in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }
    /// Returns the height of `self` in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
    /// Returns the width and height of `self` in pixels.
    pub fn dims(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    /// Returns the number of pixels in `self`.
    pub fn num_pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }
    /// Returns the number of channels per pixel of `self`.
    pub fn channels(&self) -> usize {
        self.model.channels()
    }
    /// Returns the length of the pixel data of `self` in bytes.
    pub fn num_bytes(&self) -> usize {
        self.data.len()
    }
    /// Returns the color model of `self`.
    pub fn color_model(&self) -> ColorModel {
        self.model
    }
    /// Returns the pixel data of `self`.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    /// Returns the pixel data of `self` mutably.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    //
    // Channel access
    //

    /// Returns the value of channel `c` of the pixel at `(x, y)`.
    ///
    /// The coordinates are not validated: an x outside the image may
    /// read a pixel from an adjacent row.
    ///
    /// # Panics
    /// If the computed position lies outside the pixel data.
    pub fn channel(&self, x: i32, y: i32, c: usize) -> u8 {
        self.data[self.index(x, y) + c]
    }

    /// Returns the value of channel `c` of the pixel at `(x, y)`, with the
    /// coordinates clamped to the bounds of `self`.
    ///
    /// Returns 0 if `self` is empty or `c` is not a channel of `self`.
    pub fn channel_checked(&self, x: i32, y: i32, c: usize) -> u8 {
        if self.is_empty() || c >= self.channels() {
            return 0;
        }
        let (x, y) = self.clamp(x, y);
        self.channel(x, y, c)
    }

    /// Sets channel `c` of the pixel at `(x, y)` to `val`.
    ///
    /// # Panics
    /// If the computed position lies outside the pixel data.
    pub fn set_channel(&mut self, x: i32, y: i32, c: usize, val: u8) {
        let i = self.index(x, y) + c;
        self.data[i] = val;
    }

    /// Sets channel `c` of the pixel at `(x, y)` to `val` if the position
    /// lies within `self`, otherwise does nothing.
    pub fn set_channel_checked(&mut self, x: i32, y: i32, c: usize, val: u8) {
        if self.contains(x, y) && c < self.channels() {
            self.set_channel(x, y, c, val);
        }
    }

    //
    // Color access
    //

    /// Returns the color of the pixel at `(x, y)`.
    ///
    /// The only channel of a grayscale pixel is returned in all three
    /// components of the color.
    ///
    /// # Panics
    /// If the computed position lies outside the pixel data.
    pub fn pixel(&self, x: i32, y: i32) -> Color3 {
        let i = self.index(x, y);
        match self.model {
            ColorModel::Gray => gray(self.data[i]),
            _ => {
                let px = &self.data[i..i + 3];
                rgb(px[0], px[1], px[2])
            }
        }
    }

    /// Returns the color of the pixel at `(x, y)`, with the coordinates
    /// clamped to the bounds of `self`.
    ///
    /// Returns black if `self` is empty.
    pub fn pixel_checked(&self, x: i32, y: i32) -> Color3 {
        if self.is_empty() {
            return Color3::BLACK;
        }
        let (x, y) = self.clamp(x, y);
        self.pixel(x, y)
    }

    /// Sets the pixel at `(x, y)` to `color`.
    ///
    /// A grayscale pixel is set to the first component of the color.
    ///
    /// # Panics
    /// If the computed position lies outside the pixel data.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color3) {
        let i = self.index(x, y);
        match self.model {
            ColorModel::Gray => self.data[i] = color.r(),
            _ => self.data[i..i + 3].copy_from_slice(&color.0),
        }
    }

    /// Sets the pixel at `(x, y)` to `color` if the position lies within
    /// `self`, otherwise does nothing.
    pub fn set_pixel_checked(&mut self, x: i32, y: i32, color: Color3) {
        if self.contains(x, y) {
            self.set_pixel(x, y, color);
        }
    }

    /// Sets every byte of the pixel data to `val`.
    pub fn clear(&mut self, val: u8) {
        self.data.fill(val);
    }

    /// Sets every pixel to `color`.
    ///
    /// Grayscale pixels are set to the first component of the color.
    pub fn clear_color(&mut self, color: Color3) {
        match self.model {
            ColorModel::None => {}
            ColorModel::Gray => self.data.fill(color.r()),
            ColorModel::Rgb | ColorModel::Hsv => self
                .data
                .chunks_exact_mut(3)
                .for_each(|px| px.copy_from_slice(&color.0)),
        }
    }

    /// Returns whether `(x, y)` lies within the bounds of `self`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width as i64).contains(&(x as i64))
            && (0..self.height as i64).contains(&(y as i64))
    }

    fn clamp(&self, x: i32, y: i32) -> (i32, i32) {
        let max_x = self.width.saturating_sub(1).min(i32::MAX as u32) as i32;
        let max_y = self.height.saturating_sub(1).min(i32::MAX as u32) as i32;
        (x.clamp(0, max_x), y.clamp(0, max_y))
    }

    fn index(&self, x: i32, y: i32) -> usize {
        let i = y as isize * self.width as isize + x as isize;
        // Negative indices wrap around and fail the bounds check
        (i as usize).wrapping_mul(self.channels())
    }
}

impl Clone for Image {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            model: self.model,
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, src: &Self) {
        self.width = src.width;
        self.height = src.height;
        self.model = src.model;
        self.data.clone_from(&src.data);
    }
}

/// Returns the length in bytes of an image with the given parameters.
fn byte_count(width: u32, height: u32, model: ColorModel) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDims { width, height });
    }
    if model == ColorModel::None {
        return Err(Error::NoColorModel);
    }
    usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .and_then(|(w, h)| w.checked_mul(h)?.checked_mul(model.channels()))
        .ok_or(Error::InvalidDims { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_image() -> Image {
        // 2x2, pixels numbered 0..4 in row-major order
        let data = (0..12).collect();
        Image::from_raw(2, 2, ColorModel::Rgb, data).unwrap()
    }

    #[test]
    fn new_is_zero_filled() {
        let img = Image::new(4, 3, ColorModel::Rgb).unwrap();
        assert_eq!(img.dims(), (4, 3));
        assert_eq!(img.num_pixels(), 12);
        assert_eq!(img.num_bytes(), 36);
        assert_eq!(img.channels(), 3);
        assert!(img.data().iter().all(|&b| b == 0));

        let img = Image::new(4, 3, ColorModel::Gray).unwrap();
        assert_eq!(img.num_bytes(), 12);
    }

    #[test]
    fn default_is_empty() {
        let img = Image::default();
        assert!(img.is_empty());
        assert_eq!(img.dims(), (0, 0));
        assert_eq!(img.color_model(), ColorModel::None);
        assert_eq!(img.channels(), 0);
    }

    #[test]
    fn init_invalid_releases() {
        let mut img = rgb_image();
        assert_eq!(
            img.init(0, 5, ColorModel::Gray),
            Err(Error::InvalidDims { width: 0, height: 5 })
        );
        assert!(img.is_empty());

        let mut img = rgb_image();
        assert_eq!(img.init(5, 5, ColorModel::None), Err(Error::NoColorModel));
        assert_eq!(img, Image::default());
    }

    #[test]
    fn new_too_large_fails() {
        let (w, h) = (u32::MAX, u32::MAX);
        assert_eq!(
            Image::new(w, h, ColorModel::Rgb),
            Err(Error::InvalidDims { width: w, height: h })
        );
        let mut img = rgb_image();
        assert!(img.init(w, h, ColorModel::Hsv).is_err());
        assert!(img.is_empty());
    }

    #[test]
    fn init_same_size_reuses_buffer() {
        let mut img = rgb_image();
        let ptr = img.data().as_ptr();
        // Same byte count, different shape and model
        img.init(1, 4, ColorModel::Hsv).unwrap();
        assert_eq!(img.data().as_ptr(), ptr);
        assert_eq!(img.dims(), (1, 4));
        assert_eq!(img.color_model(), ColorModel::Hsv);
        assert!(img.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn from_raw_size_mismatch() {
        let res = Image::from_raw(2, 2, ColorModel::Gray, vec![0; 5]);
        assert_eq!(res, Err(Error::SizeMismatch { expected: 4, actual: 5 }));
    }

    #[test]
    fn unchecked_access() {
        let mut img = rgb_image();
        assert_eq!(img.channel(1, 0, 2), 5);
        assert_eq!(img.pixel(0, 1), rgb(6, 7, 8));

        img.set_channel(1, 1, 0, 42);
        assert_eq!(img.channel(1, 1, 0), 42);
        img.set_pixel(0, 0, Color3::MAGENTA);
        assert_eq!(&img.data()[..3], &[255, 0, 255]);
    }

    #[test]
    fn unchecked_x_overflow_aliases_next_row() {
        let img = rgb_image();
        assert_eq!(img.pixel(2, 0), img.pixel(0, 1));
    }

    #[test]
    #[should_panic]
    fn unchecked_access_past_buffer_panics() {
        let img = rgb_image();
        let _ = img.pixel(0, 2);
    }

    #[test]
    fn checked_read_clamps() {
        let img = rgb_image();
        assert_eq!(img.pixel_checked(-5, -5), img.pixel(0, 0));
        assert_eq!(img.pixel_checked(10, 0), img.pixel(1, 0));
        assert_eq!(img.pixel_checked(10, 10), img.pixel(1, 1));
        assert_eq!(img.channel_checked(-1, 7, 1), img.channel(0, 1, 1));
        assert_eq!(img.channel_checked(0, 0, 3), 0);
    }

    #[test]
    fn checked_read_empty_is_black() {
        let img = Image::default();
        assert_eq!(img.pixel_checked(0, 0), Color3::BLACK);
        assert_eq!(img.channel_checked(3, 3, 0), 0);
    }

    #[test]
    fn checked_write_out_of_bounds_is_noop() {
        let mut img = rgb_image();
        let before = img.clone();
        img.set_pixel_checked(-1, 0, Color3::WHITE);
        img.set_pixel_checked(0, 2, Color3::WHITE);
        img.set_channel_checked(2, 0, 0, 255);
        img.set_channel_checked(0, 0, 3, 255);
        assert_eq!(img, before);

        img.set_pixel_checked(1, 1, Color3::WHITE);
        assert_eq!(img.pixel(1, 1), Color3::WHITE);
    }

    #[test]
    fn gray_pixels_use_first_channel() {
        let mut img = Image::new(2, 1, ColorModel::Gray).unwrap();
        img.set_pixel(1, 0, rgb(10, 20, 30));
        assert_eq!(img.data(), &[0, 10]);
        assert_eq!(img.pixel(1, 0), gray(10));
    }

    #[test]
    fn clear_fills_every_byte() {
        let mut img = rgb_image();
        img.clear(7);
        assert!(img.data().iter().all(|&b| b == 7));
    }

    #[test]
    fn clear_color() {
        let mut img = rgb_image();
        img.clear_color(rgb(1, 2, 3));
        assert_eq!(img.data(), &[1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3]);

        let mut img = Image::new(3, 1, ColorModel::Gray).unwrap();
        img.clear_color(rgb(9, 2, 3));
        assert_eq!(img.data(), &[9, 9, 9]);
    }

    #[test]
    fn clone_is_deep() {
        let img = rgb_image();
        let mut copy = img.clone();
        copy.set_pixel(0, 0, Color3::WHITE);
        assert_ne!(copy, img);

        copy.clone_from(&img);
        assert_eq!(copy, img);
    }
}
