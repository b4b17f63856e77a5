//! PNM, also known as NetPBM, file format support.
//!
//! PNM is a venerable family of extremely simple image formats, each
//! consisting of a simple textual header followed by either text or
//! binary pixel data.
//!
//! Type  | Magic | Pixel format
//! ----- | ------| ------------
//! PGM   | P2/P5 | 8 bpp grayscale
//! PPM   | P3/P6 | 3x8 bpp color
//!
//! The header may contain a comment line naming the color model of the
//! pixel data, one of `# CM_Gray`, `# CM_RGB`, or `# CM_HSV`. Images are
//! always written in a binary format with such a comment.

use alloc::{format, string::String, vec::Vec};
use core::{
    fmt::{self, Display, Formatter},
    iter::Peekable,
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};

use log::warn;

use Error::*;
use Format::*;

use crate::util::image::{self, ColorModel, Image};

/// The header of a PNM image.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Header {
    format: Format,
    model: ColorModel,
    width: u32,
    height: u32,
    /// The maximum channel value. Read but not used to rescale values.
    #[allow(unused)]
    max: i64,
}

/// The format of a PNM image.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u16)]
pub enum Format {
    /// Grayscale image, text encoding.
    TextGraymap = magic(b"P2"),
    /// Color image, text encoding.
    TextPixmap = magic(b"P3"),
    /// Grayscale image, binary encoding. 1 byte per pixel.
    BinaryGraymap = magic(b"P5"),
    /// Color image, binary encoding. 3 bytes per pixel.
    BinaryPixmap = magic(b"P6"),
}

const fn magic(bytes: &[u8; 2]) -> u16 {
    u16::from_be_bytes(*bytes)
}

impl Format {
    /// Returns whether the pixel data of this format is binary.
    pub const fn is_binary(self) -> bool {
        matches!(self, BinaryGraymap | BinaryPixmap)
    }
    /// Returns whether this format stores one channel per pixel.
    pub const fn is_gray(self) -> bool {
        matches!(self, TextGraymap | BinaryGraymap)
    }
    /// Returns the color model implied by this format.
    pub const fn color_model(self) -> ColorModel {
        if self.is_gray() {
            ColorModel::Gray
        } else {
            ColorModel::Rgb
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", *self as u8 as char)
    }
}

impl TryFrom<[u8; 2]> for Format {
    type Error = Error;
    fn try_from(magic: [u8; 2]) -> Result<Self> {
        Ok(match &magic {
            b"P2" => TextGraymap,
            b"P3" => TextPixmap,
            b"P5" => BinaryGraymap,
            b"P6" => BinaryPixmap,
            other => Err(Unsupported(*other))?,
        })
    }
}

/// Error during decoding or encoding a PNM image.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// Unsupported magic number.
    #[error("unsupported pnm format `{}`", .0.escape_ascii())]
    Unsupported([u8; 2]),
    /// Unexpected end of input while decoding.
    #[error("unexpected end of pnm data")]
    UnexpectedEnd,
    /// Invalid numeric value encountered.
    #[error("invalid number in pnm header or data")]
    InvalidNumber,
    /// The width or the height is not positive, or the image is too
    /// large to fit in memory.
    #[error("invalid pnm image dimensions {width}x{height}")]
    InvalidDims { width: i64, height: i64 },
    /// Attempted to encode an image with no data.
    #[error("cannot encode an empty image")]
    EmptyImage,
    /// The decoded data does not form a valid image.
    #[error(transparent)]
    Image(#[from] image::Error),
}

/// Result of decoding or encoding a PNM image.
pub type Result<T> = core::result::Result<T, Error>;

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Self {
        if *e.kind() == IntErrorKind::Empty {
            UnexpectedEnd
        } else {
            InvalidNumber
        }
    }
}

/// Returns the header comment tag naming `model`, if any.
const fn model_tag(model: ColorModel) -> Option<&'static str> {
    match model {
        ColorModel::None => None,
        ColorModel::Gray => Some("# CM_Gray"),
        ColorModel::Rgb => Some("# CM_RGB"),
        ColorModel::Hsv => Some("# CM_HSV"),
    }
}

/// Returns the color model named by a header comment line, if any.
fn parse_model_tag(line: &[u8]) -> Option<ColorModel> {
    [ColorModel::Gray, ColorModel::Rgb, ColorModel::Hsv]
        .into_iter()
        .find(|&m| model_tag(m).is_some_and(|t| t.as_bytes() == line))
}

impl Header {
    /// Attempts to parse a PNM header from `it`.
    ///
    /// On success, `it` is left positioned right after the maximum value.
    fn parse<I>(it: &mut Peekable<I>) -> Result<Self>
    where
        I: Iterator<Item = u8>,
    {
        let magic = [
            it.next().ok_or(UnexpectedEnd)?,
            it.next().ok_or(UnexpectedEnd)?,
        ];
        let format = Format::try_from(magic)?;
        let mut model = format.color_model();

        // Comment lines directly after the magic may name the color model
        skip_whitespace(it);
        while it.next_if_eq(&b'#').is_some() {
            let mut line = Vec::from(*b"#");
            line.extend(it.by_ref().take_while(|&b| b != b'\n'));
            let Some(tagged) = parse_model_tag(line.trim_ascii_end()) else {
                continue;
            };
            if tagged.channels() == model.channels() {
                model = tagged;
            } else {
                warn!("ignoring color model {tagged:?} incompatible with {format}");
            }
        }

        let width: i64 = parse_num(&mut *it)?;
        let height: i64 = parse_num(&mut *it)?;
        let max: i64 = parse_num(&mut *it)?;

        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height))
        else {
            return Err(InvalidDims { width, height });
        };
        let hdr = Self { format, model, width: w, height: h, max };
        if w == 0 || h == 0 || hdr.data_len().is_none() {
            return Err(InvalidDims { width, height });
        }
        Ok(hdr)
    }

    /// Returns the number of bytes of pixel data described by `self`, or
    /// `None` if it does not fit in `usize`.
    fn data_len(&self) -> Option<usize> {
        usize::try_from(self.width)
            .ok()?
            .checked_mul(usize::try_from(self.height).ok()?)?
            .checked_mul(self.model.channels())
    }

    /// Writes `self` as a valid PNM header, including a trailing newline.
    ///
    /// The maximum value is always written as 255.
    fn write(&self, out: &mut Vec<u8>) {
        let Self { format, model, width, height, .. } = *self;
        out.extend(format!("{format}\n").bytes());
        if let Some(tag) = model_tag(model) {
            out.extend(tag.bytes());
            out.push(b'\n');
        }
        out.extend(format!("{width} {height}\n255\n").bytes());
    }
}

/// Attempts to decode a PNM image from an iterator of bytes.
///
/// Supported formats are P2, P3, P5, and P6. Text-encoded values are
/// truncated to their lowest eight bits; the maximum value given in the
/// header is ignored.
///
/// # Errors
/// Returns [`pnm::Error`][Error] in case of an invalid PNM image, including
/// if the input ends before all pixel data is read.
pub fn read_pnm(src: impl IntoIterator<Item = u8>) -> Result<Image> {
    let mut it = src.into_iter().peekable();
    let h = Header::parse(&mut it)?;
    let len = h.data_len().ok_or(InvalidDims {
        width: h.width.into(),
        height: h.height.into(),
    })?;

    let data: Vec<u8> = if h.format.is_binary() {
        // Pixel data starts on the line after the maximum value
        it.by_ref().find(|&b| b == b'\n').ok_or(UnexpectedEnd)?;
        it.take(len).collect()
    } else {
        (0..len)
            .map(|_| parse_num::<i64, _>(&mut it).map(|v| v as u8))
            .collect::<Result<_>>()?
    };
    if data.len() < len {
        return Err(UnexpectedEnd);
    }
    Ok(Image::from_raw(h.width, h.height, h.model, data)?)
}

/// Encodes an image in binary PNM format: P5 for grayscale images and P6
/// otherwise, with a header comment naming the color model.
///
/// # Errors
/// Returns [`Error::EmptyImage`] if `img` is empty.
pub fn encode_pnm(img: &Image) -> Result<Vec<u8>> {
    if img.is_empty() {
        return Err(EmptyImage);
    }
    let model = img.color_model();
    let format = if model == ColorModel::Gray {
        BinaryGraymap
    } else {
        BinaryPixmap
    };
    let (width, height) = img.dims();
    let hdr = Header { format, model, width, height, max: 255 };

    let mut out = Vec::with_capacity(32 + img.num_bytes());
    hdr.write(&mut out);
    out.extend_from_slice(img.data());
    Ok(out)
}

fn skip_whitespace<I: Iterator<Item = u8>>(it: &mut Peekable<I>) {
    while it.next_if(u8::is_ascii_whitespace).is_some() {}
}

/// Parses a numeric value from `it`, skipping whitespace and comments.
///
/// The whitespace byte terminating the value, if any, is not consumed.
fn parse_num<T, I>(it: &mut Peekable<I>) -> Result<T>
where
    T: FromStr,
    Error: From<T::Err>,
    I: Iterator<Item = u8>,
{
    loop {
        skip_whitespace(it);
        if it.next_if_eq(&b'#').is_none() {
            break;
        }
        it.by_ref().take_while(|&b| b != b'\n').for_each(drop);
    }
    let mut str = String::new();
    while let Some(b) = it.next_if(|b| !b.is_ascii_whitespace()) {
        str.push(char::from(b));
    }
    Ok(str.parse()?)
}
