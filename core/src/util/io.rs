//! Loading and saving images from and to files.
//!
//! PNM files, recognized by a `.ppm` or `.pgm` extension in any letter
//! case, are handled natively by [`pnm`][crate::util::pnm]. Other formats
//! are delegated to an external [`Codec`] if one is installed in the
//! [`ImageIo`] instance used.

use std::boxed::Box;
use std::path::Path;
use std::string::{String, ToString};
use std::{fs, io};

use log::debug;

use crate::util::image::Image;
use crate::util::pnm::{self, encode_pnm, read_pnm};

/// Error loading or saving an image file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// Decoding or encoding a PNM image failed.
    #[error(transparent)]
    Pnm(#[from] pnm::Error),
    /// No codec is available for the file extension.
    #[error("unsupported image file format: {0}")]
    Unsupported(String),
    /// Attempted to save an image with no data.
    #[error("cannot save an empty image")]
    EmptyImage,
    /// An external codec failed.
    #[error("codec error: {0}")]
    Codec(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result of loading or saving an image file.
pub type Result<T> = core::result::Result<T, Error>;

/// Trait for codecs that load and save images in formats other than PNM.
pub trait Codec {
    /// Loads an image from the file at `path`.
    fn load(&self, path: &Path) -> Result<Image>;

    /// Saves `img` to the file at `path`, overwriting it if it exists.
    fn save(&self, path: &Path, img: &Image) -> Result<()>;
}

/// Loads and saves images, choosing the format by file extension.
#[derive(Default)]
pub struct ImageIo {
    external: Option<Box<dyn Codec>>,
}

impl ImageIo {
    /// Returns a new instance that only supports PNM files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new instance that delegates non-PNM files to `codec`.
    pub fn with_codec(codec: impl Codec + 'static) -> Self {
        Self { external: Some(Box::new(codec)) }
    }

    /// Loads an image from the file at `path`.
    ///
    /// # Errors
    /// If the file cannot be read or decoded, or its format is unsupported.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Image> {
        let path = path.as_ref();
        if is_pnm(path) {
            load_pnm(path)
        } else {
            self.codec(path)?.load(path)
        }
    }

    /// Loads an image from the file at `path` into `img`.
    ///
    /// `img` is released first, and stays empty if loading fails.
    ///
    /// # Errors
    /// As [`ImageIo::load`].
    pub fn load_into(&self, path: impl AsRef<Path>, img: &mut Image) -> Result<()> {
        img.release();
        *img = self.load(path)?;
        Ok(())
    }

    /// Saves `img` to the file at `path`, overwriting it if it exists.
    ///
    /// # Errors
    /// If `img` is empty, the format is unsupported, or the file cannot be
    /// encoded or written.
    pub fn save(&self, path: impl AsRef<Path>, img: &Image) -> Result<()> {
        let path = path.as_ref();
        if img.is_empty() {
            return Err(Error::EmptyImage);
        }
        if is_pnm(path) {
            save_pnm(path, img)
        } else {
            self.codec(path)?.save(path, img)
        }
    }

    fn codec(&self, path: &Path) -> Result<&dyn Codec> {
        self.external
            .as_deref()
            .ok_or_else(|| Error::Unsupported(path.display().to_string()))
    }
}

/// Returns whether `path` has a PNM file extension.
fn is_pnm(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ext.eq_ignore_ascii_case("ppm") || ext.eq_ignore_ascii_case("pgm")
        })
}

/// Loads a PNM image from the file at `path`.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Pnm`] if
/// it does not contain a valid PNM image.
pub fn load_pnm(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    let img = read_pnm(fs::read(path)?)?;
    debug!(
        "loaded {}x{} {:?} image from {}",
        img.width(),
        img.height(),
        img.color_model(),
        path.display()
    );
    Ok(img)
}

/// Saves an image to the file at `path` in binary PNM format.
///
/// Caution: This function overwrites the file if it already exists.
///
/// # Errors
/// Returns [`Error::Pnm`] if `img` is empty and [`Error::Io`] if the file
/// cannot be written.
pub fn save_pnm(path: impl AsRef<Path>, img: &Image) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, encode_pnm(img)?)?;
    debug!("saved {}x{} image to {}", img.width(), img.height(), path.display());
    Ok(())
}

/// A [`Codec`] backed by the `image` crate.
///
/// Images with color are loaded as RGB, with any alpha channel discarded,
/// and grayscale images as gray. RGB and HSV images are both saved as RGB.
#[cfg(feature = "image")]
#[derive(Copy, Clone, Debug, Default)]
pub struct ImageCrate;

#[cfg(feature = "image")]
impl Codec for ImageCrate {
    fn load(&self, path: &Path) -> Result<Image> {
        use crate::util::image::ColorModel;

        let dynamic = image::open(path).map_err(|e| Error::Codec(e.into()))?;
        let (model, width, height, data) = if dynamic.color().has_color() {
            let buf = dynamic.into_rgb8();
            (ColorModel::Rgb, buf.width(), buf.height(), buf.into_raw())
        } else {
            let buf = dynamic.into_luma8();
            (ColorModel::Gray, buf.width(), buf.height(), buf.into_raw())
        };
        debug!("loaded {width}x{height} {model:?} image from {}", path.display());
        Image::from_raw(width, height, model, data)
            .map_err(|e| Error::Codec(e.into()))
    }

    fn save(&self, path: &Path, img: &Image) -> Result<()> {
        use crate::util::image::ColorModel;
        use image::ColorType;

        let color = match img.color_model() {
            ColorModel::None => return Err(Error::EmptyImage),
            ColorModel::Gray => ColorType::L8,
            ColorModel::Rgb | ColorModel::Hsv => ColorType::Rgb8,
        };
        let (w, h) = img.dims();
        image::save_buffer(path, img.data(), w, h, color)
            .map_err(|e| Error::Codec(e.into()))?;
        debug!("saved {w}x{h} image to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::{format, vec};

    use super::*;
    use crate::math::color::rgb;
    use crate::util::image::ColorModel;

    fn temp_path(name: &str) -> PathBuf {
        let pid = std::process::id();
        std::env::temp_dir().join(format!("graphics2d-io-{pid}-{name}"))
    }

    fn test_image() -> Image {
        let mut img = Image::new(3, 2, ColorModel::Rgb).unwrap();
        img.set_pixel(1, 1, rgb(10, 20, 30));
        img
    }

    /// Records the number of calls and loads a fixed 1x1 gray image.
    struct Counting(Rc<Cell<u32>>);

    impl Codec for Counting {
        fn load(&self, _: &Path) -> Result<Image> {
            self.0.set(self.0.get() + 1);
            Ok(Image::from_raw(1, 1, ColorModel::Gray, vec![42]).unwrap())
        }
        fn save(&self, _: &Path, _: &Image) -> Result<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn pnm_extension_is_case_insensitive() {
        assert!(is_pnm(Path::new("a.ppm")));
        assert!(is_pnm(Path::new("dir/b.PGM")));
        assert!(is_pnm(Path::new("c.PpM")));
        assert!(!is_pnm(Path::new("d.png")));
        assert!(!is_pnm(Path::new("ppm")));
    }

    #[test]
    fn save_and_load_pnm() {
        let path = temp_path("roundtrip.PPM");
        let img = test_image();
        let io = ImageIo::new();

        io.save(&path, &img).unwrap();
        let loaded = io.load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, img);
    }

    #[test]
    fn saved_file_contents() {
        let path = temp_path("contents.pgm");
        let img = Image::from_raw(2, 1, ColorModel::Gray, vec![1, 2]).unwrap();
        save_pnm(&path, &img).unwrap();
        let bytes = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(bytes, b"P5\n# CM_Gray\n2 1\n255\n\x01\x02");
    }

    #[test]
    fn unsupported_without_codec() {
        let io = ImageIo::new();
        let res = io.load(temp_path("x.png"));
        assert!(matches!(res, Err(Error::Unsupported(_))));
        let res = io.save(temp_path("x.png"), &test_image());
        assert!(matches!(res, Err(Error::Unsupported(_))));
    }

    #[test]
    fn external_codec_is_used_for_other_extensions() {
        let calls = Rc::new(Cell::new(0));
        let io = ImageIo::with_codec(Counting(calls.clone()));

        let img = io.load("whatever.png").unwrap();
        assert_eq!(img.pixel(0, 0), rgb(42, 42, 42));
        io.save("whatever.bmp", &test_image()).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn save_empty_fails() {
        let io = ImageIo::new();
        let res = io.save(temp_path("empty.ppm"), &Image::default());
        assert!(matches!(res, Err(Error::EmptyImage)));
        let res = save_pnm(temp_path("empty.ppm"), &Image::default());
        assert!(matches!(res, Err(Error::Pnm(pnm::Error::EmptyImage))));
    }

    #[test]
    fn load_missing_file_fails() {
        let res = load_pnm(temp_path("does-not-exist.ppm"));
        assert!(matches!(res, Err(Error::Io(_))));
    }

    #[test]
    fn load_into_failure_leaves_image_empty() {
        let path = temp_path("bad.ppm");
        fs::write(&path, b"P7\n1 1\n255\n\0").unwrap();

        let mut img = test_image();
        let res = ImageIo::new().load_into(&path, &mut img);
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            res,
            Err(Error::Pnm(pnm::Error::Unsupported([b'P', b'7'])))
        ));
        assert!(img.is_empty());
    }
}
