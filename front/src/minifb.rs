//! Frontend using the `minifb` crate for window creation and event handling.

use log::debug;
use minifb::{MouseMode, WindowOptions};

use graphics2d_core::math::vec::vec2;
use graphics2d_core::util::image::Image;

use crate::{Control, Event, Handler, Input, Key, dispatch, to_xrgb};

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The title of the window, shown before any status text.
    pub title: String,
    /// Whether pressing Esc closes the window.
    pub quit_on_escape: bool,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: (u32, u32),
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub opts: WindowOptions,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: (800, 600),
            title: "// graphics2d //",
            target_fps: Some(60),
            opts: WindowOptions { resize: true, ..WindowOptions::default() },
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, w: u32, h: u32) -> Self {
        self.dims = (w, h);
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    pub fn build(self) -> minifb::Result<Window> {
        let Self { dims: (w, h), title, target_fps, opts } = self;
        let mut imp = minifb::Window::new(title, w as usize, h as usize, opts)?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        debug!("created {w}x{h} window \"{title}\"");
        Ok(Window {
            imp,
            title: title.into(),
            quit_on_escape: true,
        })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Returns the current width and height of the window.
    pub fn dims(&self) -> (u32, u32) {
        let (w, h) = self.imp.get_size();
        (w as u32, h as u32)
    }

    /// Runs the main loop, polling input and dispatching the resulting
    /// events to `handler`, then displaying `handler.image()`.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. titlebar close button);
    /// * the Esc key is pressed, unless `quit_on_escape` is false; or
    /// * the handler calls [`Control::quit`].
    ///
    /// [`Handler::on_close`] is invoked in every case before returning.
    /// The status text set by the handler is shown in the window title.
    ///
    /// # Errors
    /// If updating the window contents fails.
    pub fn run<H: Handler + ?Sized>(&mut self, handler: &mut H) -> minifb::Result<()> {
        let mut ctl = Control::default();
        let mut buf = Vec::new();
        // Start from the window size so that no initial resize is reported
        let mut prev = Input { dims: self.dims(), ..Input::default() };

        while self.imp.is_open() && !ctl.should_quit() {
            let input = self.input();
            for ev in input.diff(&prev) {
                if self.quit_on_escape
                    && ev == (Event::Key { key: Key::Escape, pressed: true })
                {
                    ctl.quit();
                }
                dispatch(handler, ev, &mut ctl);
            }
            prev = input;

            if ctl.take_status_changed() {
                let title = self.title_with(ctl.status());
                self.imp.set_title(&title);
            }
            self.present(handler.image(), &mut buf)?;
        }
        dispatch(handler, Event::Close, &mut ctl);
        debug!("main loop finished");
        Ok(())
    }

    fn present(&mut self, img: &Image, buf: &mut Vec<u32>) -> minifb::Result<()> {
        let (w, h) = if img.is_empty() {
            let (w, h) = self.dims();
            buf.resize(w as usize * h as usize, 0);
            (w, h)
        } else {
            img.dims()
        };
        to_xrgb(img, buf);
        self.imp.update_with_buffer(buf, w as usize, h as usize)
    }

    fn title_with(&self, status: &str) -> String {
        if status.is_empty() {
            self.title.clone()
        } else {
            format!("{} | {status}", self.title)
        }
    }

    /// Returns a snapshot of the current input state.
    fn input(&self) -> Input {
        let buttons = [
            minifb::MouseButton::Left,
            minifb::MouseButton::Middle,
            minifb::MouseButton::Right,
        ]
        .map(|b| self.imp.get_mouse_down(b));
        Input {
            keys: self.imp.get_keys().into_iter().map(map_key).collect(),
            buttons,
            mouse_pos: self
                .imp
                .get_mouse_pos(MouseMode::Discard)
                .map(|(x, y)| vec2(x, y)),
            dims: self.dims(),
        }
    }
}

/// Maps a minifb key code to a [`Key`].
fn map_key(key: minifb::Key) -> Key {
    use minifb::Key as K;
    const LETTERS: [K; 26] = [
        K::A, K::B, K::C, K::D, K::E, K::F, K::G, K::H, K::I, K::J, K::K,
        K::L, K::M, K::N, K::O, K::P, K::Q, K::R, K::S, K::T, K::U, K::V,
        K::W, K::X, K::Y, K::Z,
    ];
    const DIGITS: [K; 10] = [
        K::Key0, K::Key1, K::Key2, K::Key3, K::Key4, K::Key5, K::Key6,
        K::Key7, K::Key8, K::Key9,
    ];
    const NUMPAD: [K; 10] = [
        K::NumPad0, K::NumPad1, K::NumPad2, K::NumPad3, K::NumPad4,
        K::NumPad5, K::NumPad6, K::NumPad7, K::NumPad8, K::NumPad9,
    ];
    let offset = |keys: &[K]| keys.iter().position(|&k| k == key);
    if let Some(i) = offset(&LETTERS) {
        return Key::Char(char::from(b'a' + i as u8));
    }
    if let Some(i) = offset(&DIGITS).or_else(|| offset(&NUMPAD)) {
        return Key::Char(char::from(b'0' + i as u8));
    }
    match key {
        K::Escape => Key::Escape,
        K::Enter | K::NumPadEnter => Key::Enter,
        K::Backspace => Key::Backspace,
        K::Left => Key::Left,
        K::Right => Key::Right,
        K::Up => Key::Up,
        K::Down => Key::Down,
        K::PageUp => Key::PageUp,
        K::PageDown => Key::PageDown,
        K::Space => Key::Char(' '),
        K::Equal => Key::Char('='),
        K::Minus | K::NumPadMinus => Key::Char('-'),
        K::NumPadPlus => Key::Char('+'),
        K::Comma => Key::Char(','),
        K::Period | K::NumPadDot => Key::Char('.'),
        K::Slash | K::NumPadSlash => Key::Char('/'),
        K::NumPadAsterisk => Key::Char('*'),
        _ => Key::Other,
    }
}
