//! Frontends for creating simple interactive `graphics2d` applications.
//!
//! An application implements [`Handler`] to react to user input and to
//! provide the image to display. A window backend such as
//! [`minifb::Window`] polls the platform for input, turns it into
//! [`Event`]s, and [dispatches][dispatch] them to the handler.

use graphics2d_core::math::vec::Vec2;
use graphics2d_core::util::image::{ColorModel, Image};

#[cfg(feature = "minifb")]
pub mod minifb;

/// A keyboard key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// A key producing a printable character. Letters are lowercase.
    Char(char),
    Escape,
    Enter,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    /// Any other key.
    Other,
}

/// A mouse button.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A user input or window event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// A key was pressed or released.
    Key { key: Key, pressed: bool },
    /// A mouse button was pressed or released with the cursor at `pos`.
    MouseButton { button: MouseButton, pressed: bool, pos: Vec2 },
    /// The mouse cursor moved to `pos`.
    MouseMove(Vec2),
    /// The window was resized to the given width and height.
    Resize(u32, u32),
    /// The user requested the window to be closed.
    Close,
}

/// Context handle passed to every [`Handler`] callback.
///
/// Lets the handler request the main loop to stop and set a status text
/// to show to the user.
#[derive(Clone, Debug, Default)]
pub struct Control {
    quit: bool,
    status: String,
    status_changed: bool,
}

impl Control {
    /// Requests the main loop to stop after the current event.
    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Returns whether [`Control::quit`] has been called.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Returns the current status text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Sets the status text.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.status_changed = true;
    }

    /// Returns whether the status text was set since the last call, and
    /// resets the flag.
    pub fn take_status_changed(&mut self) -> bool {
        core::mem::take(&mut self.status_changed)
    }
}

/// Trait for interactive applications.
///
/// All event callbacks do nothing by default.
pub trait Handler {
    /// Returns the image to display in the window.
    ///
    /// Gray and RGB images are shown as is. An empty image shows as black.
    fn image(&self) -> &Image;

    /// Called when a key is pressed or released.
    fn on_key(&mut self, _key: Key, _pressed: bool, _ctl: &mut Control) {}

    /// Called when a mouse button is pressed or released.
    fn on_mouse_button(
        &mut self,
        _button: MouseButton,
        _pressed: bool,
        _pos: Vec2,
        _ctl: &mut Control,
    ) {
    }

    /// Called when the mouse cursor moves within the window.
    fn on_mouse_move(&mut self, _pos: Vec2, _ctl: &mut Control) {}

    /// Called when the window is resized.
    fn on_resize(&mut self, _width: u32, _height: u32, _ctl: &mut Control) {}

    /// Called when the window is about to close.
    fn on_close(&mut self, _ctl: &mut Control) {}
}

/// Invokes the callback of `handler` corresponding to `event`.
pub fn dispatch<H>(handler: &mut H, event: Event, ctl: &mut Control)
where
    H: Handler + ?Sized,
{
    match event {
        Event::Key { key, pressed } => handler.on_key(key, pressed, ctl),
        Event::MouseButton { button, pressed, pos } => {
            handler.on_mouse_button(button, pressed, pos, ctl)
        }
        Event::MouseMove(pos) => handler.on_mouse_move(pos, ctl),
        Event::Resize(w, h) => handler.on_resize(w, h, ctl),
        Event::Close => handler.on_close(ctl),
    }
}

/// Converts `img` to pixels in `0x00_RR_GG_BB` format.
///
/// Resizes `buf` to the number of pixels in `img`. Gray values are
/// replicated to all three channels; HSV data is passed through as if it
/// were RGB. If `img` is empty, `buf` keeps its length and is filled with
/// black.
pub fn to_xrgb(img: &Image, buf: &mut Vec<u32>) {
    if img.is_empty() {
        buf.fill(0);
        return;
    }
    buf.clear();
    match img.color_model() {
        ColorModel::Gray => buf.extend(img.data().iter().map(|&v| {
            let v = u32::from(v);
            v << 16 | v << 8 | v
        })),
        _ => buf.extend(img.data().chunks_exact(3).map(|px| {
            u32::from(px[0]) << 16 | u32::from(px[1]) << 8 | u32::from(px[2])
        })),
    }
}

/// A snapshot of the input state of a window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Input {
    /// Keys held down, in no particular order.
    pub keys: Vec<Key>,
    /// Whether the left, middle, and right mouse buttons are down.
    pub buttons: [bool; 3],
    /// The cursor position, or `None` if outside the window.
    pub mouse_pos: Option<Vec2>,
    /// The width and height of the window.
    pub dims: (u32, u32),
}

impl Input {
    const BUTTONS: [MouseButton; 3] =
        [MouseButton::Left, MouseButton::Middle, MouseButton::Right];

    /// Returns the events that happened between `prev` and `self`.
    ///
    /// The events are returned in the order resize, key releases, key
    /// presses, mouse motion, and mouse buttons. Button events carry the
    /// current cursor position, or the last known one if the cursor has
    /// left the window.
    pub fn diff(&self, prev: &Input) -> Vec<Event> {
        let mut events = Vec::new();
        if self.dims != prev.dims {
            events.push(Event::Resize(self.dims.0, self.dims.1));
        }
        for &key in &prev.keys {
            if !self.keys.contains(&key) {
                events.push(Event::Key { key, pressed: false });
            }
        }
        for &key in &self.keys {
            if !prev.keys.contains(&key) {
                events.push(Event::Key { key, pressed: true });
            }
        }
        let moved = self.mouse_pos.filter(|&p| prev.mouse_pos != Some(p));
        if let Some(pos) = moved {
            events.push(Event::MouseMove(pos));
        }
        let pos = self.mouse_pos.or(prev.mouse_pos).unwrap_or_default();
        for (i, button) in Self::BUTTONS.into_iter().enumerate() {
            let pressed = self.buttons[i];
            if pressed != prev.buttons[i] {
                events.push(Event::MouseButton { button, pressed, pos });
            }
        }
        events
    }
}
