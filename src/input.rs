//! Input model: modifier keys, buttons, focus, and the viewport gesture state machine.
//!
//! `Gesture` is the active interaction tracked between its begin and end
//! events. Each active variant carries the gesture origin needed to compute
//! deltas relative to where the gesture started, and is discarded on end.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// Coarse interaction mode exposed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Panning,
    Pinching,
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or a single-finger tap).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key as reported by the browser (`KeyboardEvent.key`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_space(&self) -> bool {
        self.0 == " " || self.0 == "Spacebar"
    }
}

/// Where keyboard focus was when a key event fired.
///
/// Shortcuts are suppressed while the user is typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// An `<input>` or `<textarea>`.
    TextInput,
    #[default]
    Other,
}

/// The in-flight gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Single pointer drag.
    Panning {
        /// Pointer position when the pan began.
        start_pointer: Point,
        /// Pan offset when the pan began.
        start_pan: Point,
    },
    /// Two-touch pinch.
    Pinching {
        /// Distance between the two touches when the pinch began.
        start_distance: f64,
        /// Midpoint of the two touches when the pinch began. Recorded but not
        /// used for anchoring: zoom stays centered on the container.
        start_mid: Point,
        /// Zoom when the pinch began.
        start_zoom: f64,
        /// Pan offset when the pinch began.
        start_pan: Point,
    },
}

impl Gesture {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::Panning { .. } => InteractionMode::Panning,
            Self::Pinching { .. } => InteractionMode::Pinching,
        }
    }
}
