//! Raw input event types.
//!
//! The engine is rendering-agnostic; the host translates whatever its UI
//! toolkit delivers into these plain records.

use crate::types::Point;

/// Modifier keys held during an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    /// Command on macOS, Windows key elsewhere
    pub platform: bool,
}

impl Modifiers {
    /// Wheel input zooms instead of panning while either of these is held.
    pub fn is_zoom_chord(&self) -> bool {
        self.control || self.platform
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// A pointer down/move/up/click event in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    /// True when the event target is the grid surface itself rather than an
    /// overlay; drag-to-pan only starts on the grid.
    pub on_grid: bool,
}

impl PointerEvent {
    pub fn left_at(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Left,
            modifiers: Modifiers::default(),
            on_grid: true,
        }
    }
}

/// A wheel/scroll event in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub delta_x: f32,
    pub delta_y: f32,
    pub modifiers: Modifiers,
}

/// The keyboard inputs the engine consumes: a single cancel binding and a
/// single hover-suppression modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Shift,
}
