//! Draw/edit state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Drawing { editing: None }        (click on empty canvas)
//! Idle -> Drawing { editing: Some(h) }     (click on handle h of a line)
//!
//! Drawing -> Idle                          (second click commits)
//! Drawing -> Idle                          (Escape cancels; edits restore
//!                                           the saved original)
//! ```

use crate::types::{Handle, Line, LineColor, Point};

/// Current drawing interaction. A provisional line lives here until it is
/// committed into the annotation set.
#[derive(Clone, Debug, Default)]
pub enum DrawState {
    /// No line in progress
    #[default]
    Idle,

    /// A provisional line follows the pointer
    Drawing {
        /// The in-progress line
        line: Line,
        /// Which handle is being moved when reopening a committed line;
        /// `None` for a brand-new line (the end point is free)
        editing: Option<Handle>,
        /// Restore point for cancel, present only for edits
        original: Option<Line>,
    },
}

impl DrawState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Begin drawing a brand-new line anchored at a click point.
    pub fn start_new(&mut self, line: Line) {
        *self = Self::Drawing {
            line,
            editing: None,
            original: None,
        };
    }

    /// Reopen a committed line for editing, saving a restore copy.
    pub fn start_edit(&mut self, line: Line, handle: Handle) {
        let original = line.clone().with_color(LineColor::Normal);
        *self = Self::Drawing {
            line,
            editing: Some(handle),
            original: Some(original),
        };
    }

    /// The in-progress line, if any.
    pub fn current_line(&self) -> Option<&Line> {
        match self {
            Self::Drawing { line, .. } => Some(line),
            Self::Idle => None,
        }
    }

    /// Which handle the pointer is moving: the tagged one for edits, the end
    /// point for fresh lines.
    pub fn active_handle(&self) -> Option<Handle> {
        match self {
            Self::Drawing { editing, .. } => Some(editing.unwrap_or(Handle::End)),
            Self::Idle => None,
        }
    }

    /// The fixed endpoint opposite the one being moved.
    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Drawing { line, editing, .. } => {
                let moving = editing.unwrap_or(Handle::End);
                let fixed = match moving {
                    Handle::Start => Handle::End,
                    Handle::End => Handle::Start,
                };
                Some(line.endpoint(fixed))
            }
            Self::Idle => None,
        }
    }

    /// Move the active endpoint to an absolute world position and set the
    /// provisional color.
    pub fn move_active_endpoint(&mut self, point: Point, color: LineColor) {
        if let Self::Drawing { line, editing, .. } = self {
            let handle = editing.unwrap_or(Handle::End);
            line.set_endpoint(handle, point);
            line.color = color;
        }
    }

    /// Advance the active endpoint by a delta, keeping color unchanged.
    /// Used by auto-pan to keep the endpoint pinned under the cursor.
    pub fn nudge_active_endpoint(&mut self, dx: f32, dy: f32) {
        if let Self::Drawing { line, editing, .. } = self {
            let handle = editing.unwrap_or(Handle::End);
            let moved = line.endpoint(handle) + Point::new(dx, dy);
            line.set_endpoint(handle, moved);
        }
    }

    /// Finish the interaction, returning the provisional line and, for
    /// edits, the saved original.
    pub fn take(&mut self) -> Option<(Line, Option<Line>)> {
        match std::mem::take(self) {
            Self::Drawing { line, original, .. } => Some((line, original)),
            Self::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
