//! Line annotation editor: drawing, hovering, and handle-based editing.
//!
//! Click-click interaction: the first click anchors a provisional line, the
//! second commits it into the annotation set. Clicking a handle of a hovered
//! committed line reopens it — the line is removed from the set, a restore
//! copy is saved, and the interaction proceeds exactly like drawing, with
//! Escape as single-step cancel.

use crate::constants::DEFAULT_LINE_WIDTH;
use crate::hit_testing;
use crate::input::DrawState;
use crate::store::{Action, GridStore};
use crate::types::{Handle, Line, LineColor, LineId, Point};

/// The drawing/editing state machine plus hover tracking.
#[derive(Debug, Default)]
pub struct AnnotationEditor {
    draw: DrawState,
    hovered_line: Option<LineId>,
    hover_suppressed: bool,
}

impl AnnotationEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.draw.is_drawing()
    }

    pub fn current_line(&self) -> Option<&Line> {
        self.draw.current_line()
    }

    pub fn hovered_line(&self) -> Option<LineId> {
        self.hovered_line
    }

    pub fn is_hover_suppressed(&self) -> bool {
        self.hover_suppressed
    }

    /// First click anchors a provisional line; second click commits it with
    /// color reset to normal. Returns true when a line was committed.
    pub fn handle_click(&mut self, world: Point, store: &mut GridStore) -> bool {
        if !self.draw.is_drawing() {
            tracing::debug!(x = world.x, y = world.y, "start line");
            self.draw
                .start_new(Line::anchored_at(world, DEFAULT_LINE_WIDTH));
            return false;
        }

        let Some((line, _original)) = self.draw.take() else {
            return false;
        };

        let committed = line.with_color(LineColor::Normal);
        tracing::debug!(id = %committed.id, "commit line");

        let mut canvas = store.annotations().clone();
        canvas.push(committed);
        store.dispatch(Action::SetCanvas(canvas));
        true
    }

    /// Reopen a committed line for editing through one of its handles. The
    /// line leaves the annotation set and a restore copy is kept for cancel.
    /// Returns false when the id is no longer in the set.
    pub fn begin_edit(&mut self, id: LineId, handle: Handle, store: &mut GridStore) -> bool {
        let mut canvas = store.annotations().clone();
        let Some(line) = canvas.remove(id) else {
            return false;
        };
        tracing::debug!(id = %id, ?handle, "edit line");

        store.dispatch(Action::SetCanvas(canvas));
        self.hovered_line = None;
        self.draw.start_edit(line, handle);
        true
    }

    /// Pointer moved over the surface (world coordinates).
    ///
    /// While idle this runs hover detection and recolors the set; while
    /// drawing it moves the active endpoint, flagging the provisional line
    /// as aligned whenever it is exactly horizontal or vertical relative to
    /// its anchor.
    pub fn pointer_moved(&mut self, world: Point, zoom: f32, store: &mut GridStore) {
        if self.draw.is_drawing() {
            let aligned = self
                .draw
                .anchor()
                .is_some_and(|anchor| anchor.x == world.x || anchor.y == world.y);
            let color = if aligned {
                LineColor::Aligned
            } else {
                LineColor::Normal
            };
            self.draw.move_active_endpoint(world, color);
            return;
        }

        if self.hover_suppressed {
            return;
        }

        let threshold = hit_testing::hover_threshold(zoom);
        let hovered = hit_testing::scan(store.annotations(), world, threshold, self.hovered_line);
        if hovered != self.hovered_line {
            self.hovered_line = hovered;
            self.apply_hover_colors(store);
        }
    }

    /// Which handle of the hovered line the cursor is over, if any. Handles
    /// only exist for the hovered line, and not while suppressed.
    pub fn handle_under_cursor(
        &self,
        world: Point,
        zoom: f32,
        store: &GridStore,
    ) -> Option<(LineId, Handle)> {
        if self.hover_suppressed {
            return None;
        }
        let id = self.hovered_line?;
        let line = store.annotations().get(id)?;
        let threshold = hit_testing::hover_threshold(zoom);
        hit_testing::handle_at(line, world, threshold).map(|handle| (id, handle))
    }

    /// Escape: discard a brand-new provisional line, or restore the saved
    /// original of a reopened one. The annotation set is left exactly as it
    /// was before the interaction began.
    pub fn cancel(&mut self, store: &mut GridStore) {
        match self.draw.take() {
            None => {}
            Some((line, None)) => {
                tracing::debug!(id = %line.id, "cancel new line");
            }
            Some((line, Some(original))) => {
                tracing::debug!(id = %line.id, "cancel edit, restoring original");
                let mut canvas = store.annotations().clone();
                canvas.push(original);
                store.dispatch(Action::SetCanvas(canvas));
            }
        }
    }

    /// Toggle hover suppression (modifier hold). Suppressing forces every
    /// line back to normal color; releasing restores the highlight for
    /// whatever line was last hovered.
    pub fn set_hover_suppressed(&mut self, suppressed: bool, store: &mut GridStore) {
        if self.hover_suppressed == suppressed {
            return;
        }
        self.hover_suppressed = suppressed;

        if suppressed {
            let canvas = store.annotations().recolored(|_| LineColor::Normal);
            store.dispatch(Action::SetCanvas(canvas));
        } else if let Some(id) = self.hovered_line {
            let canvas = store.annotations().recolored(|line| {
                if line.id == id {
                    LineColor::Highlighted
                } else {
                    line.color
                }
            });
            store.dispatch(Action::SetCanvas(canvas));
        }
    }

    /// Advance the in-progress line's active endpoint by an auto-pan delta
    /// so it stays visually pinned under the cursor.
    pub fn nudge_active_endpoint(&mut self, dx: f32, dy: f32) {
        self.draw.nudge_active_endpoint(dx, dy);
    }

    /// Recolor the set for the current hover: the hovered line highlighted,
    /// everything else back to normal.
    fn apply_hover_colors(&self, store: &mut GridStore) {
        let canvas = match self.hovered_line {
            Some(id) => store.annotations().recolored(|line| {
                if line.id == id {
                    LineColor::Highlighted
                } else {
                    LineColor::Normal
                }
            }),
            None => store.annotations().recolored(|line| {
                if line.color == LineColor::Highlighted {
                    LineColor::Normal
                } else {
                    line.color
                }
            }),
        };
        store.dispatch(Action::SetCanvas(canvas));
    }
}
