//! Game board facade: wires the store, viewport, and editor together and
//! consumes raw input events.
//!
//! Event routing mirrors the surface's two interaction modes: in pan mode a
//! left-button drag started on the grid pans the viewport (inverted, content
//! follows the pointer); in draw mode clicks go to the annotation editor.
//! Wheel input pans unless the zoom chord (ctrl/platform) is held. Every
//! committed annotation set is handed to the persistence collaborator.

use crate::constants::ZOOM_SENSITIVITY;
use crate::editor::AnnotationEditor;
use crate::input::coords::{CalibrationOffset, CoordinateContext, CoordinateConverter};
use crate::input::events::{Key, PointerButton, PointerEvent, WheelEvent};
use crate::store::{Action, GridState, GridStore};
use crate::tokens::{self, DropPayload};
use crate::types::{AnnotationSet, Line, Mode, Point, Size};
use crate::viewport::ViewportController;

/// Initial state handed to the engine by the persistence collaborator.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Snapshot {
    pub annotations: Vec<Line>,
    pub zoom_level: f32,
    pub mode: Mode,
    pub viewport_size: Size,
    pub content_size: Size,
}

/// Persistence seam. The engine emits the complete updated annotation set on
/// every commit; storage format and sync cadence are the collaborator's
/// problem. Failures are logged and never interrupt the interaction.
pub trait AnnotationSink {
    fn persist(&mut self, annotations: &AnnotationSet) -> anyhow::Result<()>;
}

/// Discards every snapshot; useful for tests and previews.
#[derive(Debug, Default)]
pub struct NullSink;

impl AnnotationSink for NullSink {
    fn persist(&mut self, _annotations: &AnnotationSet) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Pan drag tracking for pan mode.
#[derive(Debug, Default)]
enum PanDrag {
    #[default]
    Idle,
    Panning {
        last_pos: Point,
    },
}

pub struct GameBoard<S> {
    store: GridStore,
    viewport: ViewportController,
    editor: AnnotationEditor,
    sink: S,
    pan_drag: PanDrag,
    calibration: CalibrationOffset,
}

impl<S: AnnotationSink> GameBoard<S> {
    pub fn new(snapshot: Snapshot, sink: S) -> Self {
        let mut store = GridStore::default();
        store.dispatch(Action::SetDimensions(snapshot.content_size));
        store.dispatch(Action::SetZoomLevel(snapshot.zoom_level));
        store.dispatch(Action::SetMode(snapshot.mode));
        store.dispatch(Action::SetCanvas(AnnotationSet::from_lines(
            snapshot.annotations,
        )));

        let mut viewport = ViewportController::new(snapshot.viewport_size, snapshot.content_size);
        viewport.reclamp(snapshot.zoom_level);

        Self {
            store,
            viewport,
            editor: AnnotationEditor::new(),
            sink,
            pan_drag: PanDrag::Idle,
            calibration: CalibrationOffset::default(),
        }
    }

    pub fn state(&self) -> &GridState {
        self.store.state()
    }

    pub fn annotations(&self) -> &AnnotationSet {
        self.store.annotations()
    }

    pub fn store_mut(&mut self) -> &mut GridStore {
        &mut self.store
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn editor(&self) -> &AnnotationEditor {
        &self.editor
    }

    pub fn mode(&self) -> Mode {
        self.store.state().mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.store.dispatch(Action::SetMode(mode));
    }

    /// Override the stroke-alignment calibration offset applied during
    /// screen-to-world conversion.
    pub fn set_calibration(&mut self, calibration: CalibrationOffset) {
        self.calibration = calibration;
    }

    fn zoom(&self) -> f32 {
        self.store.state().zoom_level
    }

    /// All geometry is a no-op until both the container and the content have
    /// real dimensions.
    fn surface_ready(&self) -> bool {
        !self.store.state().dimensions.is_degenerate()
            && !self.viewport.viewport_size().is_degenerate()
    }

    fn to_world(&self, screen: Point) -> Point {
        let ctx = CoordinateContext::new(self.viewport.position(), self.zoom())
            .with_calibration(self.calibration);
        CoordinateConverter::screen_to_world(screen, &ctx)
    }

    // ------------------------------------------------------------------
    // Raw event handlers
    // ------------------------------------------------------------------

    pub fn on_pointer_down(&mut self, event: PointerEvent) {
        let is_left = event.button == PointerButton::Left;
        if self.mode() == Mode::Pan && is_left && event.on_grid {
            self.pan_drag = PanDrag::Panning {
                last_pos: event.position,
            };
        }
    }

    pub fn on_pointer_move(&mut self, event: PointerEvent) {
        if let PanDrag::Panning { last_pos } = self.pan_drag {
            let delta = event.position - last_pos;
            let zoom = self.zoom();
            self.viewport.pan(delta.x, delta.y, true, zoom);
            self.pan_drag = PanDrag::Panning {
                last_pos: event.position,
            };
            return;
        }

        if self.mode() != Mode::Draw || !self.surface_ready() {
            return;
        }

        let world = self.to_world(event.position);
        let zoom = self.zoom();
        self.editor.pointer_moved(world, zoom, &mut self.store);
        self.viewport
            .update_auto_pan(event.position, zoom, self.editor.is_drawing());
    }

    pub fn on_pointer_up(&mut self, _event: PointerEvent) {
        self.pan_drag = PanDrag::Idle;
    }

    /// A click in draw mode either grabs a handle of the hovered line,
    /// anchors a new provisional line, or commits the one in progress.
    pub fn on_click(&mut self, event: PointerEvent) {
        if self.mode() != Mode::Draw || !self.surface_ready() {
            return;
        }

        let world = self.to_world(event.position);
        let zoom = self.zoom();

        if let Some((id, handle)) = self.editor.handle_under_cursor(world, zoom, &self.store) {
            self.editor.begin_edit(id, handle, &mut self.store);
            return;
        }

        if self.editor.handle_click(world, &mut self.store) {
            self.viewport.stop_auto_pan();
            self.persist();
        }
    }

    pub fn on_wheel(&mut self, event: WheelEvent) {
        if !self.surface_ready() {
            return;
        }

        let zoom = self.zoom();
        if event.modifiers.is_zoom_chord() {
            let new_zoom = self
                .viewport
                .zoom_at_center(event.delta_y, ZOOM_SENSITIVITY, zoom);
            if new_zoom != zoom {
                self.store.dispatch(Action::SetZoomLevel(new_zoom));
            }
        } else {
            self.viewport.pan(event.delta_x, event.delta_y, false, zoom);
        }
    }

    pub fn on_key_down(&mut self, key: Key) {
        match key {
            Key::Escape => {
                self.editor.cancel(&mut self.store);
                self.viewport.stop_auto_pan();
            }
            Key::Shift => {
                if self.mode() == Mode::Draw {
                    self.editor.set_hover_suppressed(true, &mut self.store);
                }
            }
        }
    }

    pub fn on_key_up(&mut self, key: Key) {
        if key == Key::Shift && self.mode() == Mode::Draw {
            self.editor.set_hover_suppressed(false, &mut self.store);
        }
    }

    /// One tick of the auto-pan interval. Advances the viewport and keeps
    /// the in-progress line's endpoint pinned under the cursor. No-op when
    /// auto-pan is inactive.
    pub fn tick_auto_pan(&mut self) {
        let zoom = self.zoom();
        if let Some((dx, dy)) = self.viewport.auto_pan_tick(zoom) {
            self.editor.nudge_active_endpoint(dx, dy);
        }
    }

    /// Handle a token drop at a screen position. Malformed payloads are
    /// ignored; no state changes.
    pub fn on_token_drop(&mut self, raw_payload: &str, position: Point) {
        let payload: DropPayload = match tokens::parse_drop_payload(raw_payload) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::debug!(%error, "ignoring drop");
                return;
            }
        };

        let offset = position - self.viewport.position();
        let state = self.store.state();
        let (row, col) = tokens::cell_at(offset.x, offset.y, state.cell_size, state.zoom_level);

        if !payload.new_token {
            self.store.dispatch(Action::RemoveToken {
                row: payload.row,
                col: payload.col,
            });
        }
        self.store.dispatch(Action::AddToken {
            row,
            col,
            token: payload.token,
        });
    }

    pub fn set_viewport_size(&mut self, size: Size) {
        let zoom = self.zoom();
        self.viewport.set_viewport_size(size, zoom);
    }

    pub fn set_content_size(&mut self, size: Size) {
        let zoom = self.zoom();
        self.viewport.set_content_size(size, zoom);
        self.store.dispatch(Action::SetDimensions(size));
    }

    fn persist(&mut self) {
        if let Err(error) = self.sink.persist(self.store.annotations()) {
            tracing::warn!(%error, "failed to persist annotations");
        }
    }
}
