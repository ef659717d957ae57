//! Viewport transform control: panning, zooming, clamping, and the
//! edge-triggered auto-pan task.
//!
//! The pan `position` is screen-space, high-frequency UI state and lives
//! here rather than in the state store; the canonical zoom level stays in
//! the store and is passed into every operation, so there is exactly one
//! authoritative copy of each value.
//!
//! Auto-pan is modeled as an explicit cancellable repeating task: the host
//! drives [`ViewportController::auto_pan_tick`] on a fixed interval
//! ([`AUTO_PAN_TICK_MS`](crate::constants::AUTO_PAN_TICK_MS)) while
//! [`ViewportController::is_auto_panning`] is true, and the task is torn
//! down by `update_auto_pan` the moment its trigger condition ends. A tick
//! arriving after deactivation is a no-op.

use crate::constants::{AUTO_PAN_BASE_RATE, AUTO_PAN_EDGE_THRESHOLD, MAX_ZOOM, MIN_ZOOM};
use crate::types::{Point, Size};

/// Which viewport edges the content is already flush against. Auto-pan
/// never pushes past a fully panned edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PannedEdges {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
}

/// Active auto-pan state. Per-tick deltas accelerate by the signed rate
/// while the pointer stays at the edge.
#[derive(Clone, Copy, Debug)]
struct AutoPan {
    dx: f32,
    dy: f32,
    rate_x: f32,
    rate_y: f32,
}

/// Owns the pan offset and all viewport math. Zoom is read from the state
/// store and passed in by the caller.
#[derive(Debug)]
pub struct ViewportController {
    position: Point,
    viewport: Size,
    content: Size,
    auto_pan: Option<AutoPan>,
}

impl ViewportController {
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            position: Point::ZERO,
            viewport,
            content,
            auto_pan: None,
        }
    }

    /// Screen-space offset applied to the content before scaling.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn set_viewport_size(&mut self, viewport: Size, zoom: f32) {
        self.viewport = viewport;
        self.reclamp(zoom);
    }

    pub fn set_content_size(&mut self, content: Size, zoom: f32) {
        self.content = content;
        self.reclamp(zoom);
    }

    /// Re-apply the clamp/center rule without moving, e.g. after a zoom or
    /// resize changed the effective content size.
    pub fn reclamp(&mut self, zoom: f32) {
        self.pan(0.0, 0.0, false, zoom);
    }

    /// Pan by a pointer or wheel delta.
    ///
    /// `inverted` is true for drag-to-pan (content follows the pointer) and
    /// false for wheel scrolling (content moves opposite the delta).
    pub fn pan(&mut self, dx: f32, dy: f32, inverted: bool, zoom: f32) {
        let candidate = if inverted {
            Point::new(self.position.x + dx, self.position.y + dy)
        } else {
            Point::new(self.position.x - dx, self.position.y - dy)
        };

        if let Some(clamped) = self.clamp_or_center(candidate, zoom) {
            self.position = clamped;
        }
    }

    /// Clamp a candidate position so the scaled content never fully leaves
    /// the viewport, or center it when it fits. `None` when either size is
    /// degenerate, in which case the previous transform stands.
    pub fn clamp_or_center(&self, candidate: Point, zoom: f32) -> Option<Point> {
        if self.viewport.is_degenerate() || self.content.is_degenerate() {
            return None;
        }

        let effective_width = self.content.width * zoom;
        let effective_height = self.content.height * zoom;

        let x = if effective_width <= self.viewport.width {
            (self.viewport.width - effective_width) / 2.0
        } else {
            candidate.x.clamp(self.viewport.width - effective_width, 0.0)
        };

        let y = if effective_height <= self.viewport.height {
            (self.viewport.height - effective_height) / 2.0
        } else {
            candidate
                .y
                .clamp(self.viewport.height - effective_height, 0.0)
        };

        Some(Point::new(x, y))
    }

    /// Zoom by a wheel delta, anchored at the viewport center, and return
    /// the new zoom level (clamped to [0.1, 5.0]).
    ///
    /// The position is rescaled but not re-clamped here; clamping happens on
    /// the next pan or explicit `reclamp`, so the anchor point stays put for
    /// the frame the zoom lands on.
    pub fn zoom_at_center(&mut self, delta_y: f32, sensitivity: f32, zoom: f32) -> f32 {
        let new_zoom = (zoom - delta_y * sensitivity).clamp(MIN_ZOOM, MAX_ZOOM);
        if self.viewport.is_degenerate() || new_zoom == zoom {
            return new_zoom;
        }

        let scale = new_zoom / zoom;
        self.position = Point::new(
            self.position.x * scale + (1.0 - scale) * self.viewport.width / 2.0,
            self.position.y * scale + (1.0 - scale) * self.viewport.height / 2.0,
        );
        new_zoom
    }

    /// Which edges the content is flush against at the current position.
    pub fn fully_panned(&self, zoom: f32) -> PannedEdges {
        let effective_width = self.content.width * zoom;
        let effective_height = self.content.height * zoom;

        PannedEdges {
            right: self.position.x + effective_width <= self.viewport.width,
            left: self.position.x >= 0.0,
            up: self.position.y >= 0.0,
            down: self.position.y + effective_height <= self.viewport.height,
        }
    }

    // ------------------------------------------------------------------
    // Auto-pan
    // ------------------------------------------------------------------

    /// Arm, retune, or cancel the auto-pan task from the latest pointer
    /// position (screen coordinates). Active only while a line draw is in
    /// progress and the pointer sits within the edge threshold of an edge
    /// that still has room to pan.
    pub fn update_auto_pan(&mut self, pointer: Point, zoom: f32, drawing: bool) {
        if !drawing || self.viewport.is_degenerate() {
            self.stop_auto_pan();
            return;
        }

        let threshold = AUTO_PAN_EDGE_THRESHOLD;
        let near_right = pointer.x >= self.viewport.width - threshold;
        let near_left = pointer.x <= threshold;
        let near_top = pointer.y <= threshold;
        let near_bottom = pointer.y >= self.viewport.height - threshold;

        if !(near_right || near_left || near_top || near_bottom) {
            self.stop_auto_pan();
            return;
        }

        // Speed scales linearly with how far past the threshold the pointer
        // is, from 0 at the threshold line to the base rate at the edge.
        let rate_toward = |past: f32| (past.abs() / threshold) * AUTO_PAN_BASE_RATE;
        let edges = self.fully_panned(zoom);

        let rate_x = if near_right && !edges.right {
            rate_toward(pointer.x - self.viewport.width + threshold)
        } else if near_left && !edges.left {
            -rate_toward(pointer.x - threshold)
        } else {
            0.0
        };

        let rate_y = if near_top && !edges.up {
            -rate_toward(pointer.y - threshold)
        } else if near_bottom && !edges.down {
            rate_toward(pointer.y - self.viewport.height + threshold)
        } else {
            0.0
        };

        if rate_x == 0.0 && rate_y == 0.0 {
            self.stop_auto_pan();
            return;
        }

        self.auto_pan = Some(AutoPan {
            dx: rate_x,
            dy: rate_y,
            rate_x,
            rate_y,
        });
    }

    /// One auto-pan tick: pans the viewport, accelerates, and returns the
    /// screen-space delta the in-progress line's active endpoint must
    /// advance by to stay pinned under the cursor. `None` when the task is
    /// not active.
    pub fn auto_pan_tick(&mut self, zoom: f32) -> Option<(f32, f32)> {
        let auto_pan = self.auto_pan.as_mut()?;
        let (dx, dy) = (auto_pan.dx, auto_pan.dy);
        auto_pan.dx += auto_pan.rate_x;
        auto_pan.dy += auto_pan.rate_y;

        self.pan(dx, dy, false, zoom);
        Some((dx, dy))
    }

    /// Cancel the auto-pan task. Idempotent; called from every code path
    /// that ends the trigger condition (pointer retreat, commit, cancel).
    pub fn stop_auto_pan(&mut self) {
        self.auto_pan = None;
    }

    pub fn is_auto_panning(&self) -> bool {
        self.auto_pan.is_some()
    }
}
