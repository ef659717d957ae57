//! Reducer-style state container for the drawing surface.
//!
//! Single source of truth for the annotation set, zoom level, interaction
//! mode, grid geometry, and token occupancy. Every mutation flows through a
//! named [`Action`] and the pure [`reduce`] transition; no component mutates
//! the state directly.
//!
//! The viewport's pan `position` is deliberately *not* held here. It changes
//! on every pointer move while dragging, and keeping it in the store would
//! re-render every unrelated consumer; it lives in the
//! [`ViewportController`](crate::viewport::ViewportController) instead.

use crate::constants::DEFAULT_CELL_SIZE;
use crate::tokens::{TokenGrid, TokenRecord};
use crate::types::{AnnotationSet, Mode, Size};
use serde::{Deserialize, Serialize};

/// Canonical shared state of the drawing surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridState {
    /// Committed line annotations
    pub canvas: AnnotationSet,
    /// Zoom factor, kept within [0.1, 5.0] by the viewport controller
    pub zoom_level: f32,
    /// Whether pointer input draws or pans
    pub mode: Mode,
    /// Content pixel dimensions of the drawing surface
    pub dimensions: Size,
    /// Edge length of one grid cell in world units
    pub cell_size: f32,
    /// Number of grid rows, derived from dimensions and cell size
    pub rows: usize,
    /// Number of grid columns, derived from dimensions and cell size
    pub cols: usize,
    /// Token occupancy, one slot per cell
    pub grid: TokenGrid,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            canvas: AnnotationSet::new(),
            zoom_level: 1.0,
            mode: Mode::Pan,
            dimensions: Size::default(),
            cell_size: DEFAULT_CELL_SIZE,
            rows: 0,
            cols: 0,
            grid: TokenGrid::default(),
        }
    }
}

/// Named state transitions.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Replace the annotation set wholesale
    SetCanvas(AnnotationSet),
    SetZoomLevel(f32),
    SetMode(Mode),
    /// Update content dimensions; recomputes rows/cols and rebuilds the
    /// (empty) token grid
    SetDimensions(Size),
    /// Update cell size; recomputes rows/cols
    SetCellSize(f32),
    AddToken {
        row: usize,
        col: usize,
        token: TokenRecord,
    },
    RemoveToken {
        row: usize,
        col: usize,
    },
}

fn derived_grid_counts(dimensions: Size, cell_size: f32) -> (usize, usize) {
    if cell_size <= 0.0 {
        return (0, 0);
    }
    let rows = (dimensions.height / cell_size).ceil().max(0.0) as usize;
    let cols = (dimensions.width / cell_size).ceil().max(0.0) as usize;
    (rows, cols)
}

/// Pure state transition. Consumes the previous state and returns the next;
/// unknown combinations fall through unchanged.
pub fn reduce(mut state: GridState, action: Action) -> GridState {
    match action {
        Action::SetCanvas(canvas) => {
            state.canvas = canvas;
        }
        Action::SetZoomLevel(zoom_level) => {
            state.zoom_level = zoom_level;
        }
        Action::SetMode(mode) => {
            state.mode = mode;
        }
        Action::SetDimensions(dimensions) => {
            let (rows, cols) = derived_grid_counts(dimensions, state.cell_size);
            state.dimensions = dimensions;
            state.rows = rows;
            state.cols = cols;
            state.grid = TokenGrid::new(rows, cols);
        }
        Action::SetCellSize(cell_size) => {
            let (rows, cols) = derived_grid_counts(state.dimensions, cell_size);
            state.cell_size = cell_size;
            state.rows = rows;
            state.cols = cols;
        }
        Action::AddToken { row, col, token } => {
            state.grid.place(row, col, token);
        }
        Action::RemoveToken { row, col } => {
            state.grid.take(row, col);
        }
    }
    state
}

/// Owned state container with a dispatch handle. Passed by reference to the
/// components that need it; there is no ambient singleton.
#[derive(Clone, Debug, Default)]
pub struct GridStore {
    state: GridState,
}

impl GridStore {
    pub fn new(state: GridState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn annotations(&self) -> &AnnotationSet {
        &self.state.canvas
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, action);
    }
}
