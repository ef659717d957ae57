//! Token grid occupancy and the drag-and-drop payload.
//!
//! The token grid is collaborator data colocated in the state store: a 2D
//! array of cells, each optionally occupied by a token. Tokens arrive via the
//! platform's native drag payload channel as a JSON object; malformed
//! payloads are ignored without mutating state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a tabletop token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Player,
    Enemy,
    Npc,
    Item,
}

/// A token occupying a grid cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

/// Drag-and-drop payload carried when a token is dropped onto the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPayload {
    /// True when the token comes from the palette rather than another cell
    pub new_token: bool,
    pub token: TokenRecord,
    /// Source row, meaningful only when `new_token` is false
    pub row: usize,
    /// Source column, meaningful only when `new_token` is false
    pub col: usize,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed drop payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse a raw drop payload. Callers ignore the drop on error.
pub fn parse_drop_payload(raw: &str) -> Result<DropPayload, PayloadError> {
    Ok(serde_json::from_str(raw)?)
}

/// Map a drop position (pixels relative to the grid's top-left corner) to a
/// grid cell, accounting for zoom.
pub fn cell_at(x: f32, y: f32, cell_size: f32, zoom: f32) -> (usize, usize) {
    let col = (x / cell_size / zoom).floor().max(0.0) as usize;
    let row = (y / cell_size / zoom).floor().max(0.0) as usize;
    (row, col)
}

/// 2D occupancy grid. Dimensions are derived from the content size and cell
/// size by the reducer; resizing drops all occupants, matching the source
/// behavior of rebuilding the grid on dimension changes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenGrid {
    cells: Vec<Vec<Option<TokenRecord>>>,
}

impl TokenGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![None; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&TokenRecord> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    /// Place a token, overwriting any occupant. Out-of-bounds cells are
    /// ignored.
    pub fn place(&mut self, row: usize, col: usize, token: TokenRecord) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = Some(token);
        }
    }

    /// Clear a cell, returning its occupant if any.
    pub fn take(&mut self, row: usize, col: usize) -> Option<TokenRecord> {
        self.cells.get_mut(row)?.get_mut(col)?.take()
    }
}
