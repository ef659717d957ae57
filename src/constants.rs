//! Engine-wide constants.
//!
//! Centralizes magic numbers so interaction tuning lives in one place.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom sensitivity applied to wheel delta
pub const ZOOM_SENSITIVITY: f32 = 0.01;

// ============================================================================
// Annotation drawing
// ============================================================================

/// Stroke width of a freshly drawn line, in world units
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Hover/hit-test threshold in world units at zoom 1.0.
///
/// Divided by the current zoom before use so the hit target keeps a constant
/// screen size.
pub const HOVER_THRESHOLD: f32 = 10.0;

/// Diameter of a line handle in world units at zoom 1.0
pub const HANDLE_SIZE: f32 = 8.0;

// ============================================================================
// Auto-pan
// ============================================================================

/// Distance from a viewport edge (screen pixels) that arms auto-panning
pub const AUTO_PAN_EDGE_THRESHOLD: f32 = 50.0;

/// Base auto-pan rate in pixels per tick at full edge proximity
pub const AUTO_PAN_BASE_RATE: f32 = 10.0;

/// Auto-pan tick interval in milliseconds
pub const AUTO_PAN_TICK_MS: u64 = 10;

// ============================================================================
// Token grid
// ============================================================================

/// Default size of a grid cell in world units
pub const DEFAULT_CELL_SIZE: f32 = 50.0;
