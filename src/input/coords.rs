//! Coordinate conversion between screen space and world space.
//!
//! Centralizes the conversion formulas so input handling never duplicates
//! them. All functions are pure; converting a world point back to screen
//! space with the same context reproduces the original screen point within
//! floating-point tolerance.

use crate::types::Point;

/// Small fixed offset applied after the zoom division to compensate for
/// stroke rendering alignment. A rendering convention, not a geometric
/// necessity, hence configurable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationOffset {
    pub x: f32,
    pub y: f32,
}

impl Default for CalibrationOffset {
    fn default() -> Self {
        // Half a pixel left, one pixel down: matches how the canvas strokes
        // its lines relative to the pointer hotspot.
        Self { x: -0.5, y: 1.0 }
    }
}

impl CalibrationOffset {
    pub const NONE: CalibrationOffset = CalibrationOffset { x: 0.0, y: 0.0 };
}

/// Context needed for coordinate conversions.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateContext {
    /// Screen position of the drawing surface's top-left corner
    pub origin: Point,
    pub zoom: f32,
    pub calibration: CalibrationOffset,
}

impl CoordinateContext {
    pub fn new(origin: Point, zoom: f32) -> Self {
        Self {
            origin,
            zoom,
            calibration: CalibrationOffset::default(),
        }
    }

    pub fn with_calibration(mut self, calibration: CalibrationOffset) -> Self {
        self.calibration = calibration;
        self
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to world coordinates.
    #[inline]
    pub fn screen_to_world(screen: Point, ctx: &CoordinateContext) -> Point {
        Point::new(
            (screen.x - ctx.origin.x) / ctx.zoom + ctx.calibration.x,
            (screen.y - ctx.origin.y) / ctx.zoom + ctx.calibration.y,
        )
    }

    /// Convert a world position back to screen coordinates.
    #[inline]
    pub fn world_to_screen(world: Point, ctx: &CoordinateContext) -> Point {
        Point::new(
            (world.x - ctx.calibration.x) * ctx.zoom + ctx.origin.x,
            (world.y - ctx.calibration.y) * ctx.zoom + ctx.origin.y,
        )
    }

    /// Convert a screen-space delta to world space (for drag operations).
    #[inline]
    pub fn delta_screen_to_world(dx: f32, dy: f32, zoom: f32) -> (f32, f32) {
        (dx / zoom, dy / zoom)
    }
}
