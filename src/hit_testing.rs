//! Proximity hit-testing for line annotations.
//!
//! Two passes over the set, handles first: endpoint handles are the smaller,
//! more intentional target, so they win over line bodies outright. Within
//! the handle pass the currently hovered line keeps priority over a strictly
//! closer handle of another line, which prevents highlight flicker when
//! handles of different lines overlap.
//!
//! Runs on every pointer move, O(number of lines), allocation-free.

use crate::constants::HOVER_THRESHOLD;
use crate::types::{AnnotationSet, Handle, Line, LineId, Point};

/// Hover threshold in world units. Pre-divided by zoom so the hit target has
/// a constant screen size.
pub fn hover_threshold(zoom: f32) -> f32 {
    HOVER_THRESHOLD / zoom
}

fn hypot(dx: f32, dy: f32) -> f32 {
    (dx * dx + dy * dy).sqrt()
}

fn distance(a: Point, b: Point) -> f32 {
    hypot(a.x - b.x, a.y - b.y)
}

/// Distance from `cursor` to the closest point on the segment, via clamped
/// vector projection. `None` for zero-length segments, which are skipped
/// rather than treated as an error.
pub fn distance_to_segment(line: &Line, cursor: Point) -> Option<f32> {
    let (sx, sy) = (line.start_x, line.start_y);
    let (ex, ey) = (line.end_x, line.end_y);

    let length_squared = (ex - sx) * (ex - sx) + (ey - sy) * (ey - sy);
    if length_squared == 0.0 {
        return None;
    }

    let t = ((cursor.x - sx) * (ex - sx) + (cursor.y - sy) * (ey - sy)) / length_squared;
    let t = t.clamp(0.0, 1.0);

    let closest_x = sx + t * (ex - sx);
    let closest_y = sy + t * (ey - sy);

    Some(hypot(closest_x - cursor.x, closest_y - cursor.y))
}

/// Which handle of `line` the cursor is over, if any. When both endpoints
/// qualify, the nearer one wins.
pub fn handle_at(line: &Line, cursor: Point, threshold: f32) -> Option<Handle> {
    let to_start = distance(cursor, line.start());
    let to_end = distance(cursor, line.end());

    match (to_start <= threshold, to_end <= threshold) {
        (true, true) => Some(if to_start <= to_end {
            Handle::Start
        } else {
            Handle::End
        }),
        (true, false) => Some(Handle::Start),
        (false, true) => Some(Handle::End),
        (false, false) => None,
    }
}

/// Resolve which line the cursor hovers, or `None` when nothing is within
/// threshold. `current` is the previously hovered line and gets sticky
/// priority in the handle pass.
pub fn scan(
    lines: &AnnotationSet,
    cursor: Point,
    threshold: f32,
    current: Option<LineId>,
) -> Option<LineId> {
    // Handle pass
    let mut nearest_handle_distance = f32::INFINITY;
    let mut nearest_handle_line = None;
    let mut handle_hovered = false;

    for line in lines {
        let to_start = distance(cursor, line.start());
        let to_end = distance(cursor, line.end());

        if to_start <= threshold || to_end <= threshold {
            handle_hovered = true;
            if current == Some(line.id) {
                // The already-hovered line keeps its handle
                nearest_handle_line = Some(line.id);
                nearest_handle_distance = 0.0;
            } else if to_start < nearest_handle_distance || to_end < nearest_handle_distance {
                nearest_handle_distance = to_start.min(to_end);
                nearest_handle_line = Some(line.id);
            }
        }
    }

    if handle_hovered {
        return nearest_handle_line;
    }

    // Body pass
    let mut nearest_body_distance = f32::INFINITY;
    let mut nearest_body_line = None;

    for line in lines {
        let Some(d) = distance_to_segment(line, cursor) else {
            continue;
        };
        if d <= threshold && d < nearest_body_distance {
            nearest_body_distance = d;
            nearest_body_line = Some(line.id);
        }
    }

    nearest_body_line
}
