//! Core types for the gridboard annotation engine.
//!
//! Defines the geometric primitives, the `Line` annotation record, and the
//! ordered `AnnotationSet` that the reducer treats as canonical.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A 2D point. Whether it is screen- or world-space depends on context;
/// conversion between the two goes through `input::coords`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Pixel dimensions of a container or content area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either axis is degenerate. Viewport math treats a
    /// zero-sized container as "surface not ready" and leaves the previous
    /// transform untouched.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Stable, unique line identifier, assigned at creation.
///
/// UUIDv4 rather than a coordinate-derived string, so two lines started at
/// the same point in one session can never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(Uuid);

impl LineId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line-{}", self.0)
    }
}

/// Semantic line color. The rendering layer maps these to actual colors;
/// the engine only tracks which visual state a line is in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineColor {
    /// Committed line, no interaction
    #[default]
    Normal,
    /// Line under the cursor
    Highlighted,
    /// In-progress line that is exactly horizontal or vertical
    Aligned,
}

/// Which endpoint of a line a handle refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    Start,
    End,
}

/// A user-drawn line segment in world-space coordinates.
///
/// Lines are immutable value records; edits remove the line from the set and
/// re-insert a replacement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: LineId,
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
    pub color: LineColor,
    pub line_width: f32,
}

impl Line {
    /// Create a provisional line anchored at a click point, both endpoints
    /// equal.
    pub fn anchored_at(point: Point, line_width: f32) -> Self {
        Self {
            id: LineId::new(),
            start_x: point.x,
            start_y: point.y,
            end_x: point.x,
            end_y: point.y,
            color: LineColor::Normal,
            line_width,
        }
    }

    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    pub fn end(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }

    /// The endpoint a handle refers to.
    pub fn endpoint(&self, handle: Handle) -> Point {
        match handle {
            Handle::Start => self.start(),
            Handle::End => self.end(),
        }
    }

    pub fn set_endpoint(&mut self, handle: Handle, point: Point) {
        match handle {
            Handle::Start => {
                self.start_x = point.x;
                self.start_y = point.y;
            }
            Handle::End => {
                self.end_x = point.x;
                self.end_y = point.y;
            }
        }
    }

    pub fn with_color(mut self, color: LineColor) -> Self {
        self.color = color;
        self
    }
}

/// Interaction mode of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Draw,
    #[default]
    Pan,
}

/// Ordered collection of committed lines. Insertion order is draw order and
/// only affects render z-order, never hit-testing.
///
/// Invariant: line ids are unique within the set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    lines: Vec<Line>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        let set = Self { lines };
        debug_assert!(set.ids_unique(), "duplicate line ids in annotation set");
        set
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Append a line. Replaces any existing line with the same id to uphold
    /// the uniqueness invariant.
    pub fn push(&mut self, line: Line) {
        self.lines.retain(|existing| existing.id != line.id);
        self.lines.push(line);
    }

    /// Remove a line by id, returning it if present.
    pub fn remove(&mut self, id: LineId) -> Option<Line> {
        let index = self.lines.iter().position(|line| line.id == id)?;
        Some(self.lines.remove(index))
    }

    /// Produce a new set with every line's color rewritten by `recolor`.
    pub fn recolored(&self, recolor: impl Fn(&Line) -> LineColor) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .map(|line| line.clone().with_color(recolor(line)))
                .collect(),
        }
    }

    fn ids_unique(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.lines.iter().all(|line| seen.insert(line.id))
    }
}

impl<'a> IntoIterator for &'a AnnotationSet {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
