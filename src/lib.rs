//! Gridboard - interactive annotation and viewport engine for a virtual
//! tabletop drawing surface.
//!
//! The crate is headless: it consumes raw pointer/wheel/keyboard events plus
//! the current container/content pixel dimensions, and produces state that a
//! rendering layer can draw at whatever cadence it likes.
//!
//! ## Architecture
//!
//! - [`store`] - single reducer-style state container (annotations, zoom,
//!   mode, token grid); all mutations flow through named actions
//! - [`viewport`] - pan offset and zoom factor, clamping/centering, and the
//!   edge-triggered auto-pan task
//! - [`editor`] - the line drawing/editing state machine and hover logic
//! - [`hit_testing`] - proximity hit-testing for line handles and bodies
//! - [`input`] - event types, the draw state machine, and screen/world
//!   coordinate conversion
//! - [`board`] - facade wiring the pieces together the way the game board
//!   consumes them
//! - [`tokens`] - token grid occupancy and the drag-and-drop payload

pub mod board;
pub mod constants;
pub mod editor;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod store;
pub mod tokens;
pub mod types;
pub mod viewport;
