//! Input handling for the drawing surface.
//!
//! ## Architecture
//!
//! Raw events arrive as the plain data types in [`events`]; every geometry
//! decision happens only after [`coords`] has translated screen coordinates
//! into world space. The drawing interaction itself is tracked by the
//! explicit [`DrawState`] machine rather than scattered boolean flags, so
//! impossible states are unrepresentable.
//!
//! ## Modules
//!
//! - `events` - pointer/wheel/key event types and modifier flags
//! - `coords` - screen/world coordinate conversion with calibration offset
//! - `state` - the draw/edit state machine

pub mod coords;
pub mod events;
mod state;

pub use state::DrawState;
