//! `ct-grid` — the double-buffered occupancy grid.
//!
//! # Two buffers, one rule
//!
//! ```text
//! current  — committed state at the start of the tick; all exposure
//!            queries read this buffer.
//! next     — accumulates this tick's moves as agents are updated.
//!
//! a cell is free for a new occupant  ⇔  empty in current  AND  empty in next
//! ```
//!
//! An agent that leaves cell P clears P in `next` but still holds it in
//! `current`, so no later mover can enter P this tick.  An agent that enters
//! Q marks Q in `next`, so no later mover can enter Q either.  Two agents can
//! therefore never target the same destination within one tick, regardless
//! of update order.  [`OccupancyGrid::commit`] copies `next` over `current`
//! at the start of the following tick.
//!
//! Out-of-bounds points are reported as occupied: the border is a wall.

pub mod error;
pub mod grid;


pub use error::{GridError, GridResult};
pub use grid::{MoveSet, OccupancyGrid};
