//! Core grid logic - pure, deterministic, and testable
//!
//! This crate maps world positions onto a top-down character grid. It has
//! **zero dependencies** on terminal I/O or the audio middleware, so every
//! rule can be unit tested directly.
//!
//! # Module Structure
//!
//! - [`grid`]: bounded row-major 2D storage
//! - [`position_grid`]: listener/event view with projection and the event cursor
//!
//! # Example
//!
//! ```
//! use event3d_core::{CellIndex, PositionGrid};
//! use event3d_types::{Vector3, EVENT_MARK, LISTENER_MARK};
//!
//! let mut grid = PositionGrid::new();
//! grid.update(Vector3::new(0.0, 0.0, 2.0));
//!
//! assert_eq!(grid.cell(grid.origin()), Some(LISTENER_MARK));
//! assert_eq!(grid.cursor(), Some(CellIndex::new(6, 25)));
//! assert_eq!(grid.cell(CellIndex::new(6, 25)), Some(EVENT_MARK));
//! ```

pub mod grid;
pub mod position_grid;

pub use event3d_types as types;

pub use grid::Grid;
pub use position_grid::{CellIndex, PositionGrid};
