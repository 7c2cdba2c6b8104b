//! Grid storage and coordinate utilities

/// Integer grid coordinates with the solver's tie-break ordering
pub mod cell;
/// Maze grid over tagged cells with sentinel endpoints
pub mod grid;

pub use cell::Cell;
pub use grid::{CellState, Maze};
