//! Message steganography in weighted grid mazes
//!
//! A message is hidden as the unique minimum-cost path between two marked
//! cells of a weighted grid: each interior path cell carries one character in
//! the low-order residue of its weight, while the high-order magnitude is
//! iteratively corrected until the shortest-path search returns exactly the
//! hiding path. Solving the maze again recovers the message.

#![forbid(unsafe_code)]

/// Core pipeline: shortest-path solver, random walk builder, weight
/// assignment, and the correction loop that ties them together
pub mod algorithm;
/// Input/output operations, the persisted grid format, and error handling
pub mod io;
/// Grid storage and coordinate utilities
pub mod spatial;

pub use io::error::{MazeError, Result};
