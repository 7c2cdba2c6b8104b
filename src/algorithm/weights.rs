//! Weight encoding for hidden characters
//!
//! Every ordinary cell weight decomposes as
//! `weight = magnitude * ASCII_MAX + residue`. The residue is the encoded
//! byte; the magnitude only biases path cost. Correction shifts weights in
//! whole `ASCII_MAX` units, so residues survive any amount of correction.

use ndarray::Array2;
use rand::Rng;
use rand::rngs::StdRng;

use crate::algorithm::walk::PathLayout;
use crate::io::configuration::{ASCII_MAX, CELL_MAX, PRINTABLE_MAX, PRINTABLE_MIN};
use crate::io::error::Result;
use crate::spatial::cell::Cell;
use crate::spatial::grid::{CellState, Maze};

/// The encoded byte carried by a weight
pub const fn residue(weight: u32) -> u32 {
    weight % ASCII_MAX
}

/// The cost-bias component of a weight
pub const fn magnitude(weight: u32) -> u32 {
    weight / ASCII_MAX
}

/// Assign initial weights for every cell of the layout's grid
///
/// Interior path cells carry the message bytes as residues, in path order.
/// Every other cell gets a random printable residue. All magnitudes are
/// random but bounded so no weight can reach [`CELL_MAX`] even after many
/// upward corrections of one unit each.
///
/// # Errors
///
/// Returns [`crate::MazeError::MalformedGrid`] if the layout is degenerate
/// (no cells); a layout produced by the walk builder never is.
pub fn assign_weights(layout: &PathLayout, message: &str, rng: &mut StdRng) -> Result<Maze> {
    let mut cells = Array2::from_elem((layout.height, layout.width), CellState::Weight(0));
    for state in &mut cells {
        *state = CellState::Weight(random_printable(rng) + random_offset(rng));
    }

    for (byte, cell) in message.bytes().zip(layout.cells.iter().skip(1)) {
        if let Some(state) = grid_slot(&mut cells, *cell) {
            *state = CellState::Weight(u32::from(byte) + random_offset(rng));
        }
    }

    if let Some(state) = layout.cells.first().and_then(|&c| grid_slot(&mut cells, c)) {
        *state = CellState::Begin;
    }
    if let Some(state) = layout.cells.last().and_then(|&c| grid_slot(&mut cells, c)) {
        *state = CellState::End;
    }

    Maze::from_cells(cells)
}

/// Decode the interior cells of a path into the message they spell
pub fn decode_path(maze: &Maze, path: &[Cell]) -> String {
    let interior = path.len().saturating_sub(2);
    path.iter()
        .skip(1)
        .take(interior)
        .map(|&cell| {
            let weight = maze.weight(cell).unwrap_or(0);
            char::from(residue(weight) as u8)
        })
        .collect()
}

/// Random magnitude component, a whole number of `ASCII_MAX` units
fn random_offset(rng: &mut StdRng) -> u32 {
    ASCII_MAX * rng.random_range(0..CELL_MAX / ASCII_MAX)
}

/// Random printable character code for filler cells
fn random_printable(rng: &mut StdRng) -> u32 {
    rng.random_range(PRINTABLE_MIN..=PRINTABLE_MAX)
}

fn grid_slot(cells: &mut Array2<CellState>, cell: Cell) -> Option<&mut CellState> {
    cells.get_mut([cell.y as usize, cell.x as usize])
}
