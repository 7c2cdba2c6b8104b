//! Maze grid over tagged cells
//!
//! Every cell is either an ordinary weight or one of the two sentinel
//! endpoints. Sentinels are distinct variants rather than reserved numeric
//! values, so path-cost accounting and weight correction can only ever touch
//! real weights: both endpoints contribute zero cost and are immune to
//! mutation by construction.

use ndarray::Array2;

use crate::io::error::{MazeError, Result};
use crate::spatial::cell::Cell;

/// Contents of a single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Ordinary cell carrying an encoded weight
    Weight(u32),
    /// The path's fixed starting cell, zero cost
    Begin,
    /// The path's fixed final cell, zero cost
    End,
}

/// A bounded rectangular grid of weighted cells with located endpoints
///
/// Rows index `y` and columns index `x`, matching the persisted row-major
/// layout. Construction validates the sentinel invariant once; afterwards
/// `begin`/`end` lookups are free.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    cells: Array2<CellState>,
    begin: Cell,
    end: Cell,
}

impl Maze {
    /// Build a maze from a populated cell array, locating the endpoints
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::MalformedGrid`] if the array is empty or does not
    /// contain exactly one [`CellState::Begin`] and one [`CellState::End`].
    pub fn from_cells(cells: Array2<CellState>) -> Result<Self> {
        if cells.is_empty() {
            return Err(MazeError::MalformedGrid {
                reason: "grid has no cells".to_string(),
            });
        }

        let mut begin = None;
        let mut end = None;
        for ((row, col), state) in cells.indexed_iter() {
            let cell = Cell::new(col as i32, row as i32);
            match state {
                CellState::Begin => {
                    if begin.replace(cell).is_some() {
                        return Err(MazeError::MalformedGrid {
                            reason: "more than one BEGIN cell".to_string(),
                        });
                    }
                }
                CellState::End => {
                    if end.replace(cell).is_some() {
                        return Err(MazeError::MalformedGrid {
                            reason: "more than one END cell".to_string(),
                        });
                    }
                }
                CellState::Weight(_) => {}
            }
        }

        match (begin, end) {
            (Some(begin), Some(end)) => Ok(Self { cells, begin, end }),
            (None, _) => Err(MazeError::MalformedGrid {
                reason: "no BEGIN cell".to_string(),
            }),
            (_, None) => Err(MazeError::MalformedGrid {
                reason: "no END cell".to_string(),
            }),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// The starting sentinel cell
    pub const fn begin(&self) -> Cell {
        self.begin
    }

    /// The final sentinel cell
    pub const fn end(&self) -> Cell {
        self.end
    }

    /// Whether a cell lies inside the grid
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width()
            && (cell.y as usize) < self.height()
    }

    /// The state stored at a cell, if in bounds
    pub fn state(&self, cell: Cell) -> Option<&CellState> {
        self.index(cell).and_then(|idx| self.cells.get(idx))
    }

    /// Path-cost contribution of a cell
    ///
    /// Sentinels and out-of-bounds cells contribute nothing; callers filter
    /// bounds separately via [`Maze::in_bounds`].
    pub fn cost(&self, cell: Cell) -> u64 {
        match self.state(cell) {
            Some(&CellState::Weight(w)) => u64::from(w),
            _ => 0,
        }
    }

    /// The numeric weight of a cell, or `None` for sentinels and
    /// out-of-bounds coordinates
    pub fn weight(&self, cell: Cell) -> Option<u32> {
        match self.state(cell) {
            Some(&CellState::Weight(w)) => Some(w),
            _ => None,
        }
    }

    /// Replace the weight of an ordinary cell
    ///
    /// Returns `false` without mutating anything when the cell is a sentinel
    /// or out of bounds.
    pub fn set_weight(&mut self, cell: Cell, weight: u32) -> bool {
        let Some(idx) = self.index(cell) else {
            return false;
        };
        match self.cells.get_mut(idx) {
            Some(state @ CellState::Weight(_)) => {
                *state = CellState::Weight(weight);
                true
            }
            _ => false,
        }
    }

    /// In-bounds axis-aligned neighbors of a cell
    pub fn in_bounds_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors().into_iter().filter(|&n| self.in_bounds(n))
    }

    /// Row-major view of the underlying cells
    pub const fn cells(&self) -> &Array2<CellState> {
        &self.cells
    }

    fn index(&self, cell: Cell) -> Option<[usize; 2]> {
        self.in_bounds(cell)
            .then(|| [cell.y as usize, cell.x as usize])
    }
}
