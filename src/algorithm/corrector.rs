//! Iterative weight correction
//!
//! The centerpiece of generation: a fixpoint loop that re-solves the maze,
//! compares the result against the target path, and transfers weight
//! between the most divergent cells until the solver returns exactly the
//! target: the same cells in the same order, not merely an equal cost.
//!
//! Transfers move whole `ASCII_MAX` units, so the character residue of
//! every touched cell is preserved, and both weights stay inside
//! `[0, CELL_MAX)`. Costs only ever shift, never disappear, so the grid
//! stays connected and the solver cannot start failing mid-correction.

use std::cmp::Reverse;
use std::collections::HashSet;

use log::debug;

use crate::algorithm::solver;
use crate::io::configuration::{ASCII_MAX, BATCH_DIVISOR, CELL_MAX};
use crate::io::error::{MazeError, Result};
use crate::spatial::cell::Cell;
use crate::spatial::grid::Maze;

/// Drives a maze's weights toward the target-path fixpoint
pub struct Corrector<'a> {
    maze: &'a mut Maze,
    target: &'a [Cell],
    target_set: HashSet<Cell>,
    rounds: usize,
}

impl<'a> Corrector<'a> {
    /// Create a corrector for a freshly assigned maze and its target path
    pub fn new(maze: &'a mut Maze, target: &'a [Cell]) -> Self {
        let target_set = target.iter().copied().collect();
        Self {
            maze,
            target,
            target_set,
            rounds: 0,
        }
    }

    /// Correction rounds executed so far
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Execute one correction round
    ///
    /// Returns `Ok(false)` once the solver's path equals the target exactly;
    /// `Ok(true)` means weights were adjusted and another round is needed.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Unreachable`] if the maze has no BEGIN-to-END
    /// path at all, which a generated grid cannot exhibit.
    pub fn round(&mut self) -> Result<bool> {
        let actual = solver::solve(self.maze)?;
        if actual.as_slice() == self.target {
            return Ok(false);
        }
        self.rounds += 1;

        let actual_set: HashSet<Cell> = actual.iter().copied().collect();
        let missing = self.target_set.difference(&actual_set).count();
        let stray = actual_set.difference(&self.target_set).count();
        debug!(
            "round {}: {missing} target cells off the path, {stray} stray path cells",
            self.rounds
        );

        // Fresh ranking snapshots every round. Target cells that the actual
        // path skips come first, heaviest first: they price the target out.
        let mut misplaced: Vec<Cell> = self.target.to_vec();
        misplaced.sort_by_key(|&cell| {
            (
                actual_set.contains(&cell),
                Reverse(self.maze.cost(cell)),
                cell,
            )
        });

        // Actual-path cells the target does not want come first, cheapest
        // first: they make the wrong path attractive.
        let mut stray_cells: Vec<Cell> = actual;
        stray_cells.sort_by_key(|&cell| {
            (
                self.target_set.contains(&cell),
                self.maze.cost(cell),
                cell,
            )
        });

        let batch = 1.max(missing.max(stray) / BATCH_DIVISOR);
        for (&target_cell, &actual_cell) in misplaced.iter().zip(stray_cells.iter()).take(batch) {
            self.transfer(target_cell, actual_cell);
        }

        Ok(true)
    }

    /// Run rounds until convergence or the round cap
    ///
    /// Returns the number of rounds it took to converge.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::DidNotConverge`] after `max_rounds` rounds
    /// without reaching the fixpoint (the caller should restart from path
    /// construction with fresh randomness), and propagates
    /// [`MazeError::Unreachable`] from the solver.
    pub fn run(&mut self, max_rounds: usize) -> Result<usize> {
        while self.round()? {
            if self.rounds >= max_rounds {
                return Err(MazeError::DidNotConverge {
                    rounds: self.rounds,
                });
            }
        }
        Ok(self.rounds)
    }

    /// Transfer weight from a misplaced target cell onto a stray path cell
    ///
    /// The delta is the weight gap rounded down to a whole `ASCII_MAX`
    /// multiple, floored at one unit. Applied only when the raised weight
    /// stays under `CELL_MAX` and the lowered weight stays above zero;
    /// otherwise the pair is skipped for this round and reconsidered against
    /// fresh mismatches next round. Pairs involving a sentinel (possible
    /// when one mismatch set is smaller than the batch) carry no weight and
    /// are skipped outright.
    fn transfer(&mut self, target_cell: Cell, actual_cell: Cell) {
        let (Some(target_weight), Some(actual_weight)) = (
            self.maze.weight(target_cell),
            self.maze.weight(actual_cell),
        ) else {
            return;
        };

        let gap = target_weight.saturating_sub(actual_weight) / ASCII_MAX * ASCII_MAX;
        let delta = gap.max(ASCII_MAX);

        if actual_weight + delta >= CELL_MAX || target_weight <= delta {
            return;
        }

        self.maze.set_weight(actual_cell, actual_weight + delta);
        self.maze.set_weight(target_cell, target_weight - delta);
    }
}
