//! Weighted shortest-path search over the maze grid
//!
//! Priority-first (Dijkstra) search whose frontier is keyed on
//! `(distance, cell, predecessor)`. Including the cell in the key makes the
//! tie-break among equal-distance entries lexicographic and therefore
//! reproducible: the correction loop relies on repeated solves of an
//! unchanged grid returning the identical path.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::algorithm::weights;
use crate::io::error::{MazeError, Result};
use crate::spatial::cell::Cell;
use crate::spatial::grid::Maze;

/// Frontier entry; derived ordering compares distance first, then cell
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    distance: u64,
    cell: Cell,
    previous: Option<Cell>,
}

/// Compute the minimum-cost path from the maze's BEGIN to its END cell
///
/// Path cost is the sum of traversed cell weights; the sentinel endpoints
/// contribute nothing. A cell's predecessor is fixed the first time it is
/// popped from the frontier; later pops of the same cell are ignored. The
/// search stops as soon as END is finalized.
///
/// # Errors
///
/// Returns [`MazeError::Unreachable`] if the frontier is exhausted before
/// END is reached. Retrying with the same grid cannot succeed.
pub fn solve(maze: &Maze) -> Result<Vec<Cell>> {
    let begin = maze.begin();
    let end = maze.end();

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry {
        distance: 0,
        cell: begin,
        previous: None,
    }));
    let mut predecessors: HashMap<Cell, Option<Cell>> = HashMap::new();

    while let Some(Reverse(entry)) = frontier.pop() {
        if predecessors.contains_key(&entry.cell) {
            continue;
        }
        predecessors.insert(entry.cell, entry.previous);

        if entry.cell == end {
            return Ok(reconstruct(&predecessors, end));
        }

        for neighbor in maze.in_bounds_neighbors(entry.cell) {
            if !predecessors.contains_key(&neighbor) {
                frontier.push(Reverse(FrontierEntry {
                    distance: entry.distance + maze.cost(neighbor),
                    cell: neighbor,
                    previous: Some(entry.cell),
                }));
            }
        }
    }

    Err(MazeError::Unreachable { begin, end })
}

/// Solve the maze and decode the interior residues into the hidden message
///
/// # Errors
///
/// Returns [`MazeError::Unreachable`] if the maze has no BEGIN-to-END path.
pub fn recover_message(maze: &Maze) -> Result<String> {
    let path = solve(maze)?;
    Ok(weights::decode_path(maze, &path))
}

/// Follow predecessor links back from END and reverse into path order
fn reconstruct(predecessors: &HashMap<Cell, Option<Cell>>, end: Cell) -> Vec<Cell> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&Some(previous)) = predecessors.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
