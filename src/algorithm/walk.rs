//! Self-avoiding random walk construction
//!
//! Builds the path that will carry the message: a simple walk of an exact
//! length whose cells, apart from consecutive neighbors, are never adjacent
//! to one another. The thinness constraint keeps the corrected maze's
//! shortest path unambiguous as a walk.
//!
//! The search is randomized backtracking over an explicit stack of shuffled
//! candidate frames. Visited cells and the adjacency exclusion zone are kept
//! in single mutable structures updated on step and retreat, so no per-state
//! copies are made, and a hard expansion cap bounds the whole search.

use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::io::configuration::{MARGIN_DIVISOR, REACH_EXPONENT};
use crate::io::error::{MazeError, Result};
use crate::spatial::cell::Cell;

/// A normalized target path together with the grid dimensions that fit it
#[derive(Clone, Debug)]
pub struct PathLayout {
    /// Path cells in order, all coordinates non-negative
    pub cells: Vec<Cell>,
    /// Grid width containing the path plus border margin
    pub width: usize,
    /// Grid height containing the path plus border margin
    pub height: usize,
}

/// Build a random simple path taking exactly `steps` moves from the origin
///
/// The endpoint is sampled at a Manhattan distance of roughly
/// `steps^0.75`, adjusted to match the parity of `steps` so a walk of the
/// requested length can exist. Resulting coordinates are shifted
/// non-negative with a border margin of one tenth of each axis span.
///
/// # Errors
///
/// Returns [`MazeError::PathConstruction`] when the randomized search
/// exhausts its branches or exceeds `max_expansions` without completing a
/// path. Recoverable: retrying with fresh randomness may succeed.
pub fn build_path(steps: usize, max_expansions: usize, rng: &mut StdRng) -> Result<PathLayout> {
    let begin = Cell::new(0, 0);
    let end = choose_endpoint(steps, rng)?;
    let cells = find_walk(begin, end, steps, max_expansions, rng)?;
    Ok(normalize(&cells))
}

/// Sample an endpoint compatible with a walk of `steps` moves
///
/// Candidates lie on the two lattice lines `x + y = reach` and
/// `x - y = reach` within Euclidean distance `reach * sqrt(0.75)` of the
/// origin, which keeps the endpoint far enough away for the walk to wander
/// but close enough that many walks of the requested length exist.
fn choose_endpoint(steps: usize, rng: &mut StdRng) -> Result<Cell> {
    let mut reach = (steps as f64).powf(REACH_EXPONENT) as i64;
    reach += (steps as i64 - reach) % 2;
    let limit = (reach * reach) as f64 * 0.75;

    let mut candidates = BTreeSet::new();
    for dx in -reach..=reach {
        for dy in [reach - dx, dx - reach] {
            if ((dx * dx + dy * dy) as f64) < limit {
                candidates.insert(Cell::new(dx as i32, dy as i32));
            }
        }
    }

    let candidates: Vec<Cell> = candidates.into_iter().collect();
    if candidates.is_empty() {
        return Err(MazeError::PathConstruction {
            steps,
            expansions: 0,
        });
    }
    let index = rng.random_range(0..candidates.len());
    candidates
        .get(index)
        .copied()
        .ok_or(MazeError::PathConstruction {
            steps,
            expansions: 0,
        })
}

/// Depth-first backtracking search for a walk of exactly `steps` moves
fn find_walk(
    begin: Cell,
    end: Cell,
    steps: usize,
    max_expansions: usize,
    rng: &mut StdRng,
) -> Result<Vec<Cell>> {
    let mut path = vec![begin];
    let mut visited = HashSet::from([begin]);
    // Coverage counts of the 4-neighborhoods of every path cell except the
    // current tip; a candidate in this zone would touch the path's flank.
    let mut excluded: HashMap<Cell, u32> = HashMap::new();
    let mut frames = vec![candidate_moves(begin, end, steps, &visited, &excluded, rng)];
    let mut expansions = 0_usize;

    while let Some(frame) = frames.last_mut() {
        let Some(next) = frame.pop() else {
            // Branch exhausted: retreat one step and resume the parent frame
            frames.pop();
            if let Some(dead) = path.pop() {
                visited.remove(&dead);
            }
            if let Some(&tip) = path.last() {
                for neighbor in tip.neighbors() {
                    if let Some(count) = excluded.get_mut(&neighbor) {
                        *count -= 1;
                        if *count == 0 {
                            excluded.remove(&neighbor);
                        }
                    }
                }
            }
            continue;
        };

        expansions += 1;
        if expansions > max_expansions {
            return Err(MazeError::PathConstruction { steps, expansions });
        }

        if let Some(&tip) = path.last() {
            for neighbor in tip.neighbors() {
                *excluded.entry(neighbor).or_insert(0) += 1;
            }
        }
        path.push(next);
        visited.insert(next);

        let remaining = steps - (path.len() - 1);
        if next == end && remaining == 0 {
            debug!("{steps}-step walk to {end} found after {expansions} expansions");
            return Ok(path);
        }

        frames.push(candidate_moves(next, end, remaining, &visited, &excluded, rng));
    }

    Err(MazeError::PathConstruction { steps, expansions })
}

/// Legal continuations from `tip` with `remaining` moves left, shuffled
///
/// A move is legal when it stays off the visited path and out of the
/// adjacency exclusion zone, and the endpoint remains reachable within the
/// remaining budget. Stepping onto END is only legal as the final move:
/// END cannot be re-entered, so an early arrival could never complete.
fn candidate_moves(
    tip: Cell,
    end: Cell,
    remaining: usize,
    visited: &HashSet<Cell>,
    excluded: &HashMap<Cell, u32>,
    rng: &mut StdRng,
) -> Vec<Cell> {
    if remaining == 0 {
        return Vec::new();
    }
    let mut moves: Vec<Cell> = tip
        .neighbors()
        .into_iter()
        .filter(|candidate| {
            !visited.contains(candidate)
                && !excluded.contains_key(candidate)
                && (candidate.manhattan(end) as usize) <= remaining - 1
                && (*candidate != end || remaining == 1)
        })
        .collect();
    moves.shuffle(rng);
    moves
}

/// Shift the walk non-negative and pad each axis with a tenth of its span
fn normalize(cells: &[Cell]) -> PathLayout {
    let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
    let max_x = cells.iter().map(|c| c.x).max().unwrap_or(0);
    let max_y = cells.iter().map(|c| c.y).max().unwrap_or(0);

    let span_x = (max_x - min_x + 1) as usize;
    let span_y = (max_y - min_y + 1) as usize;
    let margin_x = span_x / MARGIN_DIVISOR;
    let margin_y = span_y / MARGIN_DIVISOR;

    let cells = cells
        .iter()
        .map(|c| {
            Cell::new(
                c.x - min_x + margin_x as i32,
                c.y - min_y + margin_y as i32,
            )
        })
        .collect();

    PathLayout {
        cells,
        width: span_x + 2 * margin_x,
        height: span_y + 2 * margin_y,
    }
}
