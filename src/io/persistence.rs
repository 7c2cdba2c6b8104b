//! Persisted grid document format
//!
//! A maze serializes as `{"maze": [[cell, ...], ...]}` where each cell is
//! either an integer weight or one of the two marker strings `"BEGIN"` and
//! `"END"`. Reading validates the full grid shape and sentinel invariant
//! before handing back a [`Maze`]; a document that fails validation is
//! rejected outright, there is no partial recovery.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::io::configuration::{BEGIN_MARKER, END_MARKER};
use crate::io::error::{MazeError, Result, file_system_error};
use crate::spatial::grid::{CellState, Maze};

/// Top-level persisted document
#[derive(Serialize, Deserialize)]
struct MazeDocument {
    maze: Vec<Vec<RawCell>>,
}

/// One persisted cell: a weight or a sentinel marker string
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawCell {
    Weight(u32),
    Marker(String),
}

/// Write a maze document to `path`
///
/// # Errors
///
/// Returns [`MazeError::FileSystem`] if the file cannot be created or
/// flushed, and [`MazeError::Serialization`] if encoding fails.
pub fn save_maze(maze: &Maze, path: &Path) -> Result<()> {
    let document = MazeDocument {
        maze: to_rows(maze),
    };

    let file = File::create(path).map_err(|err| file_system_error(path, "create", err))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &document).map_err(|source| MazeError::Serialization {
        path: path.to_path_buf(),
        source,
    })?;
    writer
        .flush()
        .map_err(|err| file_system_error(path, "flush", err))
}

/// Read and validate a maze document from `path`
///
/// # Errors
///
/// Returns [`MazeError::FileSystem`] if the file cannot be opened,
/// [`MazeError::Serialization`] if it is not a well-formed document, and
/// [`MazeError::MalformedGrid`] if the grid violates the format invariants
/// (ragged rows, unknown markers, missing or duplicated sentinels).
pub fn load_maze(path: &Path) -> Result<Maze> {
    let file = File::open(path).map_err(|err| file_system_error(path, "open", err))?;
    let reader = BufReader::new(file);
    let document: MazeDocument =
        serde_json::from_reader(reader).map_err(|source| MazeError::Serialization {
            path: path.to_path_buf(),
            source,
        })?;
    from_rows(&document.maze)
}

fn to_rows(maze: &Maze) -> Vec<Vec<RawCell>> {
    maze.cells()
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|state| match state {
                    CellState::Weight(w) => RawCell::Weight(*w),
                    CellState::Begin => RawCell::Marker(BEGIN_MARKER.to_string()),
                    CellState::End => RawCell::Marker(END_MARKER.to_string()),
                })
                .collect()
        })
        .collect()
}

fn from_rows(rows: &[Vec<RawCell>]) -> Result<Maze> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    if height == 0 || width == 0 {
        return Err(MazeError::MalformedGrid {
            reason: "grid has no cells".to_string(),
        });
    }

    let mut cells = Vec::with_capacity(height * width);
    for row in rows {
        if row.len() != width {
            return Err(MazeError::MalformedGrid {
                reason: format!("ragged grid: expected row length {width}, found {}", row.len()),
            });
        }
        for raw in row {
            cells.push(match raw {
                RawCell::Weight(w) => CellState::Weight(*w),
                RawCell::Marker(marker) if marker == BEGIN_MARKER => CellState::Begin,
                RawCell::Marker(marker) if marker == END_MARKER => CellState::End,
                RawCell::Marker(marker) => {
                    return Err(MazeError::MalformedGrid {
                        reason: format!("unknown cell marker '{marker}'"),
                    });
                }
            });
        }
    }

    let array = Array2::from_shape_vec((height, width), cells).map_err(|err| {
        MazeError::MalformedGrid {
            reason: err.to_string(),
        }
    })?;
    Maze::from_cells(array)
}
