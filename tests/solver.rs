//! Solver behavior on hand-built grids: determinism, tie-breaks, sentinels

use ndarray::Array2;
use stegmaze::MazeError;
use stegmaze::algorithm::solver;
use stegmaze::spatial::{Cell, CellState, Maze};

fn maze_from(rows: usize, cols: usize, cells: Vec<CellState>) -> Maze {
    let array = Array2::from_shape_vec((rows, cols), cells).expect("grid shape");
    Maze::from_cells(array).expect("valid maze")
}

#[test]
fn test_adjacent_sentinels_solve_to_two_cell_path() -> stegmaze::Result<()> {
    let maze = maze_from(1, 2, vec![CellState::Begin, CellState::End]);

    let path = solver::solve(&maze)?;
    assert_eq!(path, vec![Cell::new(0, 0), Cell::new(1, 0)]);
    assert_eq!(solver::recover_message(&maze)?, "");
    Ok(())
}

#[test]
fn test_equal_cost_tie_breaks_to_lexicographically_smaller_cell() -> stegmaze::Result<()> {
    // Two equal-cost routes around a 2x2 grid; the search must prefer the
    // route through (0, 1) over (1, 0) because cells order by x, then y.
    let maze = maze_from(
        2,
        2,
        vec![
            CellState::Begin,
            CellState::Weight(500),
            CellState::Weight(500),
            CellState::End,
        ],
    );

    let path = solver::solve(&maze)?;
    assert_eq!(
        path,
        vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
    );
    Ok(())
}

#[test]
fn test_cheaper_detour_beats_direct_route() -> stegmaze::Result<()> {
    // 3x3 grid, BEGIN top-left, END top-right. Straight across the top
    // costs 1000; dipping through the cheap middle row costs 4.
    let maze = maze_from(
        3,
        3,
        vec![
            CellState::Begin,
            CellState::Weight(1000),
            CellState::End,
            CellState::Weight(1),
            CellState::Weight(2),
            CellState::Weight(1),
            CellState::Weight(900),
            CellState::Weight(900),
            CellState::Weight(900),
        ],
    );

    let path = solver::solve(&maze)?;
    assert_eq!(
        path,
        vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(2, 1),
            Cell::new(2, 0),
        ]
    );
    Ok(())
}

#[test]
fn test_repeated_solves_are_identical() -> stegmaze::Result<()> {
    // Uniform weights leave many equal-cost paths; the tie-break must make
    // every solve of the same grid return the same one.
    let cells = vec![CellState::Weight(64); 25];
    let mut cells_with_sentinels = cells;
    if let Some(first) = cells_with_sentinels.first_mut() {
        *first = CellState::Begin;
    }
    if let Some(last) = cells_with_sentinels.last_mut() {
        *last = CellState::End;
    }
    let maze = maze_from(5, 5, cells_with_sentinels);

    let first = solver::solve(&maze)?;
    for _ in 0..5 {
        assert_eq!(solver::solve(&maze)?, first);
    }

    // Shortest path over uniform weights is a Manhattan-direct walk
    assert_eq!(first.len(), 9);
    for pair in first.windows(2) {
        if let [a, b] = pair {
            assert!(a.is_adjacent(*b));
        }
    }
    Ok(())
}

#[test]
fn test_malformed_grids_rejected() {
    let missing_end = Array2::from_shape_vec(
        (1, 3),
        vec![
            CellState::Begin,
            CellState::Weight(5),
            CellState::Weight(5),
        ],
    )
    .expect("grid shape");
    assert!(matches!(
        Maze::from_cells(missing_end),
        Err(MazeError::MalformedGrid { .. })
    ));

    let double_begin = Array2::from_shape_vec(
        (1, 3),
        vec![CellState::Begin, CellState::Begin, CellState::End],
    )
    .expect("grid shape");
    assert!(matches!(
        Maze::from_cells(double_begin),
        Err(MazeError::MalformedGrid { .. })
    ));

    let empty = Array2::from_shape_vec((0, 0), Vec::new()).expect("grid shape");
    assert!(matches!(
        Maze::from_cells(empty),
        Err(MazeError::MalformedGrid { .. })
    ));
}
