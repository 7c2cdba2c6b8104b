//! Random walk construction: exact length, self-avoidance, thinness

use rand::SeedableRng;
use rand::rngs::StdRng;
use stegmaze::algorithm::walk;
use stegmaze::io::configuration::MAX_WALK_EXPANSIONS;

#[test]
fn test_walk_has_requested_length_and_is_simple() -> stegmaze::Result<()> {
    for seed in [2, 17, 400] {
        let mut rng = StdRng::seed_from_u64(seed);
        let layout = walk::build_path(40, MAX_WALK_EXPANSIONS, &mut rng)?;

        assert_eq!(layout.cells.len(), 41);

        let mut seen = std::collections::HashSet::new();
        for cell in &layout.cells {
            assert!(seen.insert(*cell), "walk revisits {cell}");
        }
    }
    Ok(())
}

#[test]
fn test_walk_is_four_connected() -> stegmaze::Result<()> {
    let mut rng = StdRng::seed_from_u64(11);
    let layout = walk::build_path(30, MAX_WALK_EXPANSIONS, &mut rng)?;

    for pair in layout.cells.windows(2) {
        if let [a, b] = pair {
            assert!(a.is_adjacent(*b), "{a} and {b} are not neighbors");
        }
    }
    Ok(())
}

// Apart from consecutive steps, no two path cells may touch: the thinness
// constraint is what keeps the hiding path unambiguous as a walk.
#[test]
fn test_walk_cells_are_pairwise_non_adjacent() -> stegmaze::Result<()> {
    let mut rng = StdRng::seed_from_u64(5);
    let layout = walk::build_path(50, MAX_WALK_EXPANSIONS, &mut rng)?;

    for (i, a) in layout.cells.iter().enumerate() {
        for (j, b) in layout.cells.iter().enumerate().skip(i + 2) {
            assert!(
                !a.is_adjacent(*b),
                "cells {i} and {j} ({a}, {b}) touch across the path"
            );
        }
    }
    Ok(())
}

#[test]
fn test_walk_fits_declared_grid_with_margin() -> stegmaze::Result<()> {
    let mut rng = StdRng::seed_from_u64(23);
    let layout = walk::build_path(60, MAX_WALK_EXPANSIONS, &mut rng)?;

    for cell in &layout.cells {
        assert!(cell.x >= 0 && cell.y >= 0);
        assert!((cell.x as usize) < layout.width);
        assert!((cell.y as usize) < layout.height);
    }
    Ok(())
}

#[test]
fn test_walk_is_reproducible_for_a_seed() -> stegmaze::Result<()> {
    let mut first_rng = StdRng::seed_from_u64(77);
    let mut second_rng = StdRng::seed_from_u64(77);

    let first = walk::build_path(25, MAX_WALK_EXPANSIONS, &mut first_rng)?;
    let second = walk::build_path(25, MAX_WALK_EXPANSIONS, &mut second_rng)?;

    assert_eq!(first.cells, second.cells);
    assert_eq!((first.width, first.height), (second.width, second.height));
    Ok(())
}

#[test]
fn test_exhausted_expansion_budget_is_recoverable() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = walk::build_path(40, 3, &mut rng);

    match result {
        Err(err) => assert!(err.is_recoverable()),
        Ok(_) => panic!("three expansions cannot complete a 40-step walk"),
    }
}
