//! New-tile placement
//!
//! Picks a random cell, rolling again while it is occupied. After
//! `SPAWN_MAX_ATTEMPTS` occupied rolls the spawn is skipped for that turn.

use rand::Rng;

use super::grid::Grid;
use crate::consts::{FOUR_SPAWN_THRESHOLD, GRID_SIZE, SPAWN_MAX_ATTEMPTS};

/// What a spawn attempt did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Placed { row: usize, col: usize, value: u32 },
    /// Every roll hit an occupied cell; the board is unchanged
    Exhausted,
}

impl SpawnOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, SpawnOutcome::Placed { .. })
    }
}

/// Tile value for a uniform draw in `[0, 1)`: 4 above the threshold, else 2
#[inline]
pub fn tile_for_draw(draw: f64) -> u32 {
    if draw > FOUR_SPAWN_THRESHOLD { 4 } else { 2 }
}

/// Drop a 2 or a 4 into a random empty cell
pub fn spawn<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> SpawnOutcome {
    for _ in 0..SPAWN_MAX_ATTEMPTS {
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        if grid[row][col] == 0 {
            let value = tile_for_draw(rng.random::<f64>());
            grid[row][col] = value;
            return SpawnOutcome::Placed { row, col, value };
        }
    }
    SpawnOutcome::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::{EMPTY_GRID, tile_count};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_tile_for_draw() {
        assert_eq!(tile_for_draw(0.0), 2);
        assert_eq!(tile_for_draw(0.5), 2);
        assert_eq!(tile_for_draw(0.8), 2);
        assert_eq!(tile_for_draw(0.81), 4);
        assert_eq!(tile_for_draw(0.999), 4);
    }

    #[test]
    fn test_spawn_places_one_tile() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut grid = EMPTY_GRID;
        let outcome = spawn(&mut grid, &mut rng);

        let SpawnOutcome::Placed { row, col, value } = outcome else {
            panic!("empty board must accept a spawn");
        };
        assert_eq!(grid[row][col], value);
        assert!(value == 2 || value == 4);
        assert_eq!(tile_count(&grid), 1);
    }

    #[test]
    fn test_spawn_only_fills_empty_cells() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut grid = [[8; GRID_SIZE]; GRID_SIZE];
        grid[2][1] = 0;
        let before = grid;

        match spawn(&mut grid, &mut rng) {
            SpawnOutcome::Placed { row, col, .. } => {
                assert_eq!((row, col), (2, 1));
                assert_ne!(grid[2][1], 0);
            }
            // Bounded rolls may miss the single hole; then nothing changes
            SpawnOutcome::Exhausted => assert_eq!(grid, before),
        }
    }

    #[test]
    fn test_spawn_on_full_board_is_noop() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut grid = [[2; GRID_SIZE]; GRID_SIZE];
        let before = grid;
        assert_eq!(spawn(&mut grid, &mut rng), SpawnOutcome::Exhausted);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_spawn_gives_up_after_max_attempts() {
        // On a full board every attempt draws a row and a column, and nothing else
        let mut rng = Pcg32::seed_from_u64(5);
        let mut replay = rng.clone();
        let mut grid = [[2; GRID_SIZE]; GRID_SIZE];
        assert_eq!(spawn(&mut grid, &mut rng), SpawnOutcome::Exhausted);

        for _ in 0..SPAWN_MAX_ATTEMPTS * 2 {
            let _: usize = replay.random_range(0..GRID_SIZE);
        }
        assert_eq!(rng.random::<u64>(), replay.random::<u64>());
    }

    #[test]
    fn test_spawn_value_distribution() {
        let mut rng = Pcg32::seed_from_u64(2048);
        let mut fours = 0;
        for _ in 0..2000 {
            let mut grid = EMPTY_GRID;
            if let SpawnOutcome::Placed { value: 4, .. } = spawn(&mut grid, &mut rng) {
                fours += 1;
            }
        }
        // Expect ~20% fours
        assert!((250..550).contains(&fours), "fours = {fours}");
    }
}
