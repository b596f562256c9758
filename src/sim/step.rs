//! Move application
//!
//! A move is accepted or rejected as a whole: rejection happens before any
//! state is touched.

use super::grid::{Direction, format_grid, move_all_in_direction};
use super::spawn::SpawnOutcome;
use super::state::GameState;

/// Why a move was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The game already ended
    Finished,
    /// The move would not change the board
    Unchanged,
}

/// Result of [`apply_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied { points: u64, spawn: SpawnOutcome },
    Rejected(Rejection),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Slide the board in `direction`, score merges, spawn a tile, re-check the end
pub fn apply_move(state: &mut GameState, direction: Direction) -> MoveOutcome {
    if state.finished() {
        return MoveOutcome::Rejected(Rejection::Finished);
    }

    let moved = move_all_in_direction(&state.grid, direction);
    if moved.cells == state.grid {
        return MoveOutcome::Rejected(Rejection::Unchanged);
    }

    state.grid = moved.cells;
    state.score += moved.points;
    state.moves += 1;
    let spawn = state.spawn_tile();
    state.evaluate();

    log::debug!(
        "Move {} {}: +{} (score {})\n{}",
        state.moves,
        direction,
        moved.points,
        state.score,
        format_grid(&state.grid)
    );

    MoveOutcome::Applied {
        points: moved.points,
        spawn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::grid::tile_count;
    use crate::sim::state::{GamePhase, RngState};

    fn state_with(grid: crate::sim::Grid, settings: &Settings) -> GameState {
        GameState::from_grid(grid, RngState::new(12345), settings)
    }

    #[test]
    fn test_move_merges_scores_and_spawns() {
        let grid = [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]];
        let mut state = state_with(grid, &Settings::default());

        let outcome = apply_move(&mut state, Direction::Right);
        let MoveOutcome::Applied { points, spawn } = outcome else {
            panic!("move should apply");
        };
        assert_eq!(points, 4);
        assert_eq!(state.score, 4);
        assert_eq!(state.moves, 1);
        assert_eq!(state.grid[0][3], 4);
        assert!(spawn.is_placed());
        assert_eq!(tile_count(&state.grid), 2);
    }

    #[test]
    fn test_unchanged_move_is_rejected() {
        let grid = [[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]];
        let mut state = state_with(grid, &Settings::default());

        let outcome = apply_move(&mut state, Direction::Right);
        assert_eq!(outcome, MoveOutcome::Rejected(Rejection::Unchanged));
        assert_eq!(state.grid, grid);
        assert_eq!(state.moves, 0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_winning_move_finishes_game() {
        let settings = Settings::default().with_winning_value(512);
        let grid = [[256, 256, 0, 0], [0; 4], [0; 4], [0; 4]];
        let mut state = state_with(grid, &settings);

        assert!(apply_move(&mut state, Direction::Left).is_applied());
        assert!(state.won);
        assert_eq!(state.phase(), GamePhase::Won);
        assert_eq!(state.score, 512);

        let before = state.grid;
        let outcome = apply_move(&mut state, Direction::Right);
        assert_eq!(outcome, MoveOutcome::Rejected(Rejection::Finished));
        assert_eq!(state.grid, before);
    }

    #[test]
    fn test_continue_after_win() {
        let settings = Settings {
            winning_value: 512,
            continue_after_win: true,
        };
        let grid = [[256, 256, 0, 0], [0; 4], [0; 4], [0; 4]];
        let mut state = state_with(grid, &settings);

        apply_move(&mut state, Direction::Left);
        assert!(state.finished());
        assert!(state.keep_playing());
        assert!(apply_move(&mut state, Direction::Right).is_applied());
        assert!(state.won);
    }

    #[test]
    fn test_loss_flag_tracks_stuck_board() {
        // Sliding left leaves a single hole for the spawn; whatever lands
        // there, the flag must agree with the board.
        let grid = [[0, 2, 4, 8], [8, 4, 2, 4], [2, 8, 4, 2], [4, 2, 8, 4]];
        let mut state = state_with(grid, &Settings::default());

        assert!(apply_move(&mut state, Direction::Left).is_applied());
        assert_eq!(state.lost, crate::sim::grid::is_stuck(&state.grid));
    }

    #[test]
    fn test_lost_game_rejects_moves() {
        let grid = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        let mut state = state_with(grid, &Settings::default());
        assert!(state.lost);
        for dir in Direction::ALL {
            assert_eq!(
                apply_move(&mut state, dir),
                MoveOutcome::Rejected(Rejection::Finished)
            );
        }
    }
}
