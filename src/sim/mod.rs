//! Deterministic game logic
//!
//! All gameplay lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Transforms return new boards instead of mutating their input
//! - No rendering, input or storage dependencies

pub mod grid;
pub mod row;
pub mod spawn;
pub mod state;
pub mod step;

pub use grid::{
    Direction, EMPTY_GRID, Grid, ParseDirectionError, can_move, empty_cells, format_grid,
    get_column, is_stuck, legal_directions, max_tile, move_all_in_direction, move_down, move_up,
    set_column,
};
pub use row::{Moved, Row, combine_adjacent, move_left, move_right, slide};
pub use spawn::{SpawnOutcome, spawn};
pub use state::{GamePhase, GameState, RngState};
pub use step::{MoveOutcome, Rejection, apply_move};
