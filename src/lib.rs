//! Slide 2048 - the sliding-tile puzzle
//!
//! Core modules:
//! - `sim`: Deterministic game logic (row/grid transforms, spawning, game state)
//! - `settings`: Rule configuration (winning tile, continue-after-win)
//! - `persistence`: Flat grid codec and saved-game envelope
//! - `web`: JavaScript facade (wasm32 only)

pub mod persistence;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use persistence::{GridParseError, RestoreError, SavedGame, decode_grid, encode_grid};
pub use settings::{Settings, SettingsError};
pub use sim::{Direction, GamePhase, GameState, Grid, MoveOutcome, Row, apply_move};

/// Game configuration constants
pub mod consts {
    /// Board edge length (the board is always square)
    pub const GRID_SIZE: usize = 4;
    /// Tile value that wins the game unless configured otherwise
    pub const DEFAULT_WINNING_VALUE: u32 = 2048;
    /// Cell rolls a spawn may make before giving up
    pub const SPAWN_MAX_ATTEMPTS: u32 = 100;
    /// Uniform draws above this spawn a 4 instead of a 2
    pub const FOUR_SPAWN_THRESHOLD: f64 = 0.8;
    /// Tiles seeded into a fresh board
    pub const INITIAL_TILES: usize = 2;
    /// Largest tile a 4x4 board can produce (2^17)
    pub const MAX_TILE: u32 = 1 << 17;
}

/// Returns true for the values a non-empty tile may hold (powers of two from 2 to `MAX_TILE`)
#[inline]
pub fn is_tile_value(value: u32) -> bool {
    (2..=consts::MAX_TILE).contains(&value) && value.is_power_of_two()
}
