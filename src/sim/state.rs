//! Game state and core simulation types
//!
//! A `GameState` is an explicit value: the board, score, terminal flags and
//! the seeded RNG that drives spawning. Nothing here is global.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::{EMPTY_GRID, Grid, contains, is_stuck};
use super::spawn::{SpawnOutcome, spawn};
use crate::consts::INITIAL_TILES;
use crate::settings::Settings;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Moves are accepted
    Playing,
    /// Winning tile reached; moves rejected unless the player keeps playing
    Won,
    /// No move can change the board
    Lost,
}

/// Parameters the spawn RNG is rebuilt from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Rebuild the generator; `stream` selects an independent sequence
    pub fn to_rng(&self) -> Pcg32 {
        if self.stream == 0 {
            Pcg32::seed_from_u64(self.seed)
        } else {
            Pcg32::new(self.seed, self.stream)
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// RNG parameters the current generator was built from
    pub rng_state: RngState,
    /// The board
    pub grid: Grid,
    /// Sum of all merged tile values
    pub score: u64,
    /// Accepted moves so far
    pub moves: u32,
    /// Set once the winning tile appears; never cleared
    pub won: bool,
    /// Set once the board is full and stuck
    pub lost: bool,
    /// Player chose to continue after winning
    pub keep_playing: bool,
    /// Tile value that wins
    pub winning_value: u32,
    /// Whether `keep_playing` may be enabled
    pub continue_after_win: bool,
    /// Spawns skipped because rerolls ran out
    pub spawn_failures: u32,
    rng: Pcg32,
}

impl GameState {
    /// Fresh game: empty board seeded with two tiles
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut state = Self::blank(RngState::new(seed), settings);
        for _ in 0..INITIAL_TILES {
            state.spawn_tile();
        }
        state.evaluate();
        state
    }

    /// Resume from an existing board (e.g. one restored from storage)
    pub fn from_grid(grid: Grid, rng_state: RngState, settings: &Settings) -> Self {
        let mut state = Self::blank(rng_state, settings);
        state.grid = grid;
        state.evaluate();
        state
    }

    fn blank(rng_state: RngState, settings: &Settings) -> Self {
        Self {
            rng_state,
            grid: EMPTY_GRID,
            score: 0,
            moves: 0,
            won: false,
            lost: false,
            keep_playing: false,
            winning_value: settings.winning_value,
            continue_after_win: settings.continue_after_win,
            spawn_failures: 0,
            rng: rng_state.to_rng(),
        }
    }

    /// Start over with a new seed, keeping the rules
    pub fn restart(&mut self, seed: u64) {
        let settings = Settings {
            winning_value: self.winning_value,
            continue_after_win: self.continue_after_win,
        };
        *self = Self::new(seed, &settings);
    }

    /// Once true, moves are rejected
    pub fn finished(&self) -> bool {
        self.lost || (self.won && !self.keep_playing)
    }

    pub fn phase(&self) -> GamePhase {
        if self.lost {
            GamePhase::Lost
        } else if self.won {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    /// Continue past the winning tile. Returns whether play resumed.
    pub fn keep_playing(&mut self) -> bool {
        if self.won && !self.lost && self.continue_after_win {
            self.keep_playing = true;
            log::info!("Continuing past {}", self.winning_value);
        }
        !self.finished()
    }

    /// Place one new tile, counting skipped spawns
    pub(crate) fn spawn_tile(&mut self) -> SpawnOutcome {
        let outcome = spawn(&mut self.grid, &mut self.rng);
        if outcome == SpawnOutcome::Exhausted {
            self.spawn_failures += 1;
            log::warn!(
                "Spawn skipped after exhausting rerolls ({} so far)",
                self.spawn_failures
            );
        }
        outcome
    }

    /// Refresh the won/lost flags from the board
    pub(crate) fn evaluate(&mut self) {
        if !self.won && contains(&self.grid, self.winning_value) {
            self.won = true;
            log::info!("Reached {} (score {})", self.winning_value, self.score);
        }
        if !self.lost && is_stuck(&self.grid) {
            self.lost = true;
            log::info!("No moves left (score {})", self.score);
        }
    }
}
