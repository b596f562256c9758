//! Saved game envelope
//!
//! JSON wrapper around the flat grid plus the counters needed to resume.

use serde::{Deserialize, Serialize};

use super::codec::{GridParseError, decode_grid, encode_grid};
use crate::settings::{Settings, SettingsError};
use crate::sim::{GameState, RngState};

/// LocalStorage key (used only in wasm32)
#[allow(dead_code)]
const STORAGE_KEY: &str = "slide_2048_save";

/// Why a saved game could not be resumed
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RestoreError {
    #[error("bad board: {0}")]
    Grid(#[from] GridParseError),
    #[error("bad rules: {0}")]
    Settings(#[from] SettingsError),
}

/// A game in progress, as written to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// Flat comma-separated board
    pub grid: String,
    pub score: u64,
    pub moves: u32,
    pub won: bool,
    pub lost: bool,
    #[serde(default)]
    pub keep_playing: bool,
    pub seed: u64,
    pub winning_value: u32,
    #[serde(default)]
    pub continue_after_win: bool,
}

impl SavedGame {
    pub fn capture(state: &GameState) -> Self {
        Self {
            grid: encode_grid(&state.grid),
            score: state.score,
            moves: state.moves,
            won: state.won,
            lost: state.lost,
            keep_playing: state.keep_playing,
            seed: state.rng_state.seed,
            winning_value: state.winning_value,
            continue_after_win: state.continue_after_win,
        }
    }

    /// Rebuild the game. The RNG resumes on a stream keyed by the move count,
    /// so a restored game does not replay the spawns it already made.
    pub fn restore(&self) -> Result<GameState, RestoreError> {
        let settings = Settings {
            winning_value: self.winning_value,
            continue_after_win: self.continue_after_win,
        };
        settings.validate()?;
        let grid = decode_grid(&self.grid)?;
        let rng_state = RngState {
            seed: self.seed,
            stream: u64::from(self.moves) + 1,
        };

        let mut state = GameState::from_grid(grid, rng_state, &settings);
        state.score = self.score;
        state.moves = self.moves;
        state.won |= self.won;
        state.lost |= self.lost;
        state.keep_playing = self.keep_playing && state.continue_after_win;
        Ok(state)
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Load the saved game from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let json = storage.get_item(STORAGE_KEY).ok()??;
        let saved = Self::from_json(&json);
        if saved.is_some() {
            log::info!("Loaded saved game");
        }
        saved
    }

    /// Save to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        if let Some(json) = self.to_json() {
            if let Some(storage) = web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
            {
                let _ = storage.set_item(STORAGE_KEY, &json);
                log::info!("Game saved (score {})", self.score);
            }
        }
    }

    /// Clear the saved game from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn clear() {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.remove_item(STORAGE_KEY);
            log::info!("Saved game cleared");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Option<Self> {
        None
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn clear() {
        // No-op for native
    }
}
