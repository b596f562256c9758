//! JavaScript facade
//!
//! The page owns rendering and keyboard wiring; it feeds direction symbols
//! in and reads the flat board, score and flags back out.

use wasm_bindgen::prelude::*;

use crate::persistence::SavedGame;
use crate::settings::Settings;
use crate::sim::{Direction, GameState, MoveOutcome};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Slide 2048 core loaded");
}

fn now_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Game instance handed to the page
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
}

#[wasm_bindgen]
impl WebGame {
    /// New game. `winning_value` of 0 uses the stored settings.
    #[wasm_bindgen(constructor)]
    pub fn new(winning_value: u32) -> WebGame {
        let mut settings = Settings::load();
        if winning_value != 0 {
            let requested = settings.with_winning_value(winning_value);
            match requested.validate() {
                Ok(()) => settings = requested,
                Err(e) => log::warn!("{e}; keeping {}", settings.winning_value),
            }
        }

        let seed = now_seed();
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            state: GameState::new(seed, &settings),
        }
    }

    /// Resume the stored game, if any
    pub fn load() -> Option<WebGame> {
        let saved = SavedGame::load()?;
        match saved.restore() {
            Ok(state) => Some(WebGame { state }),
            Err(e) => {
                log::warn!("Discarding saved game: {e}");
                SavedGame::clear();
                None
            }
        }
    }

    /// Apply `"up" | "down" | "left" | "right"`. Returns whether the board moved.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, direction: &str) -> bool {
        let direction: Direction = match direction.parse() {
            Ok(d) => d,
            Err(e) => {
                log::warn!("{e}");
                return false;
            }
        };

        match crate::sim::apply_move(&mut self.state, direction) {
            MoveOutcome::Applied { .. } => {
                if self.state.finished() {
                    SavedGame::clear();
                } else {
                    self.save();
                }
                true
            }
            MoveOutcome::Rejected(_) => false,
        }
    }

    /// Row-major board, 16 cells
    pub fn cells(&self) -> Vec<u32> {
        self.state.grid.iter().flatten().copied().collect()
    }

    pub fn score(&self) -> f64 {
        self.state.score as f64
    }

    pub fn won(&self) -> bool {
        self.state.won
    }

    pub fn lost(&self) -> bool {
        self.state.lost
    }

    pub fn finished(&self) -> bool {
        self.state.finished()
    }

    #[wasm_bindgen(js_name = keepPlaying)]
    pub fn keep_playing(&mut self) -> bool {
        self.state.keep_playing()
    }

    pub fn restart(&mut self) {
        let seed = now_seed();
        self.state.restart(seed);
        SavedGame::clear();
        log::info!("Game restarted with seed: {}", seed);
    }

    pub fn save(&self) {
        SavedGame::capture(&self.state).save();
    }
}
