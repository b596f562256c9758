//! Slide 2048 entry point
//!
//! The web build is driven from JavaScript through `slide_2048::web`. The
//! native binary plays a seeded game on its own and prints the result.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use slide_2048::Settings;
    use slide_2048::sim::{Direction, GameState, apply_move, format_grid, max_tile};

    /// Stop a runaway game
    const MAX_MOVES: u32 = 100_000;
    /// Fixed preference: keep big tiles in the bottom-right corner
    const PREFERENCE: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::Left,
        Direction::Up,
    ];

    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("usage: slide-2048 [seed]");
                std::process::exit(2);
            }
        },
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default(),
    };

    let settings = Settings::load();
    let mut state = GameState::new(seed, &settings);
    log::info!("Slide 2048 (native) starting with seed: {}", seed);

    while !state.finished() && state.moves < MAX_MOVES {
        let moved = PREFERENCE
            .iter()
            .any(|&dir| apply_move(&mut state, dir).is_applied());
        if !moved {
            break;
        }
        if state.moves % 100 == 0 {
            log::info!(
                "Move {}: score {}, max tile {}",
                state.moves,
                state.score,
                max_tile(&state.grid)
            );
        }
    }

    println!("{}", format_grid(&state.grid));
    println!(
        "seed {}  moves {}  score {}  max tile {}  outcome {:?}",
        seed,
        state.moves,
        state.score,
        max_tile(&state.grid),
        state.phase()
    );
    if state.spawn_failures > 0 {
        log::warn!("{} spawns were skipped", state.spawn_failures);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is slide_2048::web::start, this is just to satisfy the compiler
}
