//! Plays seeded random games to exercise the hot paths under `hotpath`.
//!
//! Usage: `profile [playouts] [seed]`, logging controlled by `RUST_LOG`.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spooky_g4::error::GameError;
use spooky_g4::game::Game;
use spooky_g4::outcome::GameOutcome;
use tracing_subscriber::EnvFilter;

const DEFAULT_PLAYOUTS: usize = 10_000;
const DEFAULT_SEED: u64 = 42;
/// Tilts never add tokens, so cap games that keep turning the board.
const MAX_PLIES: usize = 1_000;

fn arg_or<T: std::str::FromStr>(index: usize, default: T) -> T {
    std::env::args()
        .nth(index)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(default)
}

/// Plays one random game. Every move comes from `generate`, so an error here
/// is an engine fault and ends the game.
#[hotpath::measure]
fn playout(rng: &mut StdRng) -> Result<Option<GameOutcome>, GameError> {
    let mut game = Game::new();
    for _ in 0..MAX_PLIES {
        let moves = game.generate()?;
        let Some(move_) = moves.choose(rng) else {
            return Ok(None);
        };
        let outcome = game.make_move(move_).inspect_err(|err| {
            tracing::error!(%err, board = %game.board(), "generated move was rejected");
        })?;
        if outcome.is_some() {
            return Ok(outcome);
        }
    }
    Ok(None)
}

#[hotpath::main]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let playouts = arg_or(1, DEFAULT_PLAYOUTS);
    let seed = arg_or(2, DEFAULT_SEED);
    let mut rng = StdRng::seed_from_u64(seed);

    let (mut yellow, mut red, mut draws, mut unfinished) = (0usize, 0usize, 0usize, 0usize);
    let mut faults = 0usize;
    for _ in 0..playouts {
        match playout(&mut rng) {
            Ok(Some(GameOutcome::YellowWin)) => yellow += 1,
            Ok(Some(GameOutcome::RedWin)) => red += 1,
            Ok(Some(GameOutcome::Draw)) => draws += 1,
            Ok(None) => unfinished += 1,
            Err(_) => faults += 1,
        }
    }

    tracing::info!(playouts, seed, yellow, red, draws, unfinished, "random playouts finished");
    if faults > 0 {
        tracing::error!(faults, "playouts aborted by rejected moves");
        std::process::exit(1);
    }
}
