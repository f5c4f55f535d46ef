//! Shared test fixtures for the scenario suite (spec §8.4).

use uuid::Uuid;

use monopoly_arena_core::engine::game::Game;

pub const STARTING_CASH: i64 = 1500;

/// A stable, non-random player id so multi-run comparisons never depend on
/// `Uuid::new_v4` — only the seeded RNG is allowed to vary test outcomes.
pub fn player_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Fresh game with `num_players` seats, seeded for reproducible dice/shuffle.
/// Which physical `Uuid` ends up at `players[0]` after the seed-shuffle is
/// irrelevant to every scenario below — they all reason about "the current
/// player" and "the next active player" positionally, never by identity.
pub fn new_game(num_players: u8, seed: u64) -> Game {
    let specs = (0..num_players)
        .map(|i| (player_id(i as u128 + 1), format!("Player {i}")))
        .collect();
    Game::new(specs, Some(seed), STARTING_CASH)
}
