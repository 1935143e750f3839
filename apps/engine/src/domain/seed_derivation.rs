//! Seed derivation for deterministic match behaviour.
//!
//! A match carries one base seed. Everything random about it (first dealer,
//! each hand's shuffle, seeded automated seats) is derived from that seed so
//! a replayed or re-imported match deals the same tiles.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::seats::Position;

/// Seed for shuffling hand `hand_no` (1-based) of a match.
pub fn derive_dealing_seed(match_seed: u64, hand_no: u32) -> u64 {
    match_seed
        .wrapping_add(u64::from(hand_no).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Seed for an automated seat, distinct per position.
pub fn derive_seat_seed(match_seed: u64, position: Position) -> u64 {
    match_seed
        .wrapping_add((position.index() as u64).wrapping_mul(100))
        .wrapping_add(1)
}

/// First dealer of a match, drawn uniformly from the four seats.
pub fn initial_dealer(match_seed: u64) -> Position {
    let mut rng = ChaCha20Rng::seed_from_u64(match_seed);
    Position::ROTATION[rng.random_range(0..Position::ROTATION.len())]
}
