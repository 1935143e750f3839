//! Deterministic dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::seats::Position;
use crate::domain::{full_set, Domino};

/// The full set in an order fixed by `seed`.
pub fn shuffled_set(seed: u64) -> Vec<Domino> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut tiles = full_set();
    tiles.shuffle(&mut rng);
    tiles
}

/// Deal the shuffled set round-robin in rotation order, starting at north.
///
/// Returns one hand per seat, indexed by `Position::index`. Hands are sorted.
pub fn deal_hands(seed: u64) -> [Vec<Domino>; PLAYERS] {
    let mut hands: [Vec<Domino>; PLAYERS] = Default::default();
    for hand in hands.iter_mut() {
        hand.reserve(HAND_SIZE);
    }
    for (i, tile) in shuffled_set(seed).into_iter().enumerate() {
        hands[Position::ROTATION[i % PLAYERS].index()].push(tile);
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }
    hands
}
