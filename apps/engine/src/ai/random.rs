//! Random AI player - makes uniformly random legal moves.
//!
//! [`RandomPlayer`] is the baseline [`AiPlayer`](super::AiPlayer): seedable for
//! reproducible simulations, and it only ever picks from the legal-move helpers.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::CurrentHandInfo;
use crate::domain::{Domino, Suit};

/// AI that makes random legal moves.
pub struct RandomPlayer {
    /// `AiPlayer` methods take `&self`; the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible choices, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick<T: Copy>(&self, options: &[T], what: &str) -> Result<T, AiError> {
        if options.is_empty() {
            return Err(AiError::InvalidMove(format!("No legal {what} available")));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal(format!("Failed to choose random {what}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_bid(&self, state: &CurrentHandInfo) -> Result<u8, AiError> {
        self.pick(state.legal_bids(), "bids")
    }

    fn choose_trump(&self, state: &CurrentHandInfo) -> Result<Suit, AiError> {
        self.pick(&state.legal_trumps(), "trumps")
    }

    fn choose_play(&self, state: &CurrentHandInfo) -> Result<Domino, AiError> {
        self.pick(state.legal_plays(), "plays")
    }
}
