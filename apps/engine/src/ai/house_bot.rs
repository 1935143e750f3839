//! HouseBot: the deterministic table bot.
//!
//! Bidding: count tiles in the longest suit. Four or more raise the high bid
//! by one while it is under 35 (never past 35); three raise it while under 32.
//! Anything else passes.
//!
//! Trump: the longest suit, ties to the higher suit.
//!
//! Play: on lead, the legal domino with the most pips; when following, the
//! first legal domino.

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player::dominant_suit;
use crate::domain::player_view::CurrentHandInfo;
use crate::domain::rules::{MIN_BID, PASS};
use crate::domain::{Domino, Suit};

const STRONG_SUIT: u8 = 4;
const STRONG_CEILING: u8 = 35;
const FAIR_SUIT: u8 = 3;
const FAIR_CEILING: u8 = 32;

#[derive(Clone, Debug, Default)]
pub struct HouseBot;

impl HouseBot {
    pub const NAME: &'static str = "house";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    /// Target bid for this hand given the high bid so far; `PASS` to stay out.
    fn target_bid(hand: &[Domino], high_bid: Option<u8>) -> u8 {
        let high = high_bid.unwrap_or(MIN_BID - 1);
        let length = dominant_suit(hand).map_or(0, |(_, n)| n);

        if length >= STRONG_SUIT && high < STRONG_CEILING {
            (high + 1).min(STRONG_CEILING)
        } else if length >= FAIR_SUIT && high < FAIR_CEILING {
            high + 1
        } else {
            PASS
        }
    }
}

impl AiPlayer for HouseBot {
    fn choose_bid(&self, state: &CurrentHandInfo) -> Result<u8, AiError> {
        let legal = state.legal_bids();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal bids available".into()));
        }
        let target = Self::target_bid(&state.hand, state.high_bid);
        Ok(if legal.contains(&target) { target } else { PASS })
    }

    fn choose_trump(&self, state: &CurrentHandInfo) -> Result<Suit, AiError> {
        if state.legal_trumps().is_empty() {
            return Err(AiError::InvalidMove("Not choosing trump".into()));
        }
        Ok(dominant_suit(&state.hand).map_or(Suit::Blanks, |(suit, _)| suit))
    }

    fn choose_play(&self, state: &CurrentHandInfo) -> Result<Domino, AiError> {
        let legal = state.legal_plays();
        let choice = if state.is_leading() {
            // Ties keep the first in hand order.
            legal
                .iter()
                .copied()
                .rev()
                .max_by_key(|d| d.pip_total())
        } else {
            legal.first().copied()
        };
        choice.ok_or_else(|| AiError::InvalidMove("No legal plays available".into()))
    }
}
