//! Player view of the current hand at a decision point.
//!
//! `CurrentHandInfo` is what an automated seat receives: its own tiles plus
//! the public state of the hand, and helpers that list the legal moves.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::legal_bids;
use crate::domain::scoring::Play;
use crate::domain::seats::{ByTeam, Position};
use crate::domain::state::{require_player, Game, Phase};
use crate::domain::tricks::legal_moves;
use crate::domain::{Domino, Suit};
use crate::errors::domain::DomainError;

/// Information visible to one seat while it is that seat's turn.
///
/// Use [`legal_bids`](Self::legal_bids), [`legal_plays`](Self::legal_plays), and
/// [`legal_trumps`](Self::legal_trumps) instead of re-deriving the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentHandInfo {
    pub game_id: String,
    pub phase: Phase,
    pub hand_no: u32,
    pub position: Position,
    pub dealer: Option<Position>,

    /// Your tiles, sorted.
    pub hand: Vec<Domino>,

    /// Bids placed this hand by seat; `None` for seats that have not bid
    /// or have passed.
    pub bids: [Option<u8>; 4],
    pub high_bid: Option<u8>,
    pub high_bidder: Option<Position>,
    pub bid_winner: Option<Position>,
    pub trump: Option<Suit>,

    pub trick_no: u8,
    pub leader: Option<Position>,
    pub lead_suit: Option<Suit>,
    /// Dominoes on the table this trick, in play order.
    pub current_trick: Vec<Play>,

    pub hand_points: ByTeam<u8>,
    pub marks: ByTeam<u8>,

    legal_bids: Vec<u8>,
    legal_plays: Vec<Domino>,
}

impl CurrentHandInfo {
    /// Snapshot what `position` can see. Fails only when the seat is empty.
    pub fn for_seat(game: &Game, position: Position) -> Result<Self, DomainError> {
        let player = require_player(game, position)?;
        let mut bids = [None; 4];
        for p in game.players.values() {
            bids[p.position.index()] = p.current_bid;
        }

        let mut hand = player.hand.clone();
        hand.sort();

        Ok(Self {
            game_id: game.id.clone(),
            phase: game.phase,
            hand_no: game.hand_no,
            position,
            dealer: game.dealer,
            hand,
            bids,
            high_bid: game.bidding.high_bid,
            high_bidder: game.bidding.high_bidder,
            bid_winner: game.bidding.bid_winner,
            trump: game.trump,
            trick_no: game.trick.trick_no,
            leader: game.trick.leader,
            lead_suit: game.trick.lead_suit,
            current_trick: game.trick.plays.clone(),
            hand_points: game.hand_points.clone(),
            marks: game.marks.clone(),
            legal_bids: legal_bids(game, position),
            legal_plays: legal_moves(game, position),
        })
    }

    /// Pass (0) first, then every acceptable amount. Empty outside your bid turn.
    pub fn legal_bids(&self) -> &[u8] {
        &self.legal_bids
    }

    /// Dominoes you may play now. Empty outside your play turn.
    pub fn legal_plays(&self) -> &[Domino] {
        &self.legal_plays
    }

    /// Any suit may be named trump; empty unless you are choosing.
    pub fn legal_trumps(&self) -> Vec<Suit> {
        if self.phase == Phase::TrumpSelection && self.bid_winner == Some(self.position) {
            Suit::ALL.to_vec()
        } else {
            Vec::new()
        }
    }

    pub fn is_leading(&self) -> bool {
        self.current_trick.is_empty()
    }
}
