use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::rules::{min_next_bid, MAX_BID, PASS, PLAYERS};
use crate::domain::scoring::validate_bid;
use crate::domain::seats::{next_in_rotation, seat_offset, Position};
use crate::domain::state::{
    require_bid_winner, require_dealer, require_phase, require_player, Game, Phase,
};
use crate::domain::Suit;
use crate::errors::domain::DomainError;

/// What happened to the auction after a bid or pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BidProgress {
    /// Bidding continues with this seat.
    NextBidder { position: Position },
    /// Bidding closed. `forced` when everyone passed and the dealer took the minimum.
    Closed {
        bid_winner: Position,
        bid: u8,
        forced: bool,
    },
}

/// Bids `position` may make right now: pass plus every amount above the
/// high bid. Empty when it is not their turn to bid.
pub fn legal_bids(game: &Game, position: Position) -> Vec<u8> {
    if game.phase != Phase::Bidding || game.bidding.current_bidder != Some(position) {
        return Vec::new();
    }
    let mut bids = vec![PASS];
    if let Some(min) = min_next_bid(game.bidding.high_bid) {
        bids.extend(min..=MAX_BID);
    }
    bids
}

/// Record a bid (30..=42) or a pass (0) for the current bidder.
pub fn place_bid(game: &mut Game, position: Position, bid: u8) -> Result<BidProgress, DomainError> {
    debug!(game_id = %game.id, %position, bid, "Bid attempt");

    require_phase(game, Phase::Bidding, "bid")?;
    if game.bidding.current_bidder != Some(position) {
        return Err(DomainError::out_of_turn(format!(
            "Not {position}'s turn to bid"
        )));
    }
    require_player(game, position)?;
    if bid != PASS {
        validate_bid(bid, game.bidding.high_bid)?;
    }
    let dealer = require_dealer(game, "place_bid")?;

    if let Some(player) = game.players.get_mut(&position) {
        if bid == PASS {
            player.has_passed = true;
        } else {
            player.current_bid = Some(bid);
        }
    }
    if bid != PASS {
        game.bidding.high_bid = Some(bid);
        game.bidding.high_bidder = Some(position);
    }

    Ok(advance_bidding(game, position, dealer))
}

fn advance_bidding(game: &mut Game, last_bidder: Position, dealer: Position) -> BidProgress {
    let passed = game.players.values().filter(|p| p.has_passed).count();

    if passed >= PLAYERS - 1 {
        if let (Some(winner), Some(bid)) = (game.bidding.high_bidder, game.bidding.high_bid) {
            return close_bidding(game, winner, bid, false);
        }
    }

    if passed >= PLAYERS && game.bidding.high_bidder.is_none() {
        let forced = game.rules.forced_dealer_bid;
        if let Some(player) = game.players.get_mut(&dealer) {
            player.current_bid = Some(forced);
        }
        game.bidding.high_bid = Some(forced);
        game.bidding.high_bidder = Some(dealer);
        return close_bidding(game, dealer, forced, true);
    }

    // At most three seats have passed here, so someone is still in.
    let next = (1..=PLAYERS)
        .map(|step| seat_offset(last_bidder, step))
        .find(|p| game.players.get(p).is_some_and(|pl| !pl.has_passed))
        .unwrap_or_else(|| next_in_rotation(last_bidder));
    game.bidding.current_bidder = Some(next);
    debug!(game_id = %game.id, next_bidder = %next, "Bidding advanced");
    BidProgress::NextBidder { position: next }
}

fn close_bidding(game: &mut Game, winner: Position, bid: u8, forced: bool) -> BidProgress {
    game.bidding.bid_winner = Some(winner);
    game.bidding.current_bidder = None;
    game.phase = Phase::TrumpSelection;
    info!(
        game_id = %game.id,
        hand_no = game.hand_no,
        bid_winner = %winner,
        bid,
        forced,
        "Bidding complete"
    );
    BidProgress::Closed {
        bid_winner: winner,
        bid,
        forced,
    }
}

/// Bid winner names trump (0..=6) and leads the first trick.
pub fn select_trump(game: &mut Game, position: Position, suit: u8) -> Result<Suit, DomainError> {
    debug!(game_id = %game.id, %position, suit, "Trump attempt");

    require_phase(game, Phase::TrumpSelection, "select trump")?;
    let winner = require_bid_winner(game, "select_trump")?;
    if position != winner {
        return Err(DomainError::out_of_turn(
            "Only the bid winner can select trump",
        ));
    }
    let trump = Suit::try_from(suit)?;

    game.trump = Some(trump);
    game.trick.leader = Some(winner);
    game.trick.trick_no = 1;
    game.trick.plays.clear();
    game.trick.lead_suit = None;
    game.phase = Phase::Playing;
    info!(game_id = %game.id, hand_no = game.hand_no, %trump, leader = %winner, "Trump selected");
    Ok(trump)
}
