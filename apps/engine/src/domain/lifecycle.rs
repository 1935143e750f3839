//! Match start, per-hand setup, and hand completion.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::dealing::deal_hands;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::hand_outcome;
use crate::domain::seats::{first_bidder, next_in_rotation, team_of, ByTeam, Position, Team};
use crate::domain::seed_derivation::{derive_dealing_seed, initial_dealer};
use crate::domain::state::{require_phase, Game, HandRecord, Phase};
use crate::domain::Suit;
use crate::errors::domain::{ConflictKind, DomainError};

/// Summary of a scored hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand_no: u32,
    pub bid_team: Team,
    pub bid: u8,
    pub points: ByTeam<u8>,
    pub made_bid: bool,
    /// Marks after scoring.
    pub marks: ByTeam<u8>,
}

/// Start the match with a seed drawn from the thread RNG.
pub fn start_game(game: &mut Game) -> Result<(), DomainError> {
    let seed: u64 = rand::rng().random();
    start_game_with_seed(game, seed)
}

/// Start the match with a fixed seed; the first dealer and every shuffle
/// follow from it.
pub fn start_game_with_seed(game: &mut Game, seed: u64) -> Result<(), DomainError> {
    require_phase(game, Phase::Waiting, "start the game")?;
    if game.players.len() != PLAYERS {
        return Err(DomainError::conflict(
            ConflictKind::NotEnoughPlayers,
            format!("Need {PLAYERS} players to start, have {}", game.players.len()),
        ));
    }

    let dealer = initial_dealer(seed);
    game.seed = Some(seed);
    game.dealer = Some(dealer);
    info!(game_id = %game.id, seed, %dealer, "Match started");

    start_new_hand(game, dealer, seed);
    Ok(())
}

/// Reset per-hand state, deal, and open bidding left of `dealer`.
pub(crate) fn start_new_hand(game: &mut Game, dealer: Position, seed: u64) {
    game.clear_hand_state();
    for player in game.players.values_mut() {
        player.reset_for_new_hand();
    }

    game.hand_no += 1;
    game.dealer = Some(dealer);
    game.phase = Phase::Dealing;

    let mut hands = deal_hands(derive_dealing_seed(seed, game.hand_no));
    for player in game.players.values_mut() {
        player.hand = std::mem::take(&mut hands[player.position.index()]);
    }

    let bidder = first_bidder(dealer);
    game.bidding.current_bidder = Some(bidder);
    game.phase = Phase::Bidding;
    info!(
        game_id = %game.id,
        hand_no = game.hand_no,
        %dealer,
        first_bidder = %bidder,
        "Hand dealt"
    );
}

/// Facts about the hand that must be known before its last trick resolves.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HandContext {
    pub dealer: Position,
    pub bid_winner: Position,
    pub bid: u8,
    pub trump: Suit,
    pub seed: u64,
}

/// Score the finished hand, record it, and either finish the match or deal
/// the next hand with the dealer rotated.
pub(crate) fn complete_hand(game: &mut Game, ctx: HandContext) -> (HandResult, Option<Team>) {
    game.phase = Phase::Scoring;

    let bid_team = team_of(ctx.bid_winner);
    let outcome = hand_outcome(bid_team, ctx.bid, game.hand_points[bid_team]);
    game.marks[outcome.mark_to] += 1;

    let result = HandResult {
        hand_no: game.hand_no,
        bid_team,
        bid: ctx.bid,
        points: game.hand_points.clone(),
        made_bid: outcome.made_bid,
        marks: game.marks.clone(),
    };
    game.hand_history.push(HandRecord {
        hand_no: game.hand_no,
        dealer: ctx.dealer,
        bid_winner: ctx.bid_winner,
        bid: ctx.bid,
        trump: ctx.trump,
        points: result.points.clone(),
        made_bid: result.made_bid,
        marks: result.marks.clone(),
    });
    info!(
        game_id = %game.id,
        hand_no = game.hand_no,
        bid_team = bid_team.number(),
        bid = ctx.bid,
        team1_points = result.points.team1,
        team2_points = result.points.team2,
        made_bid = result.made_bid,
        team1_marks = result.marks.team1,
        team2_marks = result.marks.team2,
        "Hand scored"
    );

    if let Some(winner) = game.match_winner() {
        game.phase = Phase::Finished;
        info!(game_id = %game.id, winner = winner.number(), "Match finished");
        return (result, Some(winner));
    }

    start_new_hand(game, next_in_rotation(ctx.dealer), ctx.seed);
    (result, None)
}
