use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::lifecycle::{complete_hand, HandContext, HandResult};
use crate::domain::rules::{PLAYERS, TRICKS_PER_HAND};
use crate::domain::scoring::{trick_points, trick_winner};
use crate::domain::seats::{team_of, Position, Team};
use crate::domain::state::{
    require_bid_winner, require_dealer, require_leader, require_phase, require_player,
    require_trump, Game, Phase, TrickRecord,
};
use crate::domain::{Domino, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of a play: the trick if it completed, the hand if that trick was
/// the last one, and the match winner if that hand ended the match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub trick: Option<TrickRecord>,
    pub hand: Option<HandResult>,
    pub match_winner: Option<Team>,
}

/// Dominoes `position` may legally play, independent of turn enforcement.
pub fn legal_moves(game: &Game, position: Position) -> Vec<Domino> {
    if game.phase != Phase::Playing {
        return Vec::new();
    }
    game.players
        .get(&position)
        .map(|p| p.playable_dominoes(game.trick.lead_suit, game.trump))
        .unwrap_or_default()
}

/// Suit a trick's first domino establishes: trump if it belongs to trump,
/// otherwise its higher pip.
pub fn lead_suit_for(domino: Domino, trump: Suit) -> Suit {
    if domino.belongs_to_suit(trump) {
        trump
    } else {
        domino.high()
    }
}

/// Play a domino into the current trick, enforcing phase, turn, ownership,
/// and follow-suit. Trick and hand completion happen here too.
pub fn play_domino(
    game: &mut Game,
    position: Position,
    domino_id: &str,
) -> Result<PlayOutcome, DomainError> {
    debug!(game_id = %game.id, %position, domino = domino_id, "Play attempt");

    require_phase(game, Phase::Playing, "play a domino")?;
    let leader = require_leader(game, "play_domino")?;
    let expected = game.current_turn().unwrap_or(leader);
    if position != expected {
        return Err(DomainError::out_of_turn(format!(
            "Not {position}'s turn to play"
        )));
    }

    let player = require_player(game, position)?;
    let domino = player.get_domino(domino_id).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::DominoNotInHand,
            format!("{position} does not hold {domino_id}"),
        )
    })?;
    if let Some(lead) = game.trick.lead_suit {
        if !domino.belongs_to_suit(lead) && player.can_follow_suit(lead) {
            return Err(DomainError::validation(
                ValidationKind::MustFollowSuit,
                format!("Must follow the lead suit ({lead}s)"),
            ));
        }
    }
    let trump = require_trump(game, "play_domino")?;

    let lead = game
        .trick
        .lead_suit
        .unwrap_or_else(|| lead_suit_for(domino, trump));
    let mut plays = game.trick.plays.clone();
    plays.push((position, domino));

    // Resolve everything the completing play needs before mutating.
    let completes_trick = plays.len() == PLAYERS;
    let resolution = if completes_trick {
        let (winner, winning_domino) = trick_winner(&plays, lead, trump).ok_or_else(|| {
            DomainError::validation_other("Invariant violated: full trick has no winner")
        })?;
        let hand_ctx = if game.trick.trick_no >= TRICKS_PER_HAND {
            Some(HandContext {
                dealer: require_dealer(game, "play_domino hand_complete")?,
                bid_winner: require_bid_winner(game, "play_domino hand_complete")?,
                bid: game.bidding.high_bid.ok_or_else(|| {
                    DomainError::validation_other(
                        "Invariant violated: high_bid must be set (play_domino hand_complete)",
                    )
                })?,
                trump,
                seed: game.seed.ok_or_else(|| {
                    DomainError::validation_other(
                        "Invariant violated: seed must be set (play_domino hand_complete)",
                    )
                })?,
            })
        } else {
            None
        };
        Some((winner, winning_domino, hand_ctx))
    } else {
        None
    };

    if let Some(player) = game.players.get_mut(&position) {
        player.remove_domino(domino);
    }
    game.trick.lead_suit = Some(lead);
    game.trick.plays = plays;

    let Some((winner, winning_domino, hand_ctx)) = resolution else {
        return Ok(PlayOutcome::default());
    };

    let record = resolve_trick(game, winner, winning_domino, lead, trump);
    let mut outcome = PlayOutcome {
        trick: Some(record),
        ..PlayOutcome::default()
    };

    if let Some(ctx) = hand_ctx {
        let (hand, match_winner) = complete_hand(game, ctx);
        outcome.hand = Some(hand);
        outcome.match_winner = match_winner;
    }
    Ok(outcome)
}

fn resolve_trick(
    game: &mut Game,
    winner: Position,
    winning_domino: Domino,
    lead_suit: Suit,
    trump: Suit,
) -> TrickRecord {
    let plays = std::mem::take(&mut game.trick.plays);
    let points = trick_points(&plays);
    let team = team_of(winner);

    game.tricks_won[team] += 1;
    game.hand_points[team] += points;
    game.captured[team].extend(plays.iter().map(|&(_, d)| d));

    let record = TrickRecord {
        hand_no: game.hand_no,
        trick_no: game.trick.trick_no,
        plays,
        winner,
        winning_domino,
        points,
        lead_suit,
        trump,
    };
    game.trick_history.push(record.clone());

    game.trick.lead_suit = None;
    game.trick.leader = Some(winner);
    game.trick.trick_no += 1;

    info!(
        game_id = %game.id,
        hand_no = record.hand_no,
        trick_no = record.trick_no,
        %winner,
        winning_domino = %winning_domino,
        points,
        "Trick won"
    );
    record
}
