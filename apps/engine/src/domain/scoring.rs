//! Pure scoring and ranking functions.
//!
//! `domino_rank` is the only ranking used for trick resolution.

use crate::domain::rules::{valid_bid_range, POINTS_PER_HAND};
use crate::domain::seats::{Position, Team};
use crate::domain::{Domino, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// One play in a trick: who played, and what.
pub type Play = (Position, Domino);

/// Rank assigned to the double of the suit being compared.
pub const DOUBLE_RANK: u8 = 100;

/// Points for winning a trick: 1 plus the count on every tile in it.
pub fn trick_points(plays: &[Play]) -> u8 {
    1 + plays.iter().map(|(_, d)| d.count_value()).sum::<u8>()
}

/// Points a team earns from its tricks and the tiles it captured.
pub fn hand_points(tricks_won: u8, captured: &[Domino]) -> u8 {
    tricks_won + captured.iter().map(|d| d.count_value()).sum::<u8>()
}

/// Strength of `domino` within `suit`, or `None` if it does not belong.
///
/// The suit's double outranks everything (100); other members rank by the
/// pip on their other end, plus one.
pub fn domino_rank(domino: Domino, suit: Suit) -> Option<u8> {
    if domino.is_double() {
        return (domino.high() == suit).then_some(DOUBLE_RANK);
    }
    domino.other_end(suit).map(|other| other.value() + 1)
}

/// Returns the winning play of a trick, or `None` for an empty trick.
pub fn trick_winner(plays: &[Play], lead_suit: Suit, trump_suit: Suit) -> Option<Play> {
    let (&first, rest) = plays.split_first()?;
    let mut best = first;
    let mut best_is_trump = first.1.belongs_to_suit(trump_suit);

    for &play in rest {
        let domino = play.1;
        let is_trump = domino.belongs_to_suit(trump_suit);

        if is_trump && !best_is_trump {
            best = play;
            best_is_trump = true;
            continue;
        }
        if best_is_trump && !is_trump {
            continue;
        }

        let suit = if is_trump { trump_suit } else { lead_suit };
        // Off-suit, non-trump plays never win
        let (Some(rank), Some(best_rank)) = (domino_rank(domino, suit), domino_rank(best.1, suit))
        else {
            continue;
        };
        if rank > best_rank {
            best = play;
        }
    }

    Some(best)
}

/// A bid must lie in 30..=42 and strictly beat the current high bid.
pub fn validate_bid(bid: u8, current_high: Option<u8>) -> Result<(), DomainError> {
    let range = valid_bid_range();
    if !range.contains(&bid) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!(
                "Bid must be between {} and {}",
                range.start(),
                range.end()
            ),
        ));
    }
    if let Some(high) = current_high {
        if bid <= high {
            return Err(DomainError::validation(
                ValidationKind::InvalidBid,
                format!("Bid must be higher than {high}"),
            ));
        }
    }
    Ok(())
}

/// Team whose marks reached `threshold`, if any.
pub fn check_match_winner(team1_marks: u8, team2_marks: u8, threshold: u8) -> Option<Team> {
    if team1_marks >= threshold {
        Some(Team::One)
    } else if team2_marks >= threshold {
        Some(Team::Two)
    } else {
        None
    }
}

/// Outcome of a completed hand for the bidding team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandOutcome {
    pub made_bid: bool,
    /// Team that earns the mark: the bidders if they made it, else their opponents.
    pub mark_to: Team,
}

pub fn hand_outcome(bid_team: Team, bid: u8, bid_team_points: u8) -> HandOutcome {
    let made_bid = bid_team_points >= bid;
    HandOutcome {
        made_bid,
        mark_to: if made_bid { bid_team } else { bid_team.opponent() },
    }
}

/// Both teams' hand points must add up to the full 42 once a hand is played out.
pub fn reconciles(team1_points: u8, team2_points: u8) -> bool {
    u16::from(team1_points) + u16::from(team2_points) == u16::from(POINTS_PER_HAND)
}
