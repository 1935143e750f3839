//! Full-state export and validated re-import.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::domain::chat::ChatMessage;
use crate::domain::player::Player;
use crate::domain::rules::{HAND_SIZE, PLAYERS, TRICKS_PER_HAND};
use crate::domain::scoring::hand_points;
use crate::domain::seats::{expected_actor, ByTeam, Position, Team};
use crate::domain::state::{
    BiddingState, Game, HandRecord, Phase, Spectator, TrickRecord, TrickState,
};
use crate::domain::{full_set, Domino, Suit};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Plain structured record of every field of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: String,
    #[serde(default)]
    pub rules: RulesConfig,
    pub phase: Phase,
    /// Seated players in rotation order, with hands and bidding status.
    pub players: Vec<Player>,
    #[serde(default)]
    pub spectators: Vec<Spectator>,
    pub dealer: Option<Position>,
    pub bidding: BiddingState,
    pub trump: Option<Suit>,
    pub trick: TrickState,
    pub hand_points: ByTeam<u8>,
    pub tricks_won: ByTeam<u8>,
    pub captured: ByTeam<Vec<Domino>>,
    pub marks: ByTeam<u8>,
    pub hand_no: u32,
    pub seed: Option<u64>,
    pub hand_history: Vec<HandRecord>,
    pub trick_history: Vec<TrickRecord>,
    #[serde(default)]
    pub chat: Vec<ChatMessage>,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id.clone(),
            rules: game.rules,
            phase: game.phase,
            players: game.players.values().cloned().collect(),
            spectators: game.spectators.clone(),
            dealer: game.dealer,
            bidding: game.bidding.clone(),
            trump: game.trump,
            trick: game.trick.clone(),
            hand_points: game.hand_points.clone(),
            tricks_won: game.tricks_won.clone(),
            captured: game.captured.clone(),
            marks: game.marks.clone(),
            hand_no: game.hand_no,
            seed: game.seed,
            hand_history: game.hand_history.clone(),
            trick_history: game.trick_history.clone(),
            chat: game.chat.clone(),
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = DomainError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let mut players: BTreeMap<Position, Player> = BTreeMap::new();
        for player in record.players {
            if let Some(existing) = players.get(&player.position) {
                return Err(DomainError::conflict(
                    ConflictKind::SeatTaken,
                    format!(
                        "Users {} and {} both claim {}",
                        existing.user_id, player.user_id, player.position
                    ),
                ));
            }
            players.insert(player.position, player);
        }

        let game = Game {
            id: record.game_id,
            rules: record.rules,
            phase: record.phase,
            players,
            spectators: record.spectators,
            dealer: record.dealer,
            bidding: record.bidding,
            trump: record.trump,
            trick: record.trick,
            hand_points: record.hand_points,
            tricks_won: record.tricks_won,
            captured: record.captured,
            marks: record.marks,
            hand_no: record.hand_no,
            seed: record.seed,
            hand_history: record.hand_history,
            trick_history: record.trick_history,
            chat: record.chat,
        };
        validate(&game)?;
        Ok(game)
    }
}

pub fn export_record(game: &Game) -> GameRecord {
    GameRecord::from(game)
}

pub fn import_record(record: GameRecord) -> Result<Game, DomainError> {
    Game::try_from(record)
}

impl GameRecord {
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(|e| invalid(format!("Cannot encode record: {e}")))
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| invalid(format!("Cannot decode record: {e}")))
    }
}

fn invalid(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidRecord, detail)
}

fn ensure(cond: bool, detail: impl FnOnce() -> String) -> Result<(), DomainError> {
    if cond {
        Ok(())
    } else {
        Err(invalid(detail()))
    }
}

/// Structural checks on an imported match.
fn validate(game: &Game) -> Result<(), DomainError> {
    game.rules
        .validate()
        .map_err(|e| invalid(format!("Invalid rules: {}", e.detail())))?;

    for (position, player) in &game.players {
        ensure(player.position == *position, || {
            format!("Player {} is filed under {position}", player.user_id)
        })?;
        ensure(player.hand.len() <= HAND_SIZE, || {
            format!("{position} holds more than {HAND_SIZE} dominoes")
        })?;
    }
    let mut user_ids: Vec<_> = game.players.values().map(|p| p.user_id).collect();
    user_ids.sort_unstable();
    user_ids.dedup();
    ensure(user_ids.len() == game.players.len(), || {
        "A user is seated more than once".to_string()
    })?;

    ensure(
        matches!(
            game.phase,
            Phase::Waiting | Phase::Bidding | Phase::TrumpSelection | Phase::Playing | Phase::Finished
        ),
        || format!("Phase {} is transient and cannot be imported", game.phase),
    )?;

    let census = game.tile_census();
    if game.phase == Phase::Waiting {
        ensure(census.is_empty(), || {
            "No dominoes may be dealt while waiting".to_string()
        })?;
    } else {
        ensure(game.players.len() == PLAYERS, || {
            format!("Phase {} requires {PLAYERS} players", game.phase)
        })?;
        let mut expected = full_set();
        expected.sort();
        ensure(census == expected, || {
            "Hands, current trick, and captures must partition the full set".to_string()
        })?;
        ensure(game.dealer.is_some() && game.seed.is_some() && game.hand_no > 0, || {
            "A started match needs a dealer, seed, and hand number".to_string()
        })?;
    }

    validate_hand_tallies(game)?;

    let tricks_taken = game.tricks_won.team1 + game.tricks_won.team2;
    match game.phase {
        Phase::Bidding | Phase::TrumpSelection => {
            ensure(tricks_taken == 0 && game.trick.trick_no == 0, || {
                format!("No tricks may be taken during {}", game.phase)
            })?;
            ensure(game.trick.plays.is_empty(), || {
                format!("No dominoes may be played during {}", game.phase)
            })?;
        }
        _ => {}
    }

    match game.phase {
        Phase::Bidding => {
            ensure(game.bidding.current_bidder.is_some(), || {
                "Bidding requires a current bidder".to_string()
            })?;
            ensure(
                game.players.values().all(|p| p.hand.len() == HAND_SIZE),
                || "Every hand must be full during bidding".to_string(),
            )?;
        }
        Phase::TrumpSelection => {
            ensure(
                game.bidding.bid_winner.is_some() && game.bidding.high_bid.is_some(),
                || "Trump selection requires a bid winner and bid".to_string(),
            )?;
            ensure(
                game.players.values().all(|p| p.hand.len() == HAND_SIZE),
                || "Every hand must be full during trump selection".to_string(),
            )?;
        }
        Phase::Playing => {
            ensure(
                game.trump.is_some()
                    && game.trick.leader.is_some()
                    && game.bidding.bid_winner.is_some()
                    && game.bidding.high_bid.is_some(),
                || "Play requires trump, leader, bid winner, and bid".to_string(),
            )?;
            ensure(
                (1..=TRICKS_PER_HAND).contains(&game.trick.trick_no),
                || format!("Trick number {} out of range", game.trick.trick_no),
            )?;
            ensure(game.trick.plays.len() < PLAYERS, || {
                "A full trick must already be resolved".to_string()
            })?;
            ensure(
                game.trick.plays.is_empty() == game.trick.lead_suit.is_none(),
                || "Lead suit must be set exactly when a trick is under way".to_string(),
            )?;
            validate_hand_progress(game, tricks_taken)?;
        }
        Phase::Finished => {
            ensure(tricks_taken == TRICKS_PER_HAND, || {
                "A finished match keeps its fully played last hand".to_string()
            })?;
        }
        _ => {}
    }

    let finished = game.match_winner().is_some();
    ensure(finished == (game.phase == Phase::Finished), || {
        "Phase must be finished exactly when a team has the winning marks".to_string()
    })?;

    Ok(())
}

/// Per-team counters must agree with the tiles each team captured.
fn validate_hand_tallies(game: &Game) -> Result<(), DomainError> {
    for team in [Team::One, Team::Two] {
        let tricks = game.tricks_won[team];
        let captured = &game.captured[team];
        ensure(captured.len() == PLAYERS * usize::from(tricks), || {
            format!(
                "{team} captured {} dominoes in {tricks} tricks",
                captured.len()
            )
        })?;
        // Captures are distinct tiles and tricks <= 7 by now
        let expected = hand_points(tricks, captured);
        ensure(game.hand_points[team] == expected, || {
            format!(
                "{team} has {} hand points, its captures are worth {expected}",
                game.hand_points[team]
            )
        })?;
    }
    Ok(())
}

/// Trick number, hand sizes, and the current trick must describe the same
/// point in the hand.
fn validate_hand_progress(game: &Game, tricks_taken: u8) -> Result<(), DomainError> {
    let trick_no = game.trick.trick_no;
    ensure(tricks_taken + 1 == trick_no, || {
        format!("Trick {trick_no} follows {tricks_taken} completed tricks")
    })?;

    let Some(leader) = game.trick.leader else {
        return Err(invalid("Play requires a trick leader"));
    };
    for (i, (position, _)) in game.trick.plays.iter().enumerate() {
        let expected = expected_actor(leader, i);
        ensure(*position == expected, || {
            format!("Play {} of the trick belongs to {expected}, not {position}", i + 1)
        })?;
    }

    let in_hand = HAND_SIZE - usize::from(tricks_taken);
    for (position, player) in &game.players {
        let played = game.trick.plays.iter().any(|(p, _)| p == position);
        let expected = in_hand - usize::from(played);
        ensure(player.hand.len() == expected, || {
            format!(
                "{position} holds {} dominoes, expected {expected} in trick {trick_no}",
                player.hand.len()
            )
        })?;
    }
    Ok(())
}
