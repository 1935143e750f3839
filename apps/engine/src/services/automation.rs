//! Driver loop for automated seats.
//!
//! After any human action the host calls [`drive_automated_turns`], which keeps
//! applying automated moves until a human must act or the match cannot
//! continue. It loops instead of recursing, and a step limit bounds it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ai::{AiPlayer, HouseBot};
use crate::domain::player_view::CurrentHandInfo;
use crate::domain::{
    add_player, place_bid, play_domino, select_trump, ActionKind, BidProgress, Domino, Game,
    PendingAction, PlayOutcome, Position, Suit,
};
use crate::error::AppError;
use crate::errors::domain::DomainError;

/// Enough for the longest possible all-automated match.
pub const MAX_AUTOMATED_STEPS: usize = 2_000;

const MAX_RETRIES_PER_ACTION: usize = 3;

const BOT_NAMES: [&str; 4] = ["Bot_Alice", "Bot_Bob", "Bot_Carol", "Bot_Dave"];

/// A move an automated seat made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AutomatedMove {
    Bid {
        position: Position,
        bid: u8,
        progress: BidProgress,
    },
    Trump {
        position: Position,
        trump: Suit,
    },
    Play {
        position: Position,
        domino: Domino,
        outcome: PlayOutcome,
    },
}

/// Which AI plays each automated seat. Seats without an entry use the fallback.
pub struct AiRoster {
    seats: BTreeMap<Position, Box<dyn AiPlayer>>,
    fallback: Box<dyn AiPlayer>,
}

impl AiRoster {
    pub fn new(fallback: Box<dyn AiPlayer>) -> Self {
        Self {
            seats: BTreeMap::new(),
            fallback,
        }
    }

    pub fn with_seat(mut self, position: Position, ai: Box<dyn AiPlayer>) -> Self {
        self.seats.insert(position, ai);
        self
    }

    pub fn set_seat(&mut self, position: Position, ai: Box<dyn AiPlayer>) {
        self.seats.insert(position, ai);
    }

    pub fn player_for(&self, position: Position) -> &dyn AiPlayer {
        self.seats
            .get(&position)
            .map_or(self.fallback.as_ref(), |ai| ai.as_ref())
    }
}

impl Default for AiRoster {
    fn default() -> Self {
        Self::new(Box::new(HouseBot::new()))
    }
}

/// Seat bots in every open seat. Bots get negative user ids.
pub fn fill_with_bots(game: &mut Game) -> Result<Vec<Position>, DomainError> {
    let open: Vec<Position> = Position::ROTATION
        .into_iter()
        .filter(|p| game.player(*p).is_none())
        .collect();

    let mut seated = Vec::with_capacity(open.len());
    for position in open {
        let n = position.index();
        let position = add_player(game, -1 - n as i64, BOT_NAMES[n], Some(position), true)?;
        seated.push(position);
    }
    Ok(seated)
}

/// Apply automated moves until a human is to act or nobody is. Returns the
/// moves in order.
pub fn drive_automated_turns(
    game: &mut Game,
    roster: &AiRoster,
) -> Result<Vec<AutomatedMove>, AppError> {
    drive_automated_turns_with_limit(game, roster, MAX_AUTOMATED_STEPS)
}

pub fn drive_automated_turns_with_limit(
    game: &mut Game,
    roster: &AiRoster,
    max_steps: usize,
) -> Result<Vec<AutomatedMove>, AppError> {
    let mut moves = Vec::new();
    drive_automated_turns_into(game, roster, max_steps, &mut moves)?;
    Ok(moves)
}

/// Like [`drive_automated_turns_with_limit`], appending each applied move to
/// `moves` as it happens. On error `moves` still holds every move that was
/// applied to `game` before the failure.
pub fn drive_automated_turns_into(
    game: &mut Game,
    roster: &AiRoster,
    max_steps: usize,
    moves: &mut Vec<AutomatedMove>,
) -> Result<(), AppError> {
    for _step in 0..max_steps {
        let Some(pending) = game.pending_action() else {
            debug!(game_id = %game.id(), phase = %game.phase(), "No action pending");
            return Ok(());
        };
        if !pending.is_ai {
            return Ok(());
        }
        moves.push(act_with_retries(game, roster, pending)?);
    }

    if game.pending_action().is_some_and(|p| p.is_ai) {
        warn!(game_id = %game.id(), applied = moves.len(), max_steps, "Automated step limit hit");
        return Err(AppError::step_limit(max_steps));
    }
    Ok(())
}

fn act_with_retries(
    game: &mut Game,
    roster: &AiRoster,
    pending: PendingAction,
) -> Result<AutomatedMove, AppError> {
    let ai = roster.player_for(pending.position);
    let mut last_error = None;

    for retry in 0..MAX_RETRIES_PER_ACTION {
        match act_once(game, ai, pending) {
            Ok(applied) => {
                debug!(
                    game_id = %game.id(),
                    position = %pending.position,
                    action = ?pending.kind,
                    retry,
                    "Automated move applied"
                );
                return Ok(applied);
            }
            Err(e) => {
                warn!(
                    game_id = %game.id(),
                    position = %pending.position,
                    action = ?pending.kind,
                    retry,
                    error = %e,
                    "Automated move rejected"
                );
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| AppError::internal("Automated move failed".to_string())))
}

fn act_once(
    game: &mut Game,
    ai: &dyn AiPlayer,
    pending: PendingAction,
) -> Result<AutomatedMove, AppError> {
    let position = pending.position;
    let state = CurrentHandInfo::for_seat(game, position)?;

    let applied = match pending.kind {
        ActionKind::Bid => {
            let bid = ai.choose_bid(&state)?;
            let progress = place_bid(game, position, bid)?;
            AutomatedMove::Bid {
                position,
                bid,
                progress,
            }
        }
        ActionKind::SelectTrump => {
            let choice = ai.choose_trump(&state)?;
            let trump = select_trump(game, position, choice.value())?;
            AutomatedMove::Trump { position, trump }
        }
        ActionKind::Play => {
            let domino = ai.choose_play(&state)?;
            let outcome = play_domino(game, position, &domino.id())?;
            if let Some(winner) = outcome.match_winner {
                info!(game_id = %game.id(), winner = winner.number(), "Automated play ended the match");
            }
            AutomatedMove::Play {
                position,
                domino,
                outcome,
            }
        }
    };
    Ok(applied)
}
