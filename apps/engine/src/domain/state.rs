//! Match state: phase, seats, per-hand progress, running scores, and history.
//!
//! Fields are crate-private. Mutation goes through the operations in
//! `seating`, `lifecycle`, `bidding`, `tricks`, and `chat`, each of which validates
//! fully before touching anything.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::domain::chat::ChatMessage;
use crate::domain::player::{Player, UserId};
use crate::domain::scoring::{check_match_winner, Play};
use crate::domain::seats::{expected_actor, ByTeam, Position, Team};
use crate::domain::{Domino, Suit};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Match progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Seats filling; no hand dealt.
    Waiting,
    /// Tiles being dealt. Only observable inside `start_new_hand`.
    Dealing,
    /// Seats bid in rotation starting left of the dealer.
    Bidding,
    /// Bid winner names trump.
    TrumpSelection,
    /// Seven tricks; `trick.trick_no` is 1-based.
    Playing,
    /// Hand being tallied. Only observable inside hand completion.
    Scoring,
    /// A team reached the winning marks. Terminal.
    Finished,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Waiting => "waiting",
            Phase::Dealing => "dealing",
            Phase::Bidding => "bidding",
            Phase::TrumpSelection => "trump_selection",
            Phase::Playing => "playing",
            Phase::Scoring => "scoring",
            Phase::Finished => "finished",
        }
    }

    /// A hand has been dealt and not yet scored.
    pub const fn hand_in_progress(self) -> bool {
        matches!(
            self,
            Phase::Dealing | Phase::Bidding | Phase::TrumpSelection | Phase::Playing | Phase::Scoring
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spectator {
    pub user_id: UserId,
    pub username: String,
}

/// Bidding progress for the current hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiddingState {
    pub current_bidder: Option<Position>,
    pub high_bid: Option<u8>,
    pub high_bidder: Option<Position>,
    /// Set once bidding closes; picks trump and leads the first trick.
    pub bid_winner: Option<Position>,
}

/// The trick being played.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickState {
    pub leader: Option<Position>,
    /// Insertion order is play order.
    pub plays: Vec<Play>,
    /// 1..=7 while playing, 0 otherwise.
    pub trick_no: u8,
    pub lead_suit: Option<Suit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRecord {
    pub hand_no: u32,
    pub trick_no: u8,
    pub plays: Vec<Play>,
    pub winner: Position,
    pub winning_domino: Domino,
    pub points: u8,
    pub lead_suit: Suit,
    pub trump: Suit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    pub hand_no: u32,
    pub dealer: Position,
    pub bid_winner: Position,
    pub bid: u8,
    pub trump: Suit,
    pub points: ByTeam<u8>,
    pub made_bid: bool,
    /// Marks after this hand was scored.
    pub marks: ByTeam<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Bid,
    SelectTrump,
    Play,
}

/// Who must act next, what they must do, and whether that seat is automated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    pub position: Position,
    pub kind: ActionKind,
    pub is_ai: bool,
}

/// One match.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub(crate) id: String,
    pub(crate) rules: RulesConfig,
    pub(crate) phase: Phase,
    pub(crate) players: BTreeMap<Position, Player>,
    pub(crate) spectators: Vec<Spectator>,
    pub(crate) dealer: Option<Position>,
    pub(crate) bidding: BiddingState,
    pub(crate) trump: Option<Suit>,
    pub(crate) trick: TrickState,
    pub(crate) hand_points: ByTeam<u8>,
    pub(crate) tricks_won: ByTeam<u8>,
    pub(crate) captured: ByTeam<Vec<Domino>>,
    pub(crate) marks: ByTeam<u8>,
    /// Hands dealt so far; the current hand's number while one is in progress.
    pub(crate) hand_no: u32,
    pub(crate) seed: Option<u64>,
    pub(crate) hand_history: Vec<HandRecord>,
    pub(crate) trick_history: Vec<TrickRecord>,
    pub(crate) chat: Vec<ChatMessage>,
}

impl Game {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_valid_rules(id, RulesConfig::default())
    }

    /// Fails with `AppError::Config` when `rules` do not validate.
    pub fn with_rules(id: impl Into<String>, rules: RulesConfig) -> Result<Self, AppError> {
        rules.validate()?;
        Ok(Self::with_valid_rules(id, rules))
    }

    /// Caller has already validated `rules`.
    pub(crate) fn with_valid_rules(id: impl Into<String>, rules: RulesConfig) -> Self {
        Self {
            id: id.into(),
            rules,
            phase: Phase::Waiting,
            players: BTreeMap::new(),
            spectators: Vec::new(),
            dealer: None,
            bidding: BiddingState::default(),
            trump: None,
            trick: TrickState::default(),
            hand_points: ByTeam::default(),
            tricks_won: ByTeam::default(),
            captured: ByTeam::default(),
            marks: ByTeam::default(),
            hand_no: 0,
            seed: None,
            hand_history: Vec::new(),
            trick_history: Vec::new(),
            chat: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seated players, iterated in rotation order.
    pub fn players(&self) -> &BTreeMap<Position, Player> {
        &self.players
    }

    pub fn player(&self, position: Position) -> Option<&Player> {
        self.players.get(&position)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= Position::ROTATION.len()
    }

    pub fn position_of(&self, user_id: UserId) -> Option<Position> {
        self.players
            .values()
            .find(|p| p.user_id == user_id)
            .map(|p| p.position)
    }

    pub fn spectators(&self) -> &[Spectator] {
        &self.spectators
    }

    pub fn dealer(&self) -> Option<Position> {
        self.dealer
    }

    pub fn bidding(&self) -> &BiddingState {
        &self.bidding
    }

    pub fn high_bid(&self) -> Option<u8> {
        self.bidding.high_bid
    }

    pub fn bid_winner(&self) -> Option<Position> {
        self.bidding.bid_winner
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn trick(&self) -> &TrickState {
        &self.trick
    }

    pub fn current_trick(&self) -> &[Play] {
        &self.trick.plays
    }

    pub fn trick_no(&self) -> u8 {
        self.trick.trick_no
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.trick.lead_suit
    }

    pub fn hand_points(&self) -> &ByTeam<u8> {
        &self.hand_points
    }

    pub fn tricks_won(&self) -> &ByTeam<u8> {
        &self.tricks_won
    }

    pub fn captured(&self) -> &ByTeam<Vec<Domino>> {
        &self.captured
    }

    pub fn marks(&self) -> &ByTeam<u8> {
        &self.marks
    }

    pub fn hand_no(&self) -> u32 {
        self.hand_no
    }

    /// Base seed of the match, set when it starts.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn hand_history(&self) -> &[HandRecord] {
        &self.hand_history
    }

    /// Every completed trick of the match, oldest first.
    pub fn trick_history(&self) -> &[TrickRecord] {
        &self.trick_history
    }

    pub fn chat_messages(&self) -> &[ChatMessage] {
        &self.chat
    }

    pub fn match_winner(&self) -> Option<Team> {
        check_match_winner(
            self.marks.team1,
            self.marks.team2,
            self.rules.winning_marks,
        )
    }

    /// Position whose turn it is, fully determined by phase.
    pub fn current_turn(&self) -> Option<Position> {
        match self.phase {
            Phase::Bidding => self.bidding.current_bidder,
            Phase::TrumpSelection => self.bidding.bid_winner,
            Phase::Playing => self
                .trick
                .leader
                .map(|leader| expected_actor(leader, self.trick.plays.len())),
            _ => None,
        }
    }

    pub fn pending_action(&self) -> Option<PendingAction> {
        let position = self.current_turn()?;
        let kind = match self.phase {
            Phase::Bidding => ActionKind::Bid,
            Phase::TrumpSelection => ActionKind::SelectTrump,
            Phase::Playing => ActionKind::Play,
            _ => return None,
        };
        let is_ai = self.players.get(&position).is_some_and(|p| p.is_ai);
        Some(PendingAction {
            position,
            kind,
            is_ai,
        })
    }

    /// Every tile currently held, on the table, or captured this hand, sorted.
    ///
    /// While a hand is in progress this is exactly the full set.
    pub fn tile_census(&self) -> Vec<Domino> {
        let mut tiles: Vec<Domino> = self
            .players
            .values()
            .flat_map(|p| p.hand.iter().copied())
            .chain(self.trick.plays.iter().map(|&(_, d)| d))
            .chain(self.captured.team1.iter().copied())
            .chain(self.captured.team2.iter().copied())
            .collect();
        tiles.sort();
        tiles
    }

    /// Resets bid, trump, trick, and per-hand team tallies.
    pub(crate) fn clear_hand_state(&mut self) {
        self.bidding = BiddingState::default();
        self.trump = None;
        self.trick = TrickState::default();
        self.hand_points = ByTeam::default();
        self.tricks_won = ByTeam::default();
        self.captured = ByTeam::default();
    }
}

pub fn require_phase(game: &Game, expected: Phase, action: &str) -> Result<(), DomainError> {
    if game.phase != expected {
        return Err(DomainError::phase(format!(
            "Cannot {action} during {} phase",
            game.phase
        )));
    }
    Ok(())
}

pub fn require_player(game: &Game, position: Position) -> Result<&Player, DomainError> {
    game.players.get(&position).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("No player seated at {position}"))
    })
}

pub fn require_dealer(game: &Game, ctx: &'static str) -> Result<Position, DomainError> {
    game.dealer.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: dealer must be set ({ctx})"))
    })
}

pub fn require_bid_winner(game: &Game, ctx: &'static str) -> Result<Position, DomainError> {
    game.bidding.bid_winner.ok_or_else(|| {
        DomainError::validation_other(format!(
            "Invariant violated: bid_winner must be set ({ctx})"
        ))
    })
}

pub fn require_trump(game: &Game, ctx: &'static str) -> Result<Suit, DomainError> {
    game.trump.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: trump must be set ({ctx})"))
    })
}

pub fn require_leader(game: &Game, ctx: &'static str) -> Result<Position, DomainError> {
    game.trick.leader.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: leader must be set ({ctx})"))
    })
}
