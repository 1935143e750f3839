//! Viewer-specific snapshots of a match.
//!
//! Seated viewers see their own hand and only the size of everyone else's.
//! Spectators see every hand.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::legal_bids;
use crate::domain::dominoes_serde::DominoView;
use crate::domain::player::{Player, UserId};
use crate::domain::rules::{min_next_bid, MAX_BID, RECENT_TRICKS};
use crate::domain::seats::{ByTeam, Position, Team};
use crate::domain::state::{Game, HandRecord, Phase, Spectator, TrickRecord};
use crate::domain::tricks::legal_moves;
use crate::domain::Suit;

/// Who a snapshot was built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "position", rename_all = "snake_case")]
pub enum Viewer {
    Seat(Position),
    Spectator,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub position: Position,
    pub user_id: UserId,
    pub username: String,
    pub is_ai: bool,
    pub team: Team,
    pub hand_count: usize,
    /// `None` when hidden from this viewer.
    pub hand: Option<Vec<DominoView>>,
    pub current_bid: Option<u8>,
    pub has_passed: bool,
}

/// Match-level facts present in every snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHeader {
    pub game_id: String,
    pub hand_no: u32,
    pub dealer: Option<Position>,
    pub current_turn: Option<Position>,
    pub seats: Vec<SeatView>,
    pub spectators: Vec<Spectator>,
    pub high_bid: Option<u8>,
    pub high_bidder: Option<Position>,
    pub bid_winner: Option<Position>,
    pub trump: Option<Suit>,
    pub marks: ByTeam<u8>,
    pub hand_points: ByTeam<u8>,
    pub tricks_won: ByTeam<u8>,
    pub winning_marks: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub viewer: Viewer,
    pub game: GameHeader,
    pub phase: PhaseSnapshot,
    /// Most recent completed tricks, oldest first.
    pub recent_tricks: Vec<TrickRecord>,
}

/// Adjacently tagged union of phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data", rename_all = "snake_case")]
pub enum PhaseSnapshot {
    Waiting(WaitingSnapshot),
    Dealing,
    Bidding(BiddingSnapshot),
    TrumpSelection(TrumpSelectionSnapshot),
    Playing(PlayingSnapshot),
    Scoring,
    Finished(FinishedSnapshot),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingSnapshot {
    pub open_seats: Vec<Position>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiddingSnapshot {
    pub to_act: Option<Position>,
    /// Lowest bid currently accepted; `None` once 42 has been bid.
    pub min_bid: Option<u8>,
    pub max_bid: u8,
    /// Non-empty only when the viewer is the one to act.
    pub legal_bids: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrumpSelectionSnapshot {
    pub to_act: Option<Position>,
    pub bid: Option<u8>,
    pub allowed_trumps: Vec<Suit>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingSnapshot {
    pub trick_no: u8,
    pub leader: Option<Position>,
    pub to_act: Option<Position>,
    pub lead_suit: Option<Suit>,
    pub current_trick: Vec<(Position, DominoView)>,
    /// Non-empty only when the viewer is the one to act.
    pub playable: Vec<DominoView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedSnapshot {
    pub winner: Option<Team>,
    pub last_hand: Option<HandRecord>,
}

/// View for a seated player: other hands are redacted to their size.
pub fn state_for_player(game: &Game, position: Position) -> GameSnapshot {
    build(game, Viewer::Seat(position))
}

/// View for a spectator: every hand is visible.
pub fn state_for_spectator(game: &Game) -> GameSnapshot {
    build(game, Viewer::Spectator)
}

fn build(game: &Game, viewer: Viewer) -> GameSnapshot {
    let header = GameHeader {
        game_id: game.id.clone(),
        hand_no: game.hand_no,
        dealer: game.dealer,
        current_turn: game.current_turn(),
        seats: game
            .players
            .values()
            .map(|p| seat_view(p, can_see_hand(viewer, p.position)))
            .collect(),
        spectators: game.spectators.clone(),
        high_bid: game.bidding.high_bid,
        high_bidder: game.bidding.high_bidder,
        bid_winner: game.bidding.bid_winner,
        trump: game.trump,
        marks: game.marks.clone(),
        hand_points: game.hand_points.clone(),
        tricks_won: game.tricks_won.clone(),
        winning_marks: game.rules.winning_marks,
    };

    let skip = game.trick_history.len().saturating_sub(RECENT_TRICKS);
    GameSnapshot {
        viewer,
        game: header,
        phase: phase_snapshot(game, viewer),
        recent_tricks: game.trick_history[skip..].to_vec(),
    }
}

fn can_see_hand(viewer: Viewer, seat: Position) -> bool {
    match viewer {
        Viewer::Spectator => true,
        Viewer::Seat(p) => p == seat,
    }
}

fn seat_view(player: &Player, show_hand: bool) -> SeatView {
    SeatView {
        position: player.position,
        user_id: player.user_id,
        username: player.username.clone(),
        is_ai: player.is_ai,
        team: player.team(),
        hand_count: player.hand_count(),
        hand: show_hand.then(|| player.hand().iter().map(|&d| DominoView::from(d)).collect()),
        current_bid: player.current_bid(),
        has_passed: player.has_passed(),
    }
}

/// The viewer's seat, if it is the one to act.
fn acting_viewer(game: &Game, viewer: Viewer) -> Option<Position> {
    match viewer {
        Viewer::Seat(p) if game.current_turn() == Some(p) => Some(p),
        _ => None,
    }
}

fn phase_snapshot(game: &Game, viewer: Viewer) -> PhaseSnapshot {
    match game.phase {
        Phase::Waiting => PhaseSnapshot::Waiting(WaitingSnapshot {
            open_seats: Position::ROTATION
                .into_iter()
                .filter(|p| !game.players.contains_key(p))
                .collect(),
        }),
        Phase::Dealing => PhaseSnapshot::Dealing,
        Phase::Bidding => PhaseSnapshot::Bidding(BiddingSnapshot {
            to_act: game.current_turn(),
            min_bid: min_next_bid(game.bidding.high_bid),
            max_bid: MAX_BID,
            legal_bids: acting_viewer(game, viewer)
                .map(|p| legal_bids(game, p))
                .unwrap_or_default(),
        }),
        Phase::TrumpSelection => PhaseSnapshot::TrumpSelection(TrumpSelectionSnapshot {
            to_act: game.current_turn(),
            bid: game.bidding.high_bid,
            allowed_trumps: Suit::ALL.to_vec(),
        }),
        Phase::Playing => PhaseSnapshot::Playing(PlayingSnapshot {
            trick_no: game.trick.trick_no,
            leader: game.trick.leader,
            to_act: game.current_turn(),
            lead_suit: game.trick.lead_suit,
            current_trick: game
                .trick
                .plays
                .iter()
                .map(|&(p, d)| (p, DominoView::from(d)))
                .collect(),
            playable: acting_viewer(game, viewer)
                .map(|p| legal_moves(game, p).into_iter().map(DominoView::from).collect())
                .unwrap_or_default(),
        }),
        Phase::Scoring => PhaseSnapshot::Scoring,
        Phase::Finished => PhaseSnapshot::Finished(FinishedSnapshot {
            winner: game.match_winner(),
            last_hand: game.hand_history.last().cloned(),
        }),
    }
}
