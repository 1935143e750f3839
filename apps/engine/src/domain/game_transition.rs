use crate::domain::seats::Position;
use crate::domain::state::{Game, Phase};

/// The slice of match state that edge-triggered events are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub phase: Phase,
    pub turn: Option<Position>,
    pub hand_no: u32,
    pub tricks_recorded: usize,
    pub hands_recorded: usize,
}

impl From<&Game> for GameLifecycleView {
    fn from(game: &Game) -> Self {
        Self {
            phase: game.phase(),
            turn: game.current_turn(),
            hand_no: game.hand_no(),
            tricks_recorded: game.trick_history().len(),
            hands_recorded: game.hand_history().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// The turn became a specific seat.
    TurnBecame { position: Position },

    /// A new hand was dealt.
    HandStarted { hand_no: u32 },

    /// Bidding -> TrumpSelection
    BiddingCompleted,

    /// TrumpSelection -> Playing
    TrumpSelected,

    /// One or more tricks were recorded.
    TrickCompleted,

    /// One or more hands were scored.
    HandCompleted,

    /// A hand in progress was abandoned because a seat was vacated.
    HandAborted,

    /// !Finished -> Finished
    MatchFinished,
}

/// Derive transitions from before/after lifecycle views, in the order a
/// client would want to display them.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    if after.tricks_recorded > before.tricks_recorded {
        transitions.push(GameTransition::TrickCompleted);
    }
    if after.hands_recorded > before.hands_recorded {
        transitions.push(GameTransition::HandCompleted);
    }

    if before.phase.hand_in_progress() && after.phase == Phase::Waiting {
        transitions.push(GameTransition::HandAborted);
    }

    if before.phase != Phase::Finished && after.phase == Phase::Finished {
        transitions.push(GameTransition::MatchFinished);
    }

    if after.hand_no > before.hand_no {
        transitions.push(GameTransition::HandStarted {
            hand_no: after.hand_no,
        });
    }

    if before.phase == Phase::Bidding && after.phase == Phase::TrumpSelection {
        transitions.push(GameTransition::BiddingCompleted);
    }
    if before.phase == Phase::TrumpSelection && after.phase == Phase::Playing {
        transitions.push(GameTransition::TrumpSelected);
    }

    if let Some(position) = after.turn {
        if before.turn != Some(position) || before.phase != after.phase {
            transitions.push(GameTransition::TurnBecame { position });
        }
    }

    transitions
}
