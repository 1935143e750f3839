//! Domain layer: pure rules of the game and the match state machine.

pub mod bidding;
pub mod chat;
pub mod dealing;
pub mod dominoes_parsing;
pub mod dominoes_serde;
pub mod dominoes_types;
pub mod game_transition;
pub mod lifecycle;
pub mod player;
pub mod player_view;
pub mod record;
pub mod rules;
pub mod scoring;
pub mod seating;
pub mod seats;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_record;
#[cfg(test)]
mod tests_snapshot_phases;

// Re-exports for ergonomics
pub use bidding::{legal_bids, place_bid, select_trump, BidProgress};
pub use chat::{add_chat_message, ChatMessage};
pub use dealing::deal_hands;
pub use dominoes_serde::DominoView;
pub use dominoes_types::{full_set, Domino, Suit};
pub use game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
pub use lifecycle::{start_game, start_game_with_seed, HandResult};
pub use player::{Player, UserId};
pub use player_view::CurrentHandInfo;
pub use record::{export_record, import_record, GameRecord};
pub use scoring::{check_match_winner, domino_rank, trick_points, trick_winner, validate_bid, Play};
pub use seating::{add_player, add_spectator, remove_player, remove_spectator};
pub use seats::{next_in_rotation, partner_of, team_of, ByTeam, Position, Team};
pub use seed_derivation::{derive_dealing_seed, derive_seat_seed};
pub use snapshot::{state_for_player, state_for_spectator, GameSnapshot, PhaseSnapshot};
pub use state::{ActionKind, Game, HandRecord, PendingAction, Phase, TrickRecord};
pub use tricks::{legal_moves, play_domino, PlayOutcome};
