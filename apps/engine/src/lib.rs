#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;

// Re-exports for public API
pub use ai::{create_ai, AiError, AiPlayer, HouseBot, RandomPlayer};
pub use config::RulesConfig;
pub use domain::{
    add_chat_message, add_player, add_spectator, export_record, import_record, legal_bids,
    legal_moves, place_bid, play_domino, remove_player, remove_spectator, select_trump,
    start_game, start_game_with_seed, state_for_player, state_for_spectator, Domino, Game,
    GameRecord, GameSnapshot, Phase, Position, Suit, Team,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::{drive_automated_turns, AiRoster, GameRegistry};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
