//! Automated seat players.
//!
//! - `AiPlayer` trait over a seat's [`CurrentHandInfo`](crate::domain::CurrentHandInfo)
//! - `RandomPlayer`: random legal moves (seedable)
//! - `HouseBot`: suit-length heuristic
//! - registry of named factories

mod house_bot;
mod random;
pub mod registry;
mod trait_def;

pub use house_bot::HouseBot;
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player by registered name ("random", "house").
///
/// Returns None if the name is unrecognized.
pub fn create_ai(name: &str, seed: Option<u64>) -> Option<Box<dyn AiPlayer>> {
    registry::by_name(name).map(|factory| (factory.make)(seed))
}
