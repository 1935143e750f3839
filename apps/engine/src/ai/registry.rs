//! Registered automated seat players.
//!
//! To add one: implement `AiPlayer`, then append an `AiFactory` entry with a
//! stable `name`. Same seed, same behaviour.

use crate::ai::{AiPlayer, HouseBot, RandomPlayer};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: HouseBot::NAME,
        version: HouseBot::VERSION,
        make: make_house_bot,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(seed))
}

fn make_house_bot(_seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(HouseBot::new())
}
