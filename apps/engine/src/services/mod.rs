//! Hosting-layer helpers: the room registry and the automated-turn driver.

pub mod automation;
pub mod registry;

pub use automation::{
    drive_automated_turns, drive_automated_turns_into, fill_with_bots, AiRoster, AutomatedMove,
};
pub use registry::{GameRegistry, GameRoom};
