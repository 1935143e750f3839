//! AI player trait definition.

use std::fmt;

use crate::domain::player_view::CurrentHandInfo;
use crate::domain::{Domino, Suit};
use crate::error::AppError;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI had nothing legal to choose from
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("AI error: {err}"))
    }
}

/// Trait for automated seats.
///
/// Implementations receive what their seat can see and must choose a legal
/// action from the `legal_*()` helpers on [`CurrentHandInfo`].
pub trait AiPlayer: Send + Sync {
    /// Choose a bid; 0 passes.
    fn choose_bid(&self, state: &CurrentHandInfo) -> Result<u8, AiError>;

    /// Choose trump after winning the bid.
    fn choose_trump(&self, state: &CurrentHandInfo) -> Result<Suit, AiError>;

    /// Choose a domino to play.
    fn choose_play(&self, state: &CurrentHandInfo) -> Result<Domino, AiError>;
}
