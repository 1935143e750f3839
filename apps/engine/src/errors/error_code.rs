//! Error codes for the Texas 42 engine.
//!
//! Drivers forward these to clients instead of string-matching messages.
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

use super::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

/// Centralized error codes for engine failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Phase / turn
    /// Operation not allowed in the current phase
    PhaseMismatch,
    /// Actor is not the seat expected to act
    OutOfTurn,

    // Rules
    /// Bid out of range or not strictly higher
    InvalidBid,
    /// Must follow the lead suit
    MustFollowSuit,
    /// Domino is not in the acting player's hand
    DominoNotInHand,
    /// Trump suit outside 0..=6
    InvalidTrump,
    /// Malformed domino id
    ParseDomino,
    /// Unknown seat position
    InvalidSeat,
    /// Exported record could not be imported
    InvalidRecord,
    /// General validation error
    ValidationError,

    // Capacity
    /// Requested seat is occupied
    SeatTaken,
    /// All four seats are occupied
    GameFull,
    /// User already holds a seat in this game
    AlreadySeated,
    /// Fewer than four seated players
    NotEnoughPlayers,
    /// Generic conflict
    Conflict,

    // Not found
    /// No player at the requested seat
    PlayerNotFound,
    /// Spectator not watching this game
    SpectatorNotFound,
    /// Game id unknown to the registry
    GameNotFound,
    /// General not found error
    NotFound,

    // Hosting
    /// Invalid rules configuration
    ConfigError,
    /// Automated turns did not settle within the step limit
    StepLimitExceeded,
    /// Unexpected internal failure
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",

            Self::InvalidBid => "INVALID_BID",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::DominoNotInHand => "DOMINO_NOT_IN_HAND",
            Self::InvalidTrump => "INVALID_TRUMP",
            Self::ParseDomino => "PARSE_DOMINO",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::InvalidRecord => "INVALID_RECORD",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::SeatTaken => "SEAT_TAKEN",
            Self::GameFull => "GAME_FULL",
            Self::AlreadySeated => "ALREADY_SEATED",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::Conflict => "CONFLICT",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::SpectatorNotFound => "SPECTATOR_NOT_FOUND",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::ConfigError => "CONFIG_ERROR",
            Self::StepLimitExceeded => "STEP_LIMIT_EXCEEDED",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
                ValidationKind::InvalidBid => ErrorCode::InvalidBid,
                ValidationKind::MustFollowSuit => ErrorCode::MustFollowSuit,
                ValidationKind::DominoNotInHand => ErrorCode::DominoNotInHand,
                ValidationKind::InvalidTrump => ErrorCode::InvalidTrump,
                ValidationKind::ParseDomino => ErrorCode::ParseDomino,
                ValidationKind::ParsePosition => ErrorCode::InvalidSeat,
                ValidationKind::InvalidRecord => ErrorCode::InvalidRecord,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::SeatTaken => ErrorCode::SeatTaken,
                ConflictKind::GameFull => ErrorCode::GameFull,
                ConflictKind::AlreadySeated => ErrorCode::AlreadySeated,
                ConflictKind::NotEnoughPlayers => ErrorCode::NotEnoughPlayers,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Spectator => ErrorCode::SpectatorNotFound,
                NotFoundKind::Game => ErrorCode::GameNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
        }
    }
}

impl DomainError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::from(self)
    }
}
