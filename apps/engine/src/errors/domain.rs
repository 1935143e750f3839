//! Domain-level error type used across the engine and its hosting helpers.
//!
//! Every rejected operation returns one of these and leaves the game untouched,
//! so callers can retry or report without worrying about partial mutation.

use thiserror::Error;

/// Validation kinds: phase, turn, and rule violations plus decode failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    PhaseMismatch,
    OutOfTurn,
    InvalidBid,
    MustFollowSuit,
    DominoNotInHand,
    InvalidTrump,
    ParseDomino,
    ParsePosition,
    InvalidRecord,
    Other(String),
}

/// Seating conflicts (capacity violations).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    SeatTaken,
    GameFull,
    AlreadySeated,
    NotEnoughPlayers,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Spectator,
    Game,
    Other(String),
}

/// Coarse classification of a failure, mirroring how drivers report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    Phase,
    Turn,
    Rule,
    Capacity,
    NotFound,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or game rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Seating conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing seat, spectator, or room
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn phase(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::PhaseMismatch, detail)
    }

    pub fn out_of_turn(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::OutOfTurn, detail)
    }

    /// Human-readable message without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) => d,
            DomainError::Conflict(_, d) => d,
            DomainError::NotFound(_, d) => d,
        }
    }

    pub fn violation(&self) -> Violation {
        match self {
            DomainError::Validation(ValidationKind::PhaseMismatch, _) => Violation::Phase,
            DomainError::Validation(ValidationKind::OutOfTurn, _) => Violation::Turn,
            DomainError::Validation(_, _) => Violation::Rule,
            DomainError::Conflict(_, _) => Violation::Capacity,
            DomainError::NotFound(_, _) => Violation::NotFound,
        }
    }

    pub fn is_phase_violation(&self) -> bool {
        self.violation() == Violation::Phase
    }
}
