// Unit tests for error mapping between the domain and hosting layers
use crate::ai::AiError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind, Violation};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_kinds() {
    let de = DomainError::validation(ValidationKind::MustFollowSuit, "Must follow the lead suit (5s)");
    assert_eq!(de.violation(), Violation::Rule);
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::MustFollowSuit);
    assert_eq!(app.detail(), "Must follow the lead suit (5s)");

    let phase = DomainError::phase("Cannot bid during playing phase");
    assert!(phase.is_phase_violation());
    assert_eq!(AppError::from(phase).code().as_str(), "PHASE_MISMATCH");

    let turn = DomainError::out_of_turn("Not west's turn to play");
    assert_eq!(turn.violation(), Violation::Turn);
}

#[test]
fn maps_conflicts() {
    let seat = DomainError::conflict(ConflictKind::SeatTaken, "seat taken");
    assert_eq!(seat.violation(), Violation::Capacity);
    let app: AppError = seat.into();
    assert_eq!(app.code().as_str(), "SEAT_TAKEN");

    // Generic conflict fallback
    let other = DomainError::conflict(
        ConflictKind::Other("some conflict".to_string()),
        "generic conflict",
    );
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Spectator, "not watching");
    assert_eq!(nf.violation(), Violation::NotFound);
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "SPECTATOR_NOT_FOUND");

    let app = AppError::not_found(ErrorCode::GameNotFound, "No room table-9".into());
    assert_eq!(app.code(), ErrorCode::GameNotFound);
    assert_eq!(app.to_string(), "Not found: No room table-9");
}

#[test]
fn maps_hosting_failures() {
    let ai: AppError = AiError::InvalidMove("No legal bids available".into()).into();
    assert_eq!(ai.code(), ErrorCode::Internal);
    assert!(ai.detail().contains("No legal bids available"));

    let limit = AppError::step_limit(64);
    assert_eq!(limit.code().as_str(), "STEP_LIMIT_EXCEEDED");
    assert!(limit.detail().contains("64"));

    assert_eq!(
        AppError::config("bad".into()).code(),
        ErrorCode::ConfigError
    );
}
