//! Error handling for the Texas 42 engine.

pub mod domain;
pub mod error_code;

pub use domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind, Violation};
pub use error_code::ErrorCode;

#[cfg(test)]
mod tests_error_mapping;
