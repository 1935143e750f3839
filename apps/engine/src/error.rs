use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Failures surfaced by the hosting helpers: the room registry, the automated
/// turn driver, and configuration loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Automated turns did not settle within {limit} steps")]
    StepLimit { limit: usize },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable code for any variant.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(err) => err.code(),
            AppError::NotFound { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::StepLimit { .. } => ErrorCode::StepLimitExceeded,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Human-readable detail without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            AppError::Domain(err) => err.detail().to_string(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
            AppError::StepLimit { .. } => self.to_string(),
            AppError::Internal { detail } => detail.clone(),
        }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn not_found(code: ErrorCode, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn step_limit(limit: usize) -> Self {
        Self::StepLimit { limit }
    }
}
