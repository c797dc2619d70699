//! # Engine Error Types
//!
//! The error surface service callers see: business rule violations from
//! rinse-core and storage failures from rinse-db, funneled into one enum.
//!
//! Validation, not-found, insufficient-payment, and already-settled all
//! arrive as [`EngineError::Core`]; the caller corrects input or shows
//! the message. Storage failures arrive as [`EngineError::Db`] and are
//! surfaced verbatim; no retry and no cleanup, because the one compound
//! write in the system is transactional. No variant is fatal to the
//! process.

use thiserror::Error;

use rinse_core::{CoreError, ValidationError};
use rinse_db::DbError;

/// Errors returned by the engine services.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Business rule violation (validation, not found, insufficient
    /// payment, already settled).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage failure, surfaced verbatim.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::Core(CoreError::Validation(err))
    }
}

impl EngineError {
    /// True when the error is the idempotency guard on settlement, which
    /// the terminal shows as information rather than failure.
    pub fn is_already_settled(&self) -> bool {
        matches!(self, EngineError::Core(CoreError::AlreadySettled { .. }))
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
