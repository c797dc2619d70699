//! # Error Types
//!
//! Domain errors for rinse-core.
//!
//! ## Error Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  ValidationError  - bad or missing input, user corrects/retries  │
//! │       │   (wrapped)                                              │
//! │       ▼                                                          │
//! │  CoreError        - business rule violations (this file)         │
//! │                                                                  │
//! │  DbError          - storage failures (rinse-db)                  │
//! │                                                                  │
//! │  EngineError      - what service callers see (rinse-engine),     │
//! │                     wrapping both of the above                   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is reported synchronously to the caller and is local to
//! the requested operation; nothing here is fatal to the process.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations in the order and billing flow.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Referenced customer does not exist.
    #[error("Customer not found: {0}")]
    CustomerNotFound(i64),

    /// Referenced order does not exist.
    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    /// The order is already `Done`; settling it again is refused and no
    /// second payment is recorded. Surfaced as information, not failure.
    #[error("Order {order_id} is already settled")]
    AlreadySettled { order_id: i64 },

    /// The tendered amount does not cover the order cost. Carries the
    /// shortfall for display at the terminal.
    ///
    /// Invariant: `shortfall == required - tendered`.
    #[error("Insufficient payment: cost is {required}, tendered {tendered}, short by {shortfall}")]
    InsufficientPayment {
        required: Money,
        tendered: Money,
        shortfall: Money,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures: recoverable, the user corrects and retries.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (unparsable id, unknown service name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
