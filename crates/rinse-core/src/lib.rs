//! # rinse-core: Pure Business Logic for Rinse POS
//!
//! The heart of the laundry point-of-sale: every pricing, validation, and
//! billing rule lives here as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Terminal UI (external)                                          │
//! │       │                                                          │
//! │  ┌────▼─────────────────────────────────────────────────────┐    │
//! │  │              rinse-engine (services)                     │    │
//! │  │   OrderService · BillingService · ReportingService       │    │
//! │  └────┬─────────────────────────────────────────────────────┘    │
//! │       │                                                          │
//! │  ┌────▼─────────────────────────────────────────────────────┐    │
//! │  │            ★ rinse-core (THIS CRATE) ★                   │    │
//! │  │                                                          │    │
//! │  │   money · weight · pricing · types · validation · error  │    │
//! │  │                                                          │    │
//! │  │   NO I/O, NO DATABASE, PURE FUNCTIONS                    │    │
//! │  └──────────────────────────────────────────────────────────┘    │
//! │       │                                                          │
//! │  ┌────▼─────────────────────────────────────────────────────┐    │
//! │  │              rinse-db (SQLite layer)                     │    │
//! │  └──────────────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer money in whole rupiah (no floating point)
//! - [`weight`] - Gram-precision weights with lenient form-text parsing
//! - [`pricing`] - The per-kilogram rate table and quoting
//! - [`types`] - Domain records (Customer, Order, Payment, ...)
//! - [`validation`] - Save-path validators and boundary parsers
//! - [`error`] - Domain error types
//!
//! ## Example
//!
//! ```rust
//! use rinse_core::pricing::RateTable;
//! use rinse_core::types::ServiceType;
//! use rinse_core::weight::Weight;
//!
//! let rates = RateTable::default();
//! let quote = rates.quote(ServiceType::DryClean, Weight::parse_lenient("2,5"));
//! assert_eq!(quote.cost.amount(), 12500);
//! ```

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod weight;

// Re-exports for convenience.
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{Quote, RateTable};
pub use types::*;
pub use weight::Weight;
