//! # rinse-db: Database Layer for Rinse POS
//!
//! SQLite persistence for the laundry shop: connection pool, embedded
//! migrations, and typed repositories over the four tables (customers,
//! orders, inventory, payments).
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rinse_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/rinse.db")).await?;
//! let orders = db.orders().list(None).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience.
pub use repository::customer::CustomerRepository;
pub use repository::inventory::InventoryRepository;
pub use repository::order::OrderRepository;
pub use repository::report::ReportRepository;
