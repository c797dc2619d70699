//! # rinse-engine: Service Layer for Rinse POS
//!
//! The services a terminal UI calls into, wired together by constructor
//! injection: each service takes the [`Database`](rinse_db::Database)
//! handle (and a rate table where pricing applies) when built.
//!
//! ## Services
//!
//! - [`OrderService`](orders::OrderService) - order intake, editing, status moves
//! - [`BillingService`](billing::BillingService) - payment settlement (the one
//!   transition that couples `Done` to a payment record)
//! - [`CustomerDirectory`](customers::CustomerDirectory) - address-book CRUD
//! - [`InventoryService`](inventory::InventoryService) - supply stock CRUD
//! - [`ReportingService`](reporting::ReportingService) - read-only aggregations
//!
//! ## Example
//!
//! ```rust,ignore
//! use rinse_db::{Database, DbConfig};
//! use rinse_engine::{BillingService, OrderService};
//! use rinse_core::{Money, ServiceType, Weight};
//!
//! let db = Database::new(DbConfig::new("rinse.db")).await?;
//! let orders = OrderService::with_standard_rates(db.clone());
//! let billing = BillingService::new(db);
//!
//! let order = orders.create_order(1, ServiceType::DryClean, Weight::parse_lenient("2,5")).await?;
//! let payment = billing.settle(order.id, Money::new(15000)).await?;
//! println!("change: {}", payment.change_due());
//! ```
//!
//! Every operation runs to completion before the next begins; the single
//! compound write (settlement) is transactional inside rinse-db, so no
//! failure leaves partial state behind.

pub mod billing;
pub mod customers;
pub mod error;
pub mod inventory;
pub mod orders;
pub mod reporting;

pub use billing::BillingService;
pub use customers::CustomerDirectory;
pub use error::{EngineError, EngineResult};
pub use inventory::InventoryService;
pub use orders::OrderService;
pub use reporting::ReportingService;
