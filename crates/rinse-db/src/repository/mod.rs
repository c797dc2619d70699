//! # Repository Module
//!
//! Typed repositories over the four tables. Each one maps rows into
//! `rinse-core` records at the query boundary; positional row access
//! never leaves this module.
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - address-book CRUD and search
//! - [`OrderRepository`](order::OrderRepository) - orders, status, payments, and the settlement transaction
//! - [`InventoryRepository`](inventory::InventoryRepository) - supply stock CRUD
//! - [`ReportRepository`](report::ReportRepository) - read-only aggregations

pub mod customer;
pub mod inventory;
pub mod order;
pub mod report;
