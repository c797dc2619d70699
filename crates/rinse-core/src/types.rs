//! # Domain Types
//!
//! Core domain records for Rinse POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                             │
//! │                                                                  │
//! │  ┌──────────────┐    ┌──────────────┐    ┌──────────────┐        │
//! │  │   Customer   │◄───│    Order     │◄───│   Payment    │        │
//! │  │  id, name,   │    │ id, service, │    │ id, tendered │        │
//! │  │  contact     │    │ weight, cost │    │  change_due  │        │
//! │  └──────────────┘    │ status, date │    └──────────────┘        │
//! │                      └──────────────┘                            │
//! │                                                                  │
//! │  ┌──────────────┐    InventoryItem is standalone: stock is not   │
//! │  │InventoryItem │    consumed per order in this system.          │
//! │  └──────────────┘                                                │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every record carries an integer identifier assigned by the database;
//! `New*` forms are the same record before insertion. Rows are mapped into
//! these types at the repository boundary, never handled positionally.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::weight::Weight;

// =============================================================================
// Service Type
// =============================================================================

/// The laundry service an order is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Dry cleaning.
    DryClean,
    /// Ironing only.
    Iron,
    /// Wet wash.
    WetWash,
}

impl ServiceType {
    /// All services offered, in menu order.
    pub const ALL: [ServiceType; 3] = [ServiceType::DryClean, ServiceType::Iron, ServiceType::WetWash];

    /// Stable storage identifier, matching the database representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ServiceType::DryClean => "dry_clean",
            ServiceType::Iron => "iron",
            ServiceType::WetWash => "wet_wash",
        }
    }

    /// Menu label shown on order forms and receipts.
    pub const fn label(&self) -> &'static str {
        match self {
            ServiceType::DryClean => "Dry Clean",
            ServiceType::Iron => "Iron",
            ServiceType::WetWash => "Wet Wash",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a service picked from form text. Case, spaces, hyphens, and
/// underscores are all tolerated ("Dry Clean", "dry_clean", "DRYCLEAN").
impl FromStr for ServiceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "dryclean" => Ok(ServiceType::DryClean),
            "iron" => Ok(ServiceType::Iron),
            "wetwash" => Ok(ServiceType::WetWash),
            "" => Err(ValidationError::Required {
                field: "service".to_string(),
            }),
            _ => Err(ValidationError::InvalidFormat {
                field: "service".to_string(),
                reason: format!("unknown service '{}'", s.trim()),
            }),
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Where an order sits in the shop workflow.
///
/// Staff may reassign status freely from the picklist; the state set is
/// ordered Intake, InProgress, Done but the engine does not force forward
/// movement. Settlement is the one path that couples `Done` to a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Just received at the counter.
    Intake,
    /// Being washed/ironed.
    InProgress,
    /// Ready and paid (or manually marked finished).
    Done,
}

impl OrderStatus {
    /// The picklist, in workflow order.
    pub const ALL: [OrderStatus; 3] = [OrderStatus::Intake, OrderStatus::InProgress, OrderStatus::Done];

    /// Stable storage identifier, matching the database representation.
    /// Status reports sort ascending by this label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Intake => "intake",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Done => "done",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Intake
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "intake" => Ok(OrderStatus::Intake),
            "inprogress" => Ok(OrderStatus::InProgress),
            "done" => Ok(OrderStatus::Done),
            _ => Err(ValidationError::InvalidFormat {
                field: "status".to_string(),
                reason: format!("unknown status '{}'", s.trim()),
            }),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer in the shop's address book.
///
/// Orders reference customers by id and never embed them; the billing
/// engine only ever needs the id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A customer record before insertion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl NewCustomer {
    pub fn with_id(self, id: i64) -> Customer {
        Customer {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A laundry order.
///
/// Invariant at rest: `cost` equals the pricing policy applied to
/// (`service`, `weight_grams`) as of the last save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub order_date: NaiveDate,
    pub service: ServiceType,
    pub weight_grams: i64,
    /// Computed cost in whole rupiah.
    pub cost: i64,
    pub status: OrderStatus,
}

impl Order {
    #[inline]
    pub fn cost(&self) -> Money {
        Money::new(self.cost)
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        Weight::from_grams(self.weight_grams)
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.status == OrderStatus::Done
    }
}

/// An order before insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_id: i64,
    pub order_date: NaiveDate,
    pub service: ServiceType,
    pub weight_grams: i64,
    pub cost: i64,
    pub status: OrderStatus,
}

impl NewOrder {
    pub fn with_id(self, id: i64) -> Order {
        Order {
            id,
            customer_id: self.customer_id,
            order_date: self.order_date,
            service: self.service,
            weight_grams: self.weight_grams,
            cost: self.cost,
            status: self.status,
        }
    }
}

/// Order row joined with the customer display name, the shape the order
/// list screen and the printable order report consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderWithCustomer {
    pub id: i64,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub service: ServiceType,
    pub cost: i64,
    pub status: OrderStatus,
}

// =============================================================================
// Payment
// =============================================================================

/// A recorded settlement.
///
/// Written exactly once, in the same transaction that marks the order
/// `Done`; never updated or deleted. `change_due` is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub paid_at: DateTime<Utc>,
    /// Amount handed over by the customer, whole rupiah.
    pub tendered: i64,
    /// Change returned, whole rupiah.
    pub change_due: i64,
}

impl Payment {
    #[inline]
    pub fn tendered(&self) -> Money {
        Money::new(self.tendered)
    }

    #[inline]
    pub fn change_due(&self) -> Money {
        Money::new(self.change_due)
    }
}

/// A payment before insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayment {
    pub order_id: i64,
    pub paid_at: DateTime<Utc>,
    pub tendered: i64,
    pub change_due: i64,
}

impl NewPayment {
    pub fn with_id(self, id: i64) -> Payment {
        Payment {
            id,
            order_id: self.order_id,
            paid_at: self.paid_at,
            tendered: self.tendered,
            change_due: self.change_due,
        }
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// A stocked supply item (detergent, softener, packaging).
/// Stock is not consumed per order in this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub stock: i64,
    /// Purchase price per unit, whole rupiah.
    pub unit_cost: i64,
}

impl InventoryItem {
    #[inline]
    pub fn unit_cost(&self) -> Money {
        Money::new(self.unit_cost)
    }
}

/// An inventory item before insertion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub name: String,
    pub stock: i64,
    pub unit_cost: i64,
}

impl NewInventoryItem {
    pub fn with_id(self, id: i64) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            stock: self.stock,
            unit_cost: self.unit_cost,
        }
    }
}

// =============================================================================
// Date Range
// =============================================================================

/// An inclusive date range `[from, to]` for listings and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange { from, to }
    }

    /// The trailing window ending today, the report screen's default
    /// period.
    pub fn trailing(today: NaiveDate, days: i64) -> Self {
        DateRange {
            from: today - chrono::Duration::days(days),
            to: today,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// A single-day range.
    pub fn single(date: NaiveDate) -> Self {
        DateRange { from: date, to: date }
    }
}

// =============================================================================
// Report Rows
// =============================================================================

/// Revenue report line: orders taken and revenue booked on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RevenueByDate {
    pub order_date: NaiveDate,
    pub orders: i64,
    pub revenue: i64,
}

impl RevenueByDate {
    #[inline]
    pub fn revenue(&self) -> Money {
        Money::new(self.revenue)
    }
}

/// Status report line: order count and value currently in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StatusBreakdown {
    pub status: OrderStatus,
    pub orders: i64,
    pub total_cost: i64,
}

impl StatusBreakdown {
    #[inline]
    pub fn total_cost(&self) -> Money {
        Money::new(self.total_cost)
    }
}

/// One day's dashboard numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub orders: i64,
    pub completed: i64,
    pub revenue: i64,
    pub customers_served: i64,
}

impl DailySummary {
    #[inline]
    pub fn revenue(&self) -> Money {
        Money::new(self.revenue)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
