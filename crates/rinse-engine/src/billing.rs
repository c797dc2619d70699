//! # Billing Service
//!
//! Payment settlement: the one place an order becomes `Done` together
//! with a payment record.
//!
//! ## Settlement Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  settle(order_id, tendered)                                      │
//! │       │                                                          │
//! │       ├── order exists?            no → OrderNotFound            │
//! │       ├── already done?            yes → AlreadySettled          │
//! │       ├── tendered >= 0?           no → ValidationError          │
//! │       ├── tendered >= cost?        no → InsufficientPayment      │
//! │       │                                  (carries the shortfall) │
//! │       ▼                                                          │
//! │  one transaction: status -> done  +  payment row                 │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  Payment { change_due = tendered - cost }                        │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed precondition mutates nothing. A crash between the two writes
//! cannot strand a `Done` order without its payment, or a payment
//! against an unfinished order: the repository runs both in a single
//! transaction.

use chrono::Utc;
use tracing::info;

use crate::error::EngineResult;
use rinse_core::{validation, CoreError, Money, NewPayment, Payment, ValidationError};
use rinse_db::Database;

/// Service for settling orders at the payment terminal.
#[derive(Debug, Clone)]
pub struct BillingService {
    db: Database,
}

impl BillingService {
    /// Creates a billing service.
    pub fn new(db: Database) -> Self {
        BillingService { db }
    }

    /// Settles an order with a tendered amount, returning the recorded
    /// payment (from which the terminal displays the change).
    ///
    /// Idempotent against double submission: the second call on a `Done`
    /// order returns `AlreadySettled` and records nothing.
    pub async fn settle(&self, order_id: i64, tendered: Money) -> EngineResult<Payment> {
        let order = self
            .db
            .orders()
            .get(order_id)
            .await?
            .ok_or(CoreError::OrderNotFound(order_id))?;

        if order.is_settled() {
            return Err(CoreError::AlreadySettled { order_id }.into());
        }

        // The form parser already refuses negative input; this guards
        // direct API callers. Zero is legal and covers zero-cost orders.
        if tendered.is_negative() {
            return Err(ValidationError::MustBePositive {
                field: "amount".to_string(),
            }
            .into());
        }

        let cost = order.cost();
        if tendered < cost {
            return Err(CoreError::InsufficientPayment {
                required: cost,
                tendered,
                shortfall: cost - tendered,
            }
            .into());
        }

        let change = tendered - cost;
        let payment = self
            .db
            .orders()
            .settle(&NewPayment {
                order_id,
                paid_at: Utc::now(),
                tendered: tendered.amount(),
                change_due: change.amount(),
            })
            .await?;

        info!(
            order_id,
            tendered = %tendered,
            change = %change,
            "Order settled"
        );

        Ok(payment)
    }

    /// Settlement from raw terminal input: the order id and tendered
    /// amount arrive as text and are coerced at this boundary, failing
    /// with a validation error before any query runs.
    pub async fn settle_input(&self, order_id: &str, tendered: &str) -> EngineResult<Payment> {
        let order_id = validation::parse_order_id(order_id)?;
        let tendered = validation::parse_amount(tendered)?;

        self.settle(order_id, tendered).await
    }

    /// Payments recorded against an order, for the invoice screen.
    pub async fn payments_for_order(&self, order_id: i64) -> EngineResult<Vec<Payment>> {
        Ok(self.db.orders().payments_for_order(order_id).await?)
    }
}
