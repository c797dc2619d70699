//! # Order Repository
//!
//! Database operations for orders and their payments.
//!
//! ## Order Lifecycle
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  1. INTAKE                                                       │
//! │     └── insert(NewOrder { status: Intake, .. }) -> id            │
//! │                                                                  │
//! │  2. EDIT / STATUS                                                │
//! │     └── update() rewrites the priced fields, never status        │
//! │     └── set_status() is the staff picklist                       │
//! │                                                                  │
//! │  3. SETTLE (the one compound write in the system)                │
//! │     └── settle() marks the order done AND inserts the payment    │
//! │         row in a single transaction; both commit or neither      │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use rinse_core::{DateRange, NewOrder, NewPayment, Order, OrderStatus, OrderWithCustomer, Payment};

/// Repository for order and payment database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Gets an order by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, order_date, service, weight_grams, cost, status
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Inserts an order and returns the assigned id.
    pub async fn insert(&self, order: &NewOrder) -> DbResult<i64> {
        debug!(
            customer_id = order.customer_id,
            service = %order.service,
            cost = order.cost,
            "Inserting order"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO orders (customer_id, order_date, service, weight_grams, cost, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(order.customer_id)
        .bind(order.order_date)
        .bind(order.service)
        .bind(order.weight_grams)
        .bind(order.cost)
        .bind(order.status)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Rewrites an order's priced fields.
    ///
    /// Status is deliberately not touched here; it moves only through
    /// [`set_status`](Self::set_status) and [`settle`](Self::settle).
    pub async fn update(&self, order: &Order) -> DbResult<()> {
        debug!(id = order.id, cost = order.cost, "Updating order");

        let result = sqlx::query(
            r#"
            UPDATE orders
            SET customer_id = ?2, order_date = ?3, service = ?4, weight_grams = ?5, cost = ?6
            WHERE id = ?1
            "#,
        )
        .bind(order.id)
        .bind(order.customer_id)
        .bind(order.order_date)
        .bind(order.service)
        .bind(order.weight_grams)
        .bind(order.cost)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", order.id));
        }

        Ok(())
    }

    /// Reassigns an order's status from the staff picklist.
    pub async fn set_status(&self, id: i64, status: OrderStatus) -> DbResult<()> {
        debug!(id, status = %status, "Setting order status");

        let result = sqlx::query("UPDATE orders SET status = ?2 WHERE id = ?1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }

    /// Lists orders, newest date first, optionally restricted to an
    /// inclusive date range.
    pub async fn list(&self, range: Option<DateRange>) -> DbResult<Vec<Order>> {
        let orders = match range {
            Some(range) => {
                sqlx::query_as::<_, Order>(
                    r#"
                    SELECT id, customer_id, order_date, service, weight_grams, cost, status
                    FROM orders
                    WHERE order_date BETWEEN ?1 AND ?2
                    ORDER BY order_date DESC, id DESC
                    "#,
                )
                .bind(range.from)
                .bind(range.to)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Order>(
                    r#"
                    SELECT id, customer_id, order_date, service, weight_grams, cost, status
                    FROM orders
                    ORDER BY order_date DESC, id DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(orders)
    }

    /// Lists orders joined with the customer display name, the shape the
    /// order screen and the printable order report consume.
    pub async fn list_with_customer(&self, range: Option<DateRange>) -> DbResult<Vec<OrderWithCustomer>> {
        let orders = match range {
            Some(range) => {
                sqlx::query_as::<_, OrderWithCustomer>(
                    r#"
                    SELECT o.id, c.name AS customer_name, o.order_date, o.service, o.cost, o.status
                    FROM orders o
                    JOIN customers c ON o.customer_id = c.id
                    WHERE o.order_date BETWEEN ?1 AND ?2
                    ORDER BY o.order_date DESC, o.id DESC
                    "#,
                )
                .bind(range.from)
                .bind(range.to)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, OrderWithCustomer>(
                    r#"
                    SELECT o.id, c.name AS customer_name, o.order_date, o.service, o.cost, o.status
                    FROM orders o
                    JOIN customers c ON o.customer_id = c.id
                    ORDER BY o.order_date DESC, o.id DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(orders)
    }

    /// Settles an order: marks it `done` and records the payment, as one
    /// all-or-nothing transaction.
    ///
    /// The UPDATE is guarded on `status <> 'done'`, so an order that is
    /// already settled (or missing) changes nothing and inserts nothing;
    /// a failure on either statement rolls the whole transaction back.
    /// This is the only compound write in the system.
    pub async fn settle(&self, payment: &NewPayment) -> DbResult<Payment> {
        debug!(
            order_id = payment.order_id,
            tendered = payment.tendered,
            change_due = payment.change_due,
            "Settling order"
        );

        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE orders SET status = ?2 WHERE id = ?1 AND status <> ?2")
            .bind(payment.order_id)
            .bind(OrderStatus::Done)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(DbError::not_found("Order (unsettled)", payment.order_id));
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO payments (order_id, paid_at, tendered, change_due)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(payment.order_id)
        .bind(payment.paid_at)
        .bind(payment.tendered)
        .bind(payment.change_due)
        .execute(&mut *tx)
        .await?;

        let id = inserted.last_insert_rowid();

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(payment.clone().with_id(id))
    }

    /// Payments recorded against an order, oldest first.
    pub async fn payments_for_order(&self, order_id: i64) -> DbResult<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, order_id, paid_at, tendered, change_due
            FROM payments
            WHERE order_id = ?1
            ORDER BY paid_at, id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    /// Number of payment rows on file for an order.
    pub async fn payment_count(&self, order_id: i64) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM payments WHERE order_id = ?1")
            .bind(order_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::{NaiveDate, Utc};
    use rinse_core::{NewCustomer, ServiceType};

    async fn database() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn customer(db: &Database) -> i64 {
        db.customers()
            .insert(&NewCustomer {
                name: "Budi".to_string(),
                ..Default::default()
            })
            .await
            .unwrap()
    }

    fn draft(customer_id: i64, date: NaiveDate) -> NewOrder {
        NewOrder {
            customer_id,
            order_date: date,
            service: ServiceType::DryClean,
            weight_grams: 2000,
            cost: 10000,
            status: OrderStatus::Intake,
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get_round_trip() {
        let db = database().await;
        let customer_id = customer(&db).await;

        let id = db.orders().insert(&draft(customer_id, date(7))).await.unwrap();
        let order = db.orders().get(id).await.unwrap().unwrap();

        assert_eq!(order.customer_id, customer_id);
        assert_eq!(order.order_date, date(7));
        assert_eq!(order.service, ServiceType::DryClean);
        assert_eq!(order.weight_grams, 2000);
        assert_eq!(order.cost, 10000);
        assert_eq!(order.status, OrderStatus::Intake);
    }

    #[tokio::test]
    async fn test_update_rewrites_fields_but_not_status() {
        let db = database().await;
        let customer_id = customer(&db).await;
        let repo = db.orders();

        let id = repo.insert(&draft(customer_id, date(7))).await.unwrap();
        repo.set_status(id, OrderStatus::InProgress).await.unwrap();

        let mut order = repo.get(id).await.unwrap().unwrap();
        order.service = ServiceType::Iron;
        order.weight_grams = 3000;
        order.cost = 9000;
        order.status = OrderStatus::Done; // update() must ignore this field
        repo.update(&order).await.unwrap();

        let reloaded = repo.get(id).await.unwrap().unwrap();
        assert_eq!(reloaded.service, ServiceType::Iron);
        assert_eq!(reloaded.cost, 9000);
        assert_eq!(reloaded.status, OrderStatus::InProgress);
    }

    #[tokio::test]
    async fn test_set_status_missing_is_not_found() {
        let db = database().await;
        let err = db.orders().set_status(404, OrderStatus::Done).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_is_date_descending_and_range_filtered() {
        let db = database().await;
        let customer_id = customer(&db).await;
        let repo = db.orders();

        repo.insert(&draft(customer_id, date(5))).await.unwrap();
        repo.insert(&draft(customer_id, date(7))).await.unwrap();
        repo.insert(&draft(customer_id, date(6))).await.unwrap();

        let all = repo.list(None).await.unwrap();
        let dates: Vec<NaiveDate> = all.iter().map(|o| o.order_date).collect();
        assert_eq!(dates, [date(7), date(6), date(5)]);

        let ranged = repo.list(Some(DateRange::new(date(6), date(7)))).await.unwrap();
        assert_eq!(ranged.len(), 2);
    }

    #[tokio::test]
    async fn test_list_with_customer_carries_display_name() {
        let db = database().await;
        let customer_id = customer(&db).await;
        db.orders().insert(&draft(customer_id, date(7))).await.unwrap();

        let rows = db.orders().list_with_customer(None).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_name, "Budi");
        assert_eq!(rows[0].cost, 10000);
    }

    #[tokio::test]
    async fn test_settle_marks_done_and_records_payment() {
        let db = database().await;
        let customer_id = customer(&db).await;
        let repo = db.orders();

        let id = repo.insert(&draft(customer_id, date(7))).await.unwrap();

        let payment = repo
            .settle(&NewPayment {
                order_id: id,
                paid_at: Utc::now(),
                tendered: 15000,
                change_due: 5000,
            })
            .await
            .unwrap();

        assert!(payment.id > 0);
        assert_eq!(payment.change_due, 5000);

        let order = repo.get(id).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Done);
        assert_eq!(repo.payment_count(id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_settle_missing_order_writes_nothing() {
        let db = database().await;
        let repo = db.orders();

        let err = repo
            .settle(&NewPayment {
                order_id: 404,
                paid_at: Utc::now(),
                tendered: 10000,
                change_due: 0,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(repo.payment_count(404).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_settle_done_order_writes_nothing() {
        let db = database().await;
        let customer_id = customer(&db).await;
        let repo = db.orders();

        let id = repo.insert(&draft(customer_id, date(7))).await.unwrap();
        repo.set_status(id, OrderStatus::Done).await.unwrap();

        let err = repo
            .settle(&NewPayment {
                order_id: id,
                paid_at: Utc::now(),
                tendered: 10000,
                change_due: 0,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(repo.payment_count(id).await.unwrap(), 0);
    }
}
