//! # Report Repository
//!
//! Read-only aggregations over orders for the report screens and the
//! external PDF/CSV renderers. Never part of any write path.
//!
//! All sums are coalesced to zero and an empty range yields an empty
//! vector; "no data" is a length-zero result, never an error.

use sqlx::SqlitePool;

use crate::error::DbResult;
use rinse_core::{DailySummary, DateRange, RevenueByDate, StatusBreakdown};
use chrono::NaiveDate;

/// Repository for read-only report queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Order count and revenue grouped by order date, newest date first.
    pub async fn revenue_by_date(&self, range: DateRange) -> DbResult<Vec<RevenueByDate>> {
        let rows = sqlx::query_as::<_, RevenueByDate>(
            r#"
            SELECT order_date, COUNT(id) AS orders, COALESCE(SUM(cost), 0) AS revenue
            FROM orders
            WHERE order_date BETWEEN ?1 AND ?2
            GROUP BY order_date
            ORDER BY order_date DESC
            "#,
        )
        .bind(range.from)
        .bind(range.to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Order count and value grouped by status, ascending by the stored
    /// status label.
    pub async fn orders_by_status(&self, range: DateRange) -> DbResult<Vec<StatusBreakdown>> {
        let rows = sqlx::query_as::<_, StatusBreakdown>(
            r#"
            SELECT status, COUNT(id) AS orders, COALESCE(SUM(cost), 0) AS total_cost
            FROM orders
            WHERE order_date BETWEEN ?1 AND ?2
            GROUP BY status
            ORDER BY status ASC
            "#,
        )
        .bind(range.from)
        .bind(range.to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Total revenue booked over a range.
    pub async fn revenue_total(&self, range: DateRange) -> DbResult<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(cost), 0) FROM orders WHERE order_date BETWEEN ?1 AND ?2",
        )
        .bind(range.from)
        .bind(range.to)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// One day's dashboard numbers: orders taken, orders finished,
    /// revenue booked, distinct customers served.
    pub async fn daily_summary(&self, date: NaiveDate) -> DbResult<DailySummary> {
        let (orders, completed, revenue, customers_served) =
            sqlx::query_as::<_, (i64, i64, i64, i64)>(
                r#"
                SELECT
                    COUNT(id),
                    COALESCE(SUM(CASE WHEN status = 'done' THEN 1 ELSE 0 END), 0),
                    COALESCE(SUM(cost), 0),
                    COUNT(DISTINCT customer_id)
                FROM orders
                WHERE order_date = ?1
                "#,
            )
            .bind(date)
            .fetch_one(&self.pool)
            .await?;

        Ok(DailySummary {
            date,
            orders,
            completed,
            revenue,
            customers_served,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use rinse_core::{NewCustomer, NewOrder, OrderStatus, ServiceType};

    async fn database() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    async fn seed_order(db: &Database, customer_id: i64, day: u32, cost: i64, status: OrderStatus) {
        db.orders()
            .insert(&NewOrder {
                customer_id,
                order_date: date(day),
                service: ServiceType::WetWash,
                weight_grams: 1000,
                cost,
                status,
            })
            .await
            .unwrap();
    }

    async fn seed_customer(db: &Database, name: &str) -> i64 {
        db.customers()
            .insert(&NewCustomer {
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_range_yields_empty_rows_not_errors() {
        let db = database().await;
        let range = DateRange::new(date(1), date(31));

        assert!(db.reports().revenue_by_date(range).await.unwrap().is_empty());
        assert!(db.reports().orders_by_status(range).await.unwrap().is_empty());
        assert_eq!(db.reports().revenue_total(range).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_revenue_by_date_groups_and_sorts_descending() {
        let db = database().await;
        let budi = seed_customer(&db, "Budi").await;

        seed_order(&db, budi, 5, 10000, OrderStatus::Intake).await;
        seed_order(&db, budi, 5, 4000, OrderStatus::Done).await;
        seed_order(&db, budi, 7, 12000, OrderStatus::Intake).await;

        let rows = db
            .reports()
            .revenue_by_date(DateRange::new(date(1), date(31)))
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].order_date, date(7));
        assert_eq!(rows[0].orders, 1);
        assert_eq!(rows[0].revenue, 12000);
        assert_eq!(rows[1].order_date, date(5));
        assert_eq!(rows[1].orders, 2);
        assert_eq!(rows[1].revenue, 14000);
    }

    #[tokio::test]
    async fn test_revenue_by_date_respects_range_bounds() {
        let db = database().await;
        let budi = seed_customer(&db, "Budi").await;

        seed_order(&db, budi, 4, 5000, OrderStatus::Intake).await;
        seed_order(&db, budi, 5, 6000, OrderStatus::Intake).await;
        seed_order(&db, budi, 6, 7000, OrderStatus::Intake).await;

        // Inclusive on both ends.
        let rows = db
            .reports()
            .revenue_by_date(DateRange::new(date(5), date(6)))
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].order_date, date(6));
        assert_eq!(rows[1].order_date, date(5));
    }

    #[tokio::test]
    async fn test_orders_by_status_sorts_by_label_ascending() {
        let db = database().await;
        let budi = seed_customer(&db, "Budi").await;

        seed_order(&db, budi, 5, 10000, OrderStatus::Intake).await;
        seed_order(&db, budi, 5, 4000, OrderStatus::Done).await;
        seed_order(&db, budi, 6, 3000, OrderStatus::InProgress).await;
        seed_order(&db, budi, 6, 2000, OrderStatus::Done).await;

        let rows = db
            .reports()
            .orders_by_status(DateRange::new(date(1), date(31)))
            .await
            .unwrap();

        // Label order: done < in_progress < intake.
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].status, OrderStatus::Done);
        assert_eq!(rows[0].orders, 2);
        assert_eq!(rows[0].total_cost, 6000);
        assert_eq!(rows[1].status, OrderStatus::InProgress);
        assert_eq!(rows[2].status, OrderStatus::Intake);
    }

    #[tokio::test]
    async fn test_daily_summary() {
        let db = database().await;
        let budi = seed_customer(&db, "Budi").await;
        let siti = seed_customer(&db, "Siti").await;

        seed_order(&db, budi, 7, 10000, OrderStatus::Done).await;
        seed_order(&db, budi, 7, 4000, OrderStatus::Intake).await;
        seed_order(&db, siti, 7, 6000, OrderStatus::Done).await;
        seed_order(&db, siti, 6, 9000, OrderStatus::Done).await; // other day

        let summary = db.reports().daily_summary(date(7)).await.unwrap();
        assert_eq!(summary.orders, 3);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.revenue, 20000);
        assert_eq!(summary.customers_served, 2);
    }

    #[tokio::test]
    async fn test_daily_summary_empty_day_is_zeroed() {
        let db = database().await;
        let summary = db.reports().daily_summary(date(1)).await.unwrap();
        assert_eq!(summary.orders, 0);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.revenue, 0);
        assert_eq!(summary.customers_served, 0);
    }
}
