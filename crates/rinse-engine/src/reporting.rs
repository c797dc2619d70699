//! # Reporting Service
//!
//! Read-only aggregations for the report screens and the external
//! PDF/CSV renderers. Never invoked from any write path; callers tell
//! "no data" apart from data by sequence length, not by errors.

use chrono::NaiveDate;

use crate::error::EngineResult;
use rinse_core::{DailySummary, DateRange, Money, RevenueByDate, StatusBreakdown};
use rinse_db::Database;

/// Service for report aggregations.
#[derive(Debug, Clone)]
pub struct ReportingService {
    db: Database,
}

impl ReportingService {
    /// Creates a reporting service.
    pub fn new(db: Database) -> Self {
        ReportingService { db }
    }

    /// Order count and revenue per date over an inclusive range, newest
    /// date first.
    pub async fn revenue_by_date(&self, range: DateRange) -> EngineResult<Vec<RevenueByDate>> {
        Ok(self.db.reports().revenue_by_date(range).await?)
    }

    /// Order count and value per status over an inclusive range,
    /// ascending by status label.
    pub async fn orders_by_status(&self, range: DateRange) -> EngineResult<Vec<StatusBreakdown>> {
        Ok(self.db.reports().orders_by_status(range).await?)
    }

    /// Total revenue booked over a range (the report screen's status
    /// bar figure).
    pub async fn revenue_total(&self, range: DateRange) -> EngineResult<Money> {
        Ok(Money::new(self.db.reports().revenue_total(range).await?))
    }

    /// One day's dashboard numbers.
    pub async fn daily_summary(&self, date: NaiveDate) -> EngineResult<DailySummary> {
        Ok(self.db.reports().daily_summary(date).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rinse_core::{NewCustomer, NewOrder, OrderStatus, ServiceType};
    use rinse_db::DbConfig;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    async fn setup() -> (Database, ReportingService) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        (db.clone(), ReportingService::new(db))
    }

    async fn seed(db: &Database, day: u32, cost: i64, status: OrderStatus) {
        let customer_id = db
            .customers()
            .insert(&NewCustomer {
                name: "Budi".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        db.orders()
            .insert(&NewOrder {
                customer_id,
                order_date: date(day),
                service: ServiceType::DryClean,
                weight_grams: 1000,
                cost,
                status,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_order_set_reports_empty_sequences() {
        let (_, reports) = setup().await;
        let range = DateRange::new(date(1), date(31));

        assert!(reports.revenue_by_date(range).await.unwrap().is_empty());
        assert!(reports.orders_by_status(range).await.unwrap().is_empty());
        assert!(reports.revenue_total(range).await.unwrap().is_zero());
    }

    #[tokio::test]
    async fn test_aggregations_over_seeded_orders() {
        let (db, reports) = setup().await;

        seed(&db, 5, 10000, OrderStatus::Done).await;
        seed(&db, 6, 4000, OrderStatus::Intake).await;
        seed(&db, 6, 6000, OrderStatus::Done).await;

        let range = DateRange::new(date(1), date(31));

        let by_date = reports.revenue_by_date(range).await.unwrap();
        assert_eq!(by_date.len(), 2);
        assert_eq!(by_date[0].order_date, date(6)); // newest first
        assert_eq!(by_date[0].revenue, 10000);
        assert_eq!(by_date[1].revenue, 10000);

        let by_status = reports.orders_by_status(range).await.unwrap();
        assert_eq!(by_status.len(), 2);
        assert_eq!(by_status[0].status, OrderStatus::Done);
        assert_eq!(by_status[0].orders, 2);
        assert_eq!(by_status[1].status, OrderStatus::Intake);

        assert_eq!(reports.revenue_total(range).await.unwrap(), Money::new(20000));

        let summary = reports.daily_summary(date(6)).await.unwrap();
        assert_eq!(summary.orders, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.revenue, 10000);
    }

    #[tokio::test]
    async fn test_range_bounds_are_inclusive() {
        let (db, reports) = setup().await;

        seed(&db, 4, 1000, OrderStatus::Intake).await;
        seed(&db, 5, 2000, OrderStatus::Intake).await;
        seed(&db, 6, 3000, OrderStatus::Intake).await;
        seed(&db, 7, 4000, OrderStatus::Intake).await;

        let rows = reports
            .revenue_by_date(DateRange::new(date(5), date(6)))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            reports
                .revenue_total(DateRange::new(date(5), date(6)))
                .await
                .unwrap(),
            Money::new(5000)
        );
    }
}
