//! # Order Lifecycle Service
//!
//! Order intake, editing, and status moves.
//!
//! Create and edit share one validation path: the customer reference and
//! weight are checked strictly (no silent clamping), the cost is computed
//! from the rate table, and the order date is stamped with today. Status
//! moves freely through the picklist set; the engine does not force
//! forward-only ordering. Settlement, the one transition tied to a
//! payment, lives in [`crate::billing::BillingService`].

use chrono::Local;
use tracing::info;

use crate::error::EngineResult;
use rinse_core::{
    validation, CoreError, DateRange, NewOrder, Order, OrderStatus, OrderWithCustomer, Quote,
    RateTable, ServiceType, Weight,
};
use rinse_db::Database;

/// Service for creating, editing, and tracking orders.
#[derive(Debug, Clone)]
pub struct OrderService {
    db: Database,
    rates: RateTable,
}

impl OrderService {
    /// Creates an order service with an explicit rate table.
    pub fn new(db: Database, rates: RateTable) -> Self {
        OrderService { db, rates }
    }

    /// Creates an order service priced at the shop's standard rates.
    pub fn with_standard_rates(db: Database) -> Self {
        OrderService::new(db, RateTable::default())
    }

    /// The rate table this service prices against.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Live cost preview for the order form; never fails, blank weight
    /// text previews as zero.
    pub fn preview(&self, service: ServiceType, weight_text: &str) -> Quote {
        self.rates.quote_input(service, weight_text)
    }

    /// Takes in a new order.
    ///
    /// Requires a valid customer reference and a strictly positive
    /// weight; prices via the rate table and persists with status
    /// `Intake`, dated today.
    pub async fn create_order(
        &self,
        customer_id: i64,
        service: ServiceType,
        weight: Weight,
    ) -> EngineResult<Order> {
        validation::validate_customer_ref(customer_id)?;
        validation::validate_weight(weight)?;

        self.db
            .customers()
            .get(customer_id)
            .await?
            .ok_or(CoreError::CustomerNotFound(customer_id))?;

        let quote = self.rates.quote(service, weight);

        let draft = NewOrder {
            customer_id,
            order_date: Local::now().date_naive(),
            service,
            weight_grams: weight.grams(),
            cost: quote.cost.amount(),
            status: OrderStatus::Intake,
        };

        let id = self.db.orders().insert(&draft).await?;

        info!(
            order_id = id,
            customer_id,
            service = %service,
            cost = %quote.cost,
            "Order created"
        );

        Ok(draft.with_id(id))
    }

    /// Rewrites an order with re-validated fields and a recomputed cost.
    ///
    /// Validation is identical to create. The order date is refreshed to
    /// today; status is left exactly where it was.
    pub async fn edit_order(
        &self,
        order_id: i64,
        customer_id: i64,
        service: ServiceType,
        weight: Weight,
    ) -> EngineResult<Order> {
        let existing = self.get_order(order_id).await?;

        validation::validate_customer_ref(customer_id)?;
        validation::validate_weight(weight)?;

        self.db
            .customers()
            .get(customer_id)
            .await?
            .ok_or(CoreError::CustomerNotFound(customer_id))?;

        let quote = self.rates.quote(service, weight);

        let updated = Order {
            id: order_id,
            customer_id,
            order_date: Local::now().date_naive(),
            service,
            weight_grams: weight.grams(),
            cost: quote.cost.amount(),
            status: existing.status,
        };

        self.db.orders().update(&updated).await?;

        info!(order_id, cost = %quote.cost, "Order edited");

        Ok(updated)
    }

    /// Reassigns an order's status from the picklist.
    ///
    /// Any member of the status set is accepted, including moving
    /// backwards; this mirrors the counter workflow, where staff fix
    /// mis-set statuses by hand. Settlement state is still protected:
    /// paying an order goes through the billing service, and an order
    /// already `Done` cannot be paid twice however it got there.
    pub async fn set_status(&self, order_id: i64, status: OrderStatus) -> EngineResult<()> {
        // Existence check first so a bad id reports as a domain
        // not-found rather than a storage error.
        self.get_order(order_id).await?;

        self.db.orders().set_status(order_id, status).await?;

        info!(order_id, status = %status, "Order status set");

        Ok(())
    }

    /// Fetches an order, failing with `OrderNotFound` if absent.
    pub async fn get_order(&self, order_id: i64) -> EngineResult<Order> {
        let order = self
            .db
            .orders()
            .get(order_id)
            .await?
            .ok_or(CoreError::OrderNotFound(order_id))?;

        Ok(order)
    }

    /// Lists orders, newest first, optionally within a date range.
    pub async fn list_orders(&self, range: Option<DateRange>) -> EngineResult<Vec<Order>> {
        Ok(self.db.orders().list(range).await?)
    }

    /// Lists orders with the customer display name, the order screen's
    /// row shape.
    pub async fn list_orders_with_customer(
        &self,
        range: Option<DateRange>,
    ) -> EngineResult<Vec<OrderWithCustomer>> {
        Ok(self.db.orders().list_with_customer(range).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use rinse_core::{Money, NewCustomer, ValidationError};
    use rinse_db::DbConfig;

    async fn service() -> (OrderService, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let customer_id = db
            .customers()
            .insert(&NewCustomer {
                name: "Budi Santoso".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        (OrderService::with_standard_rates(db), customer_id)
    }

    #[tokio::test]
    async fn test_create_order_prices_and_starts_at_intake() {
        let (orders, customer_id) = service().await;

        let order = orders
            .create_order(customer_id, ServiceType::DryClean, Weight::from_kilograms(2))
            .await
            .unwrap();

        assert_eq!(order.cost, 10000);
        assert_eq!(order.status, OrderStatus::Intake);
        assert!(order.id > 0);

        // Persisted as returned.
        let stored = orders.get_order(order.id).await.unwrap();
        assert_eq!(stored, order);
    }

    #[tokio::test]
    async fn test_create_order_rejects_non_positive_weight() {
        let (orders, customer_id) = service().await;

        for grams in [0, -1000] {
            let err = orders
                .create_order(customer_id, ServiceType::Iron, Weight::from_grams(grams))
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                EngineError::Core(CoreError::Validation(ValidationError::MustBePositive { .. }))
            ));
        }

        // 2.5 kg is fine.
        assert!(orders
            .create_order(customer_id, ServiceType::Iron, Weight::parse_lenient("2.5"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_create_order_rejects_missing_customer() {
        let (orders, _) = service().await;

        let err = orders
            .create_order(0, ServiceType::Iron, Weight::from_kilograms(1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Core(CoreError::Validation(ValidationError::Required { .. }))
        ));

        let err = orders
            .create_order(404, ServiceType::Iron, Weight::from_kilograms(1))
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::CustomerNotFound(404))));
    }

    #[tokio::test]
    async fn test_edit_order_recomputes_cost_and_keeps_status() {
        let (orders, customer_id) = service().await;

        let order = orders
            .create_order(customer_id, ServiceType::DryClean, Weight::from_kilograms(2))
            .await
            .unwrap();
        orders.set_status(order.id, OrderStatus::InProgress).await.unwrap();

        let edited = orders
            .edit_order(order.id, customer_id, ServiceType::WetWash, Weight::from_kilograms(3))
            .await
            .unwrap();

        assert_eq!(edited.cost, 12000);
        assert_eq!(edited.status, OrderStatus::InProgress);
        assert_eq!(orders.get_order(order.id).await.unwrap().cost, 12000);
    }

    #[tokio::test]
    async fn test_edit_order_validates_like_create() {
        let (orders, customer_id) = service().await;

        let order = orders
            .create_order(customer_id, ServiceType::Iron, Weight::from_kilograms(1))
            .await
            .unwrap();

        let err = orders
            .edit_order(order.id, customer_id, ServiceType::Iron, Weight::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::Validation(_))));

        let err = orders
            .edit_order(999, customer_id, ServiceType::Iron, Weight::from_kilograms(1))
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::OrderNotFound(999))));
    }

    #[tokio::test]
    async fn test_set_status_moves_freely() {
        let (orders, customer_id) = service().await;

        let order = orders
            .create_order(customer_id, ServiceType::Iron, Weight::from_kilograms(1))
            .await
            .unwrap();

        // Forward, and back again: the picklist permits both.
        orders.set_status(order.id, OrderStatus::Done).await.unwrap();
        orders.set_status(order.id, OrderStatus::Intake).await.unwrap();
        assert_eq!(orders.get_order(order.id).await.unwrap().status, OrderStatus::Intake);

        let err = orders.set_status(404, OrderStatus::Done).await.unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::OrderNotFound(404))));
    }

    #[tokio::test]
    async fn test_preview_quotes_without_failing() {
        let (orders, _) = service().await;

        assert_eq!(orders.preview(ServiceType::DryClean, "2,5").cost, Money::new(12500));
        assert_eq!(orders.preview(ServiceType::DryClean, "").cost, Money::zero());

        let unpriced = OrderService::new(
            orders.db.clone(),
            RateTable::default().without_rate(ServiceType::Iron),
        );
        let quote = unpriced.preview(ServiceType::Iron, "2");
        assert_eq!(quote.cost, Money::zero());
        assert!(!quote.rate_known);
    }

    #[tokio::test]
    async fn test_list_orders_with_customer_names() {
        let (orders, customer_id) = service().await;

        orders
            .create_order(customer_id, ServiceType::WetWash, Weight::from_kilograms(1))
            .await
            .unwrap();

        let rows = orders.list_orders_with_customer(None).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_name, "Budi Santoso");

        assert_eq!(orders.list_orders(None).await.unwrap().len(), 1);
    }
}
