//! # Customer Directory
//!
//! Address-book maintenance. The billing flow reads from here and never
//! mutates; mutation belongs to the customer dialog.

use tracing::info;

use crate::error::EngineResult;
use rinse_core::{validation, CoreError, Customer, NewCustomer};
use rinse_db::Database;

/// Service for customer records.
#[derive(Debug, Clone)]
pub struct CustomerDirectory {
    db: Database,
}

impl CustomerDirectory {
    /// Creates a customer directory.
    pub fn new(db: Database) -> Self {
        CustomerDirectory { db }
    }

    /// Adds a customer. The name is required; contact fields are free.
    pub async fn create(&self, customer: NewCustomer) -> EngineResult<Customer> {
        validation::validate_customer_name(&customer.name)?;

        let id = self.db.customers().insert(&customer).await?;

        info!(customer_id = id, name = %customer.name, "Customer created");

        Ok(customer.with_id(id))
    }

    /// Updates a customer record.
    pub async fn update(&self, customer: &Customer) -> EngineResult<()> {
        validation::validate_customer_name(&customer.name)?;

        self.lookup(customer.id).await?;
        self.db.customers().update(customer).await?;

        info!(customer_id = customer.id, "Customer updated");

        Ok(())
    }

    /// Deletes a customer.
    ///
    /// Refused with a foreign-key violation if orders still reference
    /// the customer; order history is the payment audit surface and is
    /// never cascaded away.
    pub async fn delete(&self, customer_id: i64) -> EngineResult<()> {
        self.lookup(customer_id).await?;
        self.db.customers().delete(customer_id).await?;

        info!(customer_id, "Customer deleted");

        Ok(())
    }

    /// Fetches a customer, failing with `CustomerNotFound` if absent.
    pub async fn lookup(&self, customer_id: i64) -> EngineResult<Customer> {
        let customer = self
            .db
            .customers()
            .get(customer_id)
            .await?
            .ok_or(CoreError::CustomerNotFound(customer_id))?;

        Ok(customer)
    }

    /// Lists all customers, ordered by name.
    pub async fn list(&self) -> EngineResult<Vec<Customer>> {
        Ok(self.db.customers().list().await?)
    }

    /// Substring search over name, phone, and email.
    pub async fn search(&self, term: &str) -> EngineResult<Vec<Customer>> {
        Ok(self.db.customers().search(term).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::orders::OrderService;
    use rinse_core::{ServiceType, Weight};
    use rinse_db::{DbConfig, DbError};

    async fn directory() -> CustomerDirectory {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        CustomerDirectory::new(db)
    }

    fn budi() -> NewCustomer {
        NewCustomer {
            name: "Budi Santoso".to_string(),
            phone: Some("0812-3001".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let directory = directory().await;

        let err = directory
            .create(NewCustomer {
                name: "  ".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::Validation(_))));

        let customer = directory.create(budi()).await.unwrap();
        assert!(customer.id > 0);
    }

    #[tokio::test]
    async fn test_lookup_and_update() {
        let directory = directory().await;

        let mut customer = directory.create(budi()).await.unwrap();
        customer.email = Some("budi@example.com".to_string());
        directory.update(&customer).await.unwrap();

        let reloaded = directory.lookup(customer.id).await.unwrap();
        assert_eq!(reloaded.email.as_deref(), Some("budi@example.com"));

        let err = directory.lookup(404).await.unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::CustomerNotFound(404))));
    }

    #[tokio::test]
    async fn test_delete_without_orders_succeeds() {
        let directory = directory().await;

        let customer = directory.create(budi()).await.unwrap();
        directory.delete(customer.id).await.unwrap();

        assert!(directory.lookup(customer.id).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_with_orders_is_refused() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let directory = CustomerDirectory::new(db.clone());
        let orders = OrderService::with_standard_rates(db);

        let customer = directory.create(budi()).await.unwrap();
        orders
            .create_order(customer.id, ServiceType::WetWash, Weight::from_kilograms(1))
            .await
            .unwrap();

        let err = directory.delete(customer.id).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Db(DbError::ForeignKeyViolation { .. })
        ));

        // Still on file.
        assert!(directory.lookup(customer.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_search() {
        let directory = directory().await;
        directory.create(budi()).await.unwrap();
        directory
            .create(NewCustomer {
                name: "Dewi Lestari".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let hits = directory.search("dewi").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dewi Lestari");
    }
}
