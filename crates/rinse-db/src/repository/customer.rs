//! # Customer Repository
//!
//! Address-book CRUD. The billing flow only ever reads from here (id and
//! display name); mutation is the customer dialog's concern.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use rinse_core::{Customer, NewCustomer};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Gets a customer by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, address, phone, email
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Inserts a customer and returns the assigned id.
    pub async fn insert(&self, customer: &NewCustomer) -> DbResult<i64> {
        debug!(name = %customer.name, "Inserting customer");

        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, address, phone, email)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.address)
        .bind(&customer.phone)
        .bind(&customer.email)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Updates a customer record.
    pub async fn update(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = customer.id, "Updating customer");

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?2, address = ?3, phone = ?4, email = ?5
            WHERE id = ?1
            "#,
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.address)
        .bind(&customer.phone)
        .bind(&customer.email)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", customer.id));
        }

        Ok(())
    }

    /// Deletes a customer.
    ///
    /// Fails with a foreign-key violation if orders still reference the
    /// customer; orders are the payment audit surface and are never
    /// cascaded away.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }

    /// Lists all customers, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, address, phone, email
            FROM customers
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Case-insensitive substring search over name, phone, and email.
    pub async fn search(&self, term: &str) -> DbResult<Vec<Customer>> {
        let pattern = format!("%{}%", term.trim());

        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, address, phone, email
            FROM customers
            WHERE name LIKE ?1 OR phone LIKE ?1 OR email LIKE ?1
            ORDER BY name
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }
}
