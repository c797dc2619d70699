//! # Inventory Repository
//!
//! Stock CRUD for shop supplies. Standalone: nothing in the order or
//! billing flow touches these rows.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use rinse_core::{InventoryItem, NewInventoryItem};

/// Repository for inventory database operations.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryRepository { pool }
    }

    /// Gets an item by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT id, name, stock, unit_cost
            FROM inventory
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts an item and returns the assigned id.
    pub async fn insert(&self, item: &NewInventoryItem) -> DbResult<i64> {
        debug!(name = %item.name, stock = item.stock, "Inserting inventory item");

        let result = sqlx::query(
            r#"
            INSERT INTO inventory (name, stock, unit_cost)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&item.name)
        .bind(item.stock)
        .bind(item.unit_cost)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Updates an item record.
    pub async fn update(&self, item: &InventoryItem) -> DbResult<()> {
        debug!(id = item.id, "Updating inventory item");

        let result = sqlx::query(
            r#"
            UPDATE inventory
            SET name = ?2, stock = ?3, unit_cost = ?4
            WHERE id = ?1
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.stock)
        .bind(item.unit_cost)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Inventory item", item.id));
        }

        Ok(())
    }

    /// Deletes an item.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting inventory item");

        let result = sqlx::query("DELETE FROM inventory WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Inventory item", id));
        }

        Ok(())
    }

    /// Lists all items, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT id, name, stock, unit_cost
            FROM inventory
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Adjusts an item's stock by a signed delta (negative to consume)
    /// and returns the new count.
    pub async fn adjust_stock(&self, id: i64, delta: i64) -> DbResult<i64> {
        debug!(id, delta, "Adjusting stock");

        let result = sqlx::query("UPDATE inventory SET stock = stock + ?2 WHERE id = ?1")
            .bind(id)
            .bind(delta)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Inventory item", id));
        }

        let stock: i64 = sqlx::query_scalar("SELECT stock FROM inventory WHERE id = ?1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(stock)
    }
}
