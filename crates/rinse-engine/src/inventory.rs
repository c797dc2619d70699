//! # Inventory Service
//!
//! Supply stock maintenance. Deliberately not linked to orders: taking
//! in laundry does not consume detergent rows, matching the shop's
//! actual bookkeeping.

use tracing::info;

use crate::error::EngineResult;
use rinse_core::{validation, InventoryItem, NewInventoryItem};
use rinse_db::{Database, DbError};

/// Service for inventory records.
#[derive(Debug, Clone)]
pub struct InventoryService {
    db: Database,
}

impl InventoryService {
    /// Creates an inventory service.
    pub fn new(db: Database) -> Self {
        InventoryService { db }
    }

    /// Adds a supply item. Name required, stock and unit cost
    /// non-negative.
    pub async fn create(&self, item: NewInventoryItem) -> EngineResult<InventoryItem> {
        validation::validate_item_name(&item.name)?;
        validation::validate_stock(item.stock)?;
        validation::validate_unit_cost(item.unit_cost)?;

        let id = self.db.inventory().insert(&item).await?;

        info!(item_id = id, name = %item.name, "Inventory item created");

        Ok(item.with_id(id))
    }

    /// Updates a supply item.
    pub async fn update(&self, item: &InventoryItem) -> EngineResult<()> {
        validation::validate_item_name(&item.name)?;
        validation::validate_stock(item.stock)?;
        validation::validate_unit_cost(item.unit_cost)?;

        self.db.inventory().update(item).await?;

        info!(item_id = item.id, "Inventory item updated");

        Ok(())
    }

    /// Deletes a supply item.
    pub async fn delete(&self, item_id: i64) -> EngineResult<()> {
        self.db.inventory().delete(item_id).await?;

        info!(item_id, "Inventory item deleted");

        Ok(())
    }

    /// Fetches a supply item.
    pub async fn get(&self, item_id: i64) -> EngineResult<InventoryItem> {
        let item = self
            .db
            .inventory()
            .get(item_id)
            .await?
            .ok_or_else(|| DbError::not_found("Inventory item", item_id))?;

        Ok(item)
    }

    /// Lists all supply items, ordered by name.
    pub async fn list(&self) -> EngineResult<Vec<InventoryItem>> {
        Ok(self.db.inventory().list().await?)
    }

    /// Adjusts stock by a signed delta (negative to consume) and returns
    /// the new count.
    pub async fn adjust_stock(&self, item_id: i64, delta: i64) -> EngineResult<i64> {
        let stock = self.db.inventory().adjust_stock(item_id, delta).await?;

        info!(item_id, delta, stock, "Stock adjusted");

        Ok(stock)
    }
}
