use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;

struct ProductTable {
    next_id: i64,
    rows: BTreeMap<i64, ProductEntity>,
}

/// Product store kept in process memory.
///
/// Ids are assigned sequentially from 1 and never reused.
pub struct ProductRepositoryInMemory {
    table: RwLock<ProductTable>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(ProductTable {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .cloned()
            .map(|e| e.into_domain())
            .collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let table = self.table.read().await;
        table
            .rows
            .get(&id.value())
            .cloned()
            .map(|e| e.into_domain())
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id = id.checked_add(1).ok_or(RepositoryError::Persistence)?;

        let entity = ProductEntity::from_new(id, &product);
        table.rows.insert(id, entity.clone());

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id.value())
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    async fn remove_stock(&self, id: ProductId, quantity: u32) -> Result<(), RepositoryError> {
        let mut table = self.table.write().await;
        let entity = table
            .rows
            .get_mut(&id.value())
            .ok_or(RepositoryError::NotFound)?;

        let remaining = i64::from(entity.quantity) - i64::from(quantity);
        if remaining <= 0 {
            table.rows.remove(&id.value());
            tracing::debug!(product_id = id.value(), "product sold out and removed");
        } else {
            // remaining is below the previous i32 quantity
            entity.quantity = remaining as i32;
        }

        Ok(())
    }
}
