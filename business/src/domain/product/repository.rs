use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{NewProduct, Product};

/// Port to the external product store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Persists a validated product and returns it with its assigned id.
    async fn save(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
    /// Takes `quantity` units out of stock; the product is removed once
    /// nothing is left.
    async fn remove_stock(&self, id: ProductId, quantity: u32) -> Result<(), RepositoryError>;
}
