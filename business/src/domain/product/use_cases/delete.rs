use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

/// Deleting a product also drops it from the caller's cart.
pub struct DeleteProductParams<'a> {
    pub id: ProductId,
    pub cart: &'a mut Cart,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute<'a>(&self, params: DeleteProductParams<'a>) -> Result<(), ProductError>;
}
