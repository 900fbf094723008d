use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::product::errors::ProductError;

/// Stock is reduced by the quantity of each line of `cart`, line by line.
///
/// Not atomic: the first store failure other than a missing product stops
/// the update, and lines already processed keep their reduced stock.
/// Callers keep the cart on failure, so retrying reduces those lines again.
pub struct UpdateProductStocksParams<'a> {
    pub cart: &'a Cart,
}

#[async_trait]
pub trait UpdateProductStocksUseCase: Send + Sync {
    async fn execute<'a>(&self, params: UpdateProductStocksParams<'a>)
    -> Result<(), ProductError>;
}
