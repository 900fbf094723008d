use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update_stocks::{
    UpdateProductStocksParams, UpdateProductStocksUseCase,
};

pub struct UpdateProductStocksUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductStocksUseCase for UpdateProductStocksUseCaseImpl {
    async fn execute<'a>(
        &self,
        params: UpdateProductStocksParams<'a>,
    ) -> Result<(), ProductError> {
        self.logger.info(&format!(
            "Updating stock for {} cart lines",
            params.cart.lines().len()
        ));

        for line in params.cart.lines() {
            match self
                .repository
                .remove_stock(line.product_id, line.quantity)
                .await
            {
                Ok(()) => self.logger.debug(&format!(
                    "Removed {} units of product {}",
                    line.quantity, line.product_id
                )),
                // Product left the catalog after it was put in the cart
                Err(RepositoryError::NotFound) => self.logger.warn(&format!(
                    "Product {} no longer exists, stock not updated",
                    line.product_id
                )),
                Err(other) => return Err(ProductError::Repository(other)),
            }
        }

        Ok(())
    }
}
