use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute<'a>(&self, params: DeleteProductParams<'a>) -> Result<(), ProductError> {
        let DeleteProductParams { id, cart } = params;
        self.logger.info(&format!("Deleting product: {}", id));

        // Verify product exists before deleting
        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.repository.delete(id).await?;
        cart.remove_line(id);

        self.logger.info(&format!("Product deleted: {}", id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::product::model::{NewProduct, Product};
    use crate::domain::shared::value_objects::ProductId;
    use bigdecimal::BigDecimal;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn save(&self, product: NewProduct) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
            async fn remove_stock(&self, id: ProductId, quantity: u32) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_product(id: i64) -> Product {
        Product::from_repository(
            ProductId::new(id),
            format!("Test{}", id),
            None,
            None,
            BigDecimal::from(id),
            1,
        )
    }

    #[tokio::test]
    async fn should_delete_product_and_remove_it_from_cart() {
        let deleted = stored_product(1);
        let kept = stored_product(2);
        let mut cart = Cart::new();
        cart.add_item(&deleted, 1);
        cart.add_item(&kept, 2);

        let mut mock_repo = MockProductRepo::new();
        let found = deleted.clone();
        mock_repo
            .expect_get_by_id()
            .withf(|id| *id == ProductId::new(1))
            .returning(move |_| Ok(found.clone()));
        mock_repo
            .expect_delete()
            .withf(|id| *id == ProductId::new(1))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: deleted.id,
                cart: &mut cart,
            })
            .await;

        assert!(result.is_ok());
        assert!(cart.find_line(deleted.id).is_none());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product_id, kept.id);
    }

    #[tokio::test]
    async fn should_succeed_when_product_not_in_cart() {
        let mut cart = Cart::new();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(stored_product(3)));
        mock_repo.expect_delete().returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new(3),
                cart: &mut cart,
            })
            .await;

        assert!(result.is_ok());
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut cart = Cart::new();
        cart.add_item(&stored_product(4), 1);

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new(99),
                cart: &mut cart,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
        assert_eq!(cart.lines().len(), 1);
    }

    #[tokio::test]
    async fn should_keep_cart_line_when_store_delete_fails() {
        let product = stored_product(5);
        let mut cart = Cart::new();
        cart.add_item(&product, 1);

        let mut mock_repo = MockProductRepo::new();
        let found = product.clone();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(found.clone()));
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: product.id,
                cart: &mut cart,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Persistence)
        ));
        assert!(cart.find_line(product.id).is_some());
    }
}
