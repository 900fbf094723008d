use std::sync::Arc;

use localization::static_translator::StaticTranslator;
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryInMemory;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update_stocks::UpdateProductStocksUseCaseImpl;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::DeleteProductUseCase;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::product::use_cases::update_stocks::UpdateProductStocksUseCase;
use business::domain::translator::Translator;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub create_product: Arc<dyn CreateProductUseCase>,
    pub get_all_products: Arc<dyn GetAllProductsUseCase>,
    pub get_product_by_id: Arc<dyn GetProductByIdUseCase>,
    pub delete_product: Arc<dyn DeleteProductUseCase>,
    pub update_product_stocks: Arc<dyn UpdateProductStocksUseCase>,
    pub translator: Arc<dyn Translator>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger::new("product"));

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryInMemory::new());
        let translator = Arc::new(StaticTranslator::new(config.locale));

        // Product use cases
        let create_product = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_stocks = Arc::new(UpdateProductStocksUseCaseImpl {
            repository: product_repository,
            logger,
        });

        Self {
            create_product,
            get_all_products,
            get_product_by_id,
            delete_product,
            update_product_stocks,
            translator,
        }
    }
}
