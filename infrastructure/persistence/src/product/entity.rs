use bigdecimal::BigDecimal;

use business::domain::product::model::{NewProduct, Product};
use business::domain::shared::value_objects::ProductId;

/// Stored row of the product table.
#[derive(Debug, Clone)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl ProductEntity {
    pub fn from_new(id: i64, product: &NewProduct) -> Self {
        Self {
            id,
            name: product.name().to_string(),
            description: product.description().map(str::to_string),
            details: product.details().map(str::to_string),
            price: product.price().clone(),
            quantity: product.stock(),
        }
    }

    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.description,
            self.details,
            self.price,
            self.quantity,
        )
    }
}
