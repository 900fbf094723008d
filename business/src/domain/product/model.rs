use bigdecimal::BigDecimal;

use super::error_code::ValidationErrors;
use super::input::ProductInput;
use super::validation;
use crate::domain::shared::value_objects::ProductId;

/// Product that passed validation but has no identifier yet.
///
/// Can only be built from a `ProductInput` that satisfies every rule, so a
/// store never receives an unchecked product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    description: Option<String>,
    details: Option<String>,
    price: BigDecimal,
    stock: i32,
}

impl NewProduct {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn price(&self) -> &BigDecimal {
        &self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }
}

impl TryFrom<&ProductInput> for NewProduct {
    type Error = ValidationErrors;

    fn try_from(input: &ProductInput) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();
        let name = validation::parse_name(input.name.as_deref(), &mut errors);
        let price = validation::parse_price(input.price.as_deref(), &mut errors);
        let stock = validation::parse_stock(input.stock.as_deref(), &mut errors);

        match (name, price, stock) {
            (Some(name), Some(price), Some(stock)) if errors.is_empty() => Ok(Self {
                name,
                description: optional_text(input.description.as_deref()),
                details: optional_text(input.details.as_deref()),
                price,
                stock,
            }),
            _ => Err(errors),
        }
    }
}

fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Catalog entry as held by the product store.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
}

impl Product {
    /// Attaches the identifier the store assigned to a validated product.
    pub fn from_new(id: ProductId, product: NewProduct) -> Self {
        Self {
            id,
            name: product.name,
            description: product.description,
            details: product.details,
            price: product.price,
            stock: product.stock,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: Option<String>,
        details: Option<String>,
        price: BigDecimal,
        stock: i32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            details,
            price,
            stock,
        }
    }
}
