use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartLine};
use business::domain::product::input::ProductInput;
use business::domain::product::model::Product;

use crate::commands::error::ErrorResponse;

/// One line of console input.
#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Create {
        product: ProductInput,
    },
    List,
    Get {
        id: i64,
    },
    Delete {
        id: i64,
    },
    AddToCart {
        id: i64,
        #[serde(default = "default_quantity")]
        quantity: u32,
    },
    RemoveFromCart {
        id: i64,
    },
    Cart,
    ClearCart,
    Checkout,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub price: String,
    pub stock: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            details: product.details,
            price: product.price.to_string(),
            stock: product.stock,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CartLineResponse {
    pub product_id: i64,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.value(),
            name: line.name.clone(),
            unit_price: line.unit_price.to_string(),
            quantity: line.quantity,
            line_total: line.line_total().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    pub total_quantity: u64,
    pub total_value: String,
    pub average_value: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineResponse::from).collect(),
            total_quantity: cart.total_quantity(),
            total_value: cart.total_value().round(2).to_string(),
            average_value: cart.average_value().round(2).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Product(ProductResponse),
    Products(Vec<ProductResponse>),
    Cart(CartResponse),
}

/// One line of console output.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reply {
    Ok { data: Payload },
    Error { error: ErrorResponse },
}

impl Reply {
    pub fn ok(data: Payload) -> Self {
        Reply::Ok { data }
    }

    pub fn error(error: ErrorResponse) -> Self {
        Reply::Error { error }
    }
}
