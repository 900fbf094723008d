use serde::{Deserialize, Serialize};

use super::model::Product;

/// Product fields exactly as submitted by an administrator.
///
/// Nothing here has been checked; every field may be absent, blank or
/// malformed. Run it through validation to get a `NewProduct`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id.value()),
            name: Some(product.name.clone()),
            description: product.description.clone(),
            details: product.details.clone(),
            price: Some(product.price.to_string()),
            stock: Some(product.stock.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_missing_json_fields_as_absent() {
        let input: ProductInput = serde_json::from_str(r#"{"name": "Lamp"}"#).unwrap();

        assert_eq!(input.name.as_deref(), Some("Lamp"));
        assert!(input.price.is_none());
        assert!(input.stock.is_none());
        assert!(input.id.is_none());
    }
}
