use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// One product in a cart with the quantity the customer wants.
///
/// The product is referenced by id; name and unit price are copied at the
/// time the line was created.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * &BigDecimal::from(self.quantity)
    }
}

/// Shopping cart of a single customer session.
///
/// Holds at most one line per product id, in the order products were first
/// added.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product`, merging into an existing line for
    /// the same product. A zero quantity leaves the cart untouched; a merged
    /// quantity is capped at `u32::MAX`.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price.clone(),
                quantity,
            }),
        }
    }

    /// Drops the line for `product_id`, if any.
    pub fn remove_line(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn find_line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    pub fn line_by_index(&self, index: usize) -> Option<&CartLine> {
        self.lines.get(index)
    }

    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn total_value(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::zero(), |total, line| total + line.line_total())
    }

    /// Average price per unit in the cart, zero when empty.
    pub fn average_value(&self) -> BigDecimal {
        let quantity = self.total_quantity();
        if quantity == 0 {
            return BigDecimal::zero();
        }
        self.total_value() / BigDecimal::from(quantity)
    }
}
