//! Shopping Cart

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::products::Product;

/// Errors raised while filling a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The accumulated quantity of a product cannot be represented.
    #[error("quantity of {0} overflows")]
    Overflow(String),
}

/// Quantities of products a customer is buying.
///
/// Adding a product that is already in the cart increases its quantity; lines
/// keep the order in which each product was first added.
#[derive(Debug, Default, Clone)]
pub struct ShoppingCart {
    lines: Vec<(Product, Decimal)>,
    index: FxHashMap<Product, usize>,
}

impl ShoppingCart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single unit of a product.
    ///
    /// # Errors
    ///
    /// See [`ShoppingCart::add_item_quantity`].
    pub fn add_item(&mut self, product: Product) -> Result<(), CartError> {
        self.add_item_quantity(product, Decimal::ONE)
    }

    /// Add a quantity of a product. Weighed products may use fractional quantities.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if the product's total quantity cannot be
    /// represented. The cart is left unchanged.
    pub fn add_item_quantity(
        &mut self,
        product: Product,
        quantity: Decimal,
    ) -> Result<(), CartError> {
        if let Some(line) = self
            .index
            .get(&product)
            .and_then(|&idx| self.lines.get_mut(idx))
        {
            line.1 = line
                .1
                .checked_add(quantity)
                .ok_or_else(|| CartError::Overflow(product.name().to_string()))?;

            return Ok(());
        }

        self.index.insert(product.clone(), self.lines.len());
        self.lines.push((product, quantity));

        Ok(())
    }

    /// Quantity of a product in the cart.
    pub fn quantity_of(&self, product: &Product) -> Option<Decimal> {
        self.index
            .get(product)
            .and_then(|&idx| self.lines.get(idx))
            .map(|(_, quantity)| *quantity)
    }

    /// Iterate over products and quantities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Product, Decimal)> {
        self.lines
            .iter()
            .map(|(product, quantity)| (product, *quantity))
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
