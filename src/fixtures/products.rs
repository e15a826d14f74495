//! Product Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_decimal},
    products::{Product, ProductUnit},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product key -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Unit the product is sold by
    pub unit: ProductUnit,

    /// Unit price (e.g., "1.99")
    pub price: String,
}

impl ProductFixture {
    /// Convert to a product and its unit price.
    ///
    /// # Errors
    ///
    /// Returns an error if the price is not a decimal number.
    pub fn try_into_product(self) -> Result<(Product, Decimal), FixtureError> {
        let price = parse_decimal(&self.price)?;

        Ok((Product::new(self.name, self.unit), price))
    }
}
