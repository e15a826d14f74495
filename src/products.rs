//! Products

use std::fmt;

use serde::Deserialize;

/// Unit of measure a product is sold by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductUnit {
    /// Sold per item
    Each,

    /// Sold by weight, per kilo
    Kilo,
}

impl fmt::Display for ProductUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductUnit::Each => f.write_str("each"),
            ProductUnit::Kilo => f.write_str("kilo"),
        }
    }
}

/// Product
///
/// Identity is the pair of name and unit: two products with the same name but
/// a different unit are distinct for catalog, offer and cart lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    name: String,
    unit: ProductUnit,
}

impl Product {
    /// Create a new product.
    pub fn new(name: impl Into<String>, unit: ProductUnit) -> Self {
        Self {
            name: name.into(),
            unit,
        }
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit of measure
    pub fn unit(&self) -> ProductUnit {
        self.unit
    }
}
