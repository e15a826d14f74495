//! Catalog
//!
//! Unit prices for products. Checkout is generic over [`Catalog`] so the
//! discount engine never depends on which store is wired in.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::products::Product;

/// Errors raised by a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The product has no price in this catalog.
    #[error("product not in catalog: {0}")]
    UnknownProduct(String),

    /// The backing store cannot be reached.
    #[error("catalog backing store unavailable: {0}")]
    Unavailable(&'static str),
}

/// A source of unit prices.
pub trait Catalog {
    /// Register (or re-price) a product.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the backing store rejects the write.
    fn add_product(&mut self, product: Product, price: Decimal) -> Result<(), CatalogError>;

    /// Unit price of a product.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnknownProduct`]: the product was never added.
    /// - [`CatalogError::Unavailable`]: the backing store cannot be reached.
    fn unit_price(&self, product: &Product) -> Result<Decimal, CatalogError>;
}

/// Catalog held entirely in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    prices: FxHashMap<Product, Decimal>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of priced products.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn add_product(&mut self, product: Product, price: Decimal) -> Result<(), CatalogError> {
        self.prices.insert(product, price);

        Ok(())
    }

    fn unit_price(&self, product: &Product) -> Result<Decimal, CatalogError> {
        self.prices
            .get(product)
            .copied()
            .ok_or_else(|| CatalogError::UnknownProduct(product.name().to_string()))
    }
}

/// Catalog backed by the store's product database.
///
/// No database is wired into this crate yet, so every call fails with
/// [`CatalogError::Unavailable`]. Tests and the CLI use [`InMemoryCatalog`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SupermarketCatalog;

impl Catalog for SupermarketCatalog {
    fn add_product(&mut self, _product: Product, _price: Decimal) -> Result<(), CatalogError> {
        Err(CatalogError::Unavailable("product database is not connected"))
    }

    fn unit_price(&self, _product: &Product) -> Result<Decimal, CatalogError> {
        Err(CatalogError::Unavailable("product database is not connected"))
    }
}
