//! Fixtures
//!
//! Loads a store from YAML: products with their prices, the offers running on
//! them, and a cart to check out. A fixture set is three files sharing a name,
//! `products/<set>.yml`, `offers/<set>.yml` and `carts/<set>.yml`, under a base
//! directory (`./fixtures` by default).

use std::{fs, path::PathBuf};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{CartError, ShoppingCart},
    catalog::{Catalog, CatalogError, InMemoryCatalog},
    checkout::Teller,
    discounts::DiscountError,
    fixtures::{carts::CartFixture, offers::OffersFixture, products::ProductsFixture},
    offers::OfferRegistry,
    products::Product,
};

pub mod carts;
pub mod offers;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid number format
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Offer configuration rejected by the discount engine
    #[error("Invalid offer {0}: {1}")]
    Offer(String, DiscountError),

    /// Catalog rejected a product
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Cart rejected a line
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Parse a decimal number written as a string, e.g. `"7.49"`.
///
/// The written scale is kept, so `"20.0"` stays `20.0`.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidNumber`] if the string is not a decimal number.
pub fn parse_decimal(s: &str) -> Result<Decimal, FixtureError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidNumber(s.to_string()))
}

/// A store loaded from fixture files.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Fixture key -> product
    products: FxHashMap<String, Product>,

    catalog: InMemoryCatalog,
    offers: OfferRegistry,
    cart: ShoppingCart,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: FxHashMap::default(),
            catalog: InMemoryCatalog::new(),
            offers: OfferRegistry::new(),
            cart: ShoppingCart::new(),
        }
    }

    fn read(&self, category: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));

        debug!(path = %file_path.display(), "loading fixture");

        Ok(fs::read_to_string(&file_path)?)
    }

    /// Load products into the catalog from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a price is invalid.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ProductsFixture = serde_norway::from_str(&self.read("products", name)?)?;

        for (key, product_fixture) in fixture.products {
            let (product, price) = product_fixture.try_into_product()?;

            self.catalog.add_product(product.clone(), price)?;
            self.products.insert(key, product);
        }

        Ok(self)
    }

    /// Load offers from a YAML fixture file
    ///
    /// Offers are registered in file order, so when two entries name the same
    /// product the later one wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, an offer names an
    /// unknown product, an offer type is unsupported, or a required argument
    /// is missing.
    pub fn load_offers(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: OffersFixture = serde_norway::from_str(&self.read("offers", name)?)?;

        for (key, offer_fixture) in fixture.into_entries()? {
            let product = self.product(&offer_fixture.product)?.clone();
            let offer = offer_fixture.try_into_offer(&key, product)?;

            if let Some(replaced) = self.offers.insert(offer) {
                debug!(
                    key = %key,
                    product = replaced.product().name(),
                    replaced = %replaced.offer_type(),
                    "offer replaced by later entry"
                );
            }
        }

        Ok(self)
    }

    /// Load a cart from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a line names an
    /// unknown product, or a quantity is invalid.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: CartFixture = serde_norway::from_str(&self.read("carts", name)?)?;

        for line in fixture.items {
            let product = self.product(&line.product)?.clone();
            let quantity = parse_decimal(&line.quantity)?;

            self.cart.add_item_quantity(product, quantity)?;
        }

        Ok(self)
    }

    /// Load a complete fixture set (products, offers and cart with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::new().load_set(name)
    }

    /// Load a complete fixture set from this fixture's base path.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn load_set(mut self, name: &str) -> Result<Self, FixtureError> {
        self.load_products(name)?
            .load_offers(name)?
            .load_cart(name)?;

        Ok(self)
    }

    /// Get a product by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product, FixtureError> {
        self.products
            .get(key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Catalog of loaded products
    pub fn catalog(&self) -> &InMemoryCatalog {
        &self.catalog
    }

    /// Loaded offers
    pub fn offers(&self) -> &OfferRegistry {
        &self.offers
    }

    /// Loaded cart
    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    /// Split into a teller running the loaded offers, and the loaded cart.
    pub fn into_teller(self) -> (Teller<InMemoryCatalog>, ShoppingCart) {
        (Teller::with_offers(self.catalog, self.offers), self.cart)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
