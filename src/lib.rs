//! Tally
//!
//! Tally prices a supermarket shopping cart against a product catalog, applies
//! the special offers running on its products and produces a receipt.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tally::{
//!     cart::ShoppingCart,
//!     catalog::{Catalog, InMemoryCatalog},
//!     checkout::Teller,
//!     offers::SpecialOfferType,
//!     products::{Product, ProductUnit},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let toothbrush = Product::new("toothbrush", ProductUnit::Each);
//!
//! let mut catalog = InMemoryCatalog::new();
//! catalog.add_product(toothbrush.clone(), dec!(0.99))?;
//!
//! let mut teller = Teller::new(catalog);
//! teller.add_special_offer(SpecialOfferType::ThreeForTwo, toothbrush.clone(), None);
//!
//! let mut cart = ShoppingCart::new();
//! cart.add_item_quantity(toothbrush, dec!(3))?;
//!
//! let receipt = teller.checks_out_articles_from(&cart)?;
//!
//! assert_eq!(receipt.total(), dec!(1.98));
//! # Ok(())
//! # }
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod discounts;
pub mod fixtures;
pub mod offers;
pub mod products;
pub mod receipt;
