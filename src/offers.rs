//! Offers
//!
//! Special offers configured against products, and the registry checkout
//! consults. A product has at most one active offer; registering another
//! replaces it.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::{discounts::DiscountError, products::Product};

/// Kinds of special offer the discount engine knows how to price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialOfferType {
    /// Buy three, pay for two.
    ThreeForTwo,

    /// Percentage off the line total. The argument is the percentage.
    PercentDiscount,

    /// Two units for a fixed amount. The argument is the bundle price.
    TwoForAmount,

    /// Five units for a fixed amount. The argument is the bundle price.
    FiveForAmount,
}

impl SpecialOfferType {
    /// Whether offers of this type need an argument.
    pub fn requires_argument(self) -> bool {
        !matches!(self, SpecialOfferType::ThreeForTwo)
    }

    /// Configuration name of this offer type.
    pub fn as_str(self) -> &'static str {
        match self {
            SpecialOfferType::ThreeForTwo => "three_for_two",
            SpecialOfferType::PercentDiscount => "percent_discount",
            SpecialOfferType::TwoForAmount => "two_for_amount",
            SpecialOfferType::FiveForAmount => "five_for_amount",
        }
    }
}

impl fmt::Display for SpecialOfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecialOfferType {
    type Err = DiscountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "three_for_two" => Ok(SpecialOfferType::ThreeForTwo),
            "percent_discount" => Ok(SpecialOfferType::PercentDiscount),
            "two_for_amount" => Ok(SpecialOfferType::TwoForAmount),
            "five_for_amount" => Ok(SpecialOfferType::FiveForAmount),
            other => Err(DiscountError::UnsupportedOfferType(other.to_string())),
        }
    }
}

/// A special offer bound to one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    offer_type: SpecialOfferType,
    product: Product,
    argument: Option<Decimal>,
}

impl Offer {
    /// Create a new offer.
    pub fn new(offer_type: SpecialOfferType, product: Product, argument: Option<Decimal>) -> Self {
        Self {
            offer_type,
            product,
            argument,
        }
    }

    /// Offer type
    pub fn offer_type(&self) -> SpecialOfferType {
        self.offer_type
    }

    /// Product the offer applies to
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Offer argument, if any
    pub fn argument(&self) -> Option<Decimal> {
        self.argument
    }
}

/// Active offers keyed by product.
#[derive(Debug, Default, Clone)]
pub struct OfferRegistry {
    offers: FxHashMap<Product, Offer>,
}

impl OfferRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an offer, replacing any previous offer for the same product.
    ///
    /// Returns the replaced offer.
    pub fn insert(&mut self, offer: Offer) -> Option<Offer> {
        self.offers.insert(offer.product().clone(), offer)
    }

    /// Build and register an offer for a product.
    pub fn add_special_offer(
        &mut self,
        offer_type: SpecialOfferType,
        product: Product,
        argument: Option<Decimal>,
    ) -> Option<Offer> {
        self.insert(Offer::new(offer_type, product, argument))
    }

    /// The active offer for a product.
    pub fn get(&self, product: &Product) -> Option<&Offer> {
        self.offers.get(product)
    }

    /// Number of active offers.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Check if there are no active offers.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
