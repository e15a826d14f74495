//! Discounts
//!
//! The discount engine. [`resolve`] maps an offer type to the rule that prices
//! it, and each rule turns a product quantity and unit price into at most one
//! [`Discount`] line. Rules hold no state, so evaluating the same inputs twice
//! always gives the same answer.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    offers::{Offer, SpecialOfferType},
    products::Product,
};

pub mod fixed_bundle;
pub mod percent_discount;
pub mod three_for_two;

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// The offer type is not one the engine can price.
    #[error("no discount strategy for offer type: {0}")]
    UnsupportedOfferType(String),

    /// The offer type needs an argument but the offer has none.
    #[error("offer type {0} requires an argument")]
    InvalidOfferArgument(SpecialOfferType),

    /// Intermediate arithmetic left the representable decimal range.
    #[error("discount calculation overflowed")]
    Overflow,
}

/// A single discount line on a receipt.
///
/// The amount is always strictly negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discount {
    product: Product,
    description: String,
    amount: Decimal,
}

impl Discount {
    pub(crate) fn new(product: Product, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            product,
            description: description.into(),
            amount,
        }
    }

    /// Build a discount from the positive saving it represents.
    ///
    /// Returns `None` when there is no saving.
    pub(crate) fn from_saving(
        product: &Product,
        description: String,
        saving: Decimal,
    ) -> Option<Self> {
        (saving > Decimal::ZERO).then(|| Self::new(product.clone(), description, -saving))
    }

    /// Discounted product
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Human readable description, e.g. `3 for 2`
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Discount amount (negative)
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Signature shared by every discount rule.
pub type Rule = fn(&Product, Decimal, &Offer, Decimal) -> Result<Option<Discount>, DiscountError>;

/// A pricing rule selected for an offer type.
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    offer_type: SpecialOfferType,
    rule: Rule,
}

impl Strategy {
    /// Offer type this strategy prices.
    pub fn offer_type(&self) -> SpecialOfferType {
        self.offer_type
    }

    /// Price an offer for `quantity` units at `unit_price`.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::InvalidOfferArgument`]: the offer is missing a required argument.
    /// - [`DiscountError::Overflow`]: the inputs are too large to price.
    pub fn calculate(
        &self,
        product: &Product,
        quantity: Decimal,
        offer: &Offer,
        unit_price: Decimal,
    ) -> Result<Option<Discount>, DiscountError> {
        (self.rule)(product, quantity, offer, unit_price)
    }
}

/// Resolve the strategy for an offer type.
pub fn resolve(offer_type: SpecialOfferType) -> Strategy {
    let rule: Rule = match offer_type {
        SpecialOfferType::ThreeForTwo => three_for_two::calculate,
        SpecialOfferType::PercentDiscount => percent_discount::calculate,
        SpecialOfferType::TwoForAmount => fixed_bundle::two_for_amount,
        SpecialOfferType::FiveForAmount => fixed_bundle::five_for_amount,
    };

    Strategy { offer_type, rule }
}

/// Price an offer using the strategy for its type.
///
/// # Errors
///
/// See [`Strategy::calculate`].
pub fn calculate(
    product: &Product,
    quantity: Decimal,
    offer: &Offer,
    unit_price: Decimal,
) -> Result<Option<Discount>, DiscountError> {
    resolve(offer.offer_type()).calculate(product, quantity, offer, unit_price)
}

/// The offer's argument, or `InvalidOfferArgument` when it has none.
fn required_argument(offer: &Offer) -> Result<Decimal, DiscountError> {
    offer
        .argument()
        .ok_or(DiscountError::InvalidOfferArgument(offer.offer_type()))
}

/// Whole number of `size` groups in `quantity`.
///
/// The remainder is taken off before dividing, so the division is exact and a
/// quantity just short of a group boundary never rounds up into it.
fn whole_groups(quantity: Decimal, size: Decimal) -> Result<Decimal, DiscountError> {
    let remainder = quantity
        .checked_rem(size)
        .ok_or(DiscountError::Overflow)?;

    quantity
        .checked_sub(remainder)
        .and_then(|grouped| grouped.checked_div(size))
        .ok_or(DiscountError::Overflow)
}
