//! Fixed Bundle
//!
//! "K for amount" offers: every complete bundle of K units costs the offer
//! argument instead of K times the unit price. Units left over after the last
//! complete bundle keep their full price.

use rust_decimal::Decimal;

use crate::{
    discounts::{Discount, DiscountError, required_argument, whole_groups},
    offers::Offer,
    products::Product,
};

/// Price a "2 for amount" offer.
///
/// # Errors
///
/// See [`calculate`].
pub fn two_for_amount(
    product: &Product,
    quantity: Decimal,
    offer: &Offer,
    unit_price: Decimal,
) -> Result<Option<Discount>, DiscountError> {
    calculate(2, product, quantity, offer, unit_price)
}

/// Price a "5 for amount" offer.
///
/// # Errors
///
/// See [`calculate`].
pub fn five_for_amount(
    product: &Product,
    quantity: Decimal,
    offer: &Offer,
    unit_price: Decimal,
) -> Result<Option<Discount>, DiscountError> {
    calculate(5, product, quantity, offer, unit_price)
}

/// Price a bundle of `bundle_size` units sold for the offer argument.
///
/// No discount is produced when the bundle price is not cheaper than buying
/// the units separately, however many units are bought.
///
/// # Errors
///
/// - [`DiscountError::InvalidOfferArgument`]: the offer has no bundle price.
/// - [`DiscountError::Overflow`]: the saving cannot be represented.
pub fn calculate(
    bundle_size: u32,
    product: &Product,
    quantity: Decimal,
    offer: &Offer,
    unit_price: Decimal,
) -> Result<Option<Discount>, DiscountError> {
    let bundle_price = required_argument(offer)?;
    let size = Decimal::from(bundle_size);

    let bundles = whole_groups(quantity, size)?;

    let saving = size
        .checked_mul(unit_price)
        .and_then(|full_price| full_price.checked_sub(bundle_price))
        .and_then(|saving_per_bundle| saving_per_bundle.checked_mul(bundles))
        .ok_or(DiscountError::Overflow)?;

    Ok(Discount::from_saving(
        product,
        format!("{bundle_size} for {bundle_price}"),
        saving,
    ))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::{offers::SpecialOfferType, products::ProductUnit};

    use super::*;

    fn toothpaste_offer() -> (Product, Offer) {
        let toothpaste = Product::new("toothpaste", ProductUnit::Each);
        let offer = Offer::new(
            SpecialOfferType::FiveForAmount,
            toothpaste.clone(),
            Some(dec!(7.49)),
        );

        (toothpaste, offer)
    }

    #[test]
    fn five_for_amount_single_bundle() -> TestResult {
        let (toothpaste, offer) = toothpaste_offer();

        let discount = five_for_amount(&toothpaste, dec!(5), &offer, dec!(1.79))?;

        assert_eq!(
            discount.as_ref().map(Discount::description),
            Some("5 for 7.49")
        );
        assert_eq!(discount.as_ref().map(Discount::amount), Some(dec!(-1.46)));

        Ok(())
    }

    #[test]
    fn five_for_amount_needs_a_complete_bundle() -> TestResult {
        let (toothpaste, offer) = toothpaste_offer();

        assert!(five_for_amount(&toothpaste, dec!(4), &offer, dec!(1.79))?.is_none());

        Ok(())
    }

    #[test]
    fn five_for_amount_leaves_remainder_at_full_price() -> TestResult {
        let (toothpaste, offer) = toothpaste_offer();

        let discount = five_for_amount(&toothpaste, dec!(9), &offer, dec!(1.79))?;
        assert_eq!(discount.as_ref().map(Discount::amount), Some(dec!(-1.46)));

        let discount = five_for_amount(&toothpaste, dec!(10), &offer, dec!(1.79))?;
        assert_eq!(discount.as_ref().map(Discount::amount), Some(dec!(-2.92)));

        Ok(())
    }

    #[test]
    fn two_for_amount_tomatoes() -> TestResult {
        let tomatoes = Product::new("cherry tomatoes", ProductUnit::Each);
        let offer = Offer::new(
            SpecialOfferType::TwoForAmount,
            tomatoes.clone(),
            Some(dec!(0.99)),
        );

        let discount = two_for_amount(&tomatoes, dec!(2), &offer, dec!(0.69))?;

        assert_eq!(
            discount.as_ref().map(Discount::description),
            Some("2 for 0.99")
        );
        assert_eq!(discount.as_ref().map(Discount::amount), Some(dec!(-0.39)));

        Ok(())
    }

    #[test]
    fn bundle_price_not_cheaper_never_discounts() -> TestResult {
        let tomatoes = Product::new("cherry tomatoes", ProductUnit::Each);

        for bundle_price in [dec!(1.38), dec!(2.00)] {
            let offer = Offer::new(
                SpecialOfferType::TwoForAmount,
                tomatoes.clone(),
                Some(bundle_price),
            );

            for quantity in [dec!(2), dec!(4), dec!(100)] {
                assert!(
                    two_for_amount(&tomatoes, quantity, &offer, dec!(0.69))?.is_none(),
                    "bundle at {bundle_price} discounted {quantity} units"
                );
            }
        }

        Ok(())
    }

    #[test]
    fn missing_bundle_price_is_invalid() {
        let (toothpaste, _) = toothpaste_offer();
        let offer = Offer::new(SpecialOfferType::FiveForAmount, toothpaste.clone(), None);

        assert_eq!(
            five_for_amount(&toothpaste, dec!(5), &offer, dec!(1.79)),
            Err(DiscountError::InvalidOfferArgument(
                SpecialOfferType::FiveForAmount
            ))
        );
    }
}
