//! Three for Two
//!
//! Every complete group of three units makes one unit free.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    discounts::{Discount, DiscountError, whole_groups},
    offers::Offer,
    products::Product,
};

const GROUP_SIZE: Decimal = dec!(3);

/// Price a "3 for 2" offer.
///
/// The offer argument is ignored.
///
/// # Errors
///
/// Returns [`DiscountError::Overflow`] if the saving cannot be represented.
pub fn calculate(
    product: &Product,
    quantity: Decimal,
    _offer: &Offer,
    unit_price: Decimal,
) -> Result<Option<Discount>, DiscountError> {
    let free_units = whole_groups(quantity, GROUP_SIZE)?;

    let saving = free_units
        .checked_mul(unit_price)
        .ok_or(DiscountError::Overflow)?;

    Ok(Discount::from_saving(product, "3 for 2".to_string(), saving))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{offers::SpecialOfferType, products::ProductUnit};

    use super::*;

    fn toothbrush_offer() -> (Product, Offer) {
        let toothbrush = Product::new("toothbrush", ProductUnit::Each);
        let offer = Offer::new(SpecialOfferType::ThreeForTwo, toothbrush.clone(), None);

        (toothbrush, offer)
    }

    #[test]
    fn three_units_make_one_free() -> TestResult {
        let (toothbrush, offer) = toothbrush_offer();

        let discount = calculate(&toothbrush, dec!(3), &offer, dec!(0.99))?;

        assert_eq!(
            discount,
            Some(Discount {
                product: toothbrush,
                description: "3 for 2".to_string(),
                amount: dec!(-0.99),
            })
        );

        Ok(())
    }

    #[test]
    fn fewer_than_three_units_never_discount() -> TestResult {
        let (toothbrush, offer) = toothbrush_offer();

        for quantity in [dec!(0), dec!(1), dec!(2), dec!(2.99)] {
            assert!(calculate(&toothbrush, quantity, &offer, dec!(0.99))?.is_none());
        }

        Ok(())
    }

    #[test]
    fn multiples_of_three_free_one_unit_each() -> TestResult {
        let (toothbrush, offer) = toothbrush_offer();

        let discount = calculate(&toothbrush, dec!(9), &offer, dec!(0.99))?;
        assert_eq!(discount.as_ref().map(Discount::amount), Some(dec!(-2.97)));

        let discount = calculate(&toothbrush, dec!(8), &offer, dec!(0.99))?;
        assert_eq!(discount.as_ref().map(Discount::amount), Some(dec!(-1.98)));

        Ok(())
    }

    #[test]
    fn free_product_never_discounts() -> TestResult {
        let (toothbrush, offer) = toothbrush_offer();

        assert!(calculate(&toothbrush, dec!(6), &offer, Decimal::ZERO)?.is_none());

        Ok(())
    }

    #[test]
    fn argument_is_ignored() -> TestResult {
        let toothbrush = Product::new("toothbrush", ProductUnit::Each);
        let offer = Offer::new(
            SpecialOfferType::ThreeForTwo,
            toothbrush.clone(),
            Some(dec!(50)),
        );

        let discount = calculate(&toothbrush, dec!(3), &offer, dec!(0.99))?;

        assert_eq!(discount.as_ref().map(Discount::amount), Some(dec!(-0.99)));

        Ok(())
    }
}
