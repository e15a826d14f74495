//! Percent Discount
//!
//! A percentage off the whole line total. The description echoes the
//! configured percentage exactly as written, so `20.0` reads `20.0% off`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    discounts::{Discount, DiscountError, required_argument},
    offers::Offer,
    products::Product,
};

const ONE_HUNDRED: Decimal = dec!(100);

/// Price a percentage discount offer.
///
/// # Errors
///
/// - [`DiscountError::InvalidOfferArgument`]: the offer has no percentage.
/// - [`DiscountError::Overflow`]: the saving cannot be represented.
pub fn calculate(
    product: &Product,
    quantity: Decimal,
    offer: &Offer,
    unit_price: Decimal,
) -> Result<Option<Discount>, DiscountError> {
    let percent = required_argument(offer)?;

    let saving = quantity
        .checked_mul(unit_price)
        .and_then(|line_total| line_total.checked_mul(percent))
        .and_then(|scaled| scaled.checked_div(ONE_HUNDRED))
        .ok_or(DiscountError::Overflow)?;

    Ok(Discount::from_saving(
        product,
        format!("{percent}% off"),
        saving,
    ))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{offers::SpecialOfferType, products::ProductUnit};

    use super::*;

    fn offer_for(product: &Product, percent: Decimal) -> Offer {
        Offer::new(
            SpecialOfferType::PercentDiscount,
            product.clone(),
            Some(percent),
        )
    }

    #[test]
    fn twenty_percent_off_apples() -> TestResult {
        let apples = Product::new("apples", ProductUnit::Kilo);
        let offer = offer_for(&apples, dec!(20.0));

        let discount = calculate(&apples, dec!(3), &offer, dec!(1.99))?;

        assert_eq!(
            discount.as_ref().map(Discount::description),
            Some("20.0% off")
        );
        assert_eq!(discount.as_ref().map(Discount::amount), Some(dec!(-1.194)));

        Ok(())
    }

    #[test]
    fn ten_percent_off_single_bag_of_rice() -> TestResult {
        let rice = Product::new("rice", ProductUnit::Each);
        let offer = offer_for(&rice, dec!(10.0));

        let discount = calculate(&rice, dec!(1), &offer, dec!(2.49))?;

        assert_eq!(
            discount.as_ref().map(Discount::description),
            Some("10.0% off")
        );
        assert_eq!(discount.as_ref().map(Discount::amount), Some(dec!(-0.249)));

        Ok(())
    }

    #[test]
    fn applies_to_fractional_weights() -> TestResult {
        let apples = Product::new("apples", ProductUnit::Kilo);
        let offer = offer_for(&apples, dec!(20));

        let discount = calculate(&apples, dec!(0.5), &offer, dec!(1.99))?;

        assert_eq!(
            discount.as_ref().map(Discount::description),
            Some("20% off")
        );
        assert_eq!(discount.as_ref().map(Discount::amount), Some(dec!(-0.199)));

        Ok(())
    }

    #[test]
    fn zero_inputs_never_discount() -> TestResult {
        let apples = Product::new("apples", ProductUnit::Kilo);

        let zero_percent = offer_for(&apples, dec!(0));
        assert!(calculate(&apples, dec!(3), &zero_percent, dec!(1.99))?.is_none());

        let twenty_percent = offer_for(&apples, dec!(20));
        assert!(calculate(&apples, dec!(0), &twenty_percent, dec!(1.99))?.is_none());
        assert!(calculate(&apples, dec!(3), &twenty_percent, dec!(0))?.is_none());

        Ok(())
    }

    #[test]
    fn percentage_is_not_clamped() -> TestResult {
        let apples = Product::new("apples", ProductUnit::Kilo);
        let offer = offer_for(&apples, dec!(150));

        let discount = calculate(&apples, dec!(2), &offer, dec!(1.00))?;

        assert_eq!(discount.as_ref().map(Discount::amount), Some(dec!(-3)));

        Ok(())
    }

    #[test]
    fn missing_percentage_is_invalid() {
        let apples = Product::new("apples", ProductUnit::Kilo);
        let offer = Offer::new(SpecialOfferType::PercentDiscount, apples.clone(), None);

        assert_eq!(
            calculate(&apples, dec!(3), &offer, dec!(1.99)),
            Err(DiscountError::InvalidOfferArgument(
                SpecialOfferType::PercentDiscount
            ))
        );
    }
}
