//! Offer Fixtures

use serde::Deserialize;
use serde_norway::Mapping;

use crate::{
    discounts::DiscountError,
    fixtures::{FixtureError, parse_decimal},
    offers::{Offer, SpecialOfferType},
    products::Product,
};

/// Wrapper for offers in YAML
#[derive(Debug, Deserialize)]
pub struct OffersFixture {
    /// Map of offer key -> offer fixture, in file order
    pub offers: Mapping,
}

impl OffersFixture {
    /// Offer keys and fixtures in the order they appear in the file.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is not a string or an entry is not an offer.
    pub fn into_entries(self) -> Result<Vec<(String, OfferFixture)>, FixtureError> {
        self.offers
            .into_iter()
            .map(|(key, value)| -> Result<_, FixtureError> {
                let key: String = serde_norway::from_value(key)?;
                let offer: OfferFixture = serde_norway::from_value(value)?;

                Ok((key, offer))
            })
            .collect()
    }
}

/// Offer fixture from YAML
#[derive(Debug, Deserialize)]
pub struct OfferFixture {
    /// Product fixture key the offer applies to
    pub product: String,

    /// Offer type, e.g. `three_for_two`
    #[serde(rename = "type")]
    pub offer_type: String,

    /// Percentage or bundle price, as written (e.g. "20.0", "7.49")
    #[serde(default)]
    pub argument: Option<String>,
}

impl OfferFixture {
    /// Convert to an [`Offer`] on `product`.
    ///
    /// # Errors
    ///
    /// - [`FixtureError::Offer`]: the offer type is unsupported, or a required
    ///   argument is missing.
    /// - [`FixtureError::InvalidNumber`]: the argument is not a decimal number.
    pub fn try_into_offer(self, key: &str, product: Product) -> Result<Offer, FixtureError> {
        let offer_type = self
            .offer_type
            .parse::<SpecialOfferType>()
            .map_err(|err| FixtureError::Offer(key.to_string(), err))?;

        let argument = self.argument.as_deref().map(parse_decimal).transpose()?;

        if offer_type.requires_argument() && argument.is_none() {
            return Err(FixtureError::Offer(
                key.to_string(),
                DiscountError::InvalidOfferArgument(offer_type),
            ));
        }

        Ok(Offer::new(offer_type, product, argument))
    }
}
