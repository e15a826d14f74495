//! Checkout
//!
//! Prices a cart against a catalog and applies the active offers. Items are
//! priced first, in cart order; offers are then evaluated for each cart line
//! that has one, also in cart order.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    cart::ShoppingCart,
    catalog::{Catalog, CatalogError},
    discounts::{DiscountError, resolve},
    offers::{OfferRegistry, SpecialOfferType},
    products::Product,
    receipt::{Receipt, ReceiptError, ReceiptItem},
};

/// Errors that abort a checkout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// A cart product could not be priced.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An offer could not be evaluated.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// A line or running total overflowed.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

/// Check out a cart, producing a receipt.
///
/// Nothing is returned unless every line is priced and every offer evaluated,
/// so callers never see a partially discounted receipt.
///
/// # Errors
///
/// - [`CheckoutError::Catalog`]: a product is not in the catalog, or the
///   catalog cannot be reached.
/// - [`CheckoutError::Discount`]: an offer is missing its argument or cannot
///   be priced.
/// - [`CheckoutError::Receipt`]: a line total or the receipt total overflows.
#[tracing::instrument(skip_all, fields(lines = cart.len(), offers = offers.len()))]
pub fn check_out<C>(
    cart: &ShoppingCart,
    catalog: &C,
    offers: &OfferRegistry,
) -> Result<Receipt, CheckoutError>
where
    C: Catalog + ?Sized,
{
    let mut receipt = Receipt::default();

    for (product, quantity) in cart.iter() {
        let unit_price = catalog.unit_price(product)?;

        receipt.add_item(ReceiptItem::new(product.clone(), quantity, unit_price)?)?;
    }

    let priced: Vec<_> = receipt
        .items()
        .iter()
        .filter_map(|item| {
            offers
                .get(item.product())
                .map(|offer| (item.quantity(), item.unit_price(), offer))
        })
        .collect();

    for (quantity, unit_price, offer) in priced {
        let product = offer.product();

        let discount = resolve(offer.offer_type()).calculate(product, quantity, offer, unit_price)?;

        if let Some(discount) = discount {
            debug!(
                product = product.name(),
                description = discount.description(),
                amount = %discount.amount(),
                "applied offer"
            );

            receipt.add_discount(discount)?;
        } else {
            trace!(
                product = product.name(),
                offer_type = %offer.offer_type(),
                %quantity,
                "offer did not apply"
            );
        }
    }

    debug!(total = %receipt.total(), "checked out");

    Ok(receipt)
}

/// The till: a catalog plus the offers currently running.
#[derive(Debug)]
pub struct Teller<C: Catalog> {
    catalog: C,
    offers: OfferRegistry,
}

impl<C: Catalog> Teller<C> {
    /// Create a teller with no offers.
    pub fn new(catalog: C) -> Self {
        Self::with_offers(catalog, OfferRegistry::new())
    }

    /// Create a teller with a pre-built set of offers.
    pub fn with_offers(catalog: C, offers: OfferRegistry) -> Self {
        Self { catalog, offers }
    }

    /// Run an offer on a product, replacing any offer it already has.
    pub fn add_special_offer(
        &mut self,
        offer_type: SpecialOfferType,
        product: Product,
        argument: Option<Decimal>,
    ) {
        if let Some(replaced) = self.offers.add_special_offer(offer_type, product, argument) {
            debug!(
                product = replaced.product().name(),
                replaced = %replaced.offer_type(),
                "replaced special offer"
            );
        }
    }

    /// The catalog
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Mutable access to the catalog, for adding products.
    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    /// Offers currently running
    pub fn offers(&self) -> &OfferRegistry {
        &self.offers
    }

    /// Check out a cart.
    ///
    /// # Errors
    ///
    /// See [`check_out`].
    pub fn checks_out_articles_from(&self, cart: &ShoppingCart) -> Result<Receipt, CheckoutError> {
        check_out(cart, &self.catalog, &self.offers)
    }
}
