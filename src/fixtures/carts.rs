//! Cart Fixtures

use serde::Deserialize;

/// Wrapper for a cart in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Cart lines, in the order they are added
    pub items: Vec<CartLineFixture>,
}

/// A product and the quantity added to the cart
#[derive(Debug, Deserialize)]
pub struct CartLineFixture {
    /// Product fixture key
    pub product: String,

    /// Quantity added (e.g., "3" or "0.75")
    pub quantity: String,
}
