//! Receipt Printer
//!
//! Plain text layout for till receipts: names on the left, amounts right
//! aligned to a fixed column width.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    discounts::Discount,
    receipt::{Receipt, ReceiptItem},
};

/// Default receipt width in characters.
pub const DEFAULT_COLUMNS: usize = 40;

/// Formats a price with two decimal places, rounding half away from zero.
pub fn format_price(price: Decimal) -> String {
    let mut rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    rounded.to_string()
}

/// Renders receipts as fixed width text.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptPrinter {
    columns: usize,
}

impl Default for ReceiptPrinter {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl ReceiptPrinter {
    /// Create a printer for the given line width.
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }

    /// Line width in characters
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Render a whole receipt: items, then discounts, then the total.
    pub fn print_receipt(&self, receipt: &Receipt) -> String {
        let mut result = String::new();

        for item in receipt.items() {
            result.push_str(&self.print_receipt_item(item));
        }

        for discount in receipt.discounts() {
            result.push_str(&self.print_discount(discount));
        }

        result.push('\n');
        result.push_str(&self.present_total(receipt));

        result
    }

    /// Render one item. Quantities other than one get a second line with the
    /// unit price and quantity.
    pub fn print_receipt_item(&self, item: &ReceiptItem) -> String {
        let total = format_price(item.line_total());
        let mut line = self.format_line(item.product().name(), &total);

        if item.quantity() != Decimal::ONE {
            line.push_str(&format!(
                "  {} * {}\n",
                format_price(item.unit_price()),
                item.quantity()
            ));
        }

        line
    }

    /// Render one discount line.
    pub fn print_discount(&self, discount: &Discount) -> String {
        let name = format!("{} ({})", discount.description(), discount.product().name());

        self.format_line(&name, &format_price(discount.amount()))
    }

    /// Render the total line.
    pub fn present_total(&self, receipt: &Receipt) -> String {
        self.format_line("Total: ", &format_price(receipt.total()))
    }

    fn format_line(&self, name: &str, value: &str) -> String {
        let used = name.chars().count() + value.chars().count();
        let padding = self.columns.saturating_sub(used);

        format!("{name}{}{value}\n", " ".repeat(padding))
    }
}
