//! Receipt

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{discounts::Discount, products::Product, receipt::printer::format_price};

pub mod printer;

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,

    /// A line total or running total cannot be represented.
    #[error("receipt amount overflows")]
    Overflow,
}

/// One priced line of a receipt, before discounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptItem {
    product: Product,
    quantity: Decimal,
    unit_price: Decimal,
    line_total: Decimal,
}

impl ReceiptItem {
    /// Create a receipt line, pricing `quantity` units at `unit_price`.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Overflow`] if the line total cannot be represented.
    pub fn new(
        product: Product,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<Self, ReceiptError> {
        let line_total = quantity
            .checked_mul(unit_price)
            .ok_or(ReceiptError::Overflow)?;

        Ok(Self {
            product,
            quantity,
            unit_price,
            line_total,
        })
    }

    /// Purchased product
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Purchased quantity
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Catalog price per unit
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Quantity multiplied by unit price
    pub fn line_total(&self) -> Decimal {
        self.line_total
    }
}

/// Final receipt for a checked out cart.
///
/// Items appear in cart order and discounts in the order their offers were
/// evaluated. Only checkout appends to a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Receipt {
    items: Vec<ReceiptItem>,
    discounts: Vec<Discount>,
    subtotal: Decimal,
    discount_total: Decimal,
    total: Decimal,
}

impl Receipt {
    pub(crate) fn add_item(&mut self, item: ReceiptItem) -> Result<(), ReceiptError> {
        let subtotal = self.subtotal.checked_add(item.line_total());
        let total = self.total.checked_add(item.line_total());

        let (Some(subtotal), Some(total)) = (subtotal, total) else {
            return Err(ReceiptError::Overflow);
        };

        self.subtotal = subtotal;
        self.total = total;
        self.items.push(item);

        Ok(())
    }

    pub(crate) fn add_discount(&mut self, discount: Discount) -> Result<(), ReceiptError> {
        let discount_total = self.discount_total.checked_add(discount.amount());
        let total = self.total.checked_add(discount.amount());

        let (Some(discount_total), Some(total)) = (discount_total, total) else {
            return Err(ReceiptError::Overflow);
        };

        self.discount_total = discount_total;
        self.total = total;
        self.discounts.push(discount);

        Ok(())
    }

    /// Priced lines, in cart order.
    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    /// Discount lines, in evaluation order.
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Sum of line totals before any discount.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Total saved by discounts, as a positive amount.
    pub fn savings(&self) -> Decimal {
        -self.discount_total
    }

    /// Amount to pay: line totals plus (negative) discounts.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Writes the receipt as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Quantity", "Unit Price", "Amount"]);

        for (idx, item) in self.items.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                item.product().name().to_string(),
                format!("{} {}", item.quantity(), item.product().unit()),
                format_price(item.unit_price()),
                format_price(item.line_total()),
            ]);
        }

        for discount in &self.discounts {
            builder.push_record([
                String::new(),
                format!("{} ({})", discount.description(), discount.product().name()),
                String::new(),
                String::new(),
                format_price(discount.amount()),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;

        let subtotal = format_price(self.subtotal());
        let savings = format_price(self.savings());
        let total = format_price(self.total());

        writeln!(out, " Subtotal: {subtotal:>10}").map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Savings:  {savings:>10}").map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " \x1b[1mTotal:\x1b[0m    {total:>10}").map_err(|_err| ReceiptError::IO)?;

        Ok(())
    }
}
