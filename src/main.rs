//! Tally: check out a fixture cart and print its receipt

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use tally::{fixtures::Fixture, receipt::printer::ReceiptPrinter};

use crate::config::TallyConfig;

mod config;
mod logging;

fn main() -> anyhow::Result<()> {
    let config = TallyConfig::parse();

    logging::init_subscriber(&config.logging).context("failed to initialise logging")?;

    let fixture = Fixture::with_base_path(&config.fixtures_dir)
        .load_set(&config.fixture)
        .with_context(|| format!("failed to load fixture set `{}`", config.fixture))?;

    let (teller, cart) = fixture.into_teller();

    info!(fixture = %config.fixture, lines = cart.len(), "checking out");

    let receipt = teller.checks_out_articles_from(&cart)?;

    let mut out = io::stdout().lock();

    if config.table {
        receipt.write_to(&mut out)?;
    } else {
        let printer = ReceiptPrinter::new(config.columns);

        write!(out, "{}", printer.print_receipt(&receipt))?;
    }

    out.flush()?;

    Ok(())
}
