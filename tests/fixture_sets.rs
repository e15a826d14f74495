//! Checks out the fixture sets shipped in `fixtures/`.

use rust_decimal_macros::dec;
use testresult::TestResult;

use tally::{discounts::Discount, fixtures::Fixture};

#[test]
fn default_set() -> TestResult {
    let (teller, cart) = Fixture::from_set("default")?.into_teller();

    let receipt = teller.checks_out_articles_from(&cart)?;

    let descriptions: Vec<_> = receipt
        .discounts()
        .iter()
        .map(Discount::description)
        .collect();

    assert_eq!(descriptions, ["20.0% off", "5 for 7.49"]);
    assert_eq!(receipt.total(), dec!(12.266));

    Ok(())
}

#[test]
fn weekly_set() -> TestResult {
    let (teller, cart) = Fixture::from_set("weekly")?.into_teller();

    let receipt = teller.checks_out_articles_from(&cart)?;

    let discounts: Vec<_> = receipt
        .discounts()
        .iter()
        .map(|discount| (discount.product().name(), discount.amount()))
        .collect();

    assert_eq!(
        discounts,
        [
            ("toothbrush", dec!(-0.99)),
            ("rice", dec!(-0.249)),
            ("cherry tomatoes", dec!(-0.39)),
        ]
    );
    assert_eq!(receipt.subtotal(), dec!(8.3325));
    assert_eq!(receipt.total(), dec!(6.7035));

    Ok(())
}

#[test]
fn table_rendering_includes_totals() -> TestResult {
    let (teller, cart) = Fixture::from_set("weekly")?.into_teller();

    let receipt = teller.checks_out_articles_from(&cart)?;
    let mut out = Vec::new();

    receipt.write_to(&mut out)?;

    let rendered = String::from_utf8(out)?;

    assert!(rendered.contains("cherry tomatoes"), "missing item row");
    assert!(rendered.contains("2 for 0.99 (cherry tomatoes)"), "missing discount row");
    assert!(rendered.contains("6.70"), "missing total");

    Ok(())
}
