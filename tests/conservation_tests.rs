use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use seller_margin::application::engine::PricingEngine;
use seller_margin::domain::money::Money;
use seller_margin::interfaces::csv::pricing_reader::PricingReader;
use seller_margin::interfaces::form::RawPricingInputs;

mod common;

fn random_inputs<R: Rng>(rng: &mut R) -> RawPricingInputs {
    RawPricingInputs {
        product_cost: Some(common::random_amount(rng, 1_000)),
        vat_rate: Some(rng.gen_range(0..=30u32).to_string()),
        sales_price: Some(common::random_amount(rng, 2_000)),
        shipping_0_150: Some(common::random_amount(rng, 50)),
        shipping_150_300: Some(common::random_amount(rng, 50)),
        shipping_300_plus: Some(common::random_amount(rng, 50)),
    }
}

#[test]
fn test_net_profit_plus_expenses_equals_price() {
    let engine = PricingEngine::default();
    let mut rng = rand::thread_rng();

    for _ in 0..5_000 {
        let inputs = random_inputs(&mut rng).normalize();
        let breakdown = engine.compute_breakdown(&inputs);

        let sum = breakdown.net_profit
            + breakdown.product_cost
            + breakdown.commission_amount
            + breakdown.vat_amount
            + breakdown.shipping_cost
            + breakdown.withholding_amount;
        assert_eq!(sum, breakdown.sales_price, "{inputs:?}");
    }
}

#[test]
fn test_exactly_one_tier_for_every_price() {
    let engine = PricingEngine::default();
    let mut rng = rand::thread_rng();

    for _ in 0..5_000 {
        let price = Money::new(Decimal::new(rng.gen_range(0..1_000_000), 2));
        let matching = engine
            .schedule()
            .tiers()
            .filter(|tier| tier.contains(price))
            .count();
        assert_eq!(matching, 1, "price {price}");
        assert!(engine.select_commission_tier(price).contains(price));
    }
}

#[test]
fn test_margin_zero_for_zero_price() {
    let engine = PricingEngine::default();
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let mut raw = random_inputs(&mut rng);
        raw.sales_price = Some("0".to_string());
        let breakdown = engine.compute_breakdown(&raw.normalize());
        assert_eq!(breakdown.profit_margin_percent, Decimal::ZERO);
    }
}

#[test]
fn test_generated_batch_conserves_every_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("random.csv");
    common::generate_random_csv(&path, 1_000).unwrap();

    let engine = PricingEngine::default();
    let reader = PricingReader::new(std::fs::File::open(&path).unwrap());
    let mut rows = 0;
    for row in reader.rows() {
        let (_, raw) = row.unwrap().into_parts();
        let breakdown = engine.compute_breakdown(&raw.normalize());
        assert_eq!(
            breakdown.net_profit + breakdown.total_expenses,
            breakdown.sales_price
        );
        assert!(breakdown.profit_margin_percent <= dec!(100));
        rows += 1;
    }
    assert_eq!(rows, 1_000);
}
