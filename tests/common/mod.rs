use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 7] = [
    "sku",
    "product_cost",
    "vat_rate",
    "sales_price",
    "shipping_0_150",
    "shipping_150_300",
    "shipping_300_plus",
];

pub fn write_pricing_csv(path: &Path, rows: &[[&str; 7]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Random amount with two decimals in `[0, max)`.
pub fn random_amount<R: Rng>(rng: &mut R, max: u64) -> String {
    let cents = rng.gen_range(0..max * 100);
    format!("{}.{:02}", cents / 100, cents % 100)
}

pub fn generate_random_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let mut rng = rand::thread_rng();
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    for i in 1..=rows {
        let vat = rng.gen_range(0..=30u32).to_string();
        wtr.write_record([
            format!("SKU-{i}"),
            random_amount(&mut rng, 1_000),
            vat,
            random_amount(&mut rng, 2_000),
            random_amount(&mut rng, 50),
            random_amount(&mut rng, 50),
            random_amount(&mut rng, 50),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
