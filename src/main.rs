use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use seller_margin::application::engine::PricingEngine;
use seller_margin::config::EngineConfig;
use seller_margin::domain::breakdown::PricingBreakdown;
use seller_margin::interfaces::csv::breakdown_writer::BreakdownWriter;
use seller_margin::interfaces::csv::pricing_reader::PricingReader;
use seller_margin::interfaces::form::RawPricingInputs;
use seller_margin::interfaces::report;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file overriding commission tiers and the withholding rate
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the breakdown of a single sale
    Quote {
        /// Product cost
        #[arg(long)]
        cost: Option<String>,
        /// Tax-inclusive sales price
        #[arg(long)]
        price: Option<String>,
        /// VAT rate in percent (default 20)
        #[arg(long)]
        vat: Option<String>,
        /// Shipping cost for prices below 150
        #[arg(long = "ship-0-150")]
        ship_0_150: Option<String>,
        /// Shipping cost for prices from 150 to below 300
        #[arg(long = "ship-150-300")]
        ship_150_300: Option<String>,
        /// Shipping cost for prices of 300 and above
        #[arg(long = "ship-300-plus")]
        ship_300_plus: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Compute breakdowns for every row of a CSV file
    Batch {
        /// Input pricing CSV file
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_path(path).into_diagnostic()?,
        None => EngineConfig::default(),
    };
    let engine = PricingEngine::from_config(config).into_diagnostic()?;
    tracing::debug!(
        tiers = engine.schedule().tiers().count(),
        withholding_rate = %engine.withholding_rate(),
        "Engine configured"
    );

    match cli.command {
        Command::Quote {
            cost,
            price,
            vat,
            ship_0_150,
            ship_150_300,
            ship_300_plus,
            format,
        } => {
            let raw = RawPricingInputs {
                product_cost: cost,
                vat_rate: vat,
                sales_price: price,
                shipping_0_150: ship_0_150,
                shipping_150_300: ship_150_300,
                shipping_300_plus: ship_300_plus,
            };
            let breakdown = engine.compute_breakdown(&raw.normalize());
            match format {
                Format::Text => print!("{}", report::render_text(&breakdown)),
                Format::Json => {
                    let json = serde_json::to_string_pretty(&breakdown).into_diagnostic()?;
                    println!("{json}");
                }
            }
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = PricingReader::new(file);
            let stdout = io::stdout();
            let mut writer = BreakdownWriter::new(stdout.lock());

            for (index, row) in reader.rows().enumerate() {
                match row {
                    Ok(row) => {
                        let (sku, raw) = row.into_parts();
                        tracing::debug!(record = index + 1, %sku, "Pricing row");
                        let breakdown = engine.compute_breakdown(&raw.normalize());
                        writer.write(&sku, &breakdown).into_diagnostic()?;
                    }
                    Err(e) => {
                        tracing::warn!(record = index + 1, error = %e, "Error reading pricing row, using zero breakdown");
                        writer
                            .write("", &PricingBreakdown::zero())
                            .into_diagnostic()?;
                    }
                }
            }
            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}
