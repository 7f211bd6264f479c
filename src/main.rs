use std::env;
use clap::Parser;
use qfeed_rs::oracle::adapters::alpaca::AlpacaQuoteSource;
use qfeed_rs::oracle::normalizer;
use qfeed_rs::oracle::types::Credentials;
use qfeed_rs::telemetry;

/// Fetch the latest quote for a symbol and print it as an
/// 8-decimal fixed-point integer for an oracle callback.
#[derive(Parser)]
#[command(name = "qfeed")]
struct Args {
    /// Symbol to quote
    #[arg(long, default_value = "TSLA")]
    symbol: String,

    /// Base URL of the market-data API
    #[arg(long, default_value = "https://data.alpaca.markets")]
    data_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // load .env

    telemetry::init_tracing("qfeed_rs=info");
    telemetry::init_metrics();

    let args = Args::parse();

    // Credentials come from the environment; provisioning them is someone
    // else's job. Empty values are rejected before any request goes out.
    let credentials = Credentials::new(
        env::var("APCA_API_KEY_ID").unwrap_or_default(),
        env::var("APCA_API_SECRET_KEY").unwrap_or_default(),
    );

    let source = AlpacaQuoteSource::new();
    let endpoint = AlpacaQuoteSource::quote_endpoint(&args.data_url, &args.symbol);

    let encoded = normalizer::normalize(&source, &credentials, &endpoint).await?;

    // The oracle-callback runtime reads this single integer from stdout.
    println!("{}", encoded);

    Ok(())
}
