//! Example: Fetching market data from LiveCoinWatch.
//!
//! Reads the API key from `LIVECOINWATCH_API_KEY` (a `.env` file is not loaded
//! here; export the variable first).
//!
//! Run with: cargo run --example market_data

use livecoinwatch_api_client::ApiKey;
use livecoinwatch_api_client::rest::LiveCoinWatchClient;
use livecoinwatch_api_client::rest::public::{
    CoinsListRequest, CoinsSingleRequest, ExchangesListRequest, ExchangesSingleRequest, order,
    sort,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(api_key) = ApiKey::try_from_env() else {
        println!("Set LIVECOINWATCH_API_KEY to run this example.");
        return Ok(());
    };
    let mut client = LiveCoinWatchClient::new(api_key);

    println!("=== Status ===");
    let status = client.status().await?;
    println!("HTTP {}", status.status());

    println!("\n=== Credits ===");
    let credits: serde_json::Value = client.credits().await?.json().await?;
    println!(
        "{} of {} credits left today",
        credits["dailyCreditsRemaining"], credits["dailyCreditsLimit"]
    );

    println!("\n=== Overview (USD) ===");
    let overview: serde_json::Value = client.overview().await?.json().await?;
    println!("Market cap: {}", overview["cap"]);
    println!("Volume: {}", overview["volume"]);

    println!("\n=== Bitcoin ===");
    let btc: serde_json::Value = client
        .coins_single(&CoinsSingleRequest::new("BTC").meta(true))
        .await?
        .json()
        .await?;
    println!("{} rate: {}", btc["name"], btc["rate"]);

    println!("\n=== Top 5 coins by rank (EUR) ===");
    client.currency = "EUR".to_string();
    let request = CoinsListRequest::new(sort::coins::RANK, order::ASCENDING).limit(5);
    let coins: serde_json::Value = client.coins_list(&request).await?.json().await?;
    if let Some(coins) = coins.as_array() {
        for coin in coins {
            println!("  {}: {}", coin["code"], coin["rate"]);
        }
    }

    println!("\n=== Top 3 exchanges by volume ===");
    let request = ExchangesListRequest::new(sort::exchanges::VOLUME, order::DESCENDING).limit(3);
    let exchanges: serde_json::Value = client.exchanges_list(&request).await?.json().await?;
    if let Some(exchanges) = exchanges.as_array() {
        for exchange in exchanges {
            println!("  {}: {}", exchange["code"], exchange["volume"]);
        }
    }

    println!("\n=== Binance ===");
    let binance = client
        .exchanges_single(&ExchangesSingleRequest::new("binance", false))
        .await?;
    println!("{}", binance.text().await?);

    println!("\nDone!");
    Ok(())
}
