//! Example: Loading the API key and configuring the client.
//!
//! Run with: cargo run --example api_key

use std::time::Duration;

use livecoinwatch_api_client::ApiKey;
use livecoinwatch_api_client::rest::LiveCoinWatchClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keys never show up in Debug output.
    let key = ApiKey::new("my-api-key");
    println!("Key: {:?}", key);

    match ApiKey::try_from_env() {
        Some(key) => println!("Loaded key from environment: {:?}", key),
        None => println!("Set LIVECOINWATCH_API_KEY to load the key from the environment."),
    }

    // The client itself imposes no timeout; bring a reqwest client that does.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let client = LiveCoinWatchClient::builder(key)
        .currency("EUR")
        .http_client(http)
        .build();
    println!("Client: {:?}", client);

    Ok(())
}
