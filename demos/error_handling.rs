//! Example: Telling transport failures apart from API error responses.
//!
//! Run with: cargo run --example error_handling

use livecoinwatch_api_client::LiveCoinWatchError;
use livecoinwatch_api_client::rest::LiveCoinWatchClient;

#[tokio::main]
async fn main() {
    // Nothing listens here, so the request never gets a response.
    let client = LiveCoinWatchClient::builder("api_key")
        .host("http://127.0.0.1:1")
        .build();

    match client.status().await {
        Ok(response) => println!("Unexpected response: {}", response.status()),
        Err(LiveCoinWatchError::Transport(e)) => println!("Transport error: {e}"),
        Err(LiveCoinWatchError::Serialization(e)) => println!("Serialization error: {e}"),
    }

    // A bad key still gets a response; the status code tells the story.
    let client = LiveCoinWatchClient::new("definitely-not-a-key");
    match client.credits().await {
        Ok(response) if !response.status().is_success() => {
            println!("API rejected the request: HTTP {}", response.status());
        }
        Ok(response) => println!("Credits: HTTP {}", response.status()),
        Err(e) => println!("Request failed: {e}"),
    }
}
