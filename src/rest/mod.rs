//! LiveCoinWatch REST API client.
//!
//! Every endpoint is a POST with a JSON body. Parameterised endpoints get the
//! client's quote currency merged into the body as `currency`:
//!
//! ```rust,no_run
//! use livecoinwatch_api_client::rest::LiveCoinWatchClient;
//! use livecoinwatch_api_client::rest::public::{CoinsListRequest, order, sort};
//!
//! async fn top_coins() -> Result<(), livecoinwatch_api_client::LiveCoinWatchError> {
//!     let client = LiveCoinWatchClient::builder("your-api-key")
//!         .currency("EUR")
//!         .build();
//!     // POST /coins/list
//!     // {"currency":"EUR","sort":"rank","order":"ascending","offset":0,"limit":25,"meta":false}
//!     let request = CoinsListRequest::new(sort::coins::RANK, order::ASCENDING).limit(25);
//!     let response = client.coins_list(&request).await?;
//!     println!("HTTP {}", response.status());
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod public;

pub use client::{LiveCoinWatchClient, LiveCoinWatchClientBuilder};
pub use endpoints::*;
