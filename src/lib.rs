//! # LiveCoinWatch Client
//!
//! An async Rust client library for the LiveCoinWatch market data REST API.
//!
//! ## Features
//!
//! - One method per documented REST endpoint
//! - Per-endpoint request types with the API's documented defaults
//! - Raw `reqwest::Response` pass-through, so callers decide how to read bodies
//! - Request tracing through `reqwest-tracing`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use livecoinwatch_api_client::rest::LiveCoinWatchClient;
//! use livecoinwatch_api_client::rest::public::CoinsSingleRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LiveCoinWatchClient::new("your-api-key");
//!     let response = client
//!         .coins_single(&CoinsSingleRequest::new("BTC").meta(true))
//!         .await?;
//!     println!("{}: {}", response.status(), response.text().await?);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;

// Re-export commonly used types at crate root
pub use auth::ApiKey;
pub use error::LiveCoinWatchError;
pub use rest::LiveCoinWatchClient;

/// Result type alias using LiveCoinWatchError
pub type Result<T> = std::result::Result<T, LiveCoinWatchError>;
