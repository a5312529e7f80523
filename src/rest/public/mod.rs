//! LiveCoinWatch REST API endpoints.
//!
//! Every method returns the raw response; decode the body with
//! `response.json::<serde_json::Value>()` or your own types.

mod types;

pub use types::*;

use crate::error::LiveCoinWatchError;
use crate::rest::LiveCoinWatchClient;
use crate::rest::endpoints;

impl LiveCoinWatchClient {
    /// Check the API status.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use livecoinwatch_api_client::rest::LiveCoinWatchClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = LiveCoinWatchClient::new("your-api-key");
    ///     let response = client.status().await?;
    ///     assert!(response.status().is_success());
    ///     Ok(())
    /// }
    /// ```
    pub async fn status(&self) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request_without_params(endpoints::STATUS).await
    }

    /// Get the daily credit limit and remaining credits for the API key.
    ///
    /// The body carries `dailyCreditsLimit` and `dailyCreditsRemaining`.
    pub async fn credits(&self) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request_without_params(endpoints::CREDITS).await
    }

    /// Get aggregated market data (cap, volume, liquidity, BTC dominance).
    pub async fn overview(&self) -> Result<reqwest::Response, LiveCoinWatchError> {
        #[derive(serde::Serialize)]
        struct Params {}
        self.request_with_currency(endpoints::OVERVIEW, &Params {})
            .await
    }

    /// Get aggregated market data over a time range.
    ///
    /// # Arguments
    ///
    /// * `request` - Start and end of the range.
    pub async fn overview_history(
        &self,
        request: &OverviewHistoryRequest,
    ) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request_with_currency(endpoints::OVERVIEW_HISTORY, request)
            .await
    }

    /// Get a single coin.
    ///
    /// # Arguments
    ///
    /// * `request` - Coin code and metadata flag.
    pub async fn coins_single(
        &self,
        request: &CoinsSingleRequest,
    ) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request_with_currency(endpoints::COINS_SINGLE, request)
            .await
    }

    /// Get a single coin by platform and token contract address.
    pub async fn coins_contract(
        &self,
        request: &CoinsContractRequest,
    ) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request_with_currency(endpoints::COINS_CONTRACT, request)
            .await
    }

    /// Get a single coin's history over a time range.
    pub async fn coins_single_history(
        &self,
        request: &CoinsSingleHistoryRequest,
    ) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request_with_currency(endpoints::COINS_SINGLE_HISTORY, request)
            .await
    }

    /// Get a sorted page of coins.
    ///
    /// Offset and limit are passed through as given; no pagination is done.
    pub async fn coins_list(
        &self,
        request: &CoinsListRequest,
    ) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request_with_currency(endpoints::COINS_LIST, request)
            .await
    }

    /// Get all fiat currencies.
    pub async fn fiats_all(&self) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request_without_params(endpoints::FIATS_ALL).await
    }

    /// Get all token platforms.
    pub async fn platforms_all(&self) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request_without_params(endpoints::PLATFORMS_ALL).await
    }

    /// Get a single exchange.
    pub async fn exchanges_single(
        &self,
        request: &ExchangesSingleRequest,
    ) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request_with_currency(endpoints::EXCHANGES_SINGLE, request)
            .await
    }

    /// Get a sorted page of exchanges.
    pub async fn exchanges_list(
        &self,
        request: &ExchangesListRequest,
    ) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request_with_currency(endpoints::EXCHANGES_LIST, request)
            .await
    }
}
