//! Request parameter types for the LiveCoinWatch endpoints.
//!
//! The quote currency is not part of these types; the client adds it from its
//! own `currency` field. Field order here is the order of keys in the body.

use serde::Serialize;

/// Default page size for [`CoinsListRequest`].
pub const DEFAULT_COINS_LIMIT: u32 = 10;

/// Default page size for [`ExchangesListRequest`].
pub const DEFAULT_EXCHANGES_LIMIT: u32 = 50;

/// Documented upper bound for `limit`. Not enforced client-side.
pub const MAX_LIMIT: u32 = 100;

/// Documented `sort` values.
///
/// The request types accept any string; the API decides what is valid.
pub mod sort {
    /// Sort keys for `/coins/list`.
    pub mod coins {
        pub const RANK: &str = "rank";
        pub const PRICE: &str = "price";
        pub const VOLUME: &str = "volume";
        pub const CODE: &str = "code";
        pub const NAME: &str = "name";
        pub const AGE: &str = "age";
    }

    /// Sort keys for `/exchanges/list`.
    pub mod exchanges {
        pub const VOLUME: &str = "volume";
        pub const LIQUIDITY: &str = "liquidity";
        pub const CODE: &str = "code";
        pub const NAME: &str = "name";
    }
}

/// Documented `order` values.
pub mod order {
    pub const ASCENDING: &str = "ascending";
    pub const DESCENDING: &str = "descending";
}

/// Request parameters for `/overview/history`.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewHistoryRequest {
    /// Range start, Unix milliseconds.
    pub start: i64,
    /// Range end, Unix milliseconds.
    pub end: i64,
}

impl OverviewHistoryRequest {
    /// Create a new request for a time range.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// Request parameters for `/coins/single`.
#[derive(Debug, Clone, Serialize)]
pub struct CoinsSingleRequest {
    /// Coin code (e.g., "BTC").
    pub code: String,
    /// Include full coin information.
    pub meta: bool,
}

impl CoinsSingleRequest {
    /// Create a new request for a coin, without metadata.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            meta: false,
        }
    }

    /// Set whether to include full coin information.
    pub fn meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
}

/// Request parameters for `/coins/contract`.
#[derive(Debug, Clone, Serialize)]
pub struct CoinsContractRequest {
    /// Platform code (e.g., "ETH").
    pub platform: String,
    /// Token contract address on that platform.
    pub address: String,
    /// Include full coin information.
    pub meta: bool,
}

impl CoinsContractRequest {
    /// Create a new request for a token contract, without metadata.
    pub fn new(platform: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            address: address.into(),
            meta: false,
        }
    }

    /// Set whether to include full coin information.
    pub fn meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
}

/// Request parameters for `/coins/single/history`.
#[derive(Debug, Clone, Serialize)]
pub struct CoinsSingleHistoryRequest {
    /// Coin code.
    pub code: String,
    /// Range start, Unix milliseconds.
    pub start: i64,
    /// Range end, Unix milliseconds.
    pub end: i64,
    /// Include full coin information.
    pub meta: bool,
}

impl CoinsSingleHistoryRequest {
    /// Create a new request for a coin over a time range, without metadata.
    pub fn new(code: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            code: code.into(),
            start,
            end,
            meta: false,
        }
    }

    /// Set whether to include full coin information.
    pub fn meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
}

/// Request parameters for `/coins/list`.
#[derive(Debug, Clone, Serialize)]
pub struct CoinsListRequest {
    /// Sort key, see [`sort::coins`].
    pub sort: String,
    /// Sort order, see [`order`].
    pub order: String,
    /// Number of coins to skip.
    pub offset: u32,
    /// Page size (the API allows at most [`MAX_LIMIT`]).
    pub limit: u32,
    /// Include full coin information.
    pub meta: bool,
}

impl CoinsListRequest {
    /// Create a new request for the first page of 10 coins.
    pub fn new(sort: impl Into<String>, order: impl Into<String>) -> Self {
        Self {
            sort: sort.into(),
            order: order.into(),
            offset: 0,
            limit: DEFAULT_COINS_LIMIT,
            meta: false,
        }
    }

    /// Set the number of coins to skip.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set whether to include full coin information.
    pub fn meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
}

/// Request parameters for `/exchanges/single`.
///
/// Unlike the coin endpoints, `meta` has no default here and must be given.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangesSingleRequest {
    /// Exchange code (e.g., "binance").
    pub code: String,
    /// Include full exchange information.
    pub meta: bool,
}

impl ExchangesSingleRequest {
    /// Create a new request for an exchange.
    pub fn new(code: impl Into<String>, meta: bool) -> Self {
        Self {
            code: code.into(),
            meta,
        }
    }
}

/// Request parameters for `/exchanges/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangesListRequest {
    /// Sort key, see [`sort::exchanges`].
    pub sort: String,
    /// Sort order, see [`order`].
    pub order: String,
    /// Number of exchanges to skip.
    pub offset: u32,
    /// Page size (the API allows at most [`MAX_LIMIT`]).
    pub limit: u32,
    /// Include full exchange information.
    pub meta: bool,
}

impl ExchangesListRequest {
    /// Create a new request for the first page of 50 exchanges.
    pub fn new(sort: impl Into<String>, order: impl Into<String>) -> Self {
        Self {
            sort: sort.into(),
            order: order.into(),
            offset: 0,
            limit: DEFAULT_EXCHANGES_LIMIT,
            meta: false,
        }
    }

    /// Set the number of exchanges to skip.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set whether to include full exchange information.
    pub fn meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coins_list_defaults() {
        let request = CoinsListRequest::new(sort::coins::RANK, order::ASCENDING);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "sort": "rank",
                "order": "ascending",
                "offset": 0,
                "limit": 10,
                "meta": false
            })
        );
    }

    #[test]
    fn test_exchanges_list_defaults() {
        let request = ExchangesListRequest::new(sort::exchanges::VOLUME, order::DESCENDING);
        assert_eq!(request.offset, 0);
        assert_eq!(request.limit, 50);
        assert!(!request.meta);
    }

    #[test]
    fn test_limit_is_not_clamped() {
        let request = CoinsListRequest::new("rank", "ascending").limit(500);
        assert_eq!(request.limit, 500);
    }

    #[test]
    fn test_free_form_sort_is_kept() {
        let request = ExchangesListRequest::new("visitors", "sideways");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["sort"], "visitors");
        assert_eq!(value["order"], "sideways");
    }

    #[test]
    fn test_meta_defaults_to_false() {
        assert!(!CoinsSingleRequest::new("BTC").meta);
        assert!(!CoinsContractRequest::new("ETH", "0xabc").meta);
        assert!(!CoinsSingleHistoryRequest::new("BTC", 1, 2).meta);
    }

    #[test]
    fn test_history_field_order() {
        let request = CoinsSingleHistoryRequest::new("ETH", 1_600_000_000_000, 1_600_000_600_000)
            .meta(true);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"code":"ETH","start":1600000000000,"end":1600000600000,"meta":true}"#
        );
    }
}
