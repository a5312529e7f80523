//! LiveCoinWatch REST API endpoint constants.

/// Base URL for the LiveCoinWatch REST API.
pub const LIVECOINWATCH_BASE_URL: &str = "https://api.livecoinwatch.com";

/// Default quote currency.
pub const DEFAULT_CURRENCY: &str = "USD";

// Service endpoints
/// API status.
pub const STATUS: &str = "/status";
/// Remaining and daily credits for the API key.
pub const CREDITS: &str = "/credits";

// Market overview endpoints
/// Aggregated market data.
pub const OVERVIEW: &str = "/overview";
/// Aggregated market data over a time range.
pub const OVERVIEW_HISTORY: &str = "/overview/history";

// Coin endpoints
/// Single coin.
pub const COINS_SINGLE: &str = "/coins/single";
/// Single coin looked up by token contract.
pub const COINS_CONTRACT: &str = "/coins/contract";
/// Single coin history over a time range.
pub const COINS_SINGLE_HISTORY: &str = "/coins/single/history";
/// Sorted, paged list of coins.
pub const COINS_LIST: &str = "/coins/list";

// Reference data endpoints
/// All fiat currencies.
pub const FIATS_ALL: &str = "/fiats/all";
/// All token platforms.
pub const PLATFORMS_ALL: &str = "/platforms/all";

// Exchange endpoints
/// Single exchange.
pub const EXCHANGES_SINGLE: &str = "/exchanges/single";
/// Sorted, paged list of exchanges.
pub const EXCHANGES_LIST: &str = "/exchanges/list";
