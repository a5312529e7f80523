//! Authentication module for the LiveCoinWatch API.
//!
//! LiveCoinWatch authenticates every request with a single API key sent in the
//! `x-api-key` header. There is no signing or nonce.

mod credentials;

pub use credentials::{API_KEY_ENV_VAR, ApiKey};
