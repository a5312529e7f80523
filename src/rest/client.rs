//! LiveCoinWatch REST API client implementation.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;

use crate::auth::ApiKey;
use crate::error::LiveCoinWatchError;
use crate::rest::endpoints::{DEFAULT_CURRENCY, LIVECOINWATCH_BASE_URL};

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "x-api-key";

/// The LiveCoinWatch REST API client.
///
/// Each endpoint method builds a JSON body, POSTs it to `host + endpoint` and
/// hands back the raw [`reqwest::Response`]. Nothing is retried and non-2xx
/// statuses are not turned into errors.
///
/// `currency` and `host` are plain public fields. Changing them needs
/// `&mut self`, while requests only need `&self`, so a shared client can issue
/// requests concurrently but cannot be reconfigured underneath them.
///
/// # Example
///
/// ```rust,no_run
/// use livecoinwatch_api_client::rest::LiveCoinWatchClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut client = LiveCoinWatchClient::new("your-api-key");
///
///     let status = client.status().await?;
///     println!("API status: {}", status.status());
///
///     client.currency = "EUR".to_string();
///     let overview = client.overview().await?;
///     println!("Overview in EUR: {}", overview.text().await?);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct LiveCoinWatchClient {
    http_client: ClientWithMiddleware,
    api_key: ApiKey,
    /// Quote currency merged into every parameterised request body.
    pub currency: String,
    /// Base URL the endpoint paths are appended to.
    pub host: String,
}

impl LiveCoinWatchClient {
    /// Create a client quoting in `USD` against the production host.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self::builder(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder(api_key: impl Into<ApiKey>) -> LiveCoinWatchClientBuilder {
        LiveCoinWatchClientBuilder::new(api_key)
    }

    /// POST `data` as JSON to `host + endpoint` and return the raw response.
    ///
    /// This is the single request path used by every endpoint method. It is
    /// public so that endpoints without a dedicated method can still be
    /// reached with the same headers.
    ///
    /// # Errors
    ///
    /// - [`LiveCoinWatchError::Serialization`] if `data` cannot be encoded.
    /// - [`LiveCoinWatchError::Transport`] if no response was received.
    pub async fn request<B>(
        &self,
        endpoint: &str,
        data: &B,
    ) -> Result<reqwest::Response, LiveCoinWatchError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(data)?;
        let url = format!("{}{}", self.host, endpoint);

        tracing::debug!(endpoint, body_len = body.len(), "sending LiveCoinWatch request");

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .body(body)
            .send()
            .await?;

        tracing::trace!(endpoint, status = %response.status(), "received LiveCoinWatch response");
        Ok(response)
    }

    /// POST to an endpoint that takes no parameters. The body is JSON `null`.
    pub(crate) async fn request_without_params(
        &self,
        endpoint: &str,
    ) -> Result<reqwest::Response, LiveCoinWatchError> {
        self.request(endpoint, &serde_json::Value::Null).await
    }

    /// POST `params` with the client's currency merged in as `currency`.
    pub(crate) async fn request_with_currency<P>(
        &self,
        endpoint: &str,
        params: &P,
    ) -> Result<reqwest::Response, LiveCoinWatchError>
    where
        P: Serialize,
    {
        let body = WithCurrency {
            currency: &self.currency,
            params,
        };
        self.request(endpoint, &body).await
    }
}

impl std::fmt::Debug for LiveCoinWatchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveCoinWatchClient")
            .field("api_key", &self.api_key)
            .field("currency", &self.currency)
            .field("host", &self.host)
            .finish()
    }
}

/// Request body with `currency` leading the endpoint parameters.
#[derive(Serialize)]
struct WithCurrency<'a, P> {
    currency: &'a str,
    #[serde(flatten)]
    params: &'a P,
}

/// Builder for [`LiveCoinWatchClient`].
pub struct LiveCoinWatchClientBuilder {
    api_key: ApiKey,
    currency: String,
    host: String,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl LiveCoinWatchClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            currency: DEFAULT_CURRENCY.to_string(),
            host: LIVECOINWATCH_BASE_URL.to_string(),
            user_agent: None,
            http_client: None,
        }
    }

    /// Set the quote currency (defaults to `USD`).
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the host URL (useful for testing with a mock server).
    ///
    /// The value is not validated; a malformed host fails at request time.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set a custom user agent.
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest` client, e.g. one with a request timeout.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> LiveCoinWatchClient {
        let reqwest_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut headers = HeaderMap::new();
                let user_agent = self.user_agent.unwrap_or_else(|| {
                    format!("livecoinwatch-api-client/{}", env!("CARGO_PKG_VERSION"))
                });
                let header_value = HeaderValue::from_str(&user_agent)
                    .unwrap_or_else(|_| HeaderValue::from_static("livecoinwatch-api-client"));
                headers.insert(USER_AGENT, header_value);

                reqwest::Client::builder()
                    .default_headers(headers)
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new())
            }
        };

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        LiveCoinWatchClient {
            http_client,
            api_key: self.api_key,
            currency: self.currency,
            host: self.host,
        }
    }
}
