//! CEX.IO REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{
    CredentialsProvider, IncreasingNonce, NonceProvider, StaticCredentials, sign_request,
};
use crate::error::CexioError;
use crate::rest::commands::{CEXIO_BASE_URL, CommandSet};
use crate::rest::request::{AUTH_FIELDS, ApiRequest, Params};

/// User agent prefix expected by CEX.IO for API bots.
const USER_AGENT_PREFIX: &str = "bot-cex.io";

/// The CEX.IO REST API client.
///
/// The client classifies every command as public or private using its
/// [`CommandSet`], signs private commands and returns the decoded JSON reply
/// untouched. Errors reported by the exchange inside the JSON body are part of
/// the returned value, not an `Err`.
///
/// The client is cheap to clone and safe to share between tasks; the only
/// shared mutable state is the nonce provider, which is atomic.
///
/// # Example
///
/// ```rust,no_run
/// use cexio_api_client::rest::CexioClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public commands only
///     let client = CexioClient::new();
///
///     let ticker = client.ticker("BTC/USD").await?;
///     println!("Ticker: {ticker}");
///
///     Ok(())
/// }
/// ```
///
/// For private commands, provide credentials:
///
/// ```rust,no_run
/// use cexio_api_client::rest::CexioClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CexioClient::with_credentials("up123456789", "api_key", "api_secret");
///
///     let balance = client.balance().await?;
///     println!("Balance: {balance}");
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CexioClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
    public_commands: Arc<CommandSet>,
}

impl CexioClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public commands.
    /// Use [`CexioClient::with_credentials`] or [`CexioClient::builder()`]
    /// for private commands.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a client for public and private commands.
    pub fn with_credentials(
        username: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self::builder()
            .credentials(Arc::new(StaticCredentials::new(username, api_key, api_secret)))
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> CexioClientBuilder {
        CexioClientBuilder::new()
    }

    /// Whether `command` is sent without authentication.
    pub fn is_public(&self, command: &str) -> bool {
        self.public_commands.contains(command)
    }

    /// Call any command.
    ///
    /// `action` is appended verbatim after the command path segment, so it
    /// may carry a market pair and a query string, e.g. `BTC/USD/?depth=3`.
    pub async fn call(
        &self,
        command: &str,
        params: Option<Params>,
        action: &str,
    ) -> Result<Value, CexioError> {
        self.execute(command, params.unwrap_or_default(), action, None).await
    }

    /// Call any command, abandoning it after `timeout`.
    pub async fn call_with_timeout(
        &self,
        command: &str,
        params: Option<Params>,
        action: &str,
        timeout: Duration,
    ) -> Result<Value, CexioError> {
        self.execute(command, params.unwrap_or_default(), action, Some(timeout)).await
    }

    /// Send a request built by the endpoint catalog.
    pub async fn dispatch(&self, request: ApiRequest) -> Result<Value, CexioError> {
        self.execute(request.command, request.params, &request.action, None).await
    }

    async fn execute(
        &self,
        command: &str,
        mut params: Params,
        action: &str,
        timeout: Option<Duration>,
    ) -> Result<Value, CexioError> {
        let private = !self.is_public(command);
        if private {
            self.authenticate(&mut params)?;
        }

        let url = self.command_url(command, action);
        debug!(command, action, private, "Dispatching CEX.IO command");

        let form_data = serde_urlencoded::to_string(&params)?;
        let mut request = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form_data);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(CexioError::from_middleware)?;
        self.parse_response(command, response).await
    }

    /// Inject `key`, `signature` and `nonce` into the form parameters.
    fn authenticate(&self, params: &mut Params) -> Result<(), CexioError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(CexioError::MissingCredentials)?
            .get_credentials();

        if let Some(reserved) = AUTH_FIELDS.iter().find(|field| params.contains_key(**field)) {
            return Err(CexioError::ParameterCollision(reserved.to_string()));
        }

        let nonce = self.nonce_provider.next_nonce();
        let signature = sign_request(credentials, nonce);

        params.insert("key".to_string(), credentials.api_key.clone().into());
        params.insert("signature".to_string(), signature.into());
        params.insert("nonce".to_string(), nonce.to_string().into());
        Ok(())
    }

    /// Build `<base_url>/<command>/<action>`.
    fn command_url(&self, command: &str, action: &str) -> String {
        format!("{}/{}/{}", self.base_url.trim_end_matches('/'), command, action)
    }

    /// Decode a response from the CEX.IO API.
    async fn parse_response(
        &self,
        command: &str,
        response: reqwest::Response,
    ) -> Result<Value, CexioError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                CexioError::Timeout
            } else {
                CexioError::Transport(e)
            }
        })?;

        if !status.is_success() {
            warn!(command, status = status.as_u16(), "CEX.IO returned an HTTP error");
            return Err(CexioError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        // Application errors arrive as HTTP 200 with an `error` field and are passed through.
        serde_json::from_str(&body).map_err(|source| {
            warn!(command, error = %source, "CEX.IO response is not valid JSON");
            CexioError::Decode { source, body }
        })
    }
}

impl Default for CexioClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CexioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CexioClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("public_commands", &self.public_commands.len())
            .finish()
    }
}

/// Builder for [`CexioClient`].
pub struct CexioClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    public_commands: CommandSet,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl CexioClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: CEXIO_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            public_commands: CommandSet::cexio_public(),
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Replace the table of commands sent without authentication.
    pub fn public_commands(mut self, commands: CommandSet) -> Self {
        self.public_commands = commands;
        self
    }

    /// Set a custom user agent.
    ///
    /// Defaults to `bot-cex.io-<username>`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> CexioClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self.user_agent.unwrap_or_else(|| match &self.credentials {
            Some(provider) => format!(
                "{USER_AGENT_PREFIX}-{}",
                provider.get_credentials().username
            ),
            None => USER_AGENT_PREFIX.to_string(),
        });
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static(USER_AGENT_PREFIX));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder.build().unwrap_or_else(|e| {
            warn!(
                error = %e,
                "Falling back to a default HTTP client without timeout or user agent"
            );
            reqwest::Client::new()
        });

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(IncreasingNonce::new()));

        CexioClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
            public_commands: Arc::new(self.public_commands),
        }
    }
}

impl Default for CexioClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::commands::{private, public};

    #[test]
    fn test_command_url() {
        let client = CexioClient::builder().base_url("http://localhost:8080/api/").build();
        assert_eq!(
            client.command_url(public::ORDER_BOOK, "BTC/USD/?depth=3"),
            "http://localhost:8080/api/order_book/BTC/USD/?depth=3"
        );
        assert_eq!(
            client.command_url(private::BALANCE, ""),
            "http://localhost:8080/api/balance/"
        );
    }

    #[test]
    fn test_classification_uses_injected_set() {
        let client = CexioClient::builder()
            .public_commands(CommandSet::new([private::BALANCE]))
            .build();
        assert!(client.is_public(private::BALANCE));
        assert!(!client.is_public(public::TICKER));
    }

    #[test]
    fn test_authenticate_injects_fields() {
        let client = CexioClient::with_credentials("user", "key", "secret");
        let mut params = Params::new();
        params.insert("amount".to_string(), 1i64.into());
        client.authenticate(&mut params).unwrap();

        assert_eq!(params.len(), 4);
        assert_eq!(params["key"].to_string(), "key");
        let nonce = params["nonce"].to_string();
        assert_eq!(
            params["signature"].to_string(),
            crate::auth::sign(&nonce, "user", "key", "secret")
        );
    }

    #[test]
    fn test_authenticate_rejects_reserved_fields() {
        let client = CexioClient::with_credentials("user", "key", "secret");
        for field in AUTH_FIELDS {
            let mut params = Params::new();
            params.insert(field.to_string(), "spoofed".into());
            let err = client.authenticate(&mut params).unwrap_err();
            assert!(matches!(err, CexioError::ParameterCollision(ref f) if f == field));
        }
    }

    #[test]
    fn test_authenticate_requires_credentials() {
        let client = CexioClient::new();
        let err = client.authenticate(&mut Params::new()).unwrap_err();
        assert!(matches!(err, CexioError::MissingCredentials));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = CexioClient::with_credentials("user", "key", "secret");
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("has_credentials: true"));
        assert!(!debug_str.contains("secret"));
    }
}
