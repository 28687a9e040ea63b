//! TempMailChecker async client implementation.

use crate::{CheckResult, Error, Result, UsageResult};
use regex::Regex;
use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use std::time::Duration;

/// European API endpoint (default). Best for EU, Africa, Middle East.
pub const ENDPOINT_EU: &str = "https://tempmailchecker.com";
/// United States API endpoint. Best for the Americas.
pub const ENDPOINT_US: &str = "https://us.tempmailchecker.com";
/// Asia API endpoint. Best for Asia-Pacific, Australia, Japan.
pub const ENDPOINT_ASIA: &str = "https://asia.tempmailchecker.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT_VALUE: &str = concat!("TempMailChecker-Rust/", env!("CARGO_PKG_VERSION"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Async client for the TempMailChecker disposable email detection API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like a regional endpoint, a request timeout, or a replacement transport.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    timeout: Option<Duration>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a new TempMailChecker client with default settings.
    ///
    /// Defaults to the EU endpoint and a 10 second request timeout.
    ///
    /// # Errors
    /// Returns [`Error::ApiKeyRequired`] if the key is empty or whitespace-only.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmailchecker_client::Client;
    /// # fn main() -> Result<(), tempmailchecker_client::Error> {
    /// let client = Client::new("your_api_key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Create a new client, panicking on an invalid API key.
    ///
    /// Intended for startup-time initialization where the key is already
    /// known to be valid and error plumbing is unwanted.
    ///
    /// # Panics
    /// Panics if the key is empty or whitespace-only.
    pub fn must_new(api_key: impl Into<String>) -> Self {
        match Self::new(api_key) {
            Ok(client) => client,
            Err(err) => panic!("failed to create TempMailChecker client: {err}"),
        }
    }

    /// Get the configured base endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the per-request timeout, if one governs this client.
    ///
    /// Returns `None` when a replacement transport was installed without a
    /// subsequent timeout override; the transport's own policy applies then.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Check whether an email address belongs to a disposable email provider.
    ///
    /// The address is trimmed and must match the `local@domain.tld` shape
    /// before any request is sent.
    ///
    /// # Arguments
    /// * `email` - The full email address to check
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmailchecker_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmailchecker_client::Error> {
    /// let client = Client::new("your_api_key")?;
    /// let result = client.check("test@10minutemail.com").await?;
    /// if result.temp {
    ///     println!("disposable!");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check(&self, email: &str) -> Result<CheckResult> {
        let email = email.trim();
        if email.is_empty() {
            return Err(Error::EmailRequired);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(Error::InvalidEmail);
        }

        self.check_request(("email", email)).await
    }

    /// Check whether a domain belongs to a disposable email provider.
    ///
    /// The domain is only trimmed; the API is the authority on whether it is
    /// well-formed.
    ///
    /// # Arguments
    /// * `domain` - The domain to check, without a scheme or local part
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmailchecker_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmailchecker_client::Error> {
    /// let client = Client::new("your_api_key")?;
    /// let result = client.check_domain("tempmail.com").await?;
    /// println!("{}", result.temp);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check_domain(&self, domain: &str) -> Result<CheckResult> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(Error::DomainRequired);
        }

        self.check_request(("domain", domain)).await
    }

    /// Convenience wrapper over [`check`](Self::check) returning the
    /// disposable flag directly. Errors propagate unchanged.
    pub async fn is_disposable(&self, email: &str) -> Result<bool> {
        Ok(self.check(email).await?.temp)
    }

    /// Retrieve today's usage statistics for the configured API key.
    ///
    /// The key is sent as a query parameter on this endpoint, not as a
    /// header.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmailchecker_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmailchecker_client::Error> {
    /// let client = Client::new("your_api_key")?;
    /// let usage = client.get_usage().await?;
    /// println!("{} / {} (resets {})", usage.usage_today, usage.limit, usage.reset);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_usage(&self) -> Result<UsageResult> {
        let request = self
            .http
            .get(format!("{}/usage", self.endpoint))
            .query(&[("key", self.api_key.as_str())])
            .header(USER_AGENT, USER_AGENT_VALUE);

        self.execute(request).await
    }

    /// Common GET request pattern for the `/check` endpoint.
    async fn check_request(&self, query: (&str, &str)) -> Result<CheckResult> {
        let request = self
            .http
            .get(format!("{}/check", self.endpoint))
            .query(&[query])
            .header("X-API-Key", &self.api_key)
            .header(USER_AGENT, USER_AGENT_VALUE);

        self.execute(request).await
    }

    /// Send a request and translate the response into a model or an [`Error`].
    ///
    /// The body is read in full on every path, so the connection is released
    /// whether the call succeeds or fails.
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        let response = request.send().await.map_err(Error::Request)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(Error::Body)?;

        if status != 200 {
            return Err(Error::from_response(status, &body));
        }

        serde_json::from_str(&body).map_err(Error::ResponseParse)
    }
}

/// Builder for configuring a TempMailChecker client.
///
/// Start with [`Client::builder`] to override defaults. Settings are applied
/// in call order and later calls win: installing a replacement transport
/// discards a previously set timeout (the transport's own policy takes over),
/// while a timeout set afterwards bounds requests on whichever transport is
/// current.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    endpoint: String,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - EU endpoint ([`ENDPOINT_EU`])
    /// - 10 second request timeout
    /// - A fresh `reqwest` transport built with that timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: ENDPOINT_EU.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            http: None,
        }
    }

    /// Override the base endpoint URL.
    ///
    /// Pass [`ENDPOINT_US`] or [`ENDPOINT_ASIA`] to pick the region closest
    /// to your users, or any base URL for testing.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the per-request timeout.
    ///
    /// Applies to whichever transport is current when the client is built,
    /// including one installed by an earlier [`http_client`](Self::http_client)
    /// call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the underlying HTTP transport entirely.
    ///
    /// Useful for custom TLS or proxy policy. The replacement governs its own
    /// timeout: any timeout set earlier on this builder is discarded, and
    /// only a [`timeout`](Self::timeout) call after this one bounds requests
    /// again.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self.timeout = None;
        self
    }

    /// Build the client.
    ///
    /// Performs no network activity.
    ///
    /// # Errors
    /// Returns [`Error::ApiKeyRequired`] if the key is empty or
    /// whitespace-only, or [`Error::Request`] if the default transport cannot
    /// be constructed.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmailchecker_client::{Client, ENDPOINT_US};
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), tempmailchecker_client::Error> {
    /// let client = Client::builder("your_api_key")
    ///     .endpoint(ENDPOINT_US)
    ///     .timeout(Duration::from_secs(5))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        if self.api_key.trim().is_empty() {
            return Err(Error::ApiKeyRequired);
        }

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(Error::Request)?,
        };

        Ok(Client {
            http,
            api_key: self.api_key,
            endpoint: self.endpoint,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_api_key() {
        for key in ["", " ", "   ", "\t", " \n \t "] {
            let err = Client::new(key).unwrap_err();
            assert!(matches!(err, Error::ApiKeyRequired), "key {key:?}");
        }
    }

    #[test]
    fn new_accepts_valid_api_key() {
        let client = Client::new("test_key").unwrap();
        assert_eq!(client.endpoint(), ENDPOINT_EU);
        assert_eq!(client.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn must_new_returns_client() {
        let client = Client::must_new("test_key");
        assert_eq!(client.endpoint(), ENDPOINT_EU);
    }

    #[test]
    #[should_panic(expected = "API key is required")]
    fn must_new_panics_on_empty_key() {
        Client::must_new("");
    }

    #[test]
    fn endpoint_constants() {
        assert_eq!(ENDPOINT_EU, "https://tempmailchecker.com");
        assert_eq!(ENDPOINT_US, "https://us.tempmailchecker.com");
        assert_eq!(ENDPOINT_ASIA, "https://asia.tempmailchecker.com");
    }

    #[test]
    fn builder_overrides_endpoint_and_timeout() {
        let client = Client::builder("test_key")
            .endpoint(ENDPOINT_US)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), ENDPOINT_US);
        assert_eq!(client.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn replacement_transport_discards_earlier_timeout() {
        let client = Client::builder("test_key")
            .timeout(Duration::from_secs(5))
            .http_client(reqwest::Client::new())
            .build()
            .unwrap();
        assert_eq!(client.timeout(), None);
    }

    #[test]
    fn timeout_after_replacement_transport_takes_effect() {
        let client = Client::builder("test_key")
            .http_client(reqwest::Client::new())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.timeout(), Some(Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn check_rejects_missing_email() {
        let client = Client::must_new("test_key");
        for email in ["", "   ", "\t \n"] {
            let err = client.check(email).await.unwrap_err();
            assert!(matches!(err, Error::EmailRequired), "email {email:?}");
        }
    }

    #[tokio::test]
    async fn check_rejects_invalid_email_format() {
        let client = Client::must_new("test_key");
        for email in [
            "not-an-email",
            "no-dot@domain",
            "@example.com",
            "user@",
            "two words@example.com",
            "user@@example.com",
        ] {
            let err = client.check(email).await.unwrap_err();
            assert!(matches!(err, Error::InvalidEmail), "email {email:?}");
        }
    }

    #[tokio::test]
    async fn check_domain_rejects_missing_domain() {
        let client = Client::must_new("test_key");
        for domain in ["", "   "] {
            let err = client.check_domain(domain).await.unwrap_err();
            assert!(matches!(err, Error::DomainRequired), "domain {domain:?}");
        }
    }
}
