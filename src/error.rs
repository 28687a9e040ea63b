//! Error types returned by the TempMailChecker client.

use serde::Deserialize;

/// Errors produced by client construction, input validation, and API calls.
///
/// Validation variants (`ApiKeyRequired`, `EmailRequired`, `DomainRequired`,
/// `InvalidEmail`) are returned before any network activity. `Api` and
/// `RateLimit` carry what the remote service reported; `Request`, `Body`, and
/// `ResponseParse` wrap the underlying transport or decoding failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API key was empty or whitespace-only at construction.
    #[error("API key is required")]
    ApiKeyRequired,

    /// An empty email was passed to [`check`](crate::Client::check).
    #[error("email address is required")]
    EmailRequired,

    /// An empty domain was passed to [`check_domain`](crate::Client::check_domain).
    #[error("domain is required")]
    DomainRequired,

    /// The email did not match the `local@domain.tld` shape.
    #[error("invalid email address format")]
    InvalidEmail,

    /// The API answered with a non-200 status other than the rate-limit case.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Error text reported by the API, or a generic fallback.
        message: String,
    },

    /// The API answered with HTTP 429; the daily quota is exhausted.
    #[error("rate limit exceeded: {message}")]
    RateLimit {
        /// Message reported by the API, or "Daily limit reached".
        message: String,
    },

    /// Sending the request failed (connection, TLS, timeout, bad URL).
    #[error("request failed")]
    Request(#[source] reqwest::Error),

    /// Reading the response body failed mid-transfer.
    #[error("failed to read response")]
    Body(#[source] reqwest::Error),

    /// A 200 response carried a body that did not match the expected shape.
    #[error("failed to parse response")]
    ResponseParse(#[source] serde_json::Error),
}

/// Error payload shape shared by all non-200 responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    message: String,
}

impl Error {
    /// Classify a non-200 response into [`Error::RateLimit`] or [`Error::Api`].
    ///
    /// The order is fixed: a parseable 429 body always becomes `RateLimit`,
    /// even when an `error` field is also present; an unparseable body falls
    /// through to the generic `Api` message regardless of status.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if status == 429 {
                let message = if parsed.message.is_empty() {
                    "Daily limit reached".to_string()
                } else {
                    parsed.message
                };
                return Error::RateLimit { message };
            }

            if !parsed.error.is_empty() {
                return Error::Api {
                    status,
                    message: parsed.error,
                };
            }
        }

        Error::Api {
            status,
            message: format!("API request failed with status {status}"),
        }
    }

    /// Returns `true` if this is a [`Error::RateLimit`].
    ///
    /// Lets callers branch into backoff handling without matching on the
    /// concrete variant.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Error::RateLimit { .. })
    }

    /// Returns `true` if this is an [`Error::Api`].
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}
