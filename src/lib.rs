//! # TempMailChecker Client
//! Asynchronous wrapper around the TempMailChecker disposable-email-detection HTTP API, providing simple methods to check addresses, check domains, and read daily quota usage from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who need to reject throwaway addresses at signup, during list hygiene, or in abuse tooling without maintaining a local blocklist: configure with [`ClientBuilder`] (API key required, regional endpoint optional), then call [`Client::check`], [`Client::check_domain`], or [`Client::is_disposable`], and watch your quota with [`Client::get_usage`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not a local disposable-domain database, cache, or rate limiter. Each operation performs exactly one request against the remote service and inherits its availability and daily quota; retry and backoff policy belong to the caller (see [`Error::is_rate_limit`]).
//!
//! ## Errors
//! Invalid input is rejected before any request as one of the validation variants ([`Error::ApiKeyRequired`], [`Error::EmailRequired`], [`Error::DomainRequired`], [`Error::InvalidEmail`]). Remote failures become [`Error::Api`] or [`Error::RateLimit`]; transport and decoding failures become [`Error::Request`], [`Error::Body`], or [`Error::ResponseParse`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use tempmailchecker_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tempmailchecker_client::Error> {
//!     let client = Client::new("your_api_key")?;
//!
//!     if client.is_disposable("test@10minutemail.com").await? {
//!         println!("Disposable email detected!");
//!     }
//!
//!     let usage = client.get_usage().await?;
//!     println!("Used {} of {} checks today", usage.usage_today, usage.limit);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;

pub use client::{Client, ClientBuilder, ENDPOINT_ASIA, ENDPOINT_EU, ENDPOINT_US};
pub use error::Error;
pub use models::{CheckResult, UsageResult};

/// Result type alias for TempMailChecker operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
