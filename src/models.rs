//! Response models for the TempMailChecker API.

use serde::Deserialize;

/// Result of an email or domain check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CheckResult {
    /// `true` when the address or domain belongs to a disposable email provider.
    pub temp: bool,
}

/// Daily usage statistics for the configured API key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UsageResult {
    /// Number of requests made today.
    pub usage_today: u64,
    /// Daily request limit.
    pub limit: u64,
    /// When the usage counter resets, as reported by the API.
    pub reset: String,
}
