use super::error::TransportError;
use crate::API_BASE;
use crate::API_BASE_ENV;

/// Status and raw body of an HTTP reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts a JSON body to an endpoint path of the equity service.
///
/// Only connectivity failures are errors here; any status that arrives is a
/// [`Reply`] for the caller to interpret.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn post(&self, path: &str, body: String) -> Result<Reply, TransportError>;
}

/// Where the equity service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    base: String,
}

impl Default for Service {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl Service {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }
    /// Base URL from `EQUITY_API_URL`, or the default.
    pub fn from_env() -> Self {
        std::env::var(API_BASE_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| Self::new(s.trim()))
            .unwrap_or_default()
    }
    pub fn base(&self) -> &str {
        &self.base
    }
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}
