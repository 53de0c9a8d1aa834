//! Production lookup implementation using reqwest.

use std::net::IpAddr;
use std::time::Duration;

use super::{ExternalIpLookup, LookupError};

/// Default "what is my IP" endpoint (plain-text body).
pub const DEFAULT_ENDPOINT: &str = "https://api.ipify.org";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Production external IP lookup using reqwest.
///
/// Sends a GET request to a plain-text "what is my IP" service and parses
/// the trimmed body as an [`IpAddr`]. Every request is bounded by the
/// configured timeout, so callers on a responsiveness-sensitive path can
/// await it with a known worst case.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ifinfo::external::{ExternalIpLookup, HttpIpLookup};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let lookup = HttpIpLookup::new().with_timeout(Duration::from_secs(3));
/// let ip = lookup.lookup().await?;
/// println!("external IP: {ip}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpIpLookup {
    inner: reqwest::Client,
    endpoint: url::Url,
    timeout: Duration,
}

impl HttpIpLookup {
    /// Creates a lookup against [`DEFAULT_ENDPOINT`] with default
    /// configuration.
    ///
    /// # Panics
    ///
    /// Never panics in practice: the default endpoint is a valid URL
    /// literal.
    #[must_use]
    pub fn new() -> Self {
        let endpoint = url::Url::parse(DEFAULT_ENDPOINT).expect("default endpoint URL is valid");
        Self::with_endpoint(endpoint)
    }

    /// Creates a lookup against a custom endpoint.
    #[must_use]
    pub fn with_endpoint(endpoint: url::Url) -> Self {
        Self::from_client(reqwest::Client::new(), endpoint)
    }

    /// Creates a lookup from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (proxies, TLS, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client, endpoint: url::Url) -> Self {
        Self {
            inner: client,
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-request deadline (builder pattern).
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    /// Returns the configured per-request deadline.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpIpLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalIpLookup for HttpIpLookup {
    async fn lookup(&self) -> Result<IpAddr, LookupError> {
        let response = self
            .inner
            .get(self.endpoint.as_str())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::Timeout
                } else {
                    LookupError::Request(Box::new(e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Request(Box::new(e)))?;

        parse_body(&body)
    }
}

/// The body contract: trim surrounding whitespace, then parse as an IP
/// address in either family.
pub(super) fn parse_body(body: &str) -> Result<IpAddr, LookupError> {
    let trimmed = body.trim();
    trimmed
        .parse::<IpAddr>()
        .map_err(|_| LookupError::MalformedBody(trimmed.to_string()))
}
