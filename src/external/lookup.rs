//! Lookup trait and error types for the external IP query.

use std::net::IpAddr;

use thiserror::Error;

/// Error type for external IP lookups.
///
/// Describes what went wrong without dictating recovery strategy. At the
/// public query boundary every variant collapses to an absent result.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network-level failure (DNS, connection refused, protocol error).
    #[error("Request error: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service did not respond within the configured deadline.
    #[error("Request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("Service returned status {0}")]
    Status(http::StatusCode),

    /// The response body did not parse as an IP address.
    #[error("Malformed response body: {0:?}")]
    MalformedBody(String),
}

/// Trait for resolving the device's external (public) IP address.
///
/// # Design
///
/// This trait abstracts the "what is my IP" service call, enabling:
/// - Dependency injection for testing without network access
/// - Swapping the HTTP implementation without changing calling code
///
/// # Example
///
/// ```ignore
/// use std::net::IpAddr;
/// use ifinfo::external::{ExternalIpLookup, LookupError};
///
/// struct FixedLookup(IpAddr);
///
/// impl ExternalIpLookup for FixedLookup {
///     async fn lookup(&self) -> Result<IpAddr, LookupError> {
///         Ok(self.0)
///     }
/// }
/// ```
pub trait ExternalIpLookup: Send + Sync {
    /// Resolves the external IP address.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when:
    /// - The network call fails ([`LookupError::Request`])
    /// - The deadline elapses ([`LookupError::Timeout`])
    /// - The service answers with a non-2xx status ([`LookupError::Status`])
    /// - The body is not an IP address ([`LookupError::MalformedBody`])
    fn lookup(&self) -> impl std::future::Future<Output = Result<IpAddr, LookupError>> + Send;
}
