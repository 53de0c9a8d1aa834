//! External (public) IP lookup over HTTP.
//!
//! This module provides:
//! - The lookup abstraction and error taxonomy ([`ExternalIpLookup`],
//!   [`LookupError`])
//! - The reqwest-backed implementation ([`HttpIpLookup`])
//! - The query-boundary collapse ([`external_ip_address`])

mod client;
mod lookup;


pub use client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpIpLookup};
pub use lookup::{ExternalIpLookup, LookupError};

/// Resolves the device's external IP address, collapsing every failure to
/// absence.
///
/// This is the query-boundary contract of the crate: callers never see a
/// distinguishable error, only presence or absence, and may retry simply by
/// calling again. Failures are logged at debug level.
///
/// # Example
///
/// ```no_run
/// use ifinfo::external::{HttpIpLookup, external_ip_address};
///
/// # async fn example() {
/// let lookup = HttpIpLookup::new();
/// if let Some(ip) = external_ip_address(&lookup).await {
///     println!("external IP: {ip}");
/// }
/// # }
/// ```
pub async fn external_ip_address<L: ExternalIpLookup>(lookup: &L) -> Option<String> {
    match lookup.lookup().await {
        Ok(ip) => Some(ip.to_string()),
        Err(error) => {
            tracing::debug!(%error, "external IP lookup failed");
            None
        }
    }
}
