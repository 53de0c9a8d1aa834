//! Interface enumeration trait and error types.

use super::InterfaceRecord;
use thiserror::Error;

/// Error type for interface enumeration.
///
/// Describes what went wrong without dictating recovery strategy. The query
/// layer treats any enumeration failure as an empty interface list.
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// The OS enumeration call failed.
    #[error("OS interface enumeration failed: {0}")]
    Os(#[source] std::io::Error),

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for enumerating the device's network interfaces.
///
/// # Design
///
/// - The single external collaborator of the local query surface
/// - Enables dependency injection for testing with synthetic records
/// - Platform-specific implementations provided in [`super::platform`]
///
/// # Example
///
/// ```ignore
/// use ifinfo::interface::{InterfaceSource, InterfaceRecord, EnumerationError};
///
/// struct StaticSource {
///     records: Vec<InterfaceRecord>,
/// }
///
/// impl InterfaceSource for StaticSource {
///     fn snapshot(&self) -> Result<Vec<InterfaceRecord>, EnumerationError> {
///         Ok(self.records.clone())
///     }
/// }
/// ```
pub trait InterfaceSource: Send + Sync {
    /// Returns a fresh snapshot of all interface address entries.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError`] when the underlying OS call fails.
    ///
    /// # Implementation Notes
    ///
    /// - Implementations return ALL entries; eligibility filtering is done
    ///   by the caller
    /// - Enumeration order is OS-defined and must be preserved
    /// - Each call reflects the current state; no caching between calls
    fn snapshot(&self) -> Result<Vec<InterfaceRecord>, EnumerationError>;
}
