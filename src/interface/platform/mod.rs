//! Platform-specific interface source implementations.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of the [`InterfaceSource`] trait.
//!
//! # Platform Support
//!
//! - **Unix-family** (including the Apple and Android mobile platforms):
//!   uses `getifaddrs(3)` via the `libc` crate.
//! - **Windows**: not provided; inject a custom [`InterfaceSource`].
//!
//! [`InterfaceSource`]: super::InterfaceSource

#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub use unix::UnixSource;

// Re-export the platform-specific source as PlatformSource for convenience
#[cfg(unix)]
pub use unix::UnixSource as PlatformSource;
