//! Interface records and the injectable enumeration source.
//!
//! This module provides types and traits for:
//! - Representing a single interface address entry ([`InterfaceRecord`])
//! - Address family classification ([`AddressFamily`])
//! - Interface status flags ([`InterfaceFlags`])
//! - Enumerating interfaces ([`InterfaceSource`])
//! - Platform-specific implementations ([`platform`])

mod record;
mod source;
pub mod platform;

pub use record::{AddressFamily, InterfaceFlags, InterfaceRecord};
pub use source::{EnumerationError, InterfaceSource};
