//! Interface classification and the typed query surface.
//!
//! This module provides:
//! - Interface class identification ([`InterfaceClass`])
//! - Platform naming conventions as configuration data ([`InterfaceNaming`])
//! - The stateless query provider ([`InterfaceInfoProvider`])

mod info;
mod naming;


pub use info::InterfaceInfoProvider;
pub use naming::{InterfaceClass, InterfaceNaming};
