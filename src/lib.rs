//! ifinfo: local network interface information
//!
//! A library for answering typed queries about a device's network
//! interfaces: per-class (cellular vs WiFi) and per-family (IPv4 vs IPv6)
//! addresses, netmasks, broadcast addresses, a derived router address, and
//! connectivity booleans — plus an external (public) IP lookup against a
//! third-party HTTP service.
//!
//! OS enumeration is injected through the [`interface::InterfaceSource`]
//! trait, so every local query is deterministic under test and the provider
//! itself carries no platform code.

pub mod external;
pub mod interface;
pub mod provider;
