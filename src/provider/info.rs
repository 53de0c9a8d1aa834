//! The typed query surface over a live interface snapshot.

use std::net::{IpAddr, Ipv4Addr};

use crate::interface::{AddressFamily, InterfaceRecord, InterfaceSource};

use super::{InterfaceClass, InterfaceNaming};

/// Stateless provider answering address and connectivity queries.
///
/// Every query pulls a fresh snapshot from the injected
/// [`InterfaceSource`], classifies records by name prefix and address
/// family, and formats the first match. There is no caching and no shared
/// mutable state, so a provider can be used freely from multiple threads.
///
/// All failure — no matching interface, malformed record, enumeration
/// failure — collapses to an absent result; the public surface never
/// returns errors.
///
/// # Example
///
/// ```no_run
/// use ifinfo::interface::platform::PlatformSource;
/// use ifinfo::provider::InterfaceInfoProvider;
///
/// let provider = InterfaceInfoProvider::new(PlatformSource::new());
/// if let Some(ip) = provider.current_ip_address() {
///     println!("local IP: {ip}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InterfaceInfoProvider<S> {
    source: S,
    naming: InterfaceNaming,
}

impl<S: InterfaceSource> InterfaceInfoProvider<S> {
    /// Creates a provider with the default (Apple mobile) naming table.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_naming(source, InterfaceNaming::default())
    }

    /// Creates a provider with an explicit naming table.
    #[must_use]
    pub const fn with_naming(source: S, naming: InterfaceNaming) -> Self {
        Self { source, naming }
    }

    /// Returns a reference to the naming table in use.
    #[must_use]
    pub const fn naming(&self) -> &InterfaceNaming {
        &self.naming
    }

    /// The device's current local IP address: WiFi IPv4 when connected to
    /// WiFi, else cellular IPv4, else absent.
    #[must_use]
    pub fn current_ip_address(&self) -> Option<String> {
        self.wifi_ip_address().or_else(|| self.cell_ip_address())
    }

    /// IPv4 address of the first qualifying cellular interface.
    #[must_use]
    pub fn cell_ip_address(&self) -> Option<String> {
        self.address_of(InterfaceClass::Cellular, AddressFamily::V4)
    }

    /// IPv6 address of the first qualifying cellular interface.
    #[must_use]
    pub fn cell_ipv6_address(&self) -> Option<String> {
        self.address_of(InterfaceClass::Cellular, AddressFamily::V6)
    }

    /// Netmask of the matched cellular IPv4 interface.
    #[must_use]
    pub fn cell_netmask_address(&self) -> Option<String> {
        self.netmask_of(InterfaceClass::Cellular)
    }

    /// Broadcast (or point-to-point destination) address of the matched
    /// cellular IPv4 interface.
    #[must_use]
    pub fn cell_broadcast_address(&self) -> Option<String> {
        self.broadcast_of(InterfaceClass::Cellular)
    }

    /// IPv4 address of the first qualifying WiFi interface.
    #[must_use]
    pub fn wifi_ip_address(&self) -> Option<String> {
        self.address_of(InterfaceClass::Wifi, AddressFamily::V4)
    }

    /// IPv6 address of the first qualifying WiFi interface.
    #[must_use]
    pub fn wifi_ipv6_address(&self) -> Option<String> {
        self.address_of(InterfaceClass::Wifi, AddressFamily::V6)
    }

    /// Netmask of the matched WiFi IPv4 interface.
    #[must_use]
    pub fn wifi_netmask_address(&self) -> Option<String> {
        self.netmask_of(InterfaceClass::Wifi)
    }

    /// Broadcast address of the matched WiFi IPv4 interface.
    #[must_use]
    pub fn wifi_broadcast_address(&self) -> Option<String> {
        self.broadcast_of(InterfaceClass::Wifi)
    }

    /// The presumed WiFi router address, derived from the WiFi IPv4 address
    /// and netmask by the conventional-gateway policy (the subnet's network
    /// address with the final host bit set).
    ///
    /// The interface snapshot carries no gateway field, so this is a
    /// heuristic; it matches the dominant consumer-gateway convention but
    /// is not read from the routing table.
    #[must_use]
    pub fn wifi_router_address(&self) -> Option<String> {
        let record = self.first_match(InterfaceClass::Wifi, AddressFamily::V4)?;
        let IpAddr::V4(address) = record.address else {
            return None;
        };
        let Some(IpAddr::V4(netmask)) = record.netmask else {
            return None;
        };
        Some(conventional_gateway(address, netmask).to_string())
    }

    /// Returns true if a qualifying WiFi interface with a valid IPv4 or
    /// IPv6 address exists.
    #[must_use]
    pub fn connected_to_wifi(&self) -> bool {
        self.has_qualifying(InterfaceClass::Wifi)
    }

    /// Returns true if a qualifying cellular interface with a valid IPv4 or
    /// IPv6 address exists.
    #[must_use]
    pub fn connected_to_cell_network(&self) -> bool {
        self.has_qualifying(InterfaceClass::Cellular)
    }

    /// Pulls a fresh snapshot, degrading enumeration failure to an empty
    /// list.
    fn snapshot(&self) -> Vec<InterfaceRecord> {
        match self.source.snapshot() {
            Ok(records) => records,
            Err(error) => {
                tracing::debug!(%error, "interface enumeration failed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Returns true if `record` may surface from any query: eligible flags,
    /// internally consistent, and a usable address.
    fn qualifies(record: &InterfaceRecord) -> bool {
        record.flags.is_eligible() && record.is_family_consistent() && record.has_valid_address()
    }

    /// First qualifying record of the requested class and family, in OS
    /// enumeration order.
    fn first_match(&self, class: InterfaceClass, family: AddressFamily) -> Option<InterfaceRecord> {
        self.snapshot().into_iter().find(|record| {
            Self::qualifies(record)
                && record.family() == family
                && self.naming.matches(class, &record.name)
        })
    }

    fn address_of(&self, class: InterfaceClass, family: AddressFamily) -> Option<String> {
        self.first_match(class, family)
            .map(|record| record.address.to_string())
    }

    fn netmask_of(&self, class: InterfaceClass) -> Option<String> {
        self.first_match(class, AddressFamily::V4)?
            .netmask
            .map(|netmask| netmask.to_string())
    }

    fn broadcast_of(&self, class: InterfaceClass) -> Option<String> {
        self.first_match(class, AddressFamily::V4)?
            .broadcast
            .map(|broadcast| broadcast.to_string())
    }

    fn has_qualifying(&self, class: InterfaceClass) -> bool {
        self.snapshot()
            .iter()
            .any(|record| Self::qualifies(record) && self.naming.matches(class, &record.name))
    }
}

/// The conventional-gateway derivation: network address with the final host
/// bit set (`192.168.1.42` / `255.255.255.0` → `192.168.1.1`).
fn conventional_gateway(address: Ipv4Addr, netmask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from((u32::from(address) & u32::from(netmask)) | 1)
}
