//! Core value types for interface address entries.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

/// Address family of an interface address entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressFamily {
    /// IPv4 (dotted-decimal text form).
    V4,
    /// IPv6 (colon-hex text form).
    V6,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// Interface status flags as reported by the OS.
///
/// Only the flags the query layer cares about are carried; everything else
/// in the platform flag word is dropped at the source boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct InterfaceFlags {
    /// Interface is administratively up.
    pub up: bool,
    /// Interface has an operational link.
    pub running: bool,
    /// Loopback interface (localhost).
    pub loopback: bool,
    /// Point-to-point link (cellular data bearers typically are).
    pub point_to_point: bool,
}

impl InterfaceFlags {
    /// Flags for an ordinary active interface (up and running).
    #[must_use]
    pub const fn active() -> Self {
        Self {
            up: true,
            running: true,
            loopback: false,
            point_to_point: false,
        }
    }

    /// Returns true if records with these flags may surface from queries.
    ///
    /// Loopback interfaces and interfaces that are not both up and running
    /// are never returned.
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        self.up && self.running && !self.loopback
    }
}

/// A single address entry of a network interface at a point in time.
///
/// One interface with both an IPv4 and an IPv6 address yields two records,
/// matching how the OS enumerator reports them. Records are ephemeral: a
/// fresh list is pulled for every query and nothing is cached or mutated.
///
/// # Equality
///
/// Two records are equal if every field matches, including flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    /// OS interface name (e.g., "en0", "pdp_ip0", "lo0").
    pub name: String,
    /// The assigned address.
    pub address: IpAddr,
    /// Netmask for the address, when the OS reports one.
    pub netmask: Option<IpAddr>,
    /// Broadcast address, or the peer address on point-to-point links.
    pub broadcast: Option<IpAddr>,
    /// Status flags.
    pub flags: InterfaceFlags,
}

impl InterfaceRecord {
    /// Creates a record with no netmask or broadcast address.
    #[must_use]
    pub fn new(name: impl Into<String>, address: IpAddr, flags: InterfaceFlags) -> Self {
        Self {
            name: name.into(),
            address,
            netmask: None,
            broadcast: None,
            flags,
        }
    }

    /// Creates an IPv4 record from raw address and netmask bytes.
    #[must_use]
    pub fn ipv4(
        name: impl Into<String>,
        address: [u8; 4],
        netmask: [u8; 4],
        flags: InterfaceFlags,
    ) -> Self {
        Self::new(name, IpAddr::V4(Ipv4Addr::from(address)), flags)
            .with_netmask(IpAddr::V4(Ipv4Addr::from(netmask)))
    }

    /// Creates an IPv6 record from raw address bytes.
    #[must_use]
    pub fn ipv6(name: impl Into<String>, address: [u8; 16], flags: InterfaceFlags) -> Self {
        Self::new(name, IpAddr::V6(Ipv6Addr::from(address)), flags)
    }

    /// Sets the netmask (builder pattern).
    #[must_use]
    pub const fn with_netmask(mut self, netmask: IpAddr) -> Self {
        self.netmask = Some(netmask);
        self
    }

    /// Sets the broadcast / point-to-point destination address (builder pattern).
    #[must_use]
    pub const fn with_broadcast(mut self, broadcast: IpAddr) -> Self {
        self.broadcast = Some(broadcast);
        self
    }

    /// The address family, derived from the assigned address.
    #[must_use]
    pub const fn family(&self) -> AddressFamily {
        match self.address {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// Returns true if netmask and broadcast (where present) share the
    /// address's family.
    ///
    /// The OS guarantees this for well-formed entries; records that violate
    /// it are treated as malformed and skipped by the query layer.
    #[must_use]
    pub fn is_family_consistent(&self) -> bool {
        let family = self.family();
        let same = |addr: &IpAddr| {
            matches!(
                (family, addr),
                (AddressFamily::V4, IpAddr::V4(_)) | (AddressFamily::V6, IpAddr::V6(_))
            )
        };
        self.netmask.as_ref().is_none_or(same) && self.broadcast.as_ref().is_none_or(same)
    }

    /// Returns true if the assigned address is usable (not `0.0.0.0` / `::`).
    #[must_use]
    pub fn has_valid_address(&self) -> bool {
        !self.address.is_unspecified()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod address_family {
        use super::*;

        #[test]
        fn display_formats_correctly() {
            assert_eq!(format!("{}", AddressFamily::V4), "IPv4");
            assert_eq!(format!("{}", AddressFamily::V6), "IPv6");
        }
    }

    mod interface_flags {
        use super::*;

        #[test]
        fn active_is_eligible() {
            assert!(InterfaceFlags::active().is_eligible());
        }

        #[test]
        fn default_is_not_eligible() {
            assert!(!InterfaceFlags::default().is_eligible());
        }

        #[test]
        fn loopback_is_never_eligible() {
            let flags = InterfaceFlags {
                loopback: true,
                ..InterfaceFlags::active()
            };
            assert!(!flags.is_eligible());
        }

        #[test]
        fn down_or_not_running_is_not_eligible() {
            let down = InterfaceFlags {
                up: false,
                ..InterfaceFlags::active()
            };
            let stalled = InterfaceFlags {
                running: false,
                ..InterfaceFlags::active()
            };
            assert!(!down.is_eligible());
            assert!(!stalled.is_eligible());
        }

        #[test]
        fn point_to_point_does_not_affect_eligibility() {
            let flags = InterfaceFlags {
                point_to_point: true,
                ..InterfaceFlags::active()
            };
            assert!(flags.is_eligible());
        }
    }

    mod interface_record {
        use super::*;

        #[test]
        fn ipv4_from_raw_bytes_formats_dotted_decimal() {
            let record =
                InterfaceRecord::ipv4("en0", [10, 0, 0, 5], [255, 255, 255, 0], InterfaceFlags::active());

            assert_eq!(record.address.to_string(), "10.0.0.5");
            assert_eq!(record.netmask.unwrap().to_string(), "255.255.255.0");
            assert_eq!(record.family(), AddressFamily::V4);
        }

        #[test]
        fn ipv6_from_raw_bytes_formats_colon_hex() {
            let mut bytes = [0u8; 16];
            bytes[0] = 0xfe;
            bytes[1] = 0x80;
            bytes[15] = 0x01;
            let record = InterfaceRecord::ipv6("en0", bytes, InterfaceFlags::active());

            assert_eq!(record.address.to_string(), "fe80::1");
            assert_eq!(record.family(), AddressFamily::V6);
        }

        #[test]
        fn family_consistent_without_netmask_or_broadcast() {
            let record = InterfaceRecord::new(
                "en0",
                "192.168.1.2".parse().unwrap(),
                InterfaceFlags::active(),
            );
            assert!(record.is_family_consistent());
        }

        #[test]
        fn family_mismatch_in_netmask_is_detected() {
            let record = InterfaceRecord::new(
                "en0",
                "192.168.1.2".parse().unwrap(),
                InterfaceFlags::active(),
            )
            .with_netmask("ffff:ffff::".parse().unwrap());

            assert!(!record.is_family_consistent());
        }

        #[test]
        fn family_mismatch_in_broadcast_is_detected() {
            let record = InterfaceRecord::new(
                "en0",
                "fe80::1".parse().unwrap(),
                InterfaceFlags::active(),
            )
            .with_broadcast("192.168.1.255".parse().unwrap());

            assert!(!record.is_family_consistent());
        }

        #[test]
        fn unspecified_addresses_are_invalid() {
            let v4 = InterfaceRecord::new("en0", "0.0.0.0".parse().unwrap(), InterfaceFlags::active());
            let v6 = InterfaceRecord::new("en0", "::".parse().unwrap(), InterfaceFlags::active());

            assert!(!v4.has_valid_address());
            assert!(!v6.has_valid_address());
        }

        #[test]
        fn serializes_with_expected_field_names() {
            let record =
                InterfaceRecord::ipv4("en0", [192, 168, 1, 2], [255, 255, 255, 0], InterfaceFlags::active());
            let json = serde_json::to_value(&record).unwrap();

            assert_eq!(json["name"], "en0");
            assert_eq!(json["address"], "192.168.1.2");
            assert_eq!(json["netmask"], "255.255.255.0");
            assert_eq!(json["flags"]["up"], true);
        }
    }
}
