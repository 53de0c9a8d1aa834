//! Interface naming conventions as configuration data.
//!
//! Which interface is "the cellular one" or "the WiFi one" is a
//! platform-specific naming convention, not something the OS reports
//! directly. The prefix tables live in [`InterfaceNaming`] values rather
//! than in the matching logic, so the mapping can be adjusted per target
//! platform without touching the queries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Interface class requested by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterfaceClass {
    /// Mobile data radio interface.
    Cellular,
    /// Wireless LAN radio interface.
    Wifi,
}

impl fmt::Display for InterfaceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cellular => write!(f, "cellular"),
            Self::Wifi => write!(f, "wifi"),
        }
    }
}

/// Name-prefix tables identifying cellular and WiFi interfaces.
///
/// An interface belongs to a class when its name starts with any of the
/// class's prefixes. The default table is the Apple mobile convention.
///
/// # Examples
///
/// ```
/// use ifinfo::provider::{InterfaceClass, InterfaceNaming};
///
/// let naming = InterfaceNaming::default();
/// assert!(naming.matches(InterfaceClass::Cellular, "pdp_ip0"));
/// assert!(naming.matches(InterfaceClass::Wifi, "en0"));
/// assert!(!naming.matches(InterfaceClass::Wifi, "lo0"));
///
/// // Linux-flavored table for other targets
/// let naming = InterfaceNaming::new(["rmnet"], ["wlan"]);
/// assert!(naming.matches(InterfaceClass::Cellular, "rmnet_data0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceNaming {
    cellular_prefixes: Vec<String>,
    wifi_prefixes: Vec<String>,
}

impl InterfaceNaming {
    /// Creates a naming table from explicit prefix sets.
    #[must_use]
    pub fn new(
        cellular_prefixes: impl IntoIterator<Item = impl Into<String>>,
        wifi_prefixes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            cellular_prefixes: cellular_prefixes.into_iter().map(Into::into).collect(),
            wifi_prefixes: wifi_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// The Apple mobile convention: `pdp_ip*` cellular, `en*` WiFi.
    #[must_use]
    pub fn apple() -> Self {
        Self::new(["pdp_ip"], ["en"])
    }

    /// Returns true if `name` belongs to `class` under this table.
    #[must_use]
    pub fn matches(&self, class: InterfaceClass, name: &str) -> bool {
        let prefixes = match class {
            InterfaceClass::Cellular => &self.cellular_prefixes,
            InterfaceClass::Wifi => &self.wifi_prefixes,
        };
        prefixes.iter().any(|prefix| name.starts_with(prefix))
    }

    /// Returns a reference to the cellular prefix set.
    #[must_use]
    pub fn cellular_prefixes(&self) -> &[String] {
        &self.cellular_prefixes
    }

    /// Returns a reference to the WiFi prefix set.
    #[must_use]
    pub fn wifi_prefixes(&self) -> &[String] {
        &self.wifi_prefixes
    }
}

impl Default for InterfaceNaming {
    fn default() -> Self {
        Self::apple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_apple_cellular_names() {
        let naming = InterfaceNaming::default();
        assert!(naming.matches(InterfaceClass::Cellular, "pdp_ip0"));
        assert!(naming.matches(InterfaceClass::Cellular, "pdp_ip3"));
        assert!(!naming.matches(InterfaceClass::Cellular, "en0"));
    }

    #[test]
    fn default_matches_apple_wifi_names() {
        let naming = InterfaceNaming::default();
        assert!(naming.matches(InterfaceClass::Wifi, "en0"));
        assert!(naming.matches(InterfaceClass::Wifi, "en1"));
        assert!(!naming.matches(InterfaceClass::Wifi, "pdp_ip0"));
        assert!(!naming.matches(InterfaceClass::Wifi, "lo0"));
    }

    #[test]
    fn custom_prefixes_replace_the_defaults() {
        let naming = InterfaceNaming::new(["rmnet"], ["wlan"]);
        assert!(naming.matches(InterfaceClass::Cellular, "rmnet_data0"));
        assert!(naming.matches(InterfaceClass::Wifi, "wlan0"));
        assert!(!naming.matches(InterfaceClass::Wifi, "en0"));
    }

    #[test]
    fn empty_prefix_set_matches_nothing() {
        let naming = InterfaceNaming::new(Vec::<String>::new(), Vec::<String>::new());
        assert!(!naming.matches(InterfaceClass::Cellular, "pdp_ip0"));
        assert!(!naming.matches(InterfaceClass::Wifi, "en0"));
    }

    #[test]
    fn class_display_formats_correctly() {
        assert_eq!(format!("{}", InterfaceClass::Cellular), "cellular");
        assert_eq!(format!("{}", InterfaceClass::Wifi), "wifi");
    }
}
