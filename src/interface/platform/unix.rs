//! Unix interface enumeration using `getifaddrs(3)`.

use std::ffi::CStr;
use std::mem::MaybeUninit;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::interface::{EnumerationError, InterfaceFlags, InterfaceRecord, InterfaceSource};

/// Unix implementation of [`InterfaceSource`] using `getifaddrs(3)`.
///
/// Each `ifaddrs` node carrying an IPv4 or IPv6 address becomes one
/// [`InterfaceRecord`]; link-layer and other address families are skipped.
/// Enumeration order is whatever the OS reports.
///
/// # Example
///
/// ```no_run
/// use ifinfo::interface::{InterfaceSource, platform::UnixSource};
///
/// let source = UnixSource::new();
/// for record in source.snapshot().expect("enumeration failed") {
///     println!("{}: {}", record.name, record.address);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixSource {
    // Currently no configuration needed, but struct allows future extension
    _private: (),
}

impl UnixSource {
    /// Creates a new Unix interface source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceSource for UnixSource {
    fn snapshot(&self) -> Result<Vec<InterfaceRecord>, EnumerationError> {
        unix_records()
    }
}

/// Walks the `getifaddrs` list and collects one record per INET entry.
fn unix_records() -> Result<Vec<InterfaceRecord>, EnumerationError> {
    let mut addrs: MaybeUninit<*mut libc::ifaddrs> = MaybeUninit::uninit();
    // SAFETY: getifaddrs writes a valid list head through the provided
    // pointer on success and returns non-zero on failure.
    if unsafe { libc::getifaddrs(addrs.as_mut_ptr()) } != 0 {
        return Err(EnumerationError::Os(std::io::Error::last_os_error()));
    }
    // SAFETY: getifaddrs returned zero, so the head is initialized.
    let head = unsafe { addrs.assume_init() };

    let mut records = Vec::new();
    let mut cursor = head;
    while !cursor.is_null() {
        // SAFETY: the list nodes stay valid until freeifaddrs below.
        let ifa: &libc::ifaddrs = unsafe { &*cursor };
        if let Some(record) = parse_node(ifa) {
            records.push(record);
        }
        cursor = ifa.ifa_next;
    }

    // SAFETY: head came from getifaddrs and is freed exactly once, after
    // all borrows of the list have ended.
    unsafe { libc::freeifaddrs(head) };

    Ok(records)
}

/// Converts one `ifaddrs` node into a record.
///
/// Returns `None` for nodes without an INET address (link-layer entries) or
/// with an unparseable name.
fn parse_node(ifa: &libc::ifaddrs) -> Option<InterfaceRecord> {
    let address = sockaddr_to_ip(ifa.ifa_addr.cast_const())?;
    // SAFETY: ifa_name points at a NUL-terminated string owned by the list.
    let name = unsafe { CStr::from_ptr(ifa.ifa_name) }.to_str().ok()?;

    let mut record = InterfaceRecord::new(name, address, parse_flags(ifa.ifa_flags));
    if let Some(netmask) = sockaddr_to_ip(ifa.ifa_netmask.cast_const()) {
        record = record.with_netmask(netmask);
    }
    if let Some(broadcast) = sockaddr_to_ip(broadcast_ptr(ifa)) {
        record = record.with_broadcast(broadcast);
    }
    Some(record)
}

/// Extracts the flags the query layer cares about from the OS flag word.
fn parse_flags(raw: libc::c_uint) -> InterfaceFlags {
    let has = |flag: libc::c_int| raw & (flag as libc::c_uint) != 0;
    InterfaceFlags {
        up: has(libc::IFF_UP),
        running: has(libc::IFF_RUNNING),
        loopback: has(libc::IFF_LOOPBACK),
        point_to_point: has(libc::IFF_POINTOPOINT),
    }
}

/// The broadcast-or-destination pointer lives in a union whose field name
/// differs between the Linux and BSD-derived `ifaddrs` layouts.
#[cfg(any(target_os = "linux", target_os = "android"))]
fn broadcast_ptr(ifa: &libc::ifaddrs) -> *const libc::sockaddr {
    ifa.ifa_ifu.cast_const()
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn broadcast_ptr(ifa: &libc::ifaddrs) -> *const libc::sockaddr {
    ifa.ifa_dstaddr.cast_const()
}

/// Decodes an INET sockaddr into an [`IpAddr`].
///
/// Returns `None` for null pointers and non-INET families.
fn sockaddr_to_ip(sa: *const libc::sockaddr) -> Option<IpAddr> {
    if sa.is_null() {
        return None;
    }
    // SAFETY: non-null sockaddr pointers from getifaddrs point at a valid
    // sockaddr whose concrete layout is selected by sa_family.
    match i32::from(unsafe { (*sa).sa_family }) {
        libc::AF_INET => {
            // SAFETY: sa_family == AF_INET guarantees sockaddr_in layout.
            let sin = unsafe { &*sa.cast::<libc::sockaddr_in>() };
            Some(IpAddr::V4(Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr))))
        }
        libc::AF_INET6 => {
            // SAFETY: sa_family == AF_INET6 guarantees sockaddr_in6 layout.
            let sin6 = unsafe { &*sa.cast::<libc::sockaddr_in6>() };
            Some(IpAddr::V6(Ipv6Addr::from(sin6.sin6_addr.s6_addr)))
        }
        _ => None,
    }
}
