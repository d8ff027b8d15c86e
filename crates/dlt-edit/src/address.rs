//! Link-layer addresses exposed by framing handlers.

use std::fmt::{Display, Formatter};

/// A 48-bit IEEE 802 MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    /// The broadcast address, ff:ff:ff:ff:ff:ff.
    pub const BROADCAST: Self = Self([0xff; 6]);

    /// Creates a MAC address from its six octets.
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Returns the six octets of this address.
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Returns true if the group bit of this address is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }
}

impl Display for MacAddr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

/// A link-layer address parsed out of a frame by a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAddr {
    /// An Ethernet-style MAC address.
    Ethernet(MacAddr),
}

/// The kind of link-layer addressing a handler's framing supports.
///
/// Constant per handler; the zero-length-header link type carries no
/// address at all and reports [`AddressKind::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressKind {
    /// The framing carries no link-layer address.
    #[default]
    None,
    /// The framing carries Ethernet-style MAC addresses.
    Ethernet,
}

impl LinkAddr {
    /// Returns the addressing scheme this address belongs to.
    pub fn kind(&self) -> AddressKind {
        match self {
            LinkAddr::Ethernet(_) => AddressKind::Ethernet,
        }
    }
}
