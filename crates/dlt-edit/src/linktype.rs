//! Link-type (DLT) tags identifying the layer-2 framing of a capture.

use std::fmt::{Display, Formatter};

/// A pcap data-link type (DLT) value, identifying the layer-2 framing format
/// of a captured packet.
///
/// Values are immutable once defined and follow the registry used by pcap
/// capture files. Only the constants a rewriting pipeline commonly meets are
/// named here; any other value can still be carried.
///
/// # Examples
///
/// ```
/// # use dlt_edit::LinkType;
/// assert_eq!(LinkType::RAW, LinkType::new(101));
/// assert_eq!(u16::from(LinkType::EN10MB), 1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct LinkType(u16);

impl LinkType {
    /// BSD loopback encapsulation.
    pub const NULL: Self = Self(0);
    /// Ethernet (10Mb and up).
    pub const EN10MB: Self = Self(1);
    /// Raw IP: a zero-length link header directly followed by an IPv4 or
    /// IPv6 packet.
    pub const RAW: Self = Self(101);
    /// Cisco HDLC.
    pub const C_HDLC: Self = Self(104);
    /// IEEE 802.11 wireless.
    pub const IEEE802_11: Self = Self(105);
    /// OpenBSD loopback encapsulation.
    pub const LOOP: Self = Self(108);
    /// Linux cooked capture.
    pub const LINUX_SLL: Self = Self(113);

    /// Creates a link type from its pcap DLT value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the pcap DLT value of this link type.
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl Display for LinkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::NULL => write!(f, "NULL"),
            Self::EN10MB => write!(f, "EN10MB"),
            Self::RAW => write!(f, "RAW"),
            Self::C_HDLC => write!(f, "C_HDLC"),
            Self::IEEE802_11 => write!(f, "IEEE802_11"),
            Self::LOOP => write!(f, "LOOP"),
            Self::LINUX_SLL => write!(f, "LINUX_SLL"),
            Self(other) => write!(f, "DLT({})", other),
        }
    }
}

impl From<u16> for LinkType {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<LinkType> for u16 {
    fn from(value: LinkType) -> Self {
        value.0
    }
}
