//! The EtherType-like tag identifying the layer-3 protocol inside a frame.

use crate::{error::DltError, utils::encoded_type};

encoded_type!(
    /// The layer-3 protocol carried inside a link frame, as an EtherType value.
    ///
    /// Unrecognized EtherTypes are carried in their wire representation.
    pub enum EtherProtocol(u16) {
        /// IPv4.
        Ipv4 = 0x0800,
        /// IPv6.
        Ipv6 = 0x86dd,
        /// ARP.
        Arp = 0x0806,
        /// IEEE 802.1Q VLAN tagging.
        Vlan = 0x8100;
        /// Any other EtherType, in its wire representation.
        Other = _,
    }
);

impl EtherProtocol {
    /// Determines the layer-3 protocol from the IP version nibble of the
    /// first payload byte, for link types whose framing carries no protocol
    /// field of its own.
    ///
    /// Version 4 maps to [`EtherProtocol::Ipv4`] and 6 to
    /// [`EtherProtocol::Ipv6`]; every other version is an error.
    pub fn from_ip_version(first_byte: u8) -> Result<Self, DltError> {
        match first_byte >> 4 {
            4 => Ok(Self::Ipv4),
            6 => Ok(Self::Ipv6),
            version => Err(DltError::UnrecognizedPayload(version)),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_utils::param_test;

    use super::*;

    param_test! {
        converts_from_wire_value: [
            ipv4: (0x0800, EtherProtocol::Ipv4),
            ipv6: (0x86dd, EtherProtocol::Ipv6),
            arp: (0x0806, EtherProtocol::Arp),
            unrecognized: (0x88cc, EtherProtocol::Other(0x88cc)),
        ]
    }
    fn converts_from_wire_value(value: u16, expected: EtherProtocol) {
        assert_eq!(EtherProtocol::from(value), expected);
        assert_eq!(u16::from(expected), value);
    }

    param_test! {
        detects_ip_version: [
            ipv4: (0x45, EtherProtocol::Ipv4),
            ipv6: (0x60, EtherProtocol::Ipv6),
            ipv4_short_header: (0x40, EtherProtocol::Ipv4),
        ]
    }
    fn detects_ip_version(first_byte: u8, expected: EtherProtocol) {
        assert_eq!(EtherProtocol::from_ip_version(first_byte), Ok(expected));
    }

    param_test! {
        rejects_non_ip_versions: [
            zero: (0x00),
            five: (0x50),
            fifteen: (0xf0),
        ]
    }
    fn rejects_non_ip_versions(first_byte: u8) {
        assert_eq!(
            EtherProtocol::from_ip_version(first_byte),
            Err(DltError::UnrecognizedPayload(first_byte >> 4))
        );
    }
}
