//! # Address Model
//!
//! A family-tagged, fixed-width numeric address. IPv4 values occupy the low 32 bits,
//! IPv6 values the full 128; comparisons only make sense within one family.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Guesses the family of a textual address or range by the presence of `:`.
    pub fn detect(s: &str) -> Self {
        if s.contains(':') { Self::V6 } else { Self::V4 }
    }

    pub const fn bits(self) -> u32 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }

    pub const fn segment_count(self) -> usize {
        match self {
            Self::V4 => 4,
            Self::V6 => 8,
        }
    }

    pub const fn segment_bits(self) -> u32 {
        match self {
            Self::V4 => 8,
            Self::V6 => 16,
        }
    }

    pub const fn separator(self) -> char {
        match self {
            Self::V4 => '.',
            Self::V6 => ':',
        }
    }

    /// Radix of a segment literal: decimal octets, hexadecimal groups.
    pub const fn radix(self) -> u32 {
        match self {
            Self::V4 => 10,
            Self::V6 => 16,
        }
    }

    pub const fn max_segment(self) -> u16 {
        match self {
            Self::V4 => u8::MAX as u16,
            Self::V6 => u16::MAX,
        }
    }

    pub const fn max_value(self) -> u128 {
        match self {
            Self::V4 => u32::MAX as u128,
            Self::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => f.write_str("IPv4"),
            Self::V6 => f.write_str("IPv6"),
        }
    }
}

/// An IP address as an unsigned integer plus its family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    family: Family,
    value: u128,
}

impl Address {
    pub const fn v4(value: u32) -> Self {
        Self {
            family: Family::V4,
            value: value as u128,
        }
    }

    pub const fn v6(value: u128) -> Self {
        Self {
            family: Family::V6,
            value,
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Big-endian numeric value, zero-extended to 128 bits for IPv4.
    pub fn value(&self) -> u128 {
        self.value
    }

    /// Value of the segment at `index`, counting from the most significant one.
    ///
    /// Octets for IPv4, 16-bit groups for IPv6.
    pub fn segment(&self, index: usize) -> u16 {
        let bits = self.family.segment_bits();
        let shift = bits * (self.family.segment_count() - 1 - index) as u32;
        ((self.value >> shift) & ((1u128 << bits) - 1)) as u16
    }

    pub fn segments(&self) -> impl Iterator<Item = u16> + '_ {
        (0..self.family.segment_count()).map(|index| self.segment(index))
    }

    /// The next address in the family, if there is one.
    pub fn checked_add(&self, delta: u128) -> Option<Self> {
        self.value
            .checked_add(delta)
            .filter(|value| *value <= self.family.max_value())
            .map(|value| Self { family: self.family, value })
    }

    pub fn checked_sub(&self, delta: u128) -> Option<Self> {
        self.value
            .checked_sub(delta)
            .map(|value| Self { family: self.family, value })
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self::v4(u32::from(ip))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Self::v6(u128::from(ip))
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(addr.value as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(addr.value)),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        IpAddr::from(*self).fmt(f)
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

/// Strictly parses a single address literal.
///
/// Accepts dotted-quad IPv4 and colon-hex IPv6 with at most one `::`.
/// IPv4-mapped IPv6 literals (`::ffff:1.2.3.4`) stay IPv6.
pub fn parse_address(s: &str) -> Result<Address, ParseError> {
    let parsed = match Family::detect(s) {
        Family::V4 => s.parse::<Ipv4Addr>().map(Address::from),
        Family::V6 => s.parse::<Ipv6Addr>().map(Address::from),
    };

    parsed.map_err(|_| ParseError::InvalidAddress {
        input: s.to_string(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
