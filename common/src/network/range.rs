//! # IP Range Model
//!
//! The normalized result of parsing one range expression. A [`Range`] is either a
//! continuous pair of [`Bounds`] (single address, CIDR, `a_b`) or a per-segment
//! constraint ([`Segments`], e.g. `192.168.1-2,5.0-255`). Both answer the same question
//! through [`Range::matches`].

use std::fmt;

use super::address::{Address, Family};
use super::segment::SegmentSet;

/// Inclusive, same-family address bounds with `low <= high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    low: Address,
    high: Address,
}

impl Bounds {
    /// Bounds spanning `a` and `b` in either order. `None` when the families differ.
    pub fn new(a: Address, b: Address) -> Option<Self> {
        if a.family() != b.family() {
            return None;
        }

        let (low, high) = if a.value() <= b.value() { (a, b) } else { (b, a) };
        Some(Self { low, high })
    }

    pub fn single(addr: Address) -> Self {
        Self {
            low: addr,
            high: addr,
        }
    }

    /// The network block of `base` with the given prefix length.
    ///
    /// Host bits are cleared for `low` and set for `high`. `None` when the prefix is longer
    /// than the family's width.
    pub fn cidr(base: Address, prefix: u8) -> Option<Self> {
        let family = base.family();
        let prefix = u32::from(prefix);
        if prefix > family.bits() {
            return None;
        }

        let host_bits = family.bits() - prefix;
        let host_mask = if host_bits == u128::BITS {
            u128::MAX
        } else {
            (1u128 << host_bits) - 1
        };

        let network = base.value() & !host_mask & family.max_value();
        let broadcast = network | host_mask;

        Some(Self {
            low: with_value(family, network),
            high: with_value(family, broadcast),
        })
    }

    pub fn low(&self) -> Address {
        self.low
    }

    pub fn high(&self) -> Address {
        self.high
    }

    pub fn family(&self) -> Family {
        self.low.family()
    }

    pub fn contains(&self, addr: Address) -> bool {
        addr.family() == self.family()
            && self.low.value() <= addr.value()
            && addr.value() <= self.high.value()
    }
}

fn with_value(family: Family, value: u128) -> Address {
    match family {
        Family::V4 => Address::v4(value as u32),
        Family::V6 => Address::v6(value),
    }
}

/// One admissible-value set per segment of the family.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segments {
    family: Family,
    sets: Vec<SegmentSet>,
}

impl Segments {
    /// `None` unless there is exactly one set per segment of `family`.
    pub fn new(family: Family, sets: Vec<SegmentSet>) -> Option<Self> {
        (sets.len() == family.segment_count()).then_some(Self { family, sets })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn contains(&self, addr: Address) -> bool {
        addr.family() == self.family
            && self
                .sets
                .iter()
                .zip(addr.segments())
                .all(|(set, value)| set.contains(value))
    }

    /// Collapses to a single address when every set holds exactly one value.
    pub fn as_single(&self) -> Option<Address> {
        let bits = self.family.segment_bits();
        self.sets.iter().try_fold(0u128, |acc, set| {
            set.as_single().map(|value| (acc << bits) | u128::from(value))
        })
        .map(|value| with_value(self.family, value))
    }
}

/// A parsed IP range. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Range {
    Bound(Bounds),
    Segmented(Segments),
}

impl Range {
    pub fn family(&self) -> Family {
        match self {
            Self::Bound(bounds) => bounds.family(),
            Self::Segmented(segments) => segments.family(),
        }
    }

    /// Whether `addr` falls inside this range. Addresses of another family never match.
    pub fn matches(&self, addr: Address) -> bool {
        match self {
            Self::Bound(bounds) => bounds.contains(addr),
            Self::Segmented(segments) => segments.contains(addr),
        }
    }
}

impl From<Bounds> for Range {
    fn from(bounds: Bounds) -> Self {
        Self::Bound(bounds)
    }
}

impl From<Segments> for Range {
    fn from(segments: Segments) -> Self {
        Self::Segmented(segments)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bound(bounds) if bounds.low == bounds.high => write!(f, "{}", bounds.low),
            Self::Bound(bounds) => write!(f, "{}_{}", bounds.low, bounds.high),
            Self::Segmented(segments) => {
                let sep = segments.family.separator();
                for (idx, set) in segments.sets.iter().enumerate() {
                    if idx > 0 {
                        write!(f, "{sep}")?;
                    }
                    write!(f, "{}", set.display(segments.family))?;
                }
                Ok(())
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
