//! # Segment Grammar
//!
//! Parses the sub-syntax of one address segment, e.g. `1-2,5` or `4-a`, into the set of
//! values that segment may take.

use std::fmt;

use super::address::Family;
use crate::error::ParseError;

const ITEM_SEPARATOR: char = ',';
const SPAN_SEPARATOR: char = '-';

/// Admissible values for one segment.
///
/// Stored as sorted, disjoint, non-adjacent inclusive spans so that `0-ffff` costs one
/// entry and membership is a binary search.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SegmentSet {
    spans: Vec<(u16, u16)>,
}

impl SegmentSet {
    pub fn single(value: u16) -> Self {
        Self {
            spans: vec![(value, value)],
        }
    }

    /// Builds a set from arbitrary inclusive spans, collapsing overlaps and duplicates.
    ///
    /// Spans with `low > high` are ignored.
    pub fn from_spans(spans: impl IntoIterator<Item = (u16, u16)>) -> Self {
        let mut sorted: Vec<(u16, u16)> = spans.into_iter().filter(|(low, high)| low <= high).collect();
        sorted.sort_unstable();

        let mut merged: Vec<(u16, u16)> = Vec::with_capacity(sorted.len());
        for (low, high) in sorted {
            match merged.last_mut() {
                Some((_, last_high)) if low <= last_high.saturating_add(1) => {
                    *last_high = (*last_high).max(high);
                }
                _ => merged.push((low, high)),
            }
        }

        Self { spans: merged }
    }

    pub fn contains(&self, value: u16) -> bool {
        let idx = self.spans.partition_point(|&(_, high)| high < value);
        self.spans.get(idx).is_some_and(|&(low, _)| low <= value)
    }

    /// The only admissible value, if the set has exactly one.
    pub fn as_single(&self) -> Option<u16> {
        match self.spans.as_slice() {
            [(low, high)] if low == high => Some(*low),
            _ => None,
        }
    }

    pub fn spans(&self) -> &[(u16, u16)] {
        &self.spans
    }

    /// Adapter that renders the set in segment syntax for `family`.
    pub fn display(&self, family: Family) -> DisplaySegment<'_> {
        DisplaySegment { set: self, family }
    }
}

pub struct DisplaySegment<'a> {
    set: &'a SegmentSet,
    family: Family,
}

impl fmt::Display for DisplaySegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, &(low, high)) in self.set.spans.iter().enumerate() {
            if idx > 0 {
                write!(f, "{ITEM_SEPARATOR}")?;
            }
            write_value(f, self.family, low)?;
            if high != low {
                write!(f, "{SPAN_SEPARATOR}")?;
                write_value(f, self.family, high)?;
            }
        }
        Ok(())
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, family: Family, value: u16) -> fmt::Result {
    match family {
        Family::V4 => write!(f, "{value}"),
        Family::V6 => write!(f, "{value:x}"),
    }
}

/// Parses one segment of the range string `input`.
///
/// The segment is a comma-separated list of items, each a literal or a `low-high` span.
/// Literals are decimal (0-255) for IPv4 and hexadecimal (0-ffff) for IPv6.
pub fn parse_segment(segment: &str, family: Family, input: &str) -> Result<SegmentSet, ParseError> {
    let invalid = || ParseError::InvalidSegment {
        input: input.to_string(),
        segment: segment.to_string(),
    };

    let spans = segment
        .split(ITEM_SEPARATOR)
        .map(|item| parse_item(item, family).ok_or_else(invalid))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SegmentSet::from_spans(spans))
}

fn parse_item(item: &str, family: Family) -> Option<(u16, u16)> {
    let (low, high) = match item.split_once(SPAN_SEPARATOR) {
        Some((low, high)) => (parse_literal(low, family)?, parse_literal(high, family)?),
        None => {
            let value = parse_literal(item, family)?;
            (value, value)
        }
    };

    (low <= high).then_some((low, high))
}

fn parse_literal(literal: &str, family: Family) -> Option<u16> {
    let radix = family.radix();
    // from_str_radix alone would let a leading '+' through.
    if literal.is_empty() || !literal.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let value = u32::from_str_radix(literal, radix).ok()?;
    u16::try_from(value)
        .ok()
        .filter(|value| *value <= family.max_segment())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
