//! # Range Parser
//!
//! Turns one textual range into a [`Range`].
//!
//! Supported formats, tried in this order by delimiter:
//! * **CIDR**: "Network/Prefix" (e.g., `192.168.1.0/22`, `fe80::1:2:3:4/64`).
//! * **Bounds**: "A_B" in either order (e.g., `192.168.1.0_192.168.2.254`).
//! * **Segmented**: per-segment lists and spans (e.g., `192.168.1-2,5.0-255`, `fe80::1:2:3:1,2,4-a`).
//! * **Host**: a single IPv4/IPv6 address (e.g., `192.168.1.1`, `fe80::1:2:3:4`).
//!
//! The first form whose delimiter is present owns the string; a failure there is final.

use std::iter;
use std::str::FromStr;

use super::address::{Family, parse_address};
use super::range::{Bounds, Range, Segments};
use super::segment::{SegmentSet, parse_segment};
use crate::error::ParseError;

const CIDR_SEPARATOR: char = '/';
const BOUND_SEPARATOR: char = '_';
const SEGMENT_MARKERS: [char; 2] = ['-', ','];
const ELISION: &str = "::";

/// Structural forms of a range string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form {
    Cidr,
    Bound,
    Segmented,
    Host,
}

impl Form {
    /// Dispatch priority.
    pub const ORDER: [Form; 4] = [Form::Cidr, Form::Bound, Form::Segmented, Form::Host];

    /// Picks the form that owns `s`.
    pub fn classify(s: &str) -> Form {
        Self::ORDER
            .into_iter()
            .find(|form| form.claims(s))
            .unwrap_or(Form::Host)
    }

    fn claims(self, s: &str) -> bool {
        match self {
            Form::Cidr => s.contains(CIDR_SEPARATOR),
            Form::Bound => s.contains(BOUND_SEPARATOR),
            Form::Segmented => s.contains(SEGMENT_MARKERS),
            Form::Host => true,
        }
    }

    fn parse(self, s: &str) -> Result<Range, ParseError> {
        match self {
            Form::Cidr => parse_cidr(s),
            Form::Bound => parse_bounds(s),
            Form::Segmented => parse_segmented(s),
            Form::Host => parse_host(s),
        }
    }
}

impl FromStr for Range {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s)
    }
}

/// Parses a range expression. Never yields a partial range.
pub fn parse_range(s: &str) -> Result<Range, ParseError> {
    Form::classify(s).parse(s)
}

/// Parses CIDR notation like "192.168.1.0/24".
fn parse_cidr(s: &str) -> Result<Range, ParseError> {
    let invalid = |reason: String| ParseError::InvalidCidr {
        input: s.to_string(),
        reason,
    };

    let Some((ip_str, prefix_str)) = s.split_once(CIDR_SEPARATOR) else {
        return Err(invalid("missing prefix".to_string()));
    };

    let base = parse_address(ip_str).map_err(|_| invalid(format!("invalid address '{ip_str}'")))?;

    if prefix_str.is_empty() || !prefix_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(format!("invalid prefix '{prefix_str}'")));
    }
    let prefix = prefix_str
        .parse::<u8>()
        .map_err(|e| invalid(format!("invalid prefix '{prefix_str}': {e}")))?;

    Bounds::cidr(base, prefix)
        .map(Range::from)
        .ok_or_else(|| invalid(format!("prefix {prefix} > {}", base.family().bits())))
}

/// Parses an explicit pair like "10.0.0.1_10.0.0.50". Endpoint order does not matter.
fn parse_bounds(s: &str) -> Result<Range, ParseError> {
    let invalid = || ParseError::InvalidRange { input: s.to_string() };

    let (start_str, end_str) = s.split_once(BOUND_SEPARATOR).ok_or_else(invalid)?;
    let start = parse_address(start_str).map_err(|_| invalid())?;
    let end = parse_address(end_str).map_err(|_| invalid())?;

    Bounds::new(start, end)
        .map(Range::from)
        .ok_or_else(|| ParseError::FamilyMismatch { input: s.to_string() })
}

/// Parses the per-segment form like "192.168.1-2,5.0-255".
fn parse_segmented(s: &str) -> Result<Range, ParseError> {
    let family = Family::detect(s);

    let sets = split_segments(s, family)?
        .into_iter()
        .map(|segment| match segment {
            Some(text) => parse_segment(text, family, s),
            None => Ok(SegmentSet::single(0)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let found = sets.len();
    let segments = Segments::new(family, sets).ok_or_else(|| ParseError::InvalidSegmentCount {
        input: s.to_string(),
        expected: family.segment_count(),
        found,
    })?;

    // "10.0.0.1,1" names one address.
    Ok(match segments.as_single() {
        Some(addr) => Range::from(Bounds::single(addr)),
        None => Range::from(segments),
    })
}

/// Splits `s` into exactly one entry per segment of `family`.
///
/// A single IPv6 `::` expands into as many zero segments (`None`) as needed.
fn split_segments(s: &str, family: Family) -> Result<Vec<Option<&str>>, ParseError> {
    let expected = family.segment_count();
    let sep = family.separator();
    let count_error = |found: usize| ParseError::InvalidSegmentCount {
        input: s.to_string(),
        expected,
        found,
    };

    let segments: Vec<Option<&str>> = match (family, s.split_once(ELISION)) {
        (Family::V6, Some((head, tail))) => {
            if tail.contains(ELISION) {
                return Err(ParseError::InvalidRange { input: s.to_string() });
            }

            let head = split_part(head, sep);
            let tail = split_part(tail, sep);

            let present = head.len() + tail.len();
            if present >= expected {
                return Err(count_error(present));
            }

            head.into_iter()
                .chain(iter::repeat_n(None, expected - present))
                .chain(tail)
                .collect()
        }
        _ => s.split(sep).map(Some).collect(),
    };

    if segments.len() != expected {
        return Err(count_error(segments.len()));
    }
    Ok(segments)
}

fn split_part(part: &str, sep: char) -> Vec<Option<&str>> {
    if part.is_empty() {
        Vec::new()
    } else {
        part.split(sep).map(Some).collect()
    }
}

/// Parses a single IP address.
fn parse_host(s: &str) -> Result<Range, ParseError> {
    parse_address(s)
        .map(|addr| Range::from(Bounds::single(addr)))
        .map_err(|_| ParseError::InvalidRange { input: s.to_string() })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
