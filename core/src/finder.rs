//! Extracts address-shaped substrings from free text.
//!
//! The pattern is deliberately loose: anything that looks like an address is reported and
//! then strictly re-parsed, so invalid lookalikes (times, MAC addresses, `999.1.1.1`) are
//! dropped there rather than here.

use std::sync::OnceLock;

use regex::Regex;
use scoper_common::network::address::{Address, parse_address};

/// IPv6-shaped runs: at least two colons, optionally ending in a dotted quad.
const IPV6_PATTERN: &str =
    r"(?:[0-9A-Fa-f]{0,4}:){2,7}(?:(?:[0-9]{1,3}\.){3}[0-9]{1,3}|[0-9A-Fa-f]{1,4})?";
const IPV4_PATTERN: &str = r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b";

#[allow(clippy::unwrap_used)] // Static pattern is hardcoded and valid
fn ip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(&format!("{IPV6_PATTERN}|{IPV4_PATTERN}")).unwrap())
}

/// An address-shaped substring and its byte span in the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Address-shaped substrings of `line`, left to right, non-overlapping.
pub fn find_candidates(line: &str) -> impl Iterator<Item = Candidate<'_>> {
    ip_pattern()
        .find_iter(line)
        .map(|m| Candidate {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
        .filter(|candidate| !candidate.text.contains(':') || stands_alone(line, candidate))
}

/// Whether an IPv6-shaped match is delimited on both sides, so `std::io` or `Foo::bar`
/// never yield a piece of a word.
///
/// A trailing `.` is fine unless a digit follows it.
fn stands_alone(line: &str, candidate: &Candidate<'_>) -> bool {
    let joins = |c: char| c.is_ascii_alphanumeric() || c == ':';

    let before = line[..candidate.start].chars().next_back();
    if before.is_some_and(|c| joins(c) || c == '.') {
        return false;
    }

    let mut after = line[candidate.end..].chars();
    match after.next() {
        Some(c) if joins(c) => false,
        Some('.') => !after.next().is_some_and(|c| c.is_ascii_digit()),
        _ => true,
    }
}

/// Candidates that are real addresses, paired with the parsed value.
pub fn find_addresses(line: &str) -> impl Iterator<Item = (Candidate<'_>, Address)> {
    find_candidates(line)
        .filter_map(|candidate| parse_address(candidate.text).ok().map(|addr| (candidate, addr)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
