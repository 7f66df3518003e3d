//! Error types for range parsing and scope construction.
//!
//! Every parse failure carries the original input so the caller can show the user
//! exactly which range needs fixing.

use thiserror::Error;

/// Failure to turn text into an [`crate::network::address::Address`] or a
/// [`crate::network::range::Range`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A per-segment sub-expression is malformed or out of numeric range.
    #[error("invalid segment {segment:?} in IP range {input:?}")]
    InvalidSegment { input: String, segment: String },

    /// The segmented form has the wrong number of segments for its family.
    #[error("IP range {input:?} has {found} segments, expected {expected}")]
    InvalidSegmentCount {
        input: String,
        expected: usize,
        found: usize,
    },

    /// Malformed base address or out-of-range prefix length.
    #[error("invalid CIDR {input:?}: {reason}")]
    InvalidCidr { input: String, reason: String },

    /// The two endpoints of an explicit bound range are of different families.
    #[error("IP range {input:?} mixes IPv4 and IPv6 endpoints")]
    FamilyMismatch { input: String },

    /// The string matches no known form, or an address literal in it is malformed.
    #[error("invalid IP range: {input:?}")]
    InvalidRange { input: String },

    /// A bare address literal could not be parsed.
    #[error("invalid IP address: {input:?}")]
    InvalidAddress { input: String },
}

/// Failure to seal a [`crate::network::scope::ScopeBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("empty scope")]
    EmptyScope,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
