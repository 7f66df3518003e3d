//! # Scope
//!
//! The set of declared ranges an address is tested against.
//!
//! A [`ScopeBuilder`] only accepts ranges; [`ScopeBuilder::seal`] consumes it and yields a
//! read-only [`Scope`] that only answers queries. A `Scope` is `Send + Sync` and can be
//! shared by reference across worker threads without locking.

use tracing::debug;

use super::address::Address;
use super::range::Range;
use crate::error::ScopeError;

/// Append-only collection of ranges, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct ScopeBuilder {
    ranges: Vec<Range>,
}

impl ScopeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, range: Range) {
        debug!("Registered range {range}");
        self.ranges.push(range);
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Finishes construction. A scope without ranges is a configuration error.
    pub fn seal(self) -> Result<Scope, ScopeError> {
        if self.ranges.is_empty() {
            return Err(ScopeError::EmptyScope);
        }

        debug!("Scope sealed with {} ranges", self.ranges.len());
        Ok(Scope {
            ranges: self.ranges.into_boxed_slice(),
        })
    }
}

impl Extend<Range> for ScopeBuilder {
    fn extend<I: IntoIterator<Item = Range>>(&mut self, iter: I) {
        for range in iter {
            self.add(range);
        }
    }
}

impl FromIterator<Range> for ScopeBuilder {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

/// A sealed, non-empty, queryable scope.
#[derive(Clone, Debug)]
pub struct Scope {
    ranges: Box<[Range]>,
}

impl Scope {
    /// True iff any range matches. Stops at the first hit.
    pub fn contains(&self, addr: Address) -> bool {
        self.ranges.iter().any(|range| range.matches(addr))
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
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
