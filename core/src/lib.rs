//! # Scoper Core
//!
//! The stream side of scoper: build a [`scoper_common::network::scope::Scope`] from the
//! declared ranges, then filter or highlight input lines against it.
//!
//! * **[`loader`]**: ranges from the command line and a range file, sealed into a scope.
//! * **[`finder`]**: address-shaped substrings of a line.
//! * **[`input`]**: the files and stdin to read.
//! * **[`filter`]**: per-line decisions, batched across worker threads.

pub mod filter;
pub mod finder;
pub mod input;
pub mod loader;
