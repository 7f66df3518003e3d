//! # Network Ranges
//!
//! Data flows leaf-first through these modules:
//! text → [`parser`] (using [`segment`] for per-segment lists) → [`range::Range`]
//! → collected by [`scope::ScopeBuilder`] → sealed into a queryable [`scope::Scope`].

pub mod address;
pub mod parser;
pub mod range;
pub mod scope;
pub mod segment;
