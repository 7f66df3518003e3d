//! # Scoper Common
//!
//! The range parsing and containment engine shared by every scoper crate.
//!
//! * **[`network`]**: addresses, range grammars and the [`network::scope::Scope`] they build.
//! * **[`error`]**: typed failures for parsing and scope construction.
//! * **[`config`]**: runtime switches resolved by the CLI.

pub mod config;
pub mod error;
pub mod network;
