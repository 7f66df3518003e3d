//! End-to-end tests across the loader, finder and filter.

mod scope;
