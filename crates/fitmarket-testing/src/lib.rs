//! Test utilities for FitMarket services.
//!
//! Import from `#[cfg(test)]` code and `tests/` only.

pub mod auth;
