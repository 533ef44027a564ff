//! Domain types shared across FitMarket crates.
//!
//! Pure types only, no framework dependencies. Safe to import from
//! `usecase/` and `domain/` layers as well as handlers.

pub mod content;
pub mod pagination;
pub mod role;
