//! Service plumbing shared by FitMarket binaries: configuration loading,
//! health endpoints, request-id and trace layers, tracing setup and serde
//! helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
