//! Identity types shared across FitMarket services.
//!
//! Credential handling lives with the hosted identity provider; services only
//! see the authenticated subject the gateway forwards.

pub mod identity;
